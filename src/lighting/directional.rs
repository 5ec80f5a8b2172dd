use crate::math::Vector3;

use super::Light;

/// A directional light, which has no position, just a vector direction that is
/// true for all points in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Directional {
    /// The intensity of this light.
    pub intensity: f64,

    /// The direction *toward* the light. It is used as given, without normalizing.
    pub direction: Vector3,
}

impl Directional {
    pub fn new(intensity: f64, direction: Vector3) -> Self {
        Self {
            intensity,
            direction,
        }
    }
}

impl Default for Directional {
    fn default() -> Self {
        Self {
            intensity: 0.2,
            direction: Vector3::new(0., 1., 0.),
        }
    }
}

impl Light for Directional {
    fn intensity(&self) -> f64 {
        self.intensity
    }

    fn direction_from(&self, _: Vector3) -> Option<Vector3> {
        Some(self.direction)
    }
}
