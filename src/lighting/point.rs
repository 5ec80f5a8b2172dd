use crate::math::Vector3;

use super::Light;

/// A point light, which is a light that emits in all directions from a specified position.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// The intensity of this light.
    pub intensity: f64,

    /// The position in space of this light.
    pub position: Vector3,
}

impl Point {
    pub fn new(intensity: f64, position: Vector3) -> Self {
        Self {
            intensity,
            position,
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self {
            intensity: 0.6,
            position: Vector3::new(0., 0., 0.),
        }
    }
}

impl Light for Point {
    fn intensity(&self) -> f64 {
        self.intensity
    }

    fn direction_from(&self, point: Vector3) -> Option<Vector3> {
        // vector pointing from the surface to the light position
        Some(self.position - point)
    }
}
