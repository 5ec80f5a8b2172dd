use crate::math::Vector3;

use super::Light;

/// An ambient light, which lights every point equally and never casts shadows.
#[derive(Clone, Debug, PartialEq)]
pub struct Ambient {
    pub intensity: f64,
}

impl Ambient {
    pub fn new(intensity: f64) -> Self {
        Self { intensity }
    }
}

impl Default for Ambient {
    fn default() -> Self {
        Self { intensity: 0.2 }
    }
}

impl Light for Ambient {
    fn intensity(&self) -> f64 {
        self.intensity
    }

    fn direction_from(&self, _: Vector3) -> Option<Vector3> {
        None
    }
}
