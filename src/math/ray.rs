use super::{reflect, Vector3};

/// A ray, `origin + t * direction`. The direction is kept exactly as given; nothing here normalizes it.
#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Instantiate a new Ray.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    pub fn along(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Bounce this ray off of a surface at `pos` with the given unit normal.
    /// The new ray leaves `pos` in the mirror direction of the incoming one.
    pub fn reflect(&self, pos: Vector3, normal: Vector3) -> Ray {
        Ray::new(pos, reflect(normal, -self.direction))
    }
}
