mod sphere;

pub use sphere::*;

/// The value both roots take when a ray misses. It compares greater than any real upper bound a
/// caller can pass for `t`, so a miss can never be mistaken for a hit.
pub const NO_INTERSECTION: f64 = f64::MAX;

/// The nearest intersection of a ray with the scene: the ray parameter and the sphere that was struck.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<'a> {
    pub t: f64,
    pub sphere: &'a Sphere,
}

impl<'a> Hit<'a> {
    pub fn new(t: f64, sphere: &'a Sphere) -> Self {
        Self { t, sphere }
    }
}
