use crate::{
    material::Material,
    math::{Ray, Vector3},
};

use super::NO_INTERSECTION;

/// Below this squared direction length a ray has no usable direction and is treated as a miss.
const DEGENERATE_DIRECTION: f64 = 1e-12;

/// A sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub origin: Vector3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(origin: Vector3, radius: f64, material: Material) -> Self {
        Self {
            origin,
            radius,
            material,
        }
    }

    /// Solve `a*t^2 + b*t + c = 0` for the ray, returning both roots with the larger one first.
    ///
    /// The roots are not filtered by sign or range. A miss (negative discriminant, or a zero-length
    /// direction) yields `(NO_INTERSECTION, NO_INTERSECTION)`.
    pub fn intersect(&self, ray: &Ray) -> (f64, f64) {
        let co = ray.origin - self.origin;
        let a = ray.direction.dot(ray.direction);
        let b = 2. * co.dot(ray.direction);
        let c = co.dot(co) - self.radius * self.radius;

        if a < DEGENERATE_DIRECTION {
            return (NO_INTERSECTION, NO_INTERSECTION);
        }

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. {
            return (NO_INTERSECTION, NO_INTERSECTION);
        }

        let sqrt = discriminant.sqrt();
        ((-b + sqrt) / (2. * a), (-b - sqrt) / (2. * a))
    }

    /// The outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vector3) -> Vector3 {
        let n = point - self.origin;
        n / n.magnitude()
    }
}
