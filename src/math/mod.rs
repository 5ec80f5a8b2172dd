mod ray;
mod vector;

pub use ray::*;
pub use vector::*;

/// Reflect `direction` about `normal`: `2 * normal * (normal . direction) - direction`.
///
/// The result points away from the surface on the same side as `direction`, so callers pass the
/// vector *leaving* the surface (the light direction for highlights, the negated view direction for
/// mirror bounces).
pub fn reflect(normal: Vector3, direction: Vector3) -> Vector3 {
    2. * normal * normal.dot(direction) - direction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_keeps_normal_component() {
        let n = Vector3::new(0., 1., 0.);
        let d = Vector3::new(1., 1., 0.);
        assert_eq!(reflect(n, d), Vector3::new(-1., 1., 0.));
    }

    #[test]
    fn reflect_along_normal_is_identity() {
        let n = Vector3::new(0., 0., 1.);
        assert_eq!(reflect(n, n * 3.), n * 3.);
    }
}
