use std::ops::{Add, Div, Mul, Neg, Sub};

/// A vector in 3D space.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Instantiate a new Vector3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Find the dot product between two Vector3s.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Find the magnitude of this Vector3.
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_multiplication_commutes() {
        let v = Vector3::new(1., -2., 3.5);
        assert_eq!(v * 2., 2. * v);
        assert_eq!(v * 2., Vector3::new(2., -4., 7.));
    }

    #[test]
    fn dot_and_magnitude() {
        let v = Vector3::new(3., 4., 0.);
        assert_eq!(v.dot(Vector3::new(1., 1., 1.)), 7.);
        assert_eq!(v.magnitude(), 5.);
        assert_eq!(v / 5., Vector3::new(0.6, 0.8, 0.));
    }

    #[test]
    fn negation_and_subtraction() {
        let a = Vector3::new(1., 2., 3.);
        let b = Vector3::new(0.5, 0.5, 0.5);
        assert_eq!(-a, Vector3::new(-1., -2., -3.));
        assert_eq!(a - b, Vector3::new(0.5, 1.5, 2.5));

        assert_eq!(a + b, Vector3::new(1.5, 2.5, 3.5));
    }
}
