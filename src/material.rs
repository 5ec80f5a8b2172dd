use std::ops::{Add, Mul};

/// A 24-bit color, RGB.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0)
    }

    pub fn green() -> Self {
        Self::new(0, 255, 0)
    }

    pub fn blue() -> Self {
        Self::new(0, 0, 255)
    }

    pub fn yellow() -> Self {
        Self::new(255, 255, 0)
    }

    /// Instantiate a new Color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-channel addition, saturating at 255.
impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Color {
            r: self.r.saturating_add(rhs.r),
            g: self.g.saturating_add(rhs.g),
            b: self.b.saturating_add(rhs.b),
        }
    }
}

/// Scale every channel, clamping to 0-255 before narrowing back to a byte.
impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Self::Output {
        let scale = |c: u8| (c as f64 * rhs).clamp(0., 255.) as u8;
        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

impl Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(rgb: image::Rgb<u8>) -> Self {
        rgb.0.into()
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}

impl From<[u8; 3]> for Color {
    fn from(slice: [u8; 3]) -> Self {
        Self::new(slice[0], slice[1], slice[2])
    }
}

/// The surface properties of a scene object.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// The diffuse color of this material.
    pub color: Color,

    /// The Phong exponent of the specular highlight. `None` disables the highlight entirely.
    /// Higher values give smaller, sharper highlights.
    pub specular: Option<i32>,

    /// The reflectiveness (0 to 1) of this material. At 0 the surface is fully diffuse, at 1 it is a mirror.
    pub reflectiveness: f64,
}

impl Material {
    pub fn new(color: Color, specular: Option<i32>, reflectiveness: f64) -> Self {
        Self {
            color,
            specular,
            reflectiveness,
        }
    }

    /// A material with no highlight and no reflection.
    pub fn matte(color: Color) -> Self {
        Self::new(color, None, 0.)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::matte(Color::white())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_saturates() {
        let a = Color::new(200, 100, 0);
        let b = Color::new(100, 100, 255);
        assert_eq!(a + b, Color::new(255, 200, 255));
    }

    #[test]
    fn scaling_clamps_and_truncates() {
        let c = Color::new(100, 200, 3);
        assert_eq!(c * 2., Color::new(200, 255, 6));
        assert_eq!(c * 0.5, Color::new(50, 100, 1));
        assert_eq!(c * -1., Color::black());
        assert_eq!(0.5 * c, c * 0.5);
    }

    #[test]
    fn image_conversions() {
        let c = Color::new(1, 2, 3);
        let rgb: image::Rgb<u8> = c.into();
        assert_eq!(rgb, image::Rgb([1, 2, 3]));
        assert_eq!(Color::from(rgb), c);
    }
}
