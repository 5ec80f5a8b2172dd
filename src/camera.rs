use crate::{canvas::Canvas, math::Vector3};

/// The projection plane rays are shot through, in camera space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Distance from the eye to the plane, along +z.
    pub distance: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.,
            height: 1.,
            distance: 1.,
        }
    }
}

/// A Camera object. An eye point looking down +z through a viewport; it has no rotation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Camera {
    pub viewport: Viewport,
    pub origin: Vector3,
}

impl Camera {
    pub fn new(viewport: Viewport, origin: Vector3) -> Self {
        Self { viewport, origin }
    }

    /// Calculate the (unnormalized) ray direction for centered canvas coordinates.
    pub fn direction_at(&self, x: i32, y: i32, canvas: &Canvas) -> Vector3 {
        Vector3::new(
            x as f64 * self.viewport.width / canvas.width() as f64,
            y as f64 * self.viewport.height / canvas.height() as f64,
            self.viewport.distance,
        )
    }
}
