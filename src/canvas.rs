//! A pixel buffer addressed with the origin at its center and y pointing up.

use std::ops::Range;

use thiserror::Error;

use crate::material::Color;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error("canvas pixel ({x}, {y}) maps to screen ({screen_x}, {screen_y}), out of range for a {width}x{height} canvas")]
    OutOfRange {
        x: i32,
        y: i32,
        screen_x: i64,
        screen_y: i64,
        width: u32,
        height: u32,
    },

    #[error("screen pixel ({x}, {y}) is out of range for a {width}x{height} canvas")]
    ScreenOutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// The render target. Pixels are stored row by row from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// A black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::black(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The centered x coordinates, `[-width/2, width/2)`.
    pub fn x_range(&self) -> Range<i32> {
        let half = (self.width / 2) as i32;
        -half..half
    }

    /// The centered y coordinates, `[-height/2 + 1, height/2 + 1)`.
    ///
    /// This is shifted up by one against `x_range`: the top screen row is `y = height/2`.
    pub fn y_range(&self) -> Range<i32> {
        let half = (self.height / 2) as i32;
        -half + 1..half + 1
    }

    /// Map centered coordinates to screen coordinates, which may be out of bounds.
    fn to_screen(&self, x: i32, y: i32) -> (i64, i64) {
        (
            x as i64 + (self.width / 2) as i64,
            (self.height / 2) as i64 - y as i64,
        )
    }

    /// Color the pixel at centered coordinates. Out-of-range writes change nothing.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), CanvasError> {
        let (screen_x, screen_y) = self.to_screen(x, y);
        if screen_x < 0
            || screen_y < 0
            || screen_x >= self.width as i64
            || screen_y >= self.height as i64
        {
            return Err(CanvasError::OutOfRange {
                x,
                y,
                screen_x,
                screen_y,
                width: self.width,
                height: self.height,
            });
        }

        let index = screen_y as usize * self.width as usize + screen_x as usize;
        self.pixels[index] = color;
        Ok(())
    }

    /// Read a pixel by screen coordinates, where (0, 0) is the top-left corner.
    pub fn get_screen_pixel(&self, x: u32, y: u32) -> Result<Color, CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::ScreenOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Copy the canvas into an image buffer.
    pub fn to_image(&self) -> image::RgbImage {
        let mut imgbuf: image::RgbImage = image::ImageBuffer::new(self.width, self.height);

        for (i, color) in self.pixels.iter().enumerate() {
            imgbuf.put_pixel(
                i as u32 % self.width,
                i as u32 / self.width,
                (*color).into(),
            );
        }

        imgbuf
    }

    /// Save the canvas to an image file; the format is picked from the extension.
    pub fn save(&self, path: &str) -> Result<(), image::ImageError> {
        self.to_image().save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_keep_their_asymmetry() {
        let canvas = Canvas::new(4, 4);
        assert_eq!(canvas.x_range(), -2..2);
        assert_eq!(canvas.y_range(), -1..3);

        let odd = Canvas::new(5, 5);
        assert_eq!(odd.x_range(), -2..2);
        assert_eq!(odd.y_range(), -1..3);
    }

    #[test]
    fn centered_coordinates_flip_y() {
        let mut canvas = Canvas::new(4, 4);
        canvas.put_pixel(-2, 2, Color::red()).unwrap();
        canvas.put_pixel(1, -1, Color::blue()).unwrap();

        assert_eq!(canvas.get_screen_pixel(0, 0), Ok(Color::red()));
        assert_eq!(canvas.get_screen_pixel(3, 3), Ok(Color::blue()));
    }

    #[test]
    fn every_centered_coordinate_maps_to_a_distinct_pixel() {
        for (w, h) in [(4, 4), (5, 3), (6, 7), (1, 1)] {
            let mut canvas = Canvas::new(w, h);
            let mut written = 0;
            for x in canvas.x_range() {
                for y in canvas.y_range() {
                    let color = Color::new(written as u8, 1, 2);
                    canvas.put_pixel(x, y, color).unwrap();

                    let (sx, sy) = canvas.to_screen(x, y);
                    assert_eq!(canvas.get_screen_pixel(sx as u32, sy as u32), Ok(color));
                    written += 1;
                }
            }

            let distinct = canvas
                .pixels
                .iter()
                .filter(|c| c.g == 1)
                .count();
            assert_eq!(distinct, written);
        }
    }

    #[test]
    fn out_of_range_write_is_rejected() {
        let mut canvas = Canvas::new(4, 4);
        let before = canvas.clone();

        assert!(matches!(
            canvas.put_pixel(2, 0, Color::white()),
            Err(CanvasError::OutOfRange { screen_x: 4, .. })
        ));
        assert!(canvas.put_pixel(0, -2, Color::white()).is_err());
        assert!(canvas.put_pixel(-3, 0, Color::white()).is_err());
        assert!(canvas.put_pixel(0, 3, Color::white()).is_err());
        assert_eq!(canvas, before);
    }

    #[test]
    fn screen_reads_are_bounds_checked() {
        let canvas = Canvas::new(2, 3);
        assert_eq!(canvas.get_screen_pixel(1, 2), Ok(Color::black()));
        assert!(canvas.get_screen_pixel(2, 0).is_err());
        assert!(canvas.get_screen_pixel(0, 3).is_err());
    }

    #[test]
    fn image_has_canvas_layout() {
        let mut canvas = Canvas::new(2, 2);
        canvas.put_pixel(0, 1, Color::green()).unwrap();
        let image = canvas.to_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(*image.get_pixel(1, 0), image::Rgb([0, 255, 0]));
    }
}
