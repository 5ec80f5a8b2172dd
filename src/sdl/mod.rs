//! The scene description language: a small declarative format listing the canvas, camera,
//! background, spheres and lights of a scene.
//!
//! ```text
//! canvas      { width: 640, height: 640 }
//! camera      { origin: <0, 0, 0>, viewport: <1, 1, 1> }
//! background  { color: <50, 50, 50> }
//! sphere      { position: <0, -1, 3>, radius: 1, color: <255, 0, 0>, specular: 500, reflectiveness: 0.2 }
//! ambient     { intensity: 0.2 }
//! point       { intensity: 0.6, position: <2, 1, 0> }
//! directional { intensity: 0.2, direction: <1, 4, 4> }
//! ```

pub mod ast;
pub mod interpret;
pub mod tokenize;

use std::{fs::File, path::Path};

pub use interpret::{Description, InterpretError, Interpreter};

/// Read and interpret a scene source file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Description, InterpretError> {
    Interpreter::new(File::open(path)?)?.run()
}
