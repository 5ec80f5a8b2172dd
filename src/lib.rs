//! A recursive ray tracer for scenes made of spheres.
//!
//! A [`scene::Scene`] holds spheres and lights; [`scene::Scene::render`] shoots one ray per pixel
//! from a [`camera::Camera`] into a [`canvas::Canvas`], shading hits with ambient, diffuse and
//! specular light, hard shadows, and a bounded number of mirror reflections.

pub mod camera;
pub mod canvas;
pub mod lighting;
pub mod material;
pub mod math;
pub mod object;
pub mod scene;
pub mod sdl;
