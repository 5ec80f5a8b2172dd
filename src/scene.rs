use std::time::Instant;

use log::{debug, info, warn};

use crate::{
    camera::Camera,
    canvas::Canvas,
    lighting::{Light, Surface},
    material::Color,
    math::{Ray, Vector3},
    object::{Hit, Sphere},
};

/// A small distance that secondary rays skip before they may hit anything, so a surface never
/// shadows or reflects itself.
pub const EPSILON: f64 = 1e-3;

/// Scene options. Defaults are provided.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    /// The maximum number of times a ray can bounce off reflective surfaces after leaving the camera.
    pub max_ray_depth: u32,

    /// The lower bound for primary rays. Anything closer to the eye than the viewport is not drawn.
    pub near_clip: f64,

    /// The lower bound for shadow and reflection rays.
    pub bias: f64,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            max_ray_depth: 3,
            near_clip: 1.,
            bias: EPSILON,
        }
    }
}

/// A scene, which contains a list of spheres, lights, and the color seen where nothing is hit.
pub struct Scene {
    pub objects: Vec<Sphere>,
    pub lights: Vec<Box<dyn Light>>,
    pub background: Color,
    pub options: SceneOptions,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            background: Color::black(),
            options: SceneOptions::default(),
        }
    }
}

impl Scene {
    /// Find the nearest sphere struck by a ray with `t_min < t < t_max`.
    ///
    /// Every sphere is tested; on an exact tie the sphere listed first wins.
    pub fn closest_intersection(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<Hit<'_>> {
        let mut closest: Option<Hit> = None;
        let mut closest_t = f64::MAX;

        for sphere in self.objects.iter() {
            let (t1, t2) = sphere.intersect(ray);
            for t in [t1, t2] {
                if t > t_min && t < t_max && t < closest_t {
                    closest_t = t;
                    closest = Some(Hit::new(t, sphere));
                }
            }
        }

        closest
    }

    /// Sum the intensity of every light at a surface point. The result is not clamped.
    pub fn compute_lighting(&self, surface: &Surface) -> f64 {
        self.lights
            .iter()
            .map(|light| light.shading(surface, self))
            .sum()
    }

    /// Trace out a ray, getting its color. `depth` is how many more reflections may be followed.
    pub fn trace_ray(&self, ray: &Ray, t_min: f64, t_max: f64, depth: u32) -> Color {
        let hit = match self.closest_intersection(ray, t_min, t_max) {
            Some(hit) => hit,
            None => return self.background,
        };

        let sphere = hit.sphere;
        let point = ray.along(hit.t);
        let normal = sphere.normal_at(point);

        let local = sphere.material.color
            * self.compute_lighting(&Surface {
                point,
                normal,
                to_camera: -ray.direction,
                specular: sphere.material.specular,
            });

        let reflectiveness = sphere.material.reflectiveness;
        if depth == 0 || reflectiveness <= 0. {
            return local;
        }

        let reflected = self.trace_ray(
            &ray.reflect(point, normal),
            self.options.bias,
            f64::MAX,
            depth - 1,
        );

        local * (1. - reflectiveness) + reflected * reflectiveness
    }

    /// Trace out the pixel at centered canvas coordinates `(x, y)`.
    pub fn trace_pixel(&self, camera: &Camera, canvas: &Canvas, x: i32, y: i32) -> Color {
        let ray = Ray::new(camera.origin, camera.direction_at(x, y, canvas));
        self.trace_ray(&ray, self.options.near_clip, f64::MAX, self.options.max_ray_depth)
    }

    /// Render the scene as seen from `camera`, writing every pixel of `canvas`.
    pub fn render(&self, camera: &Camera, canvas: &mut Canvas) {
        let now = Instant::now();
        info!(
            "Rendering {}x{} canvas ({} spheres, {} lights)",
            canvas.width(),
            canvas.height(),
            self.objects.len(),
            self.lights.len()
        );

        for x in canvas.x_range() {
            for y in canvas.y_range() {
                let color = self.trace_pixel(camera, canvas, x, y);
                if let Err(e) = canvas.put_pixel(x, y, color) {
                    warn!("{}", e);
                }
            }
        }

        debug!("Rendered in {}s", now.elapsed().as_secs_f32());
    }

    /// Render the scene and save the image out to the desired file.
    pub fn render_to(
        &self,
        camera: &Camera,
        canvas: &mut Canvas,
        path: &str,
    ) -> Result<(), image::ImageError> {
        self.render(camera, canvas);
        canvas.save(path)?;
        info!("Saved render to {}", path);
        Ok(())
    }
}

/// A small demo scene: three colored spheres resting on a huge yellow one,
/// lit by an ambient, a point and a directional light over a dark gray background.
pub fn demo() -> Scene {
    use crate::{
        lighting::{Ambient, Directional, Point},
        material::Material,
    };

    Scene {
        objects: vec![
            Sphere::new(
                Vector3::new(0., -1., 3.),
                1.,
                Material::new(Color::red(), Some(500), 0.2),
            ),
            Sphere::new(
                Vector3::new(2., 0., 5.),
                1.,
                Material::new(Color::blue(), Some(500), 0.3),
            ),
            Sphere::new(
                Vector3::new(-2., 0., 5.),
                1.,
                Material::new(Color::green(), Some(10), 0.05),
            ),
            Sphere::new(
                Vector3::new(0., -5001., 0.),
                5000.,
                Material::new(Color::yellow(), Some(1000), 0.5),
            ),
        ],
        lights: vec![
            Box::new(Ambient::new(0.2)),
            Box::new(Point::new(0.6, Vector3::new(2., 1., 0.))),
            Box::new(Directional::new(0.2, Vector3::new(1., 4., 4.))),
        ],
        background: Color::new(50, 50, 50),
        ..Default::default()
    }
}
