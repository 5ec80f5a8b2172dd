mod ambient;
mod directional;
mod point;

use crate::{
    math::{reflect, Ray, Vector3},
    scene::Scene,
};

pub use ambient::*;
pub use directional::*;
pub use point::*;

/// Everything the lighting model needs to know about a point being shaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    /// The point on the surface.
    pub point: Vector3,

    /// The unit outward normal at `point`.
    pub normal: Vector3,

    /// The vector from `point` back toward the viewer. Need not be normalized.
    pub to_camera: Vector3,

    /// The Phong exponent of the surface, if it has a highlight at all.
    pub specular: Option<i32>,
}

/// This trait represents any object that is a light.
///
/// A light only has to say how bright it is and where it shines from; shadowing, diffuse and
/// specular shading are shared by every light that has a direction.
pub trait Light: Send + Sync {
    /// The intensity of this light. Intensities from several lights simply add up.
    fn intensity(&self) -> f64;

    /// The vector from `point` toward this light, not normalized.
    /// Lights that illuminate everything evenly return `None`.
    fn direction_from(&self, point: Vector3) -> Option<Vector3>;

    /// The intensity this light contributes at a surface point.
    fn shading(&self, surface: &Surface, scene: &Scene) -> f64 {
        let lvec = match self.direction_from(surface.point) {
            Some(lvec) => lvec,
            None => return self.intensity(),
        };

        // anything at all between the surface and the light blocks it completely
        let shadow_ray = Ray::new(surface.point, lvec);
        if scene
            .closest_intersection(&shadow_ray, scene.options.bias, f64::MAX)
            .is_some()
        {
            return 0.;
        }

        let mut shading = 0.;

        // diffuse
        let cos_theta = surface.normal.dot(lvec) / (surface.normal.magnitude() * lvec.magnitude());
        if cos_theta > 0. {
            shading += self.intensity() * cos_theta;
        }

        // specular
        if let Some(power) = surface.specular {
            let reflected = reflect(surface.normal, lvec);
            let cos_alpha = reflected.dot(surface.to_camera)
                / (reflected.magnitude() * surface.to_camera.magnitude());
            if cos_alpha > 0. {
                shading += self.intensity() * cos_alpha.powi(power);
            }
        }

        shading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{material::Material, object::Sphere};
    use approx::assert_relative_eq;

    fn surface_facing_up(specular: Option<i32>) -> Surface {
        Surface {
            point: Vector3::zero(),
            normal: Vector3::new(0., 1., 0.),
            to_camera: Vector3::new(0., 1., 0.),
            specular,
        }
    }

    #[test]
    fn ambient_ignores_geometry_and_shadows() {
        let mut scene = Scene::default();
        scene.objects.push(Sphere::new(Vector3::new(0., 3., 0.), 1., Material::default()));
        let light = Ambient::new(0.3);
        assert_relative_eq!(light.shading(&surface_facing_up(Some(10)), &scene), 0.3);
    }

    #[test]
    fn diffuse_follows_cosine() {
        let scene = Scene::default();
        let light = Directional::new(1., Vector3::new(1., 1., 0.));
        let shading = light.shading(&surface_facing_up(None), &scene);
        assert_relative_eq!(shading, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn facing_away_contributes_nothing() {
        let scene = Scene::default();
        let light = Directional::new(1., Vector3::new(0., -1., 0.));
        assert_eq!(light.shading(&surface_facing_up(None), &scene), 0.);
    }

    #[test]
    fn specular_adds_highlight_when_aligned() {
        let scene = Scene::default();
        let light = Point::new(0.5, Vector3::new(0., 4., 0.));
        // light, normal and viewer all line up: diffuse and specular are both at full strength
        assert_relative_eq!(light.shading(&surface_facing_up(Some(100)), &scene), 1.);
        assert_relative_eq!(light.shading(&surface_facing_up(None), &scene), 0.5);
    }

    #[test]
    fn occluded_light_contributes_nothing() {
        let mut scene = Scene::default();
        scene.objects.push(Sphere::new(Vector3::new(0., 2., 0.), 0.5, Material::default()));

        let point = Point::new(1., Vector3::new(0., 4., 0.));
        let directional = Directional::new(1., Vector3::new(0., 1., 0.));
        assert_eq!(point.shading(&surface_facing_up(Some(10)), &scene), 0.);
        assert_eq!(directional.shading(&surface_facing_up(Some(10)), &scene), 0.);
    }

    #[test]
    fn occluder_behind_the_light_still_shadows() {
        let mut scene = Scene::default();
        scene.objects.push(Sphere::new(Vector3::new(0., 10., 0.), 0.5, Material::default()));

        let point = Point::new(1., Vector3::new(0., 4., 0.));
        assert_eq!(point.shading(&surface_facing_up(None), &scene), 0.);
    }
}
