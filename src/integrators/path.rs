// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::constants::{Float, Vector2f, Vector3f, EPSILON};
use crate::math::ray::Ray3f;
use crate::math::vector::lerp;
use crate::sensors::perspective::PerspectiveCamera;

/// Recursive Monte-Carlo path tracer with explicit direct lighting.
pub struct PathIntegrator {
    pub max_depth: u32,
    pub samples_per_pixel: u32,
    pub ambient_light: Float,
    horizon: Vector3f,
    zenith: Vector3f,
}

impl PathIntegrator {
    pub fn new(max_depth: u32, samples_per_pixel: u32, ambient_light: Float) -> Self {
        Self {
            max_depth,
            samples_per_pixel,
            ambient_light,
            horizon: Vector3f::new(1.0, 1.0, 1.0),
            zenith: Vector3f::new(0.5, 0.7, 1.0),
        }
    }

    pub fn with_sky(mut self, horizon: Vector3f, zenith: Vector3f) -> Self {
        self.horizon = horizon;
        self.zenith = zenith;
        self
    }
}

impl Integrator for PathIntegrator {
    fn trace_ray_forward(&self, scene: &Scene, camera: &PerspectiveCamera,
                         uv: Vector2f, rng: &mut LcgRng) -> Vector3f {
        let ray = camera.sample_ray(&uv, rng);
        self.ray_color(scene, &ray, self.max_depth, rng)
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }
}

impl PathIntegrator {
    pub fn ray_color(&self, scene: &Scene, ray: &Ray3f, depth: u32,
                     rng: &mut LcgRng) -> Vector3f {
        if depth == 0 {
            return Vector3f::zeros();
        }

        let hit = match scene.ray_intersection(ray) {
            Some(hit) => hit,
            None => return self.sky(&ray.dir()),
        };

        let emitted = hit.material().emitted();
        let wi = ray.dir();

        match hit.material().scatter(&wi, &hit.p(), &hit.normal(), rng) {
            None => emitted,
            Some(scatter) => {
                let direct = self.direct_light(scene, &hit, &scatter.attenuation);

                // Offset outward for a bounce in the normal's hemisphere,
                // inward for a transmitted ray.
                let same_hemisphere = scatter.direction.dot(&hit.normal()) > 0.0;
                let offset = if same_hemisphere {
                    hit.normal() * EPSILON
                } else {
                    hit.normal() * -EPSILON
                };
                let next = Ray3f::new(hit.p() + offset, scatter.direction, None, None);
                let indirect = self.ray_color(scene, &next, depth - 1, rng);

                scatter.attenuation.component_mul(&indirect) + emitted + direct
            }
        }
    }

    // Shadow-rayed contribution of every point light and the optional sun.
    // Scattering materials all receive it, specular ones included.
    fn direct_light(&self, scene: &Scene, hit: &SurfaceIntersection,
                    attenuation: &Vector3f) -> Vector3f {
        let mut direct = Vector3f::zeros();
        let shadow_origin = hit.p() + hit.normal() * EPSILON;

        for light in scene.lights() {
            let to_light = light.direction_from(&hit.p());
            let light_distance = light.distance_from(&hit.p());
            if !scene.occluded(shadow_origin, to_light, light_distance) {
                let n_dot_l = hit.normal().dot(&to_light).max(0.0);
                direct += attenuation.component_mul(&light.illumination(&hit.p())) * n_dot_l;
            }
        }

        if let Some(sun) = scene.sun() {
            let to_sun = sun.direction_from(&hit.p());
            let sun_distance = sun.distance_from(&hit.p());
            if !scene.occluded(shadow_origin, to_sun, sun_distance) {
                let n_dot_l = hit.normal().dot(&to_sun).max(0.0);
                direct += attenuation.component_mul(&sun.illumination(&hit.p())) * n_dot_l;
            }
        }

        direct
    }

    // Vertical gradient between the horizon and zenith colors, scaled by the
    // ambient multiplier. An ambient of zero turns the sky off.
    fn sky(&self, unit_direction: &Vector3f) -> Vector3f {
        let t_sky = 0.5 * (unit_direction.y + 1.0);
        lerp(&self.horizon, &self.zenith, t_sky) * self.ambient_light
    }
}
