// Copyright @yucwang 2026

use crate::core::rng::LcgRng;
use crate::math::constants::{Float, Vector2f, Vector3f, PI};
use crate::math::ray::Ray3f;
use crate::math::warp::random_in_unit_disk;

/// Thin-lens perspective camera. A zero aperture collapses to a pinhole.
pub struct PerspectiveCamera {
    origin: Vector3f,
    lower_left_corner: Vector3f,
    horizontal: Vector3f,
    vertical: Vector3f,
    u: Vector3f,
    v: Vector3f,
    lens_radius: Float,
}

impl PerspectiveCamera {
    pub fn new(lookfrom: Vector3f,
               lookat: Vector3f,
               vup: Vector3f,
               vfov_degrees: Float,
               aspect: Float,
               aperture: Float,
               focus_distance: Float) -> Self {
        let theta = vfov_degrees * PI / 180.0;
        let h = (0.5 * theta).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect * viewport_height;

        let w = (lookfrom - lookat).normalize();
        let u = vup.cross(&w).normalize();
        let v = w.cross(&u);

        let horizontal = u * viewport_width * focus_distance;
        let vertical = v * viewport_height * focus_distance;
        let lower_left_corner =
            lookfrom - horizontal / 2.0 - vertical / 2.0 - w * focus_distance;

        Self {
            origin: lookfrom,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: 0.5 * aperture,
        }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    /// Map normalized screen coordinates (v measured from the bottom of the
    /// image) to a primary ray. The lens sample blurs everything off the
    /// focus plane.
    pub fn sample_ray(&self, uv: &Vector2f, rng: &mut LcgRng) -> Ray3f {
        let offset = if self.lens_radius > 0.0 {
            let rd = random_in_unit_disk(rng) * self.lens_radius;
            self.u * rd.x + self.v * rd.y
        } else {
            Vector3f::zeros()
        };

        let origin = self.origin + offset;
        let dir = self.lower_left_corner
            + self.horizontal * uv.x
            + self.vertical * uv.y
            - self.origin
            - offset;
        Ray3f::new(origin, dir, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perspective_camera_center_ray() {
        let cam = PerspectiveCamera::new(Vector3f::zeros(),
                                         Vector3f::new(0.0, 0.0, -1.0),
                                         Vector3f::new(0.0, 1.0, 0.0),
                                         90.0, 1.0, 0.0, 1.0);
        let mut rng = LcgRng::new(0);
        let ray = cam.sample_ray(&Vector2f::new(0.5, 0.5), &mut rng);
        let dir = ray.dir();

        assert!((dir.x - 0.0).abs() < 1e-6);
        assert!((dir.y - 0.0).abs() < 1e-6);
        assert!((dir.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pinhole_origin_is_camera_origin() {
        let cam = PerspectiveCamera::new(Vector3f::new(1.0, 2.0, 3.0),
                                         Vector3f::zeros(),
                                         Vector3f::new(0.0, 1.0, 0.0),
                                         60.0, 16.0 / 9.0, 0.0, 10.0);
        let mut rng = LcgRng::new(0);
        let ray = cam.sample_ray(&Vector2f::new(0.2, 0.8), &mut rng);
        assert!((ray.origin() - Vector3f::new(1.0, 2.0, 3.0)).norm() < 1e-6);
    }

    #[test]
    fn test_lens_origin_stays_on_aperture_disk() {
        let aperture = 0.5;
        let cam = PerspectiveCamera::new(Vector3f::zeros(),
                                         Vector3f::new(0.0, 0.0, -1.0),
                                         Vector3f::new(0.0, 1.0, 0.0),
                                         90.0, 1.0, aperture, 5.0);
        let mut rng = LcgRng::new(77);
        for _ in 0..128 {
            let ray = cam.sample_ray(&Vector2f::new(0.5, 0.5), &mut rng);
            assert!(ray.origin().norm() <= 0.5 * aperture + 1e-5);
        }
    }

    #[test]
    fn test_focus_plane_stays_sharp() {
        // Rays through the same screen point must converge at the focus
        // distance no matter where on the lens they start.
        let cam = PerspectiveCamera::new(Vector3f::zeros(),
                                         Vector3f::new(0.0, 0.0, -1.0),
                                         Vector3f::new(0.0, 1.0, 0.0),
                                         90.0, 1.0, 1.0, 4.0);
        let mut rng = LcgRng::new(99);
        let reference = Vector3f::new(0.0, 0.0, -4.0);
        for _ in 0..64 {
            let ray = cam.sample_ray(&Vector2f::new(0.5, 0.5), &mut rng);
            let t = (reference.z - ray.origin().z) / ray.dir().z;
            let p = ray.at(t);
            assert!((p - reference).norm() < 1e-4);
        }
    }
}
