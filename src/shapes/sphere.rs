// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f, EPSILON};
use crate::math::ray::Ray3f;

pub struct Sphere {
    center: Vector3f,
    radius: Float,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    // Solve |O + tD - C|^2 = r^2. Among the two roots, the smallest one
    // beyond EPSILON wins; if only the far root qualifies, take that one.
    pub fn hit(&self, ray: &Ray3f) -> Option<Float> {
        let oc = ray.origin() - self.center;
        let a = ray.dir().dot(&ray.dir());
        let b = 2.0 * oc.dot(&ray.dir());
        let c = oc.dot(&oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b - sqrt_discriminant) / (2.0 * a);
        let t2 = (-b + sqrt_discriminant) / (2.0 * a);

        if t1 > EPSILON {
            Some(if t2 > EPSILON { t1.min(t2) } else { t1 })
        } else if t2 > EPSILON {
            Some(t2)
        } else {
            None
        }
    }

    pub fn normal_at(&self, point: &Vector3f) -> Vector3f {
        (point - self.center).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_head_on_hit_distance() {
        let sphere = Sphere::new(Vector3f::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let t = sphere.hit(&ray).expect("expected hit");
        assert!((t - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_miss_with_offset() {
        let sphere = Sphere::new(Vector3f::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray3f::new(Vector3f::new(2.0, 0.0, 0.0),
                             Vector3f::new(0.0, 0.0, -1.0), None, None);
        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside_takes_far_root() {
        let sphere = Sphere::new(Vector3f::zeros(), 1.0);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0), None, None);
        let t = sphere.hit(&ray).expect("expected hit");
        assert!((t - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_normal_points_outward() {
        let sphere = Sphere::new(Vector3f::new(0.0, 0.0, -5.0), 1.0);
        let n = sphere.normal_at(&Vector3f::new(0.0, 0.0, -4.0));
        assert!((n - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-6);
    }
}
