// Copyright @yucwang 2026

use crate::core::interaction::SurfaceIntersection;
use crate::lights::directional::DirectionalLight;
use crate::lights::point::PointLight;
use crate::materials::Material;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::shapes::Surface;
use std::sync::Arc;

pub struct SceneObject {
    pub shape: Surface,
    pub material: Arc<Material>,
    pub name: Option<String>,
}

impl SceneObject {
    pub fn new(shape: Surface, material: Arc<Material>) -> Self {
        Self { shape, material, name: None }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn shape(&self) -> &Surface {
        &self.shape
    }
}

// Immutable for the duration of a render. Objects are scanned in insertion
// order; the closest valid hit wins, with scan order breaking exact ties.
pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<PointLight>,
    sun: Option<DirectionalLight>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            sun: None,
        }
    }

    pub fn with_objects(objects: Vec<SceneObject>) -> Self {
        Self {
            objects,
            lights: Vec::new(),
            sun: None,
        }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &Vec<SceneObject> {
        &self.objects
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &Vec<PointLight> {
        &self.lights
    }

    pub fn set_sun(&mut self, sun: Option<DirectionalLight>) {
        self.sun = sun;
    }

    pub fn sun(&self) -> Option<&DirectionalLight> {
        self.sun.as_ref()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let mut closest_t = ray.max_t;
        let mut closest: Option<&SceneObject> = None;

        for object in &self.objects {
            if let Some(t) = object.shape.hit(ray) {
                if t > ray.min_t && t < closest_t {
                    closest_t = t;
                    closest = Some(object);
                }
            }
        }

        closest.map(|object| {
            let p = ray.at(closest_t);
            let normal = object.shape.normal_at(&p);
            SurfaceIntersection::new(p, normal, closest_t, object.material.clone())
        })
    }

    // Shadow-ray query: is any surface closer than `max_dist` along `dir`?
    pub fn occluded(&self, origin: Vector3f, dir: Vector3f, max_dist: Float) -> bool {
        let ray = Ray3f::new(origin, dir, None, Some(max_dist));
        for object in &self.objects {
            if let Some(t) = object.shape.hit(&ray) {
                if t > ray.min_t && t < max_dist {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::diffuse::Diffuse;
    use crate::shapes::sphere::Sphere;

    fn gray() -> Arc<Material> {
        Arc::new(Material::Diffuse(Diffuse::new(Vector3f::new(0.5, 0.5, 0.5))))
    }

    #[test]
    fn test_scene_ray_intersection_closest_hit() {
        let mut scene = Scene::new();
        scene.add_object(SceneObject::new(
            Surface::Sphere(Sphere::new(Vector3f::new(0.0, 0.0, 5.0), 1.0)), gray()));
        scene.add_object(SceneObject::new(
            Surface::Sphere(Sphere::new(Vector3f::new(0.0, 0.0, 2.0), 0.5)), gray()));
        scene.add_object(SceneObject::new(
            Surface::Sphere(Sphere::new(Vector3f::new(0.0, 0.0, 10.0), 1.0)), gray()));

        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0), None, None);
        let hit = scene.ray_intersection(&ray).expect("expected intersection");

        assert!((hit.t() - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_scene_shared_material_handle() {
        let shared = gray();
        let mut scene = Scene::new();
        scene.add_object(SceneObject::new(
            Surface::Sphere(Sphere::new(Vector3f::new(0.0, 0.0, 2.0), 0.5)),
            shared.clone()));
        scene.add_object(SceneObject::new(
            Surface::Sphere(Sphere::new(Vector3f::new(0.0, 0.0, 5.0), 0.5)),
            shared.clone()));

        assert_eq!(Arc::strong_count(&shared), 3);
    }

    #[test]
    fn test_scene_occluded() {
        let mut scene = Scene::new();
        scene.add_object(SceneObject::new(
            Surface::Sphere(Sphere::new(Vector3f::new(0.0, 0.0, 3.0), 1.0)), gray()));

        let origin = Vector3f::zeros();
        let dir = Vector3f::new(0.0, 0.0, 1.0);
        assert!(scene.occluded(origin, dir, 10.0));
        // Light sits in front of the occluder.
        assert!(!scene.occluded(origin, dir, 1.5));
        // Ray pointing away from the sphere.
        assert!(!scene.occluded(origin, Vector3f::new(0.0, 0.0, -1.0), 10.0));
    }
}
