// Copyright 2026 TwoCookingMice

use praline::core::scene::{Scene, SceneObject};
use praline::core::settings::{DenoiseFilter, DenoiseSettings, RenderSettings};
use praline::integrators::path::PathIntegrator;
use praline::io::{exr_utils, png_utils};
use praline::lights::directional::DirectionalLight;
use praline::lights::point::PointLight;
use praline::materials::dielectric::Dielectric;
use praline::materials::diffuse::Diffuse;
use praline::materials::emissive::Emissive;
use praline::materials::metal::Metal;
use praline::materials::mirror::Mirror;
use praline::materials::Material;
use praline::math::constants::{Float, Vector3f};
use praline::post::{denoise, tonemap};
use praline::renderers::simple::{Renderer, SimpleRenderer};
use praline::sensors::perspective::PerspectiveCamera;
use praline::shapes::plane::Plane;
use praline::shapes::sphere::Sphere;
use praline::shapes::Surface;

use console::style;
use std::env;
use std::sync::Arc;

// The built-in demonstration scene: a gray ground plane with glass, matte
// and brushed-metal spheres, one mirror, one emissive sphere, one point
// light and a sun.
fn build_demo_scene() -> Scene {
    let mat_ground = Arc::new(Material::Diffuse(Diffuse::new(Vector3f::new(0.5, 0.5, 0.5))));
    let mat_glass = Arc::new(Material::Dielectric(Dielectric::new(1.5, Vector3f::new(1.0, 1.0, 1.0))));
    let mat_red = Arc::new(Material::Diffuse(Diffuse::new(Vector3f::new(1.0, 0.0, 0.0))));
    let mat_gold = Arc::new(Material::Metal(Metal::new(Vector3f::new(0.78, 0.59, 0.2), 0.1)));
    let mat_mirror = Arc::new(Material::Mirror(Mirror::new(Vector3f::new(0.95, 0.95, 0.95))));
    let mat_lamp = Arc::new(Material::Emissive(Emissive::new(Vector3f::new(1.0, 0.9, 0.7), 4.0)));

    let mut scene = Scene::new();
    scene.add_object(SceneObject::new(
        Surface::Plane(Plane::new(Vector3f::new(0.0, -1.0, 0.0), Vector3f::new(0.0, 1.0, 0.0))),
        mat_ground).with_name(String::from("ground")));
    scene.add_object(SceneObject::new(
        Surface::Sphere(Sphere::new(Vector3f::new(0.0, 0.0, -3.0), 1.0)),
        mat_glass).with_name(String::from("glass")));
    scene.add_object(SceneObject::new(
        Surface::Sphere(Sphere::new(Vector3f::new(-2.5, 0.0, -3.0), 1.0)),
        mat_red).with_name(String::from("matte")));
    scene.add_object(SceneObject::new(
        Surface::Sphere(Sphere::new(Vector3f::new(2.5, 0.0, -3.0), 1.0)),
        mat_gold).with_name(String::from("brushed gold")));
    scene.add_object(SceneObject::new(
        Surface::Sphere(Sphere::new(Vector3f::new(-1.2, -0.6, -1.6), 0.4)),
        mat_mirror).with_name(String::from("mirror")));
    scene.add_object(SceneObject::new(
        Surface::Sphere(Sphere::new(Vector3f::new(1.2, 2.0, -2.5), 0.5)),
        mat_lamp).with_name(String::from("lamp")));

    scene.add_light(PointLight::new(Vector3f::new(-3.0, 3.0, -1.0),
                                    Vector3f::new(1.0, 1.0, 1.0), 20.0));
    scene.set_sun(Some(DirectionalLight::new(Vector3f::new(0.4, -1.0, -0.2),
                                             Vector3f::new(1.0, 0.95, 0.8), 0.8)));
    scene
}

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <output.(exr|png)> [--width N] [--height N] [--spp N] \
                   [--max-depth N] [--seed N] [--fov F] [--aperture F] [--focus-dist F] \
                   [--gamma F] [--ambient F] [--denoise box|gaussian|bilateral] \
                   [--denoise-strength F] [--denoise-after-tonemap]", args[0]);
        std::process::exit(1);
    }

    let output_path = &args[1];
    let mut settings = RenderSettings::default();
    let mut denoise_filter: Option<DenoiseFilter> = None;
    let mut denoise_strength: Float = 1.0;
    let mut denoise_after_tonemap = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<usize>().ok()) {
                    settings.width = v;
                }
            }
            "--height" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<usize>().ok()) {
                    settings.height = v;
                }
            }
            "--spp" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<u32>().ok()) {
                    settings.samples_per_pixel = v;
                }
            }
            "--max-depth" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<u32>().ok()) {
                    settings.max_depth = v;
                }
            }
            "--seed" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<u64>().ok()) {
                    settings.seed = v;
                }
            }
            "--fov" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<Float>().ok()) {
                    settings.field_of_view = v;
                }
            }
            "--aperture" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<Float>().ok()) {
                    settings.aperture = v;
                }
            }
            "--focus-dist" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<Float>().ok()) {
                    settings.focus_distance = v;
                }
            }
            "--gamma" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<Float>().ok()) {
                    settings.gamma = v;
                }
            }
            "--ambient" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<Float>().ok()) {
                    settings.ambient_light = v;
                }
            }
            "--denoise" => {
                i += 1;
                denoise_filter = match args.get(i).map(|v| v.as_str()) {
                    Some("box") => Some(DenoiseFilter::Box),
                    Some("gaussian") => Some(DenoiseFilter::Gaussian),
                    Some("bilateral") => Some(DenoiseFilter::Bilateral),
                    _ => None,
                };
            }
            "--denoise-strength" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<Float>().ok()) {
                    denoise_strength = v;
                }
            }
            "--denoise-after-tonemap" => {
                denoise_after_tonemap = true;
            }
            _ => {}
        }
        i += 1;
    }

    if let Some(filter) = denoise_filter {
        let mut denoise_settings = DenoiseSettings::new(filter, denoise_strength);
        denoise_settings.after_tonemap = denoise_after_tonemap;
        settings.denoise = Some(denoise_settings);
    }

    let scene = build_demo_scene();
    let camera = PerspectiveCamera::new(Vector3f::new(0.0, 1.0, 2.0),
                                        Vector3f::new(0.0, 0.0, -3.0),
                                        Vector3f::new(0.0, 1.0, 0.0),
                                        settings.field_of_view,
                                        settings.aspect_ratio(),
                                        settings.aperture,
                                        settings.focus_distance);

    log::info!("Rendering {}x{} at {} spp, max depth {}.",
               settings.width, settings.height,
               settings.samples_per_pixel, settings.max_depth);

    let integrator = Box::new(PathIntegrator::new(settings.max_depth,
                                                  settings.samples_per_pixel,
                                                  settings.ambient_light));
    let renderer = SimpleRenderer::new(integrator, settings.width, settings.height,
                                       settings.seed);
    let mut image = renderer.render(&scene, &camera);

    if let Some(denoise_settings) = settings.denoise {
        if !denoise_settings.after_tonemap {
            image = denoise::apply(&image, &denoise_settings);
        }
    }

    if output_path.ends_with(".png") {
        tonemap::tonemap_bitmap(&mut image, settings.gamma);
        if let Some(denoise_settings) = settings.denoise {
            if denoise_settings.after_tonemap {
                image = denoise::apply(&image, &denoise_settings);
            }
        }
        png_utils::write_png_to_file(&image, output_path);
    } else {
        if settings.denoise.map(|d| d.after_tonemap).unwrap_or(false) {
            log::warn!("--denoise-after-tonemap is ignored for linear EXR output.");
        }
        exr_utils::write_exr_to_file(&image.raw_copy(), image.width(), image.height(),
                                     output_path);
    }

    println!("{} {}x{} pixels, {} spp -> {}",
             style("Render complete:").green().bold(),
             settings.width, settings.height,
             settings.samples_per_pixel, output_path);
}
