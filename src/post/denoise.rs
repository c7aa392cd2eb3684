// Copyright @yucwang 2026

use crate::core::settings::{DenoiseFilter, DenoiseSettings};
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Int, Vector3f};

// Border handling: clamp coordinates to the image edges.
fn get_pixel_safe(bitmap: &Bitmap, x: Int, y: Int) -> Vector3f {
    let x = x.max(0).min(bitmap.width() as Int - 1);
    let y = y.max(0).min(bitmap.height() as Int - 1);
    bitmap[(x as usize, y as usize)]
}

/// Unweighted average over a square window.
pub fn box_blur(input: &Bitmap, radius: Int) -> Bitmap {
    let mut result = Bitmap::new(input.width(), input.height());

    for y in 0..input.height() as Int {
        for x in 0..input.width() as Int {
            let mut sum = Vector3f::zeros();
            let mut count = 0;
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    sum += get_pixel_safe(input, x + dx, y + dy);
                    count += 1;
                }
            }
            result[(x as usize, y as usize)] = sum / (count as Float);
        }
    }

    result
}

/// Separable Gaussian: one horizontal and one vertical 1D pass.
pub fn gaussian_blur(input: &Bitmap, sigma: Float) -> Bitmap {
    if sigma <= 0.0 {
        return input.clone();
    }
    let radius = (3.0 * sigma).ceil() as Int;

    let mut kernel = Vec::with_capacity((2 * radius + 1) as usize);
    let mut kernel_sum = 0.0;
    for i in -radius..=radius {
        let value = (-((i * i) as Float) / (2.0 * sigma * sigma)).exp();
        kernel.push(value);
        kernel_sum += value;
    }
    for value in kernel.iter_mut() {
        *value /= kernel_sum;
    }

    let mut temp = Bitmap::new(input.width(), input.height());
    for y in 0..input.height() as Int {
        for x in 0..input.width() as Int {
            let mut color = Vector3f::zeros();
            for i in -radius..=radius {
                color += get_pixel_safe(input, x + i, y) * kernel[(i + radius) as usize];
            }
            temp[(x as usize, y as usize)] = color;
        }
    }

    let mut result = Bitmap::new(input.width(), input.height());
    for y in 0..input.height() as Int {
        for x in 0..input.width() as Int {
            let mut color = Vector3f::zeros();
            for i in -radius..=radius {
                color += get_pixel_safe(&temp, x, y + i) * kernel[(i + radius) as usize];
            }
            result[(x as usize, y as usize)] = color;
        }
    }

    result
}

/// Edge-preserving blur: neighbors are weighted by spatial distance and by
/// color similarity, so dissimilar pixels barely contribute.
pub fn bilateral_filter(input: &Bitmap, sigma_space: Float, sigma_color: Float) -> Bitmap {
    if sigma_space <= 0.0 {
        return input.clone();
    }
    let radius = (3.0 * sigma_space).ceil() as Int;
    let mut result = Bitmap::new(input.width(), input.height());

    for y in 0..input.height() as Int {
        for x in 0..input.width() as Int {
            let center = input[(x as usize, y as usize)];
            let mut sum = Vector3f::zeros();
            let mut weight_sum = 0.0;

            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let neighbor = get_pixel_safe(input, x + dx, y + dy);

                    let spatial_sq = (dx * dx + dy * dy) as Float;
                    let spatial_weight =
                        (-spatial_sq / (2.0 * sigma_space * sigma_space)).exp();

                    let color_sq = (neighbor - center).norm_squared();
                    let color_weight =
                        (-color_sq / (2.0 * sigma_color * sigma_color)).exp();

                    let weight = spatial_weight * color_weight;
                    sum += neighbor * weight;
                    weight_sum += weight;
                }
            }

            result[(x as usize, y as usize)] = sum / weight_sum;
        }
    }

    result
}

pub fn apply(input: &Bitmap, settings: &DenoiseSettings) -> Bitmap {
    match settings.filter {
        DenoiseFilter::Box => box_blur(input, settings.strength.round() as Int),
        DenoiseFilter::Gaussian => gaussian_blur(input, settings.strength),
        DenoiseFilter::Bilateral => bilateral_filter(input, settings.strength, 0.1),
    }
}
