// Copyright @yucwang 2026

use crate::math::bitmap::Bitmap;

// Write a tone-mapped bitmap (channels in [0, 1]) to an 8-bit PNG
pub fn write_png_to_file(bitmap: &Bitmap, file_path: &str) {
    log::info!("Starting writing png image: {}.", file_path);

    let width = bitmap.width() as u32;
    let height = bitmap.height() as u32;
    let mut image = image::RgbImage::new(width, height);

    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            let color = bitmap[(x, y)];
            let quantize = |c: f32| (256.0 * c.max(0.0).min(0.999)) as u8;
            image.put_pixel(x as u32, y as u32,
                            image::Rgb([quantize(color.x), quantize(color.y), quantize(color.z)]));
        }
    }

    match image.save(file_path) {
        Ok(()) => println!("PNG written to: {}.", file_path),
        Err(e) => println!("PNG written error: {}.", e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Vector3f;

    #[test]
    fn test_png_write_round_trip() {
        let mut bitmap = Bitmap::new(4, 2);
        bitmap[(0, 0)] = Vector3f::new(1.0, 0.5, 0.0);
        let path = std::env::temp_dir().join("praline_png_utils_test.png");
        let path = path.to_str().expect("temp path");
        write_png_to_file(&bitmap, path);

        let loaded = image::open(path).expect("png readable").to_rgb8();
        assert_eq!(loaded.width(), 4);
        assert_eq!(loaded.height(), 2);
        assert_eq!(loaded.get_pixel(0, 0)[0], 255);
        std::fs::remove_file(path).ok();
    }
}
