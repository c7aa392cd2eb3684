// Copyright 2026 @TwoCookingMice

use super::constants::{Float, Vector3f};

use std::ops;
use std::vec::Vec;

#[derive(Debug, Clone)]
pub struct Bitmap {
    data: Vec<Vector3f>,
    height: usize,
    width: usize,
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = Vector3f;

    fn index(&self, index: (usize, usize)) -> &Vector3f {
        let transformed_index = index.0 + self.width * index.1;
        &self.data[transformed_index]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Vector3f {
        let transformed_index = index.0 + self.width * index.1;
        &mut self.data[transformed_index]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self { data: vec![Vector3f::zeros(); pixel_number],
               width,
               height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[Vector3f] {
        &self.data
    }

    pub fn raw_copy(&self) -> Vec<(Float, Float, Float)> {
        self.data.iter().map(|c| (c.x, c.y, c.z)).collect()
    }

    // Copy a finished render block into place. The block is row-major over
    // [x0, x1) x [y0, y1).
    pub fn fill_block(&mut self, x0: usize, y0: usize, x1: usize, y1: usize,
                      block: &[Vector3f]) {
        for y in y0..y1 {
            for x in x0..x1 {
                self[(x, y)] = block[(x - x0) + (x1 - x0) * (y - y0)];
            }
        }
    }
}

/* Test for Bitmap */

#[cfg(test)]
mod tests {
    use super::Bitmap;
    use super::Vector3f;

    #[test]
    fn test_bitmap_basic_functions() {
        let mut bitmap = Bitmap::new(256usize, 128usize);
        assert_eq!(bitmap.width(), 256);
        assert_eq!(bitmap.height(), 128);

        bitmap[(5, 6)] = Vector3f::new(1.0, 0.5, 0.6);
        assert!((bitmap[(5, 6)][0] - 1.0).abs() < 1e-6);
        assert!((bitmap[(2, 6)][0] - 0.0).abs() < 1e-6);

        let raw = bitmap.raw_copy();
        assert_eq!(raw.len(), 256 * 128);
        assert!((raw[5 + 256 * 6].0 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_bitmap_fill_block() {
        let mut bitmap = Bitmap::new(8, 8);
        let block = vec![Vector3f::new(0.25, 0.5, 0.75); 4];
        bitmap.fill_block(2, 2, 4, 4, &block);
        assert!((bitmap[(3, 3)][2] - 0.75).abs() < 1e-6);
        assert!((bitmap[(1, 2)][2] - 0.0).abs() < 1e-6);
    }
}
