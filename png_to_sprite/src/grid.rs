/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use image::RgbaImage;

use crate::color::Pixel;
use crate::error::{Error, Result};

/// A fully decoded image as `[r, g, b, a]` samples in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    samples: Vec<[u8; 4]>,
}

impl PixelGrid {
    /// Build a grid, rejecting a sample count that disagrees with
    /// `width * height`.
    pub fn new(width: u32, height: u32, samples: Vec<[u8; 4]>) -> Result<Self> {
        if width as u64 * height as u64 != samples.len() as u64 {
            return Err(Error::GridSizeMismatch {
                width,
                height,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Copy the pixels of `img`. Container bytes past `width * height`
    /// pixels are ignored.
    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let len = width as usize * height as usize * 4;
        let samples: &[[u8; 4]] = bytemuck::cast_slice(&img.as_raw()[..len]);

        Self {
            width,
            height,
            samples: samples.to_vec(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[[u8; 4]] {
        &self.samples
    }

    /// Rows of samples, top to bottom. Yields nothing for a zero-width grid.
    pub fn rows(&self) -> impl Iterator<Item = &[[u8; 4]]> {
        // chunks_exact panics on 0
        self.samples.chunks_exact(self.width.max(1) as usize)
    }

    /// Quantized pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.samples.iter().map(|&sample| Pixel::from_sample(sample))
    }
}
