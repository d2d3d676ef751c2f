use rayon::prelude::*;

use crate::consts::{CHANNELS, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{DuotoneError, Result};

/// An 8-bit RGBA raster.
/// Pixel data is row-major and interleaved as [R, G, B, A, R, G, B, A, ...].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Wrap an RGBA buffer. Fails if `pixels.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if pixels.len() != width as usize * height as usize * CHANNELS {
            return Err(DuotoneError::InvalidImage {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; 4],
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// An image where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::from_fn(width, height, |_, _| rgba)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x},{y}) outside {}x{} image",
            self.width,
            self.height
        );
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// True when every pixel has R == G == B.
    pub fn is_greyscale(&self) -> bool {
        self.pixels
            .chunks_exact(CHANNELS)
            .all(|px| px[0] == px[1] && px[1] == px[2])
    }

    /// Apply `f` to every RGBA pixel in place.
    ///
    /// Large images are processed row-parallel; output is identical either way.
    pub(crate) fn for_each_pixel_mut<F>(&mut self, f: F)
    where
        F: Fn(&mut [u8]) + Send + Sync,
    {
        let row_bytes = self.width as usize * CHANNELS;
        if row_bytes == 0 {
            return;
        }
        if self.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
            self.pixels
                .par_chunks_mut(row_bytes)
                .for_each(|row| row.chunks_exact_mut(CHANNELS).for_each(&f));
        } else {
            self.pixels.chunks_exact_mut(CHANNELS).for_each(&f);
        }
    }
}

/// Width and height of an image in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn longest(&self) -> u32 {
        self.width.max(self.height)
    }

    pub fn shortest(&self) -> u32 {
        self.width.min(self.height)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
