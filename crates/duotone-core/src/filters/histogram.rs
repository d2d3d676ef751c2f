use rayon::prelude::*;
use tracing::debug;

use crate::consts::{CHANNELS, HISTOGRAM_BINS, PARALLEL_PIXEL_THRESHOLD};
use crate::raster::RasterImage;

use super::apply_grey_lut;

/// Per-value pixel counts of one 8-bit channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; HISTOGRAM_BINS],
}

impl Histogram {
    /// Count the values of `channel` (0 = R, 1 = G, 2 = B, 3 = A) over all pixels.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= 4`.
    pub fn from_channel(image: &RasterImage, channel: usize) -> Self {
        assert!(channel < CHANNELS, "channel {channel} out of range");
        let counts = if image.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
            let row_bytes = image.width() as usize * CHANNELS;
            image
                .pixels()
                .par_chunks(row_bytes)
                .map(|row| count_values(row, channel))
                .reduce(
                    || [0u64; HISTOGRAM_BINS],
                    |mut acc, row| {
                        for (a, r) in acc.iter_mut().zip(row.iter()) {
                            *a += r;
                        }
                        acc
                    },
                )
        } else {
            count_values(image.pixels(), channel)
        };
        Self { counts }
    }

    pub fn counts(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Smallest value with a non-zero count, `None` for an empty image.
    pub fn min_value(&self) -> Option<u8> {
        self.counts.iter().position(|&c| c > 0).map(|v| v as u8)
    }

    /// Largest value with a non-zero count, `None` for an empty image.
    pub fn max_value(&self) -> Option<u8> {
        self.counts.iter().rposition(|&c| c > 0).map(|v| v as u8)
    }
}

fn count_values(pixels: &[u8], channel: usize) -> [u64; HISTOGRAM_BINS] {
    let mut counts = [0u64; HISTOGRAM_BINS];
    for px in pixels.chunks_exact(CHANNELS) {
        counts[px[channel] as usize] += 1;
    }
    counts
}

/// Linear histogram stretch: maps [black_point, white_point] → [0, 255].
///
/// Values outside the range clip. R, G and B are all set from the stretched
/// R channel, so the input is expected to be greyscale already.
/// Returns the image unchanged when `white_point <= black_point`.
pub fn histogram_stretch(image: RasterImage, black_point: u8, white_point: u8) -> RasterImage {
    if white_point <= black_point {
        return image;
    }
    let range = (white_point - black_point) as u32;
    let lut: [u8; 256] = std::array::from_fn(|v| {
        let shifted = (v as u32).saturating_sub(black_point as u32);
        (shifted * 255 / range).min(255) as u8
    });
    apply_grey_lut(image, &lut)
}

/// Automatic contrast stretch from the darkest to the brightest occupied value.
///
/// Only channel 0 is inspected. A flat (or empty) image has nothing to stretch
/// and is returned unchanged.
pub fn auto_contrast(image: RasterImage) -> RasterImage {
    auto_contrast_reported(image).0
}

/// Like [`auto_contrast`], also reporting whether a stretch was applied.
pub fn auto_contrast_reported(image: RasterImage) -> (RasterImage, bool) {
    let histogram = Histogram::from_channel(&image, 0);
    match (histogram.min_value(), histogram.max_value()) {
        (Some(lo), Some(hi)) if lo < hi => {
            debug!(black_point = lo, white_point = hi, "Auto contrast stretch");
            (histogram_stretch(image, lo, hi), true)
        }
        _ => {
            debug!("Flat histogram, auto contrast skipped");
            (image, false)
        }
    }
}
