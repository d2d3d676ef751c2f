use crate::consts::{LUMINANCE_SCALE, LUMINANCE_WEIGHTS};
use crate::raster::RasterImage;

/// Convert to greyscale using ITU-R BT.709 luminosity weights.
///
/// Sets R = G = B = floor(0.2126 R + 0.7152 G + 0.0722 B). Alpha is untouched.
/// Applying it twice gives the same result as applying it once.
pub fn greyscale(mut image: RasterImage) -> RasterImage {
    image.for_each_pixel_mut(|px| {
        let v = luma(px[0], px[1], px[2]);
        px[0] = v;
        px[1] = v;
        px[2] = v;
    });
    image
}

/// BT.709 luma of a single pixel, truncated.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let [wr, wg, wb] = LUMINANCE_WEIGHTS;
    ((wr * r as u32 + wg * g as u32 + wb * b as u32) / LUMINANCE_SCALE) as u8
}
