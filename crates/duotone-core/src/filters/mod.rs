pub mod greyscale;
pub mod histogram;
pub mod levels;

use crate::raster::RasterImage;

/// Replace R, G and B with `lut[R]`. Alpha is untouched.
pub(crate) fn apply_grey_lut(mut image: RasterImage, lut: &[u8; 256]) -> RasterImage {
    image.for_each_pixel_mut(|px| {
        let v = lut[px[0] as usize];
        px[0] = v;
        px[1] = v;
        px[2] = v;
    });
    image
}
