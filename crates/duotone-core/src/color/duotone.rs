use tracing::debug;

use crate::raster::RasterImage;

use super::rgb::Rgb;

/// Map a greyscale image onto a two-color gradient.
///
/// Channel 0 is the key: 0 maps to `dark`, 255 maps to `light`, and values in
/// between interpolate linearly per channel (floored). Alpha is untouched.
/// Swapping `dark` and `light` is the same as mapping every key `v` to `255 - v`.
pub fn duotone(mut image: RasterImage, dark: Rgb, light: Rgb) -> RasterImage {
    debug!(%dark, %light, "Applying duotone");
    let lut = gradient_lut(dark, light);
    image.for_each_pixel_mut(|px| {
        let [r, g, b] = lut[px[0] as usize];
        px[0] = r;
        px[1] = g;
        px[2] = b;
    });
    image
}

/// The 256-entry gradient table used by [`duotone`], indexed by grey value.
pub fn gradient_lut(dark: Rgb, light: Rgb) -> [[u8; 3]; 256] {
    let dark = dark.to_array();
    let light = light.to_array();
    std::array::from_fn(|v| std::array::from_fn(|c| mix(dark[c], light[c], v as u32)))
}

/// floor(dark * (1 - v/255) + light * (v/255)), in exact integer arithmetic.
fn mix(dark: u8, light: u8, v: u32) -> u8 {
    // Convex combination of two bytes, never above 255.
    ((dark as u32 * (255 - v) + light as u32 * v) / 255) as u8
}
