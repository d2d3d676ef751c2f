#[allow(dead_code)]
mod common;

use duotone_core::color::{duotone, gradient_lut, Rgb};
use duotone_core::filters::greyscale::greyscale;
use duotone_core::raster::RasterImage;

fn grey_value_strip() -> RasterImage {
    RasterImage::from_fn(256, 1, |x, _| {
        let v = x as u8;
        [v, v, v, 255]
    })
}

#[test]
fn test_duotone_black_white_is_identity() {
    let img = greyscale(common::noisy_rgba(32, 32, 4));
    let out = duotone(img.clone(), Rgb::BLACK, Rgb::WHITE);
    assert_eq!(out, img);
}

#[test]
fn test_duotone_endpoints() {
    let dark = Rgb::new(27, 96, 47);
    let light = Rgb::new(247, 132, 197);
    let out = duotone(grey_value_strip(), dark, light);
    assert_eq!(out.pixel(0, 0), [27, 96, 47, 255]);
    assert_eq!(out.pixel(255, 0), [247, 132, 197, 255]);
}

#[test]
fn test_duotone_midpoint_floors() {
    let dark = Rgb::new(0, 100, 255);
    let light = Rgb::new(255, 201, 0);
    let lut = gradient_lut(dark, light);
    // v = 51 → alpha 0.2: 0.8*dark + 0.2*light
    assert_eq!(lut[51], [51, 120, 204]);
}

#[test]
fn test_duotone_swap_reflects_alpha() {
    let a = Rgb::new(27, 96, 47);
    let b = Rgb::new(247, 132, 197);
    let normal = duotone(grey_value_strip(), a, b);
    let swapped = duotone(grey_value_strip(), b, a);
    for v in 0..=255u32 {
        let n = normal.pixel(v, 0);
        let s = swapped.pixel(255 - v, 0);
        assert_eq!(n, s, "value {v}: normal {n:?} vs swapped at {} {s:?}", 255 - v);
    }
}

#[test]
fn test_duotone_swap_is_not_per_pixel_inversion() {
    // Swapping endpoints is a reflection of the key, not an RGB complement.
    let a = Rgb::new(27, 96, 47);
    let b = Rgb::new(247, 132, 197);
    let normal = duotone(grey_value_strip(), a, b);
    let swapped = duotone(grey_value_strip(), b, a);
    let px_n = normal.pixel(0, 0);
    let px_s = swapped.pixel(0, 0);
    assert_ne!([255 - px_n[0], 255 - px_n[1], 255 - px_n[2]], [px_s[0], px_s[1], px_s[2]]);
}

#[test]
fn test_duotone_is_monotonic_per_channel() {
    let dark = Rgb::new(10, 200, 50);
    let light = Rgb::new(240, 20, 50);
    let lut = gradient_lut(dark, light);
    for v in 1..256 {
        assert!(lut[v][0] >= lut[v - 1][0]);
        assert!(lut[v][1] <= lut[v - 1][1]);
        assert_eq!(lut[v][2], 50);
    }
}

#[test]
fn test_duotone_preserves_alpha() {
    let img = greyscale(common::noisy_rgba(16, 16, 99));
    let before = common::alphas(&img);
    let out = duotone(img, Rgb::new(1, 2, 3), Rgb::new(200, 100, 50));
    assert_eq!(common::alphas(&out), before);
}

#[test]
fn test_duotone_same_color_is_flat() {
    let c = Rgb::new(12, 34, 56);
    let out = duotone(grey_value_strip(), c, c);
    for px in out.pixels().chunks_exact(4) {
        assert_eq!(&px[..3], &[12, 34, 56]);
    }
}
