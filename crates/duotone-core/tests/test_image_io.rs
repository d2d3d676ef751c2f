#[allow(dead_code)]
mod common;

use duotone_core::error::DuotoneError;
use duotone_core::io::image_io::{
    from_rgba_image, load_image, save_image, save_jpeg, save_png, to_rgba_image,
};
use duotone_core::raster::RasterImage;

#[test]
fn test_png_roundtrip_is_lossless() {
    let img = common::noisy_rgba(17, 9, 42);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.png");

    save_png(&img, &path).unwrap();
    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded, img);
}

#[test]
fn test_save_image_picks_format_from_extension() {
    let img = common::horizontal_ramp(16, 16);
    let dir = tempfile::tempdir().unwrap();

    let png = dir.path().join("out.PNG");
    let jpg = dir.path().join("out.jpeg");
    let other = dir.path().join("out.bin");
    save_image(&img, &png).unwrap();
    save_image(&img, &jpg).unwrap();
    save_image(&img, &other).unwrap();

    assert_eq!(std::fs::read(&png).unwrap()[..4], [0x89, b'P', b'N', b'G']);
    assert_eq!(std::fs::read(&jpg).unwrap()[..2], [0xFF, 0xD8]);
    assert_eq!(std::fs::read(&other).unwrap()[..4], [0x89, b'P', b'N', b'G']);
}

#[test]
fn test_save_jpeg_loads_opaque() {
    let img = RasterImage::filled(8, 8, [120, 120, 120, 10]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grey.jpg");
    save_jpeg(&img, &path).unwrap();

    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.dimensions(), img.dimensions());
    let px = loaded.pixel(4, 4);
    assert_eq!(px[3], 255);
    assert!((px[0] as i16 - 120).abs() <= 2, "got {px:?}");
}

#[test]
fn test_load_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_image(&dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, DuotoneError::ImageError(_) | DuotoneError::Io(_)));
}

#[test]
fn test_rgba_image_conversion_roundtrip() {
    let img = common::noisy_rgba(5, 3, 9);
    let rgba = to_rgba_image(img.clone()).unwrap();
    assert_eq!(rgba.dimensions(), (5, 3));
    assert_eq!(rgba.get_pixel(2, 1).0, img.pixel(2, 1));
    assert_eq!(from_rgba_image(rgba).unwrap(), img);
}
