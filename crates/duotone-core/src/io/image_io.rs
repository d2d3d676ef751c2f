use std::path::Path;

use image::{DynamicImage, ExtendedColorType, ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::{DuotoneError, Result};
use crate::raster::RasterImage;

/// Save as 8-bit RGBA PNG.
pub fn save_png(image: &RasterImage, path: &Path) -> Result<()> {
    image::save_buffer_with_format(
        path,
        image.pixels(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
        ImageFormat::Png,
    )?;
    Ok(())
}

/// Save as 8-bit RGB JPEG. JPEG has no alpha channel, so alpha is dropped.
pub fn save_jpeg(image: &RasterImage, path: &Path) -> Result<()> {
    let rgba = to_rgba_image(image.clone())?;
    let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();
    rgb.save_with_format(path, ImageFormat::Jpeg)?;
    Ok(())
}

/// Save an image, choosing format from file extension. Defaults to PNG.
pub fn save_image(image: &RasterImage, path: &Path) -> Result<()> {
    debug!(path = %path.display(), "Saving image");
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => save_jpeg(image, path),
        _ => save_png(image, path),
    }
}

/// Load any image format supported by the `image` crate as RGBA8.
pub fn load_image(path: &Path) -> Result<RasterImage> {
    let img = image::open(path)?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Loaded image"
    );
    let raster = from_rgba_image(img.to_rgba8())?;
    if raster.width() == 0 || raster.height() == 0 {
        return Err(DuotoneError::InvalidDimensions {
            width: raster.width(),
            height: raster.height(),
        });
    }
    Ok(raster)
}

/// Convert into an `image::RgbaImage` without copying pixel data.
pub fn to_rgba_image(image: RasterImage) -> Result<RgbaImage> {
    let (width, height) = (image.width(), image.height());
    let pixels = image.into_pixels();
    let len = pixels.len();
    RgbaImage::from_raw(width, height, pixels)
        .ok_or(DuotoneError::InvalidImage { width, height, len })
}

/// Convert from an `image::RgbaImage` without copying pixel data.
pub fn from_rgba_image(image: RgbaImage) -> Result<RasterImage> {
    let (width, height) = image.dimensions();
    RasterImage::new(width, height, image.into_raw())
}
