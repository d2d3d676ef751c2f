use crate::color::clamp_u8;
use crate::error::{DuotoneError, Result};
use crate::raster::RasterImage;

use super::apply_grey_lut;

/// Linear contrast stretch pivoting on mid-grey.
///
/// Each value maps to `((v/255 - 0.5) * factor + 0.5) * 255`, clamped and truncated.
/// `factor > 1.0` separates shadows from highlights, `factor < 1.0` flattens them,
/// and values further than `0.5 / factor` from the pivot saturate to 0 or 255.
/// Reads channel 0 and writes R = G = B; alpha is untouched.
pub fn midtone_contrast(image: RasterImage, factor: f32) -> Result<RasterImage> {
    validate_factor(factor)?;
    let lut: [u8; 256] = std::array::from_fn(|v| {
        let centered = v as f32 / 255.0 - 0.5;
        clamp_u8((centered * factor + 0.5) * 255.0)
    });
    Ok(apply_grey_lut(image, &lut))
}

pub(crate) fn validate_factor(factor: f32) -> Result<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(DuotoneError::InvalidParameter(format!(
            "contrast factor must be a finite number > 0, got {factor}"
        )));
    }
    Ok(())
}
