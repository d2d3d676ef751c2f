use image::imageops::{self, FilterType};
use tracing::{debug, info};

use crate::error::{DuotoneError, Result};
use crate::io::image_io::{from_rgba_image, to_rgba_image};
use crate::raster::{Dimensions, RasterImage};

/// Compute output dimensions under the longest/shortest edge bounds.
///
/// The bounds are applied one after the other, not jointly:
/// 1. if the longest edge exceeds `max_longest_edge`, scale down so it fits;
/// 2. then, if the shortest edge is below `min_shortest_edge`, scale up so it fits.
///
/// The second step may push the longest edge past `max_longest_edge` again.
/// That is kept on purpose: the minimum shortest edge wins. For example a
/// 2000x100 source with bounds 1000/300 becomes 1000x50 and then 6000x300.
pub fn target_dimensions(
    width: u32,
    height: u32,
    max_longest_edge: u32,
    min_shortest_edge: u32,
) -> Result<Dimensions> {
    validate_bounds(max_longest_edge, min_shortest_edge)?;
    if width == 0 || height == 0 {
        return Err(DuotoneError::InvalidDimensions { width, height });
    }

    let mut dims = Dimensions::new(width, height);

    let longest = dims.longest();
    if longest > max_longest_edge {
        dims = scale_floor(dims, max_longest_edge, longest);
        debug!(to = %dims, "Longest edge clamped");
    }

    let shortest = dims.shortest();
    if shortest < min_shortest_edge {
        dims = scale_floor(dims, min_shortest_edge, shortest);
        debug!(to = %dims, "Shortest edge raised");
    }

    Ok(dims)
}

/// Resize `image` to [`target_dimensions`] using bilinear resampling.
///
/// An image already within bounds is returned as-is.
pub fn resize(
    image: RasterImage,
    max_longest_edge: u32,
    min_shortest_edge: u32,
) -> Result<RasterImage> {
    let source = image.dimensions();
    let target = target_dimensions(
        source.width,
        source.height,
        max_longest_edge,
        min_shortest_edge,
    )?;
    if target == source {
        debug!(dimensions = %source, "No resize needed");
        return Ok(image);
    }

    info!(from = %source, to = %target, "Resizing");
    let rgba = to_rgba_image(image)?;
    let resized = imageops::resize(&rgba, target.width, target.height, FilterType::Triangle);
    from_rgba_image(resized)
}

pub(crate) fn validate_bounds(max_longest_edge: u32, min_shortest_edge: u32) -> Result<()> {
    if max_longest_edge == 0 || min_shortest_edge == 0 {
        return Err(DuotoneError::InvalidParameter(format!(
            "resize bounds must be > 0, got max_longest_edge={max_longest_edge}, \
             min_shortest_edge={min_shortest_edge}"
        )));
    }
    Ok(())
}

/// Scale both edges by `bound / edge`, flooring, without going below 1 px.
fn scale_floor(dims: Dimensions, bound: u32, edge: u32) -> Dimensions {
    let scale = |d: u32| {
        let scaled = d as u64 * bound as u64 / edge as u64;
        scaled.clamp(1, u32::MAX as u64) as u32
    };
    Dimensions::new(scale(dims.width), scale(dims.height))
}
