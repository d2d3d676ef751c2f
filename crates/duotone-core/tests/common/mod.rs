use duotone_core::raster::RasterImage;

/// Greyscale image whose value runs 0 → 255 left to right.
pub fn horizontal_ramp(width: u32, height: u32) -> RasterImage {
    RasterImage::from_fn(width, height, |x, _| {
        let v = if width > 1 {
            (x * 255 / (width - 1)) as u8
        } else {
            0
        };
        [v, v, v, 255]
    })
}

/// Greyscale image where every pixel is `value`.
pub fn flat_grey(width: u32, height: u32, value: u8) -> RasterImage {
    RasterImage::filled(width, height, [value, value, value, 255])
}

/// Greyscale image using only values in `[lo, hi]`, spread over the pixels.
pub fn narrow_grey(width: u32, height: u32, lo: u8, hi: u8) -> RasterImage {
    let span = (hi - lo) as u32 + 1;
    RasterImage::from_fn(width, height, |x, y| {
        let v = lo + ((x + y * width) % span) as u8;
        [v, v, v, 255]
    })
}

/// Deterministic pseudo-random RGBA image (xorshift), with varying alpha.
pub fn noisy_rgba(width: u32, height: u32, seed: u32) -> RasterImage {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    RasterImage::from_fn(width, height, |_, _| {
        let v = next().to_le_bytes();
        [v[0], v[1], v[2], v[3]]
    })
}

/// Alpha channel of every pixel, in order.
pub fn alphas(image: &RasterImage) -> Vec<u8> {
    image.pixels().chunks_exact(4).map(|px| px[3]).collect()
}
