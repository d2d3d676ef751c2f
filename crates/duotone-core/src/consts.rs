use crate::color::Rgb;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Number of histogram buckets for 8-bit channel data.
pub const HISTOGRAM_BINS: usize = 256;

/// ITU-R BT.709 luminance weights for R, G, B, scaled by [`LUMINANCE_SCALE`].
/// 0.2126, 0.7152 and 0.0722 as exact integers, summing to the scale.
pub const LUMINANCE_WEIGHTS: [u32; 3] = [2126, 7152, 722];

/// Denominator for [`LUMINANCE_WEIGHTS`].
pub const LUMINANCE_SCALE: u32 = 10_000;

/// Default upper bound for the longest image edge after resizing.
pub const DEFAULT_MAX_LONGEST_EDGE: u32 = 1000;

/// Default lower bound for the shortest image edge after resizing.
/// Takes priority over the longest-edge bound when both cannot hold.
pub const DEFAULT_MIN_SHORTEST_EDGE: u32 = 300;

/// Default midtone contrast factor (1.0 = no change).
pub const DEFAULT_CONTRAST_FACTOR: f32 = 1.5;

/// Default shadow color for the duotone gradient (`#1b602f`).
pub const DEFAULT_DARK_COLOR: Rgb = Rgb::new(0x1b, 0x60, 0x2f);

/// Default highlight color for the duotone gradient (`#f784c5`).
pub const DEFAULT_LIGHT_COLOR: Rgb = Rgb::new(0xf7, 0x84, 0xc5);
