pub mod duotone;
pub mod rgb;

pub use duotone::{duotone, gradient_lut};
pub use rgb::{clamp_u8, hex_to_rgb, rgb_to_hex, Rgb};
