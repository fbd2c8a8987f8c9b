//! Contrast and brightness transforms.
//!
//! Both transforms run per channel over `f32` intermediates, clamp to the
//! displayable range, and truncate back to `u8` before the next stage
//! reads the raster. Truncation (not rounding) at the stage boundary is
//! part of the output contract shared with the panel firmware.

use crate::raster::Raster;

/// Contrast around the 128 midpoint: `(input - 128) * multiplier + 128`.
///
/// A multiplier of 1.0 is the identity. Degenerate multipliers are valid:
/// 0.0 collapses every channel to 128, large values saturate toward pure
/// black and white.
pub fn adjust_contrast(raster: &Raster, multiplier: f32) -> Raster {
    map_channels(raster, |v| (f32::from(v) - 128.0) * multiplier + 128.0)
}

/// Exposure in photographic stops: each stop doubles the channel value.
///
/// 0.0 stops is the identity. The multiplier is computed in `f64` and
/// narrowed, matching how the `2^stops` scalar reaches the per-channel
/// arithmetic.
pub fn adjust_brightness(raster: &Raster, stops: f32) -> Raster {
    let multiplier = 2f64.powf(f64::from(stops)) as f32;
    map_channels(raster, move |v| f32::from(v) * multiplier)
}

fn map_channels(raster: &Raster, f: impl Fn(u8) -> f32) -> Raster {
    let data = raster
        .as_bytes()
        .iter()
        .map(|&v| f(v).clamp(0.0, 255.0) as u8)
        .collect();
    Raster::from_raw(raster.width(), raster.height(), data)
}
