//! Floyd-Steinberg error diffusion.
//!
//! The classic kernel distributes each pixel's quantization error to four
//! forward neighbors:
//!
//! ```text
//!        X   7
//!    3   5   1
//! ```
//!
//! Weights are sixteenths: 7/16 right, 3/16 below-left, 5/16 below,
//! 1/16 below-right. Each share uses truncating integer division, so the
//! remainder of every split is dropped. The resulting small bias toward
//! zero is part of the output contract shared with the panel firmware and
//! must not be "fixed" with rounding.

use crate::output::QuantizedImage;
use crate::palette::Palette;
use crate::raster::{Raster, Rgb};

use super::{Dither, ErrorBuffer};

/// Kernel entries as `(dx, dy, numerator)` over [`DIVISOR`].
const KERNEL: [(i64, i64, i64); 4] = [(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)];

/// Common denominator of the kernel weights.
const DIVISOR: i64 = 16;

/// Floyd-Steinberg error diffusion over integer error accumulators.
///
/// A single row-major pass: each pixel is offset by the error carried from
/// earlier pixels, clamped, matched against the comparison palette, and the
/// residual error is split across the kernel neighbors. The scan order is
/// load-bearing; two runs over the same input are byte-identical.
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, raster: &Raster, comparison: &Palette) -> QuantizedImage {
        let (width, height) = (raster.width(), raster.height());
        let mut indices = Vec::with_capacity(width as usize * height as usize);
        let mut errors = ErrorBuffer::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let original = raster.pixel(x, y);
                let carried = errors.get(x, y);

                // Clamp back to the displayable range before matching.
                let effective: Rgb = [
                    clamp_channel(i64::from(original[0]) + carried[0]),
                    clamp_channel(i64::from(original[1]) + carried[1]),
                    clamp_channel(i64::from(original[2]) + carried[2]),
                ];

                let idx = comparison.nearest(effective);
                indices.push(idx as u8);

                // Error is measured against the comparison palette; the
                // output palette never feeds back into diffusion.
                let chosen = comparison.color(idx);
                let error = [
                    i64::from(effective[0]) - i64::from(chosen[0]),
                    i64::from(effective[1]) - i64::from(chosen[1]),
                    i64::from(effective[2]) - i64::from(chosen[2]),
                ];

                for &(dx, dy, numerator) in &KERNEL {
                    let share = [
                        error[0] * numerator / DIVISOR,
                        error[1] * numerator / DIVISOR,
                        error[2] * numerator / DIVISOR,
                    ];
                    errors.add(i64::from(x) + dx, i64::from(y) + dy, share);
                }
            }
        }

        QuantizedImage::new(indices, width, height)
    }
}

#[inline]
fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}
