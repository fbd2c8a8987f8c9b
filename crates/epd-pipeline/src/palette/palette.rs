//! The `Palette` type with its two predefined color sets.
//!
//! Seven-color e-paper panels address colors by palette index. The panel's
//! datasheet advertises nominal RGB values for each slot, but the pigments on
//! a real panel render noticeably darker and duller. Both sets are kept as
//! predefined palettes so that matching can happen against what the panel
//! really shows while the emitted file still carries the nominal color codes
//! the panel firmware expects.

use super::error::PaletteError;
use crate::raster::Rgb;

/// Number of entries in an e-paper palette.
pub const PALETTE_LEN: usize = 7;

/// Palette slot reserved by the panel controller. Never matched against and
/// never emitted.
pub const RESERVED_INDEX: usize = 4;

/// Nominal primary/secondary colors from the panel datasheet.
pub const THEORETICAL: Palette = Palette::new([
    [0, 0, 0],       // black
    [255, 255, 255], // white
    [255, 255, 0],   // yellow
    [255, 0, 0],     // red
    [0, 0, 0],       // reserved
    [0, 0, 255],     // blue
    [0, 255, 0],     // green
]);

/// Colors captured from a physical panel with a camera. White in particular
/// is far darker than the nominal value.
pub const MEASURED: Palette = Palette::new([
    [2, 2, 2],       // black
    [185, 185, 185], // white
    [195, 184, 0],   // yellow
    [117, 5, 0],     // red
    [0, 0, 0],       // reserved
    [0, 47, 107],    // blue
    [35, 70, 40],    // green
]);

/// A fixed, ordered set of exactly [`PALETTE_LEN`] RGB entries.
///
/// The entry count is part of the type, so a malformed palette cannot reach
/// the per-pixel hot path. [`Palette::try_from_slice`] is the validating
/// constructor for colors that arrive at runtime.
///
/// Palettes play two independent roles in quantization: a *comparison*
/// palette drives the nearest-entry decision and the diffused error, while
/// an *output* palette decides the RGB value written for a chosen index.
/// [`THEORETICAL`] and [`MEASURED`] are interchangeable in either role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_LEN],
}

impl Palette {
    /// Create a palette from exactly [`PALETTE_LEN`] colors.
    pub const fn new(colors: [Rgb; PALETTE_LEN]) -> Self {
        Self { colors }
    }

    /// Create a palette from a runtime-sourced slice of colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::WrongLength`] unless the slice holds exactly
    /// [`PALETTE_LEN`] entries.
    ///
    /// # Example
    ///
    /// ```
    /// use epd_pipeline::palette::{Palette, PaletteError};
    ///
    /// let result = Palette::try_from_slice(&[[0, 0, 0], [255, 255, 255]]);
    /// assert!(matches!(result, Err(PaletteError::WrongLength { .. })));
    /// ```
    pub fn try_from_slice(colors: &[Rgb]) -> Result<Self, PaletteError> {
        let colors: [Rgb; PALETTE_LEN] =
            colors
                .try_into()
                .map_err(|_| PaletteError::WrongLength {
                    expected: PALETTE_LEN,
                    actual: colors.len(),
                })?;
        Ok(Self::new(colors))
    }

    /// The RGB value of the entry at `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// Find the usable entry closest to `pixel` by squared Euclidean RGB
    /// distance, computed in integer arithmetic.
    ///
    /// The reserved slot is skipped. Only a strictly smaller distance
    /// replaces the current best, so exact ties resolve to the lowest
    /// surviving index.
    #[inline]
    pub fn nearest(&self, pixel: Rgb) -> usize {
        let mut best = 1;
        let mut best_dist = i32::MAX;

        for (i, color) in self.colors.iter().enumerate() {
            if i == RESERVED_INDEX {
                continue;
            }
            let dr = pixel[0] as i32 - color[0] as i32;
            let dg = pixel[1] as i32 - color[1] as i32;
            let db = pixel[2] as i32 - color[2] as i32;
            let dist = dr * dr + dg * dg + db * db;
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }

        best
    }
}
