//! Fixed 7-entry palettes and nearest-color matching.

mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, MEASURED, PALETTE_LEN, RESERVED_INDEX, THEORETICAL};
