//! The canonical quantizer output: palette indices plus dimensions.

use crate::palette::Palette;
use crate::raster::Raster;

/// A quantized image as palette indices, one `u8` per pixel in row-major
/// order.
///
/// The index form is canonical. RGB values are computed on demand by
/// looking up an *output* palette, which may differ from the palette the
/// quantizer compared against - that indirection is what lets a file carry
/// nominal panel colors while matching happened against measured ones.
pub struct QuantizedImage {
    indices: Vec<u8>,
    width: u32,
    height: u32,
}

impl QuantizedImage {
    /// Wrap quantizer output.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            indices.len(),
            width as usize * height as usize,
            "indices length ({}) must match {}x{}",
            indices.len(),
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
        }
    }

    /// The palette indices in row-major order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Materialize an RGB raster by mapping every index through `output`.
    pub fn to_raster(&self, output: &Palette) -> Raster {
        let mut data = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            data.extend_from_slice(&output.color(idx as usize));
        }
        Raster::from_raw(self.width, self.height, data)
    }
}
