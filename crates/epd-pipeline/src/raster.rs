//! Row-major RGB raster shared by every pipeline stage.

use image::RgbImage;

/// An RGB channel triple, each channel 0..=255.
pub type Rgb = [u8; 3];

/// An 8-bit-per-channel RGB image, row-major, top-left origin.
///
/// Every pipeline stage consumes a `Raster` and returns a new one; a raster
/// is never mutated once a stage has produced it. This keeps the pipeline
/// composable and lets each stage be tested in isolation.
///
/// # Example
///
/// ```
/// use epd_pipeline::Raster;
///
/// let mut raster = Raster::new(4, 2);
/// raster.set_pixel(3, 1, [255, 0, 0]);
/// assert_eq!(raster.pixel(3, 1), [255, 0, 0]);
/// assert_eq!(raster.pixel(0, 0), [0, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a raster of the given size filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        }
    }

    /// Create a raster of the given size filled with a solid color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..width as usize * height as usize {
            data.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a raster from interleaved RGB bytes.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * 3,
            "data length ({}) must match {}x{}x3",
            data.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Read the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Write the pixel at `(x, y)`. Used by stages while building their
    /// output raster; inputs to a stage are never written through this.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&color);
    }

    /// The interleaved RGB bytes in row-major order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the raster, returning its interleaved RGB bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Convert to an [`image::RgbImage`] for resampling or encoding.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_raw(self.width, self.height, self.data.clone())
            .expect("raster buffer length matches dimensions")
    }
}

impl From<RgbImage> for Raster {
    fn from(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}
