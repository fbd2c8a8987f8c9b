//! The end-to-end pipeline from decoded photo to panel-ready raster.
//!
//! [`process`] is the single entry point external callers use. It sequences
//! orientation normalization, cover resampling to the panel resolution,
//! contrast, brightness, and palette quantization - strictly in that order -
//! and independently derives a small preview from the unprocessed source.
//! The whole run is a bounded, synchronous computation with no shared state
//! between invocations.

use thiserror::Error;

use crate::dither;
use crate::palette::{Palette, MEASURED, THEORETICAL};
use crate::preprocess::{orient, resize, tone};
use crate::raster::Raster;

/// Panel width of the target display.
pub const DISPLAY_WIDTH: u32 = 800;

/// Panel height of the target display.
pub const DISPLAY_HEIGHT: u32 = 480;

/// Preview envelope for landscape sources; swapped for portrait ones.
pub const PREVIEW_WIDTH: u32 = 200;

/// See [`PREVIEW_WIDTH`].
pub const PREVIEW_HEIGHT: u32 = 120;

/// Tuning for a single processing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessOptions {
    /// Brightness adjustment in photographic stops; 0.0 leaves the image
    /// unchanged, each positive stop doubles channel values.
    pub brightness_stops: f32,
    /// Contrast multiplier around the 128 midpoint; 1.0 leaves the image
    /// unchanged.
    pub contrast: f32,
    /// Match pixels against the measured panel colors instead of the
    /// nominal ones.
    pub measured_quantization: bool,
    /// Emit measured panel colors instead of nominal ones, for previews
    /// that show what the panel will really look like.
    pub measured_output: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            brightness_stops: 0.0,
            contrast: 1.1,
            measured_quantization: true,
            measured_output: false,
        }
    }
}

impl ProcessOptions {
    fn comparison_palette(&self) -> &'static Palette {
        if self.measured_quantization {
            &MEASURED
        } else {
            &THEORETICAL
        }
    }

    fn output_palette(&self) -> &'static Palette {
        if self.measured_output {
            &MEASURED
        } else {
            &THEORETICAL
        }
    }
}

/// Errors from [`process`]. These are precondition violations, fatal to
/// the invocation; there is no transient error class anywhere in the
/// pipeline and nothing is retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A zero-sized raster cannot be resampled or quantized.
    #[error("input raster has an empty dimension: {width}x{height}")]
    EmptyInput {
        /// Input width in pixels.
        width: u32,
        /// Input height in pixels.
        height: u32,
    },
}

/// Result of a processing run.
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    /// Quantized [`DISPLAY_WIDTH`] x [`DISPLAY_HEIGHT`] raster, every pixel
    /// one of the six usable output-palette entries. Ready for BMP encoding.
    pub display: Raster,
    /// Preview of the source as decoded - no rotation, no tone work, no
    /// quantization - fit within the preview envelope. Ready for JPEG
    /// encoding.
    pub preview: Raster,
}

/// Run the full pipeline over a decoded RGB raster.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if either input dimension is zero.
/// Stage failures do not exist beyond that: once the input is validated the
/// run is pure computation.
///
/// # Example
///
/// ```
/// use epd_pipeline::{process, ProcessOptions, Raster};
///
/// let photo = Raster::filled(1600, 960, [128, 128, 128]);
/// let result = process(&photo, &ProcessOptions::default()).unwrap();
/// assert_eq!(result.display.width(), 800);
/// assert_eq!(result.display.height(), 480);
/// ```
pub fn process(input: &Raster, options: &ProcessOptions) -> Result<ProcessedImage, PipelineError> {
    if input.width() == 0 || input.height() == 0 {
        return Err(PipelineError::EmptyInput {
            width: input.width(),
            height: input.height(),
        });
    }

    // The preview derives from the source as decoded and shares no
    // intermediate state with the main pipeline.
    let preview = preview_of(input);

    let oriented = orient::normalize_orientation(input);
    let sized = resize::resize_cover(&oriented, DISPLAY_WIDTH, DISPLAY_HEIGHT);

    tracing::debug!(
        contrast = options.contrast,
        brightness_stops = options.brightness_stops,
        "adjusting tone"
    );
    let contrasted = tone::adjust_contrast(&sized, options.contrast);
    let toned = tone::adjust_brightness(&contrasted, options.brightness_stops);

    tracing::debug!(
        measured_quantization = options.measured_quantization,
        measured_output = options.measured_output,
        "quantizing"
    );
    let display = dither::quantize(&toned, options.comparison_palette(), options.output_palette());

    Ok(ProcessedImage { display, preview })
}

fn preview_of(input: &Raster) -> Raster {
    let (max_width, max_height) = if orient::is_portrait(input) {
        (PREVIEW_HEIGHT, PREVIEW_WIDTH)
    } else {
        (PREVIEW_WIDTH, PREVIEW_HEIGHT)
    };
    resize::resize_fit(input, max_width, max_height)
}
