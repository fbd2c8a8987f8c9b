//! epd-pipeline: deterministic image pipeline for 7-color e-paper panels.
//!
//! This library turns an arbitrary decoded photo into the fixed-size,
//! fixed-palette raster a 7-color e-paper panel can display, reproducing
//! the panel firmware's quantization byte for byte. Determinism is the
//! point: the same input, options, and palettes always produce the same
//! bytes, on any host.
//!
//! # Pipeline
//!
//! [`process`] runs five stages in a fixed order:
//!
//! 1. Orientation normalization - portrait sources rotate 90° clockwise.
//! 2. Cover resampling to the 800x480 panel resolution (scale to cover,
//!    center-crop, Lanczos3).
//! 3. Contrast adjustment around the 128 midpoint.
//! 4. Brightness adjustment in photographic stops.
//! 5. Floyd-Steinberg quantization against a 7-entry palette with one
//!    reserved slot.
//!
//! Each stage is a pure function over [`Raster`] values and can be used on
//! its own through the [`preprocess`] and [`dither`] modules.
//!
//! # Dual palettes
//!
//! Quantization takes two palettes. The *comparison* palette - usually the
//! colors [`MEASURED`] from a physical panel - drives the nearest-entry
//! decision and the diffused error. The *output* palette - usually the
//! nominal [`THEORETICAL`] colors the firmware expects - decides the RGB
//! values actually written. Keeping the roles separate is what makes files
//! that look right on the real panel.
//!
//! # Quick start
//!
//! ```
//! use epd_pipeline::{process, ProcessOptions, Raster};
//!
//! let photo = Raster::filled(1024, 768, [90, 140, 200]);
//! let result = process(&photo, &ProcessOptions::default()).unwrap();
//!
//! assert_eq!(result.display.width(), 800);
//! assert_eq!(result.display.height(), 480);
//! assert!(result.preview.width() <= 200);
//! ```

pub mod dither;
pub mod output;
pub mod palette;
pub mod pipeline;
pub mod preprocess;
pub mod raster;


pub use dither::{quantize, Dither, FloydSteinberg};
pub use output::QuantizedImage;
pub use palette::{Palette, PaletteError, MEASURED, RESERVED_INDEX, THEORETICAL};
pub use pipeline::{
    process, PipelineError, ProcessOptions, ProcessedImage, DISPLAY_HEIGHT, DISPLAY_WIDTH,
    PREVIEW_HEIGHT, PREVIEW_WIDTH,
};
pub use raster::{Raster, Rgb};
