//! PhotoFrame image processor.
//!
//! Converts JPEG photos into the fixed 800x480, 7-color BMP a photo-frame
//! e-paper panel displays, plus a small JPEG preview. The deterministic
//! image pipeline itself lives in the `epd-pipeline` crate; this crate
//! adds the file-facing surface: CLI, codecs, and output naming.

pub mod job;
