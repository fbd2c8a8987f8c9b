//! Decode, process, and encode a single photo.
//!
//! This is the file-facing seam around the pipeline: JPEG in, BMP plus
//! JPEG preview out. Decode and encode failures carry the offending path;
//! pipeline failures propagate unchanged.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::codecs::jpeg::JpegEncoder;
use image::ImageFormat;

use epd_pipeline::{process, ProcessOptions, Raster};

/// JPEG quality for the preview artifact.
const PREVIEW_QUALITY: u8 = 85;

/// Artifacts written by a processing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// The 800x480 panel bitmap.
    pub bmp: PathBuf,
    /// The preview JPEG.
    pub preview: PathBuf,
}

/// Process `input` into `<stem>.bmp` and `<stem>.jpg` under `output_dir`.
///
/// Sources that decode to a non-RGB mode (grayscale, indexed) are converted
/// to RGB before entering the pipeline. The output directory is created if
/// missing.
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    options: &ProcessOptions,
) -> anyhow::Result<OutputPaths> {
    anyhow::ensure!(input.is_file(), "input file not found: {}", input.display());

    let decoded = image::open(input)
        .with_context(|| format!("failed to decode {}", input.display()))?
        .to_rgb8();
    let source = Raster::from(decoded);
    tracing::info!(
        width = source.width(),
        height = source.height(),
        "decoded source image"
    );

    let processed = process(&source, options)?;

    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            output_dir.display()
        )
    })?;

    let stem = input
        .file_stem()
        .with_context(|| format!("input path has no file name: {}", input.display()))?;
    let bmp = output_dir.join(Path::new(stem).with_extension("bmp"));
    let preview = output_dir.join(Path::new(stem).with_extension("jpg"));

    processed
        .display
        .to_image()
        .save_with_format(&bmp, ImageFormat::Bmp)
        .with_context(|| format!("failed to write {}", bmp.display()))?;
    tracing::info!(path = %bmp.display(), "wrote panel bitmap");

    let file = File::create(&preview)
        .with_context(|| format!("failed to write {}", preview.display()))?;
    let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), PREVIEW_QUALITY);
    processed
        .preview
        .to_image()
        .write_with_encoder(encoder)
        .with_context(|| format!("failed to encode {}", preview.display()))?;
    tracing::info!(
        path = %preview.display(),
        width = processed.preview.width(),
        height = processed.preview.height(),
        "wrote preview"
    );

    Ok(OutputPaths { bmp, preview })
}
