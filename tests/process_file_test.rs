//! End-to-end tests over real files: JPEG in, BMP + preview JPEG out.

use std::path::PathBuf;

use epd_pipeline::{Palette, ProcessOptions, Rgb, MEASURED, THEORETICAL};
use image::{ImageFormat, RgbImage};
use photoframe::job;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_jpeg(dir: &TempDir, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.path().join(name);
    image
        .save_with_format(&path, ImageFormat::Jpeg)
        .expect("writing test JPEG");
    path
}

fn usable_colors(palette: &Palette) -> Vec<Rgb> {
    [0usize, 1, 2, 3, 5, 6]
        .iter()
        .map(|&i| palette.color(i))
        .collect()
}

#[test]
fn test_landscape_jpeg_produces_panel_bmp_and_preview() {
    let dir = TempDir::new().unwrap();
    let source = RgbImage::from_fn(640, 400, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let input = write_jpeg(&dir, "photo.jpg", &source);
    let out_dir = dir.path().join("out");

    let outputs = job::process_file(&input, &out_dir, &ProcessOptions::default()).unwrap();
    assert_eq!(outputs.bmp, out_dir.join("photo.bmp"));
    assert_eq!(outputs.preview, out_dir.join("photo.jpg"));

    let bmp = image::open(&outputs.bmp).unwrap().to_rgb8();
    assert_eq!(bmp.dimensions(), (800, 480));

    let allowed = usable_colors(&THEORETICAL);
    for (x, y, px) in bmp.enumerate_pixels() {
        assert!(
            allowed.contains(&px.0),
            "pixel ({x}, {y}) = {:?} is not a usable palette color",
            px.0
        );
    }

    // 640x400 fit within 200x120: scale 0.3, so 192x120.
    let preview = image::open(&outputs.preview).unwrap().to_rgb8();
    assert_eq!(preview.dimensions(), (192, 120));
}

#[test]
fn test_portrait_jpeg_keeps_portrait_preview() {
    let dir = TempDir::new().unwrap();
    let source = RgbImage::from_pixel(300, 400, image::Rgb([80, 120, 160]));
    let input = write_jpeg(&dir, "tall.jpg", &source);

    let outputs =
        job::process_file(&input, dir.path(), &ProcessOptions::default()).unwrap();

    // The panel bitmap is always landscape...
    let bmp = image::open(&outputs.bmp).unwrap().to_rgb8();
    assert_eq!(bmp.dimensions(), (800, 480));

    // ...but the preview follows the source: 300x400 fit within 120x200
    // is 120x160.
    let preview = image::open(&outputs.preview).unwrap().to_rgb8();
    assert_eq!(preview.dimensions(), (120, 160));
}

#[test]
fn test_render_measured_emits_measured_colors() {
    let dir = TempDir::new().unwrap();
    let source = RgbImage::from_pixel(640, 480, image::Rgb([255, 255, 255]));
    let input = write_jpeg(&dir, "white.jpg", &source);

    let options = ProcessOptions {
        measured_output: true,
        ..ProcessOptions::default()
    };
    let outputs = job::process_file(&input, dir.path(), &options).unwrap();

    // Solid white matches the measured white entry on every pixel; with
    // measured output the file carries the measured RGB, not the nominal.
    let bmp = image::open(&outputs.bmp).unwrap().to_rgb8();
    let allowed = usable_colors(&MEASURED);
    for (x, y, px) in bmp.enumerate_pixels() {
        assert!(allowed.contains(&px.0));
        assert_eq!(
            px.0,
            [185, 185, 185],
            "pixel ({x}, {y}) should be measured white"
        );
    }
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = job::process_file(
        &dir.path().join("nope.jpg"),
        dir.path(),
        &ProcessOptions::default(),
    );
    let err = result.unwrap_err();
    assert!(
        err.to_string().contains("not found"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_output_directory_is_created() {
    let dir = TempDir::new().unwrap();
    let source = RgbImage::from_pixel(64, 48, image::Rgb([10, 200, 60]));
    let input = write_jpeg(&dir, "small.jpg", &source);
    let nested = dir.path().join("a").join("b");

    let outputs = job::process_file(&input, &nested, &ProcessOptions::default()).unwrap();
    assert!(outputs.bmp.is_file());
    assert!(outputs.preview.is_file());
}
