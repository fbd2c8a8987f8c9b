//! Cover and fit resampling on top of the `image` crate's Lanczos3 filter.

use image::imageops::{self, FilterType};

use crate::raster::Raster;

/// Scale-to-cover then center-crop to exactly `target_width` x
/// `target_height`.
///
/// The scale factor is the larger of the two per-axis ratios, so the scaled
/// image covers the whole target frame and overflows at most one axis.
/// Scaled dimensions round per axis; the scaled image is composited onto a
/// black canvas at floored centering offsets (negative offsets realize the
/// crop, overflow is clipped).
///
/// A source already at the target size is returned unchanged - identical to
/// running the full algorithm at scale 1.0 with zero offsets.
pub fn resize_cover(src: &Raster, target_width: u32, target_height: u32) -> Raster {
    if src.width() == target_width && src.height() == target_height {
        return src.clone();
    }

    let scale = f64::max(
        f64::from(target_width) / f64::from(src.width()),
        f64::from(target_height) / f64::from(src.height()),
    );
    let scaled_width = scale_dimension(src.width(), scale);
    let scaled_height = scale_dimension(src.height(), scale);

    tracing::debug!(
        src_width = src.width(),
        src_height = src.height(),
        scaled_width,
        scaled_height,
        "cover resample"
    );

    let scaled = Raster::from(imageops::resize(
        &src.to_image(),
        scaled_width,
        scaled_height,
        FilterType::Lanczos3,
    ));

    // Floor division keeps the crop symmetric even for odd, negative
    // differences.
    let offset_x = (i64::from(target_width) - i64::from(scaled_width)).div_euclid(2);
    let offset_y = (i64::from(target_height) - i64::from(scaled_height)).div_euclid(2);

    let mut canvas = Raster::new(target_width, target_height);
    for y in 0..target_height {
        let sy = i64::from(y) - offset_y;
        if sy < 0 || sy >= i64::from(scaled_height) {
            continue;
        }
        for x in 0..target_width {
            let sx = i64::from(x) - offset_x;
            if sx < 0 || sx >= i64::from(scaled_width) {
                continue;
            }
            canvas.set_pixel(x, y, scaled.pixel(sx as u32, sy as u32));
        }
    }
    canvas
}

/// Shrink to fit within `max_width` x `max_height`, preserving aspect
/// ratio. Never enlarges; a source already inside the bounds is returned
/// unchanged.
pub fn resize_fit(src: &Raster, max_width: u32, max_height: u32) -> Raster {
    let scale = f64::min(
        f64::from(max_width) / f64::from(src.width()),
        f64::from(max_height) / f64::from(src.height()),
    );
    if scale >= 1.0 {
        return src.clone();
    }

    let width = scale_dimension(src.width(), scale);
    let height = scale_dimension(src.height(), scale);
    Raster::from(imageops::resize(
        &src.to_image(),
        width,
        height,
        FilterType::Lanczos3,
    ))
}

/// Round-to-nearest scaling with a floor of one pixel.
fn scale_dimension(dimension: u32, scale: f64) -> u32 {
    ((f64::from(dimension) * scale).round() as u32).max(1)
}
