//! Portrait detection and rotation to the canonical landscape orientation.

use crate::raster::Raster;

/// True when the raster is taller than it is wide.
#[inline]
pub fn is_portrait(raster: &Raster) -> bool {
    raster.height() > raster.width()
}

/// Rotate 90 degrees clockwise.
///
/// Source pixel `(x, y)` lands at `(height - 1 - y, x)` in the destination;
/// the result has swapped dimensions.
pub fn rotate_90_cw(raster: &Raster) -> Raster {
    let (width, height) = (raster.width(), raster.height());
    let mut rotated = Raster::new(height, width);
    for y in 0..height {
        for x in 0..width {
            rotated.set_pixel(height - 1 - y, x, raster.pixel(x, y));
        }
    }
    rotated
}

/// Rotate portrait rasters to landscape; everything else passes through
/// unchanged. Square rasters count as landscape.
pub fn normalize_orientation(raster: &Raster) -> Raster {
    if is_portrait(raster) {
        tracing::debug!(
            width = raster.width(),
            height = raster.height(),
            "portrait source, rotating 90 degrees clockwise"
        );
        rotate_90_cw(raster)
    } else {
        raster.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_portrait() {
        assert!(is_portrait(&Raster::new(300, 400)));
        assert!(!is_portrait(&Raster::new(400, 300)));
        assert!(!is_portrait(&Raster::new(300, 300)), "square is landscape");
    }

    #[test]
    fn test_rotate_maps_corners() {
        // 2x3 portrait with a distinct color per pixel.
        let mut raster = Raster::new(2, 3);
        for y in 0..3 {
            for x in 0..2 {
                raster.set_pixel(x, y, [(y * 2 + x) as u8 * 10, 0, 0]);
            }
        }

        let rotated = rotate_90_cw(&raster);
        assert_eq!(rotated.width(), 3);
        assert_eq!(rotated.height(), 2);

        // (x, y) -> (height - 1 - y, x)
        assert_eq!(rotated.pixel(2, 0), raster.pixel(0, 0), "top-left corner");
        assert_eq!(rotated.pixel(0, 0), raster.pixel(0, 2), "bottom-left corner");
        assert_eq!(rotated.pixel(2, 1), raster.pixel(1, 0), "top-right corner");
        assert_eq!(rotated.pixel(0, 1), raster.pixel(1, 2), "bottom-right corner");
    }

    #[test]
    fn test_normalize_rotates_portrait() {
        let raster = Raster::new(300, 400);
        let normalized = normalize_orientation(&raster);
        assert_eq!(normalized.width(), 400);
        assert_eq!(normalized.height(), 300);
    }

    #[test]
    fn test_normalize_is_identity_for_landscape() {
        let mut raster = Raster::new(4, 3);
        raster.set_pixel(1, 2, [9, 9, 9]);
        let normalized = normalize_orientation(&raster);
        assert_eq!(normalized, raster, "landscape input must pass through");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raster = Raster::new(300, 400);
        let once = normalize_orientation(&raster);
        let twice = normalize_orientation(&once);
        assert_eq!(once, twice, "a second pass must change nothing");
    }
}
