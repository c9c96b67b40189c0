//! Effective pixel center of an overlay image.
//!
//! Rendered overlays typically carry large transparent margins, so the
//! bitmap's geometric center does not correspond to the subject's visual
//! center. The effective center is the mean coordinate of all pixels with
//! non-zero alpha, in the image's own local pixel space.

use crate::{Error, Result};
use image::RgbaImage;

/// Locate the centroid of non-transparent pixels in `image`.
///
/// Returns `None` when the image has zero dimensions or contains no pixel
/// with alpha > 0; callers fall back to bounding-box-center anchoring.
pub fn locate_effective_center(image: &RgbaImage) -> Option<(f32, f32)> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let mut sum_x = 0.0f64;
    let mut sum_y = 0.0f64;
    let mut count = 0u64;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] > 0 {
            sum_x += f64::from(x);
            sum_y += f64::from(y);
            count += 1;
        }
    }

    if count == 0 {
        log::debug!("Overlay image has no opaque pixels");
        return None;
    }

    Some((
        (sum_x / count as f64) as f32,
        (sum_y / count as f64) as f32,
    ))
}

/// Like [`locate_effective_center`], surfacing the degenerate case as an
/// error for callers that require the refined anchor.
///
/// # Errors
///
/// Returns `Error::NoEffectiveCenter` when no opaque pixel exists.
pub fn require_effective_center(image: &RgbaImage) -> Result<(f32, f32)> {
    locate_effective_center(image).ok_or(Error::NoEffectiveCenter)
}
