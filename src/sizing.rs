//! Foreshortening correction for face rectangle dimensions.
//!
//! A face rectangle measured from 2D landmarks shrinks as the head turns
//! away from the camera. Dividing the measured extent by cos(angle)
//! approximates the frontal size. The divisor is clamped below by
//! `min_cos_factor` so the correction stays bounded near 90° rotation.

use crate::face_rect::PixelRect;
use crate::pose::EulerAngles;

fn corrected_extent(extent: f32, angle: f32, min_cos_factor: f32) -> f32 {
    let cos_factor = angle.abs().cos();
    if cos_factor < min_cos_factor {
        extent / min_cos_factor
    } else {
        extent / cos_factor
    }
}

/// Correct a face rectangle's width and height for out-of-plane rotation.
///
/// Width is corrected for yaw, height for pitch, each by dividing by the
/// clamped cosine of the angle. This is a heuristic, not an exact projective
/// inverse.
pub fn correct_size(width: f32, height: f32, yaw: f32, pitch: f32, min_cos_factor: f32) -> (f32, f32) {
    (
        corrected_extent(width, yaw, min_cos_factor),
        corrected_extent(height, pitch, min_cos_factor),
    )
}

/// Apply [`correct_size`] to a rectangle, expanding it about its center
pub fn correct_rect(rect: &PixelRect, angles: &EulerAngles, min_cos_factor: f32) -> PixelRect {
    let (width, height) = correct_size(
        rect.width(),
        rect.height(),
        angles.yaw,
        angles.pitch,
        min_cos_factor,
    );
    rect.with_size(width, height)
}
