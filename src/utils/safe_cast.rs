//! Safe casting utilities for rasterizing float geometry to pixel grids

/// Clamp and convert f32 to i32 for pixel coordinates
#[must_use]
#[allow(clippy::cast_precision_loss)] // Acceptable for clamping bounds
#[allow(clippy::cast_possible_truncation)] // Clamping ensures safe truncation
pub fn f32_to_i32_clamp(value: f32, min: i32, max: i32) -> i32 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    if !value.is_finite() {
        return min;
    }

    let clamped = value.clamp(min as f32, max as f32);
    let result = clamped as i32;
    result.clamp(min, max)
}

/// Clamp and convert f32 to u32 for pixel dimensions
#[must_use]
#[allow(clippy::cast_precision_loss)] // Acceptable for clamping bounds
#[allow(clippy::cast_sign_loss)] // Clamping ensures a non-negative value
#[allow(clippy::cast_possible_truncation)] // Clamping ensures safe truncation
pub fn f32_to_u32_clamp(value: f32, min: u32, max: u32) -> u32 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    if !value.is_finite() {
        return min;
    }

    let clamped = value.clamp(min as f32, max as f32);
    let result = clamped as u32;
    result.clamp(min, max)
}
