//! Face bounding-box computation from normalized landmarks.
//!
//! Landmarks arrive normalized to [0, 1] relative to the source image. The
//! preview surface shows that image under a uniform "cover" fit: scaled by
//! `max(surface_w / image_w, surface_h / image_h)` and centered, so one axis
//! overflows and is cropped. Bounds computed here live in surface pixel
//! coordinates after that mapping.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A 2D landmark point normalized to [0, 1] in source-image space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
}

impl NormalizedLandmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D point in surface pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in surface pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PixelRect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }

    /// Rectangle with the same center but the given dimensions
    pub fn with_size(&self, width: f32, height: f32) -> Self {
        let c = self.center();
        Self {
            left: c.x - width / 2.0,
            top: c.y - height / 2.0,
            right: c.x + width / 2.0,
            bottom: c.y + height / 2.0,
        }
    }
}

/// Uniform "cover" fit of a source image into a destination surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverFit {
    /// Scaled image width in surface pixels
    pub scaled_width: f32,
    /// Scaled image height in surface pixels
    pub scaled_height: f32,
    /// Horizontal centering offset (negative when the image overflows)
    pub offset_x: f32,
    /// Vertical centering offset (negative when the image overflows)
    pub offset_y: f32,
}

impl CoverFit {
    /// Compute the cover fit of `image` dimensions into `surface` dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if any dimension is zero.
    pub fn new(image_width: u32, image_height: u32, surface_width: u32, surface_height: u32) -> Result<Self> {
        if image_width == 0 || image_height == 0 || surface_width == 0 || surface_height == 0 {
            return Err(Error::InvalidInput(format!(
                "Invalid dimensions: image {}x{}, surface {}x{}",
                image_width, image_height, surface_width, surface_height
            )));
        }

        let image_w = image_width as f32;
        let image_h = image_height as f32;
        let surface_w = surface_width as f32;
        let surface_h = surface_height as f32;

        let scale = (surface_w / image_w).max(surface_h / image_h);
        let scaled_width = image_w * scale;
        let scaled_height = image_h * scale;

        Ok(Self {
            scaled_width,
            scaled_height,
            offset_x: (surface_w - scaled_width) / 2.0,
            offset_y: (surface_h - scaled_height) / 2.0,
        })
    }

    /// Map a normalized landmark into surface pixel coordinates
    pub fn map(&self, landmark: &NormalizedLandmark) -> PixelPoint {
        PixelPoint::new(
            landmark.x * self.scaled_width + self.offset_x,
            landmark.y * self.scaled_height + self.offset_y,
        )
    }
}

/// Compute the axis-aligned bounding box of a landmark set in surface pixels.
///
/// Scans all points for min/max on both axes, then maps the extremes through
/// the cover fit.
///
/// # Errors
///
/// Returns `Error::InvalidBounds` for an empty landmark set or when the
/// points have no spread on either axis (min >= max); callers skip overlay
/// placement for that frame instead of drawing with garbage geometry.
pub fn compute_bounds(landmarks: &[NormalizedLandmark], fit: &CoverFit) -> Result<PixelRect> {
    if landmarks.is_empty() {
        return Err(Error::InvalidBounds("Empty landmark set".to_string()));
    }

    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;

    for landmark in landmarks {
        min_x = min_x.min(landmark.x);
        min_y = min_y.min(landmark.y);
        max_x = max_x.max(landmark.x);
        max_y = max_y.max(landmark.y);
    }

    if min_x >= max_x || min_y >= max_y {
        return Err(Error::InvalidBounds(format!(
            "Landmark bounds have no spread: x [{min_x}, {max_x}], y [{min_y}, {max_y}]"
        )));
    }

    let top_left = fit.map(&NormalizedLandmark::new(min_x, min_y));
    let bottom_right = fit.map(&NormalizedLandmark::new(max_x, max_y));

    Ok(PixelRect::new(
        top_left.x,
        top_left.y,
        bottom_right.x,
        bottom_right.y,
    ))
}
