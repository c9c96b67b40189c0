//! Overlay placement from a corrected face rectangle and head pose.
//!
//! Combines the face rectangle, the pose angles, and the overlay image's
//! aspect ratio into the destination rectangle the drawing surface blits the
//! overlay into. Pose rotation shifts the anchor point horizontally with yaw
//! and vertically with pitch to simulate parallax; the coefficients are
//! visual-tuning constants, not derived quantities.

use crate::face_rect::{PixelPoint, PixelRect};
use crate::pose::EulerAngles;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// How the overlay is anchored to the corrected face center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorMode {
    /// Align the overlay's geometric bounding-box center
    BoundingBoxCenter,
    /// Align the centroid of the overlay's non-transparent pixels
    EffectivePixelCenter,
}

/// Destination rectangle for blitting the overlay, in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayPlacement {
    pub dest_left: f32,
    pub dest_top: f32,
    pub dest_width: f32,
    pub dest_height: f32,
}

impl OverlayPlacement {
    pub fn dest_right(&self) -> f32 {
        self.dest_left + self.dest_width
    }

    pub fn dest_bottom(&self) -> f32 {
        self.dest_top + self.dest_height
    }

    pub fn dest_center(&self) -> PixelPoint {
        PixelPoint::new(
            self.dest_left + self.dest_width / 2.0,
            self.dest_top + self.dest_height / 2.0,
        )
    }
}

/// Marker points for debug visualization overlays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementMarkers {
    /// Center of the face rectangle before parallax compensation
    pub face_center: PixelPoint,
    /// Face center shifted by the pose-dependent parallax offset
    pub corrected_center: PixelPoint,
    /// Overlay anchor point mapped into surface coordinates; coincides with
    /// `corrected_center` when the placement is consistent
    pub anchor_center: PixelPoint,
    /// Geometric center of the destination rectangle
    pub dest_center: PixelPoint,
}

/// Computes overlay destination rectangles from face geometry and pose
#[derive(Debug, Clone)]
pub struct OverlayPlacer {
    k_yaw_offset: f32,
    k_pitch_offset: f32,
    scale_relative_to_face: f32,
    anchor_mode: AnchorMode,
}

impl OverlayPlacer {
    pub fn new(
        k_yaw_offset: f32,
        k_pitch_offset: f32,
        scale_relative_to_face: f32,
        anchor_mode: AnchorMode,
    ) -> Self {
        Self {
            k_yaw_offset,
            k_pitch_offset,
            scale_relative_to_face,
            anchor_mode,
        }
    }

    pub fn anchor_mode(&self) -> AnchorMode {
        self.anchor_mode
    }

    /// Compute the destination rectangle for the overlay.
    ///
    /// `face_rect` is the (size-corrected) face rectangle in surface pixels,
    /// `overlay_size` the overlay bitmap's dimensions, and `effective_center`
    /// the overlay's effective pixel center in its own local space when
    /// available. With `AnchorMode::EffectivePixelCenter` and no effective
    /// center, the placer falls back to bounding-box-center anchoring.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoOverlayData` when the overlay bitmap or the computed
    /// destination rectangle has a degenerate (zero or negative) dimension;
    /// callers skip drawing for that frame.
    pub fn place(
        &self,
        face_rect: &PixelRect,
        angles: &EulerAngles,
        overlay_size: (u32, u32),
        effective_center: Option<(f32, f32)>,
    ) -> Result<(OverlayPlacement, PlacementMarkers)> {
        let (overlay_image_width, overlay_image_height) = overlay_size;
        if overlay_image_width == 0 || overlay_image_height == 0 {
            return Err(Error::NoOverlayData(format!(
                "Overlay image has degenerate dimensions {}x{}",
                overlay_image_width, overlay_image_height
            )));
        }

        let face_width = face_rect.width();
        let face_height = face_rect.height();
        let face_center = face_rect.center();

        let offset_x = angles.yaw * self.k_yaw_offset * face_width;
        let offset_y = angles.pitch * self.k_pitch_offset * face_height;
        let corrected_center = PixelPoint::new(face_center.x + offset_x, face_center.y + offset_y);

        let aspect_ratio = overlay_image_width as f32 / overlay_image_height as f32;
        let overlay_width = face_width * self.scale_relative_to_face;
        let overlay_height = overlay_width / aspect_ratio;

        if overlay_width <= 0.0 || overlay_height <= 0.0 {
            return Err(Error::NoOverlayData(format!(
                "Computed overlay size {overlay_width}x{overlay_height} is degenerate"
            )));
        }

        let scale_x = overlay_width / overlay_image_width as f32;
        let scale_y = overlay_height / overlay_image_height as f32;

        // Solve dest_left so the chosen local anchor lands on corrected_center
        let (local_anchor_x, local_anchor_y) = match (self.anchor_mode, effective_center) {
            (AnchorMode::EffectivePixelCenter, Some((x, y))) => (x, y),
            (AnchorMode::EffectivePixelCenter, None) => {
                log::debug!("No effective center available, anchoring at bounding-box center");
                (
                    overlay_image_width as f32 / 2.0,
                    overlay_image_height as f32 / 2.0,
                )
            }
            (AnchorMode::BoundingBoxCenter, _) => (
                overlay_image_width as f32 / 2.0,
                overlay_image_height as f32 / 2.0,
            ),
        };

        let dest_left = corrected_center.x - local_anchor_x * scale_x;
        let dest_top = corrected_center.y - local_anchor_y * scale_y;

        let placement = OverlayPlacement {
            dest_left,
            dest_top,
            dest_width: overlay_width,
            dest_height: overlay_height,
        };

        // Map the local anchor back through the placement as an alignment check
        let markers = PlacementMarkers {
            face_center,
            corrected_center,
            anchor_center: PixelPoint::new(
                dest_left + local_anchor_x * scale_x,
                dest_top + local_anchor_y * scale_y,
            ),
            dest_center: placement.dest_center(),
        };

        log::debug!(
            "Placed overlay at ({:.1}, {:.1}) size {:.1}x{:.1}, anchor ({:.1}, {:.1})",
            placement.dest_left,
            placement.dest_top,
            placement.dest_width,
            placement.dest_height,
            markers.anchor_center.x,
            markers.anchor_center.y
        );

        Ok((placement, markers))
    }
}
