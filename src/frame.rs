//! Per-frame alignment of overlay placements to detection results.
//!
//! The detector delivers results on its own background thread; every result
//! is processed from scratch and nothing here retains state between frames.
//! The one stateful piece, [`FrameGate`], is owned by the delivery thread and
//! only compares timestamps: a result older than the last admitted one is
//! discarded, not queued, so stale in-flight work can never back up.

use crate::config::Config;
use crate::effective_center::locate_effective_center;
use crate::face_rect::{compute_bounds, CoverFit, NormalizedLandmark, PixelRect};
use crate::placement::{AnchorMode, OverlayPlacement, OverlayPlacer, PlacementMarkers};
use crate::pose::{extract_euler_angles, extract_translation, EulerAngles, Translation};
use crate::sizing::correct_rect;
use crate::{Error, Result};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// One detection result as delivered by the face landmarker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Normalized landmark sequences, one per detected face
    pub faces: Vec<Vec<NormalizedLandmark>>,
    /// Flattened row-major 4x4 transformation matrices, one per face.
    /// Absent when pose tracking is unavailable; that is a valid state.
    #[serde(default)]
    pub transforms: Option<Vec<Vec<f32>>>,
    /// Source image width in pixels
    pub image_width: u32,
    /// Source image height in pixels
    pub image_height: u32,
    /// Frame timestamp in milliseconds
    #[serde(default)]
    pub timestamp_ms: i64,
}

/// Alignment output for a single face
#[derive(Debug, Clone)]
pub struct FaceAlignment {
    /// Index of the face in the detection result
    pub face_index: usize,
    /// Raw landmark bounding box in surface pixels
    pub face_rect: PixelRect,
    /// Face rectangle with foreshortening-corrected dimensions
    pub corrected_rect: PixelRect,
    /// Head orientation; zero when no transformation matrix was available
    pub angles: EulerAngles,
    /// Head translation from the transformation matrix, when available
    pub translation: Option<Translation>,
    /// Overlay destination and debug markers; `None` when the overlay is
    /// absent or the placement came out degenerate
    pub placement: Option<(OverlayPlacement, PlacementMarkers)>,
}

/// Discards stale detection results, keeping only the latest frame.
///
/// Mirrors the camera pipeline's keep-only-latest backpressure: a result with
/// a timestamp at or before the last admitted one is dropped.
#[derive(Debug, Default)]
pub struct FrameGate {
    last_timestamp_ms: Option<i64>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a result with this timestamp should be processed
    pub fn admit(&mut self, timestamp_ms: i64) -> bool {
        match self.last_timestamp_ms {
            Some(last) if timestamp_ms <= last => {
                log::debug!("Discarding stale frame {timestamp_ms} (last admitted {last})");
                false
            }
            _ => {
                self.last_timestamp_ms = Some(timestamp_ms);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_timestamp_ms = None;
    }
}

/// Runs the full alignment flow for every face in a detection result
#[derive(Debug, Clone)]
pub struct FrameAligner {
    placer: OverlayPlacer,
    min_cos_factor: f32,
}

impl FrameAligner {
    pub fn new(config: &Config) -> Self {
        Self {
            placer: OverlayPlacer::new(
                config.placement.k_yaw_offset,
                config.placement.k_pitch_offset,
                config.placement.scale_relative_to_face,
                config.placement.anchor_mode,
            ),
            min_cos_factor: config.sizing.min_cos_factor,
        }
    }

    /// Align all faces of `result` against a surface of the given dimensions.
    ///
    /// Faces with degenerate landmark bounds are skipped with a warning; a
    /// malformed or missing transformation matrix falls back to zero angles.
    /// When `overlay` is `None` every alignment carries no placement and the
    /// caller renders the base image unmodified.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the result's image dimensions or the
    /// surface dimensions are zero.
    pub fn align_frame(
        &self,
        result: &DetectionResult,
        overlay: Option<&RgbaImage>,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<Vec<FaceAlignment>> {
        let fit = CoverFit::new(
            result.image_width,
            result.image_height,
            surface_width,
            surface_height,
        )?;

        // The alpha scan walks every overlay pixel; do it once per frame,
        // not once per face.
        let effective_center = match (overlay, self.placer.anchor_mode()) {
            (Some(image), AnchorMode::EffectivePixelCenter) => locate_effective_center(image),
            _ => None,
        };

        let mut alignments = Vec::with_capacity(result.faces.len());
        for (face_index, landmarks) in result.faces.iter().enumerate() {
            let face_rect = match compute_bounds(landmarks, &fit) {
                Ok(rect) => rect,
                Err(Error::InvalidBounds(reason)) => {
                    log::warn!("Skipping face {face_index}: {reason}");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let (angles, translation) = self.face_pose(result, face_index);
            let corrected_rect = correct_rect(&face_rect, &angles, self.min_cos_factor);

            let placement = match overlay {
                Some(image) => {
                    match self
                        .placer
                        .place(&corrected_rect, &angles, image.dimensions(), effective_center)
                    {
                        Ok(placed) => Some(placed),
                        Err(Error::NoOverlayData(reason)) => {
                            log::warn!("No placement for face {face_index}: {reason}");
                            None
                        }
                        Err(e) => return Err(e),
                    }
                }
                None => None,
            };

            alignments.push(FaceAlignment {
                face_index,
                face_rect,
                corrected_rect,
                angles,
                translation,
                placement,
            });
        }

        log::debug!(
            "Frame {}: aligned {}/{} faces",
            result.timestamp_ms,
            alignments.len(),
            result.faces.len()
        );

        Ok(alignments)
    }

    /// Pose for one face, falling back to zero angles when the matrix is
    /// absent or malformed
    fn face_pose(&self, result: &DetectionResult, face_index: usize) -> (EulerAngles, Option<Translation>) {
        let matrix = result
            .transforms
            .as_ref()
            .and_then(|transforms| transforms.get(face_index));

        let Some(matrix) = matrix else {
            return (EulerAngles::default(), None);
        };

        match (extract_euler_angles(matrix), extract_translation(matrix)) {
            (Ok(angles), Ok(translation)) => (angles, Some(translation)),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("Face {face_index}: unusable transformation matrix ({e}), using zero pose");
                (EulerAngles::default(), None)
            }
        }
    }
}
