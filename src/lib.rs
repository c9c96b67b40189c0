//! Face-pose-to-overlay alignment geometry for AR face overlays.
//!
//! This library is the geometry core of a camera-based face overlay demo:
//! given normalized face landmarks and an optional 4x4 facial transformation
//! matrix from a landmark detector, it computes where a pre-rendered overlay
//! image must be drawn so it tracks the face convincingly. The pipeline:
//!
//! 1. Euler angles and translation from the transformation matrix
//! 2. Face bounding box from the landmarks, mapped through a "cover" fit
//!    into destination surface pixels
//! 3. Foreshortening correction of the box dimensions for yaw/pitch
//! 4. Overlay placement: parallax-shifted anchor, overlay sizing, and the
//!    destination rectangle, optionally anchored at the overlay's effective
//!    (non-transparent) pixel center
//!
//! Camera capture, ML inference, 3D rendering, and UI are external
//! collaborators; every function here is a pure, synchronous computation
//! over its inputs and may run on whatever thread delivers the detection
//! result.
//!
//! # Examples
//!
//! ## Step-by-step geometry
//!
//! ```
//! use face_overlay::face_rect::{compute_bounds, CoverFit, NormalizedLandmark};
//! use face_overlay::placement::{AnchorMode, OverlayPlacer};
//! use face_overlay::pose::extract_euler_angles;
//! use face_overlay::sizing::correct_rect;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Row-major 4x4 transform from the detector (identity: frontal pose)
//! let matrix: Vec<f32> = vec![
//!     1.0, 0.0, 0.0, 0.0,
//!     0.0, 1.0, 0.0, 0.0,
//!     0.0, 0.0, 1.0, 0.0,
//!     0.0, 0.0, 0.0, 1.0,
//! ];
//! let angles = extract_euler_angles(&matrix)?;
//!
//! // Landmark bounding box in surface pixels (1280x960 image shown on a
//! // 1080x1920 portrait surface under a cover fit)
//! let landmarks = vec![
//!     NormalizedLandmark::new(0.3, 0.3),
//!     NormalizedLandmark::new(0.7, 0.7),
//! ];
//! let fit = CoverFit::new(1280, 960, 1080, 1920)?;
//! let face_rect = compute_bounds(&landmarks, &fit)?;
//!
//! // Correct for foreshortening, then place the overlay
//! let corrected = correct_rect(&face_rect, &angles, 0.1);
//! let placer = OverlayPlacer::new(0.15, 0.15, 1.8, AnchorMode::BoundingBoxCenter);
//! let (placement, _markers) = placer.place(&corrected, &angles, (512, 512), None)?;
//! println!(
//!     "blit overlay at ({:.1}, {:.1}), {:.1}x{:.1}",
//!     placement.dest_left, placement.dest_top,
//!     placement.dest_width, placement.dest_height,
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Per-frame pipeline
//!
//! ```
//! use face_overlay::config::Config;
//! use face_overlay::face_rect::NormalizedLandmark;
//! use face_overlay::frame::{DetectionResult, FrameAligner, FrameGate};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let aligner = FrameAligner::new(&Config::default());
//! let mut gate = FrameGate::new();
//!
//! // One result as delivered by the detector callback. The transformation
//! // matrices may be absent; angles then default to zero.
//! let result = DetectionResult {
//!     faces: vec![vec![
//!         NormalizedLandmark::new(0.3, 0.3),
//!         NormalizedLandmark::new(0.7, 0.7),
//!     ]],
//!     transforms: None,
//!     image_width: 1280,
//!     image_height: 960,
//!     timestamp_ms: 33,
//! };
//!
//! // Keep-only-latest: stale frames are dropped, not queued
//! if gate.admit(result.timestamp_ms) {
//!     let alignments = aligner.align_frame(&result, None, 1080, 1920)?;
//!     for alignment in &alignments {
//!         println!(
//!             "face {}: yaw {:.1}°",
//!             alignment.face_index,
//!             alignment.angles.yaw.to_degrees(),
//!         );
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Euler angle and translation extraction from facial transformation matrices
pub mod pose;

/// Face bounding-box computation from normalized landmarks
pub mod face_rect;

/// Foreshortening correction for face rectangle dimensions
pub mod sizing;

/// Overlay placement from face geometry and head pose
pub mod placement;

/// Effective pixel center of an overlay image
pub mod effective_center;

/// Per-frame alignment pipeline and keep-only-latest gating
pub mod frame;

/// Error types and result handling
pub mod error;

/// Configuration management
pub mod config;

/// Constants used throughout the library
pub mod constants;

/// Utility functions for pixel-space conversions
pub mod utils;

/// Offline demo application
pub mod app;

pub use error::{Error, Result};
