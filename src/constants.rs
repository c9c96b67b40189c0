//! Constants used throughout the library

/// Number of elements in a flattened 4x4 transformation matrix
pub const MATRIX_ELEMENTS: usize = 16;

/// Default horizontal parallax coefficient (yaw contribution to anchor shift)
pub const DEFAULT_K_YAW_OFFSET: f32 = 0.15;

/// Default vertical parallax coefficient (pitch contribution to anchor shift)
pub const DEFAULT_K_PITCH_OFFSET: f32 = 0.15;

/// Default overlay width as a multiple of the face rectangle width
pub const DEFAULT_OVERLAY_SCALE: f32 = 1.8;

/// Lower clamp for the cosine divisor in foreshortening correction.
///
/// 0.1 corresponds to acos(0.1) ≈ 84.26°, bounding the size multiplier at 10x.
pub const DEFAULT_MIN_COS_FACTOR: f32 = 0.1;

/// Default marker radius in pixels for debug visualization
pub const DEFAULT_MARKER_RADIUS: f32 = 10.0;
