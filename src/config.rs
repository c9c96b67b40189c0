//! Configuration management for overlay alignment
//!
//! The tuning coefficients here are empirical visual constants, not derived
//! quantities; treat them as knobs, not truths.

use crate::constants::{
    DEFAULT_K_PITCH_OFFSET, DEFAULT_K_YAW_OFFSET, DEFAULT_MARKER_RADIUS, DEFAULT_MIN_COS_FACTOR,
    DEFAULT_OVERLAY_SCALE,
};
use crate::placement::AnchorMode;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overlay placement parameters
    pub placement: PlacementConfig,

    /// Foreshortening correction parameters
    pub sizing: SizingConfig,

    /// Debug marker parameters
    pub markers: MarkerConfig,
}

/// Overlay placement parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Horizontal parallax coefficient: anchor shift per radian of yaw,
    /// as a fraction of face width
    pub k_yaw_offset: f32,

    /// Vertical parallax coefficient: anchor shift per radian of pitch,
    /// as a fraction of face height
    pub k_pitch_offset: f32,

    /// Overlay width as a multiple of the face rectangle width
    pub scale_relative_to_face: f32,

    /// How the overlay is anchored to the corrected face center
    pub anchor_mode: AnchorMode,
}

/// Foreshortening correction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Lower clamp for the cosine divisor (bounds the size multiplier at
    /// 1 / min_cos_factor)
    pub min_cos_factor: f32,
}

/// Debug marker parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Draw marker points into composited output
    pub enabled: bool,

    /// Marker radius in pixels
    pub radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placement: PlacementConfig::default(),
            sizing: SizingConfig::default(),
            markers: MarkerConfig::default(),
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            k_yaw_offset: DEFAULT_K_YAW_OFFSET,
            k_pitch_offset: DEFAULT_K_PITCH_OFFSET,
            scale_relative_to_face: DEFAULT_OVERLAY_SCALE,
            anchor_mode: AnchorMode::EffectivePixelCenter,
        }
    }
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            min_cos_factor: DEFAULT_MIN_COS_FACTOR,
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: DEFAULT_MARKER_RADIUS,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.sizing.min_cos_factor) || self.sizing.min_cos_factor == 0.0 {
            return Err(Error::ConfigError(
                "min_cos_factor must be in (0.0, 1.0]".to_string(),
            ));
        }
        if self.placement.scale_relative_to_face <= 0.0 {
            return Err(Error::ConfigError(
                "scale_relative_to_face must be greater than 0".to_string(),
            ));
        }
        if !self.placement.k_yaw_offset.is_finite() || !self.placement.k_pitch_offset.is_finite() {
            return Err(Error::ConfigError(
                "Parallax coefficients must be finite".to_string(),
            ));
        }
        if self.markers.radius < 0.0 {
            return Err(Error::ConfigError("Marker radius must not be negative".to_string()));
        }
        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face overlay alignment configuration

# Overlay placement
placement:
  k_yaw_offset: 0.15
  k_pitch_offset: 0.15
  scale_relative_to_face: 1.8
  anchor_mode: effective_pixel_center

# Foreshortening correction
sizing:
  min_cos_factor: 0.1

# Debug markers
markers:
  enabled: true
  radius: 10.0
"#;
