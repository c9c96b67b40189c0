//! Utility functions for pixel-space conversions.

pub mod safe_cast;
