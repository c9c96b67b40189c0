//! Offline demo application for overlay alignment.
//!
//! Loads a sequence of detection results from a JSON fixture, aligns an
//! overlay image against each admitted frame, and optionally composites the
//! overlay (plus debug markers) into a base image. This is scaffolding over
//! the geometry core; the live camera, detector, and renderer stay outside
//! this crate.

use crate::config::Config;
use crate::face_rect::PixelPoint;
use crate::frame::{DetectionResult, FaceAlignment, FrameAligner, FrameGate};
use crate::utils::safe_cast::{f32_to_i32_clamp, f32_to_u32_clamp};
use crate::{Error, Result};
use image::{imageops, imageops::FilterType, Rgba, RgbaImage};
use log::{info, warn};
use std::path::PathBuf;

/// Largest dimension accepted when rasterizing a placement
const MAX_RASTER_DIM: u32 = 16384;

const MARKER_FACE_CENTER: Rgba<u8> = Rgba([255, 0, 0, 255]);
const MARKER_CORRECTED_CENTER: Rgba<u8> = Rgba([255, 255, 0, 255]);
const MARKER_ANCHOR: Rgba<u8> = Rgba([0, 255, 0, 255]);
const MARKER_DEST_CENTER: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// Demo application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON fixture with a sequence of detection results
    pub result_path: PathBuf,
    /// RGBA overlay image (the rendered model)
    pub overlay_path: Option<PathBuf>,
    /// Base image to composite onto
    pub base_image_path: Option<PathBuf>,
    /// Where to write the composited image
    pub output_path: Option<PathBuf>,
    /// Destination surface width when no base image is given
    pub surface_width: u32,
    /// Destination surface height when no base image is given
    pub surface_height: u32,
    /// Alignment tuning
    pub alignment: Config,
}

/// Offline overlay alignment application
pub struct OverlayApp {
    config: AppConfig,
    aligner: FrameAligner,
    gate: FrameGate,
}

impl OverlayApp {
    /// Create the application, validating the alignment configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        config.alignment.validate()?;
        let aligner = FrameAligner::new(&config.alignment);
        Ok(Self {
            config,
            aligner,
            gate: FrameGate::new(),
        })
    }

    /// Process all frames in the fixture and write the composite, if requested
    pub fn run(&mut self) -> Result<()> {
        info!("Loading detection results from {}", self.config.result_path.display());
        let content = std::fs::read_to_string(&self.config.result_path)?;
        let frames: Vec<DetectionResult> = serde_json::from_str(&content)?;
        info!("Loaded {} frames", frames.len());

        let overlay = match &self.config.overlay_path {
            Some(path) => {
                info!("Loading overlay image from {}", path.display());
                Some(image::open(path)?.to_rgba8())
            }
            None => None,
        };

        let mut base = match &self.config.base_image_path {
            Some(path) => {
                info!("Loading base image from {}", path.display());
                Some(image::open(path)?.to_rgba8())
            }
            None => None,
        };

        // A provided base image defines the destination surface
        let (surface_width, surface_height) = match &base {
            Some(image) => image.dimensions(),
            None => (self.config.surface_width, self.config.surface_height),
        };
        info!("Destination surface: {}x{}", surface_width, surface_height);

        let mut last_alignments: Vec<FaceAlignment> = Vec::new();
        for frame in &frames {
            if !self.gate.admit(frame.timestamp_ms) {
                continue;
            }
            let alignments =
                self.aligner
                    .align_frame(frame, overlay.as_ref(), surface_width, surface_height)?;
            for alignment in &alignments {
                log_alignment(frame.timestamp_ms, alignment);
            }
            last_alignments = alignments;
        }

        if let (Some(base_image), Some(output_path)) = (base.as_mut(), &self.config.output_path) {
            let Some(overlay_image) = overlay.as_ref() else {
                return Err(Error::NoOverlayData(
                    "Cannot composite without an overlay image".to_string(),
                ));
            };
            for alignment in &last_alignments {
                composite_alignment(base_image, overlay_image, alignment, &self.config.alignment);
            }
            info!("Writing composite to {}", output_path.display());
            base_image.save(output_path)?;
        }

        Ok(())
    }
}

fn log_alignment(timestamp_ms: i64, alignment: &FaceAlignment) {
    info!(
        "frame {} face {}: rect {:.0}x{:.0}, pitch {:.1}°, yaw {:.1}°, roll {:.1}°",
        timestamp_ms,
        alignment.face_index,
        alignment.face_rect.width(),
        alignment.face_rect.height(),
        alignment.angles.pitch.to_degrees(),
        alignment.angles.yaw.to_degrees(),
        alignment.angles.roll.to_degrees(),
    );
    match &alignment.placement {
        Some((placement, _)) => info!(
            "  overlay dest: ({:.1}, {:.1}) {:.1}x{:.1}",
            placement.dest_left, placement.dest_top, placement.dest_width, placement.dest_height
        ),
        None => info!("  no overlay placement"),
    }
}

/// Blit one aligned overlay (and its markers) into the base image
pub fn composite_alignment(
    base: &mut RgbaImage,
    overlay: &RgbaImage,
    alignment: &FaceAlignment,
    config: &Config,
) {
    let Some((placement, markers)) = &alignment.placement else {
        warn!("Face {}: nothing to composite", alignment.face_index);
        return;
    };

    let dest_width = f32_to_u32_clamp(placement.dest_width.round(), 1, MAX_RASTER_DIM);
    let dest_height = f32_to_u32_clamp(placement.dest_height.round(), 1, MAX_RASTER_DIM);
    let resized = imageops::resize(overlay, dest_width, dest_height, FilterType::Triangle);

    let dest_left = i64::from(f32_to_i32_clamp(placement.dest_left, i32::MIN, i32::MAX));
    let dest_top = i64::from(f32_to_i32_clamp(placement.dest_top, i32::MIN, i32::MAX));
    imageops::overlay(base, &resized, dest_left, dest_top);

    if config.markers.enabled {
        let radius = config.markers.radius;
        draw_marker(base, &markers.face_center, radius, MARKER_FACE_CENTER);
        draw_marker(base, &markers.corrected_center, radius, MARKER_CORRECTED_CENTER);
        draw_marker(base, &markers.dest_center, radius, MARKER_DEST_CENTER);
        draw_marker(base, &markers.anchor_center, radius, MARKER_ANCHOR);
    }
}

/// Draw a filled circle, clipped to the image bounds
pub fn draw_marker(image: &mut RgbaImage, center: &PixelPoint, radius: f32, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || radius <= 0.0 {
        return;
    }

    let max_x = width as i32 - 1;
    let max_y = height as i32 - 1;
    let x0 = f32_to_i32_clamp(center.x - radius, 0, max_x);
    let x1 = f32_to_i32_clamp(center.x + radius, 0, max_x);
    let y0 = f32_to_i32_clamp(center.y - radius, 0, max_y);
    let y1 = f32_to_i32_clamp(center.y + radius, 0, max_y);

    let r2 = radius * radius;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 - center.x;
            let dy = y as f32 - center.y;
            if dx * dx + dy * dy <= r2 {
                image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face_rect::{NormalizedLandmark, PixelPoint};
    use crate::frame::DetectionResult;

    fn solid_overlay(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([0, 128, 255, 255]))
    }

    #[test]
    fn test_draw_marker_inside() {
        let mut image = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        draw_marker(&mut image, &PixelPoint::new(50.0, 50.0), 5.0, MARKER_ANCHOR);
        assert_eq!(*image.get_pixel(50, 50), MARKER_ANCHOR);
        assert_eq!(*image.get_pixel(50, 54), MARKER_ANCHOR);
        // Outside the circle
        assert_eq!(*image.get_pixel(60, 60), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_draw_marker_clipped_at_edge() {
        let mut image = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255]));
        // Centers off-canvas must not panic
        draw_marker(&mut image, &PixelPoint::new(-3.0, 10.0), 5.0, MARKER_ANCHOR);
        draw_marker(&mut image, &PixelPoint::new(25.0, 25.0), 5.0, MARKER_ANCHOR);
        assert_eq!(*image.get_pixel(0, 10), MARKER_ANCHOR);
    }

    #[test]
    fn test_composite_paints_overlay_pixels() {
        let config = Config::default();
        let aligner = FrameAligner::new(&config);
        let result = DetectionResult {
            faces: vec![vec![
                NormalizedLandmark::new(0.4, 0.4),
                NormalizedLandmark::new(0.6, 0.6),
            ]],
            transforms: None,
            image_width: 200,
            image_height: 200,
            timestamp_ms: 0,
        };
        let overlay = solid_overlay(50, 50);
        let alignments = aligner.align_frame(&result, Some(&overlay), 200, 200).unwrap();

        let mut base = RgbaImage::from_pixel(200, 200, Rgba([10, 10, 10, 255]));
        composite_alignment(&mut base, &overlay, &alignments[0], &config);

        // The overlay is centered on the face at (100, 100); with markers on,
        // that exact pixel holds a marker color, so probe just outside the
        // marker radius but well within the blitted region.
        let probe = *base.get_pixel(100 + 15, 100);
        assert_eq!(probe, Rgba([0, 128, 255, 255]));
    }

    #[test]
    fn test_composite_skips_missing_placement() {
        let config = Config::default();
        let aligner = FrameAligner::new(&config);
        let result = DetectionResult {
            faces: vec![vec![
                NormalizedLandmark::new(0.4, 0.4),
                NormalizedLandmark::new(0.6, 0.6),
            ]],
            transforms: None,
            image_width: 200,
            image_height: 200,
            timestamp_ms: 0,
        };
        let overlay = solid_overlay(50, 50);
        // Aligned without an overlay: no placement exists
        let alignments = aligner.align_frame(&result, None, 200, 200).unwrap();

        let mut base = RgbaImage::from_pixel(200, 200, Rgba([10, 10, 10, 255]));
        composite_alignment(&mut base, &overlay, &alignments[0], &config);
        assert_eq!(*base.get_pixel(100, 100), Rgba([10, 10, 10, 255]));
    }
}
