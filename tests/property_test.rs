//! Property-based tests for the alignment geometry

use face_overlay::face_rect::{compute_bounds, CoverFit, NormalizedLandmark, PixelRect};
use face_overlay::placement::{AnchorMode, OverlayPlacer};
use face_overlay::pose::EulerAngles;
use face_overlay::sizing::correct_size;
use proptest::prelude::*;

const MIN_COS_FACTOR: f32 = 0.1;

proptest! {
    #[test]
    fn prop_corrected_width_never_below_input(
        width in 1.0f32..4096.0,
        yaw in -std::f32::consts::PI..std::f32::consts::PI
    ) {
        let (corrected, _) = correct_size(width, 100.0, yaw, 0.0, MIN_COS_FACTOR);
        prop_assert!(corrected >= width - 1e-3);
    }

    #[test]
    fn prop_correction_monotone_in_yaw(
        width in 1.0f32..4096.0,
        yaw_deg in 0.0f32..89.0,
        delta_deg in 0.01f32..1.0
    ) {
        let (lower, _) = correct_size(width, 100.0, yaw_deg.to_radians(), 0.0, MIN_COS_FACTOR);
        let (higher, _) = correct_size(width, 100.0, (yaw_deg + delta_deg).to_radians(), 0.0, MIN_COS_FACTOR);
        prop_assert!(higher >= lower - 1e-3);
    }

    #[test]
    fn prop_correction_cap_is_exact(
        width in 1.0f32..4096.0,
        // Anything at or past acos(0.1) ≈ 84.26° hits the clamp
        yaw_deg in 85.0f32..180.0
    ) {
        let (corrected, _) = correct_size(width, 100.0, yaw_deg.to_radians(), 0.0, MIN_COS_FACTOR);
        prop_assert_eq!(corrected, width / MIN_COS_FACTOR);
    }

    #[test]
    fn prop_bounds_ordered_for_distinct_points(
        x0 in 0.0f32..0.45,
        y0 in 0.0f32..0.45,
        x1 in 0.55f32..1.0,
        y1 in 0.55f32..1.0
    ) {
        let fit = CoverFit::new(1280, 960, 1080, 1920).unwrap();
        let landmarks = [
            NormalizedLandmark::new(x0, y0),
            NormalizedLandmark::new(x1, y1),
        ];
        let rect = compute_bounds(&landmarks, &fit).unwrap();
        prop_assert!(rect.left < rect.right);
        prop_assert!(rect.top < rect.bottom);
    }

    #[test]
    fn prop_single_point_always_invalid(x in 0.0f32..1.0, y in 0.0f32..1.0) {
        let fit = CoverFit::new(1280, 960, 1080, 1920).unwrap();
        let landmarks = [NormalizedLandmark::new(x, y); 5];
        prop_assert!(compute_bounds(&landmarks, &fit).is_err());
    }

    #[test]
    fn prop_placement_deterministic(
        left in -500.0f32..500.0,
        top in -500.0f32..500.0,
        width in 1.0f32..1000.0,
        height in 1.0f32..1000.0,
        yaw in -1.5f32..1.5,
        pitch in -1.5f32..1.5,
        overlay_w in 1u32..2048,
        overlay_h in 1u32..2048
    ) {
        let placer = OverlayPlacer::new(0.15, 0.15, 1.8, AnchorMode::BoundingBoxCenter);
        let rect = PixelRect::new(left, top, left + width, top + height);
        let angles = EulerAngles { pitch, yaw, roll: 0.0 };

        let first = placer.place(&rect, &angles, (overlay_w, overlay_h), None).unwrap();
        let second = placer.place(&rect, &angles, (overlay_w, overlay_h), None).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_anchor_lands_on_corrected_center(
        width in 10.0f32..1000.0,
        height in 10.0f32..1000.0,
        yaw in -1.0f32..1.0,
        pitch in -1.0f32..1.0,
        anchor_x in 0.0f32..256.0,
        anchor_y in 0.0f32..256.0
    ) {
        let placer = OverlayPlacer::new(0.15, 0.15, 1.8, AnchorMode::EffectivePixelCenter);
        let rect = PixelRect::new(0.0, 0.0, width, height);
        let angles = EulerAngles { pitch, yaw, roll: 0.0 };

        let (_, markers) = placer
            .place(&rect, &angles, (256, 256), Some((anchor_x, anchor_y)))
            .unwrap();
        // Solving dest_left for the anchor must put the anchor exactly on the
        // corrected center, within float tolerance scaled to the magnitudes
        let tolerance = 1e-3 * (1.0 + width.abs() + height.abs());
        prop_assert!((markers.anchor_center.x - markers.corrected_center.x).abs() < tolerance);
        prop_assert!((markers.anchor_center.y - markers.corrected_center.y).abs() < tolerance);
    }
}
