//! Euler angle and translation extraction from facial transformation matrices.
//!
//! The landmark detector reports head pose as a row-major 4x4 homogeneous
//! transform: rotation in the upper-left 3x3 block, translation in the last
//! column of the first three rows. Angles follow a YXZ rotation convention.

use crate::{constants::MATRIX_ELEMENTS, Error, Result};

/// Head orientation in radians
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EulerAngles {
    /// Rotation about the X axis (nodding)
    pub pitch: f32,
    /// Rotation about the Y axis (turning left/right)
    pub yaw: f32,
    /// Rotation about the Z axis (tilting)
    pub roll: f32,
}

/// Head translation in the detector's metric space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

fn validate_matrix(matrix: &[f32]) -> Result<()> {
    if matrix.len() != MATRIX_ELEMENTS {
        return Err(Error::InvalidInput(format!(
            "Expected {} matrix elements, got {}",
            MATRIX_ELEMENTS,
            matrix.len()
        )));
    }
    Ok(())
}

/// Extract Euler angles from a row-major 4x4 transformation matrix.
///
/// With Rij the rotation element at row i, column j:
/// pitch = asin(-R12), yaw = atan2(R02, R22), roll = atan2(R10, R11).
///
/// Near pitch = ±90° yaw and roll become numerically coupled (gimbal lock);
/// reduced accuracy in that regime is accepted rather than reported as an
/// error.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if the slice does not contain exactly
/// 16 elements.
pub fn extract_euler_angles(matrix: &[f32]) -> Result<EulerAngles> {
    validate_matrix(matrix)?;

    let r02 = matrix[2];
    let r10 = matrix[4];
    let r11 = matrix[5];
    let r12 = matrix[6];
    let r22 = matrix[10];

    let pitch = (-r12).asin();
    let yaw = r02.atan2(r22);
    let roll = r10.atan2(r11);

    log::trace!(
        "Extracted pose: pitch={:.2}°, yaw={:.2}°, roll={:.2}°",
        pitch.to_degrees(),
        yaw.to_degrees(),
        roll.to_degrees()
    );

    Ok(EulerAngles { pitch, yaw, roll })
}

/// Extract the translation vector from a row-major 4x4 transformation matrix.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if the slice does not contain exactly
/// 16 elements.
pub fn extract_translation(matrix: &[f32]) -> Result<Translation> {
    validate_matrix(matrix)?;

    Ok(Translation {
        x: matrix[12],
        y: matrix[13],
        z: matrix[14],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];

    /// Row-major matrix for a pure yaw rotation of `theta` radians
    fn yaw_matrix(theta: f32) -> [f32; 16] {
        let (s, c) = theta.sin_cos();
        [
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]
    }

    fn pitch_matrix(theta: f32) -> [f32; 16] {
        let (s, c) = theta.sin_cos();
        [
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]
    }

    #[test]
    fn test_identity_angles() {
        let angles = extract_euler_angles(&IDENTITY).unwrap();
        assert!(angles.pitch.abs() < 1e-6);
        assert!(angles.yaw.abs() < 1e-6);
        assert!(angles.roll.abs() < 1e-6);
    }

    #[test]
    fn test_identity_translation() {
        let t = extract_translation(&IDENTITY).unwrap();
        assert_eq!(t, Translation::default());
    }

    #[test]
    fn test_pure_yaw_rotation() {
        for deg in [-80.0f32, -45.0, -10.0, 10.0, 45.0, 80.0] {
            let theta = deg.to_radians();
            let angles = extract_euler_angles(&yaw_matrix(theta)).unwrap();
            assert!(
                (angles.yaw - theta).abs() < 1e-5,
                "yaw {deg}°: got {}",
                angles.yaw.to_degrees()
            );
            assert!(angles.pitch.abs() < 1e-5);
            assert!(angles.roll.abs() < 1e-5);
        }
    }

    #[test]
    fn test_pure_pitch_rotation() {
        for deg in [-60.0f32, -20.0, 20.0, 60.0] {
            let theta = deg.to_radians();
            let angles = extract_euler_angles(&pitch_matrix(theta)).unwrap();
            assert!(
                (angles.pitch - theta).abs() < 1e-5,
                "pitch {deg}°: got {}",
                angles.pitch.to_degrees()
            );
            assert!(angles.yaw.abs() < 1e-5);
            assert!(angles.roll.abs() < 1e-5);
        }
    }

    #[test]
    fn test_translation_column() {
        let mut matrix = IDENTITY;
        matrix[12] = 0.5;
        matrix[13] = -0.25;
        matrix[14] = 30.0;
        let t = extract_translation(&matrix).unwrap();
        assert_eq!(t.x, 0.5);
        assert_eq!(t.y, -0.25);
        assert_eq!(t.z, 30.0);
    }

    #[test]
    fn test_wrong_element_count() {
        assert!(extract_euler_angles(&[0.0; 9]).is_err());
        assert!(extract_euler_angles(&[0.0; 17]).is_err());
        assert!(extract_euler_angles(&[]).is_err());
        assert!(extract_translation(&[0.0; 12]).is_err());
    }

    #[test]
    fn test_gimbal_lock_does_not_error() {
        // Pitch at exactly 90°: yaw/roll are ill-conditioned but the call
        // must still succeed with finite values.
        let angles = extract_euler_angles(&pitch_matrix(std::f32::consts::FRAC_PI_2)).unwrap();
        assert!((angles.pitch - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
        assert!(angles.yaw.is_finite());
        assert!(angles.roll.is_finite());
    }
}
