use glam::{Mat4, Vec3};
use thiserror::Error;

/// Inputs too degenerate to build a usable transform from.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    #[error("invalid matrix input: {0}")]
    InvalidInput(&'static str),
}

const DEGENERATE_EPSILON: f32 = 1e-8;

/// Identity transform, used as the cube's model matrix.
pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Right-handed view matrix looking from `eye` toward `target`.
///
/// Fails fast on degenerate input rather than silently producing a zero or
/// NaN-filled matrix: coincident eye/target, a zero-length up vector, or an
/// up vector parallel to the view direction are all rejected.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Mat4, MatrixError> {
    let forward = target - eye;
    if forward.length_squared() < DEGENERATE_EPSILON {
        return Err(MatrixError::InvalidInput("eye and target coincide"));
    }
    if up.length_squared() < DEGENERATE_EPSILON {
        return Err(MatrixError::InvalidInput("up vector has zero length"));
    }
    if forward.normalize().cross(up.normalize()).length_squared() < DEGENERATE_EPSILON {
        return Err(MatrixError::InvalidInput(
            "up vector is parallel to the view direction",
        ));
    }
    Ok(Mat4::look_at_rh(eye, target, up))
}

/// Right-handed perspective projection with wgpu's 0..1 clip depth.
///
/// `fov_y_degrees` is the vertical field of view in degrees. Depth
/// coefficients follow the standard mapping:
/// `m[2][2] = far / (near - far)`, `m[3][2] = near * far / (near - far)`.
pub fn perspective(
    fov_y_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
) -> Result<Mat4, MatrixError> {
    if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
        return Err(MatrixError::InvalidInput(
            "vertical field of view must be in (0, 180) degrees",
        ));
    }
    if !(aspect > 0.0) {
        return Err(MatrixError::InvalidInput("aspect ratio must be positive"));
    }
    if !(near > 0.0) {
        return Err(MatrixError::InvalidInput("near plane must be positive"));
    }
    if !(near < far) {
        return Err(MatrixError::InvalidInput(
            "near plane must be closer than far plane",
        ));
    }
    Ok(Mat4::perspective_rh(
        fov_y_degrees.to_radians(),
        aspect,
        near,
        far,
    ))
}
