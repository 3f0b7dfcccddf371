//! Calibration applier
//!
//! Maps a calibration record onto a camera: projection parameters from the
//! FOV and image size, and the world matrix straight from the record's
//! camera transform.

use glam::DMat4;
use mmdcam_shared::{CalibrationRecord, ConvertError, MatrixKind};

use crate::camera::SceneCamera;
use crate::options::ApplyOptions;

/// Apply `record` to `camera`.
///
/// Both transforms of the record are validated before the camera is touched,
/// so on error the camera is left unchanged. A zero image height is not an
/// error; the resulting non-finite aspect is assigned as-is.
///
/// Side effects on the camera, in order:
/// 1. fov, aspect, near and far are set and the projection matrix recomputed
/// 2. the camera transform (transposed to column-major) becomes the world matrix
/// 3. automatic matrix recomposition is disabled
/// 4. the world matrix is decomposed into position/rotation/scale
/// 5. local and world matrices are refreshed from that decomposition
pub fn apply_calibration<C: SceneCamera + ?Sized>(
    camera: &mut C,
    record: &CalibrationRecord,
    options: &ApplyOptions,
) -> Result<(), ConvertError> {
    let world = record
        .camera_transform
        .to_column_major(MatrixKind::CameraTransform)?;
    record.view_transform.validate(MatrixKind::ViewTransform)?;

    let fov = record.vertical_fov_degrees();
    let aspect = record.aspect_ratio();
    if !aspect.is_finite() {
        tracing::warn!(
            "Calibration image is {}x{}, camera aspect is {}",
            record.image_width,
            record.image_height,
            aspect
        );
    }

    camera.set_fov(fov);
    camera.set_aspect(aspect);
    camera.set_near(options.near);
    camera.set_far(options.far);
    camera.update_projection_matrix();

    camera.set_matrix_world(DMat4::from_cols_array(&world));
    camera.set_matrix_auto_update(false);
    camera.decompose_matrix_world();
    camera.update_matrix();
    camera.update_matrix_world();

    tracing::debug!(
        "Applied calibration: fov {:.3}, aspect {:.4}, clip {}..{}",
        fov,
        aspect,
        options.near,
        options.far
    );

    Ok(())
}
