//! Camera frame derivation
//!
//! Reads the camera's current world transform and FOV and expresses them as
//! a VMD camera keyframe: signed distance to a target, Y-X-Z Euler angles in
//! the format's left-handed convention, and a whole-degree view angle.

use glam::{DQuat, DVec3, EulerRot};
use vmd_common::{CameraFrame, create_default_camera_curve};

use crate::camera::SceneCamera;
use crate::options::{ConverterOptions, ExportOptions};

/// Euler angles `[x, y, z]` of `rotation` in the motion format's convention.
///
/// Decomposed in Y-X-Z order. The format is left-handed, which only flips
/// the sign of the Z angle; X and Y are kept.
pub fn motion_rotation(rotation: DQuat) -> [f32; 3] {
    let (y, x, z) = rotation.to_euler(EulerRot::YXZ);
    [x as f32, y as f32, -z as f32]
}

/// Signed motion distance between `position` and `target`.
///
/// Negative so the camera sits in front of the target, looking toward it.
pub fn motion_distance(
    position: DVec3,
    target: DVec3,
    converter: &ConverterOptions,
    export: &ExportOptions,
) -> f32 {
    let distance = position.distance(target);
    -(distance * export.distance_multiplier * converter.distance_base_multiplier) as f32
}

/// Derive a keyframe from the camera's current state.
///
/// The curve is always the linear default and the frame is always a
/// perspective frame. The view angle is the FOV rounded to whole degrees;
/// a negative or NaN FOV saturates to 0.
pub fn derive_camera_frame<C: SceneCamera + ?Sized>(
    camera: &C,
    converter: &ConverterOptions,
    export: &ExportOptions,
) -> CameraFrame {
    let target = DVec3::from_array(export.target_position);
    let position = camera.world_position();

    let frame = CameraFrame {
        frame_time: export.frame_time,
        distance: motion_distance(position, target, converter, export),
        target: target.as_vec3().to_array(),
        rotation: motion_rotation(camera.world_quaternion()),
        curve: create_default_camera_curve(),
        view_angle: camera.fov().round() as u32,
        orthographic: false,
    };

    tracing::debug!(
        "Derived camera frame {}: distance {}, rotation {:?}, view angle {}",
        frame.frame_time,
        frame.distance,
        frame.rotation,
        frame.view_angle
    );

    frame
}
