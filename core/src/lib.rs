//! mmdcam core - calibrated camera to VMD camera motion
//!
//! Turns the output of a perspective-matching calibration tool into a camera
//! keyframe for MikuMikuDance-compatible animation tools.
//!
//! # Architecture
//!
//! - [`SceneCamera`] - contract for the camera being driven, with
//!   [`PerspectiveCamera`] as the glam-based implementation
//! - [`apply_calibration`] - calibration record -> camera state
//! - [`derive_camera_frame`] - camera state -> VMD camera keyframe
//! - [`CameraConverter`] - holds a camera and the last calibration and runs
//!   both stages, encoding frames with [`vmd_common`]
//!
//! Libraries here only emit `tracing` events; installing a subscriber is up
//! to the caller.

pub mod calibration;
pub mod camera;
pub mod converter;
pub mod motion;
pub mod options;

pub use calibration::apply_calibration;
pub use camera::{DEFAULT_CAMERA_FOV, PerspectiveCamera, SceneCamera};
pub use converter::CameraConverter;
pub use motion::{derive_camera_frame, motion_distance, motion_rotation};
pub use options::{ApplyOptions, ConverterOptions, ExportOptions};

// Re-export the data contracts so callers need a single dependency
pub use mmdcam_shared::{
    AxisLabel, CalibrationRecord, ConvertError, MatrixKind, Point2, RowMajorMatrix, ShapeDefect,
    error_codes,
};
pub use vmd_common::{CameraFrame, CameraMotion, create_default_camera_curve, encode_camera_frames};
