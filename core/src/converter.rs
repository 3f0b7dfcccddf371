//! Stateful calibration-to-motion converter

use mmdcam_shared::{CalibrationRecord, ConvertError};
use vmd_common::{CameraFrame, encode_camera_frames};

use crate::calibration::apply_calibration;
use crate::camera::SceneCamera;
use crate::motion::derive_camera_frame;
use crate::options::{ApplyOptions, ConverterOptions, ExportOptions};

/// Holds one camera and the most recently applied calibration.
///
/// `C` may be an owned camera or `&mut` to a camera owned elsewhere. Data
/// crossing the converter boundary is copied: the applied record is cloned
/// on the way in and on the way out, and options are plain values.
///
/// Exports always read the camera's *current* state, so changes made through
/// [`CameraConverter::camera_mut`] after a calibration show up in the next
/// export.
#[derive(Debug)]
pub struct CameraConverter<C: SceneCamera> {
    camera: C,
    options: ConverterOptions,
    calibration: Option<CalibrationRecord>,
}

impl<C: SceneCamera> CameraConverter<C> {
    /// Create a converter with default options
    pub fn new(camera: C) -> Self {
        Self::with_options(camera, ConverterOptions::default())
    }

    pub fn with_options(camera: C, options: ConverterOptions) -> Self {
        Self {
            camera,
            options,
            calibration: None,
        }
    }

    pub fn options(&self) -> ConverterOptions {
        self.options
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Copy of the last applied calibration
    pub fn calibration(&self) -> Option<CalibrationRecord> {
        self.calibration.clone()
    }

    pub fn has_calibration(&self) -> bool {
        self.calibration.is_some()
    }

    /// Apply `record` to the camera and keep a copy of it.
    ///
    /// On error neither the camera nor the held calibration change.
    pub fn apply_calibration(
        &mut self,
        record: &CalibrationRecord,
        options: &ApplyOptions,
    ) -> Result<(), ConvertError> {
        apply_calibration(&mut self.camera, record, options)?;
        self.calibration = Some(record.clone());
        Ok(())
    }

    /// Derive a keyframe from the current camera state
    pub fn derive_frame(&self, options: &ExportOptions) -> Result<CameraFrame, ConvertError> {
        if self.calibration.is_none() {
            return Err(ConvertError::CalibrationNotApplied);
        }
        Ok(derive_camera_frame(&self.camera, &self.options, options))
    }

    /// Export the current camera state as a single-frame motion file
    pub fn export(&self, options: &ExportOptions) -> Result<Vec<u8>, ConvertError> {
        self.export_sequence(std::slice::from_ref(options))
    }

    /// Export one frame per entry of `keys`, in the order given.
    ///
    /// Every frame is derived from the same current camera state; the entries
    /// only differ in frame time, target and distance multiplier.
    pub fn export_sequence(&self, keys: &[ExportOptions]) -> Result<Vec<u8>, ConvertError> {
        if self.calibration.is_none() {
            return Err(ConvertError::CalibrationNotApplied);
        }
        let frames: Vec<CameraFrame> = keys
            .iter()
            .map(|key| derive_camera_frame(&self.camera, &self.options, key))
            .collect();

        let bytes = encode_camera_frames(&frames);
        tracing::info!(
            "Encoded {} camera frame(s) into {} bytes",
            frames.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}
