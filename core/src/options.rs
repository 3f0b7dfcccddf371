//! Option structs for the converter and its two stages.
//!
//! All options are plain `Copy` values with serde support, so callers can
//! keep them in their own config files.

use serde::{Deserialize, Serialize};

/// Default distance base multiplier (calibration units to motion units)
pub const DEFAULT_DISTANCE_BASE_MULTIPLIER: f64 = 5.0;

/// Default near clipping plane applied with a calibration
pub const DEFAULT_NEAR: f64 = 0.01;

/// Default far clipping plane applied with a calibration
pub const DEFAULT_FAR: f64 = 2000.0;

/// Options fixed for the lifetime of a converter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConverterOptions {
    pub distance_base_multiplier: f64,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            distance_base_multiplier: DEFAULT_DISTANCE_BASE_MULTIPLIER,
        }
    }
}

/// Per-call options for applying a calibration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplyOptions {
    pub near: f64,
    pub far: f64,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

/// Per-call options for deriving a camera frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportOptions {
    /// Look-at position in world space
    pub target_position: [f64; 3],
    /// Scales the camera-to-target distance on top of the base multiplier
    pub distance_multiplier: f64,
    /// Frame index at 30 fps
    pub frame_time: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            target_position: [0.0; 3],
            distance_multiplier: 1.0,
            frame_time: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ConverterOptions::default().distance_base_multiplier, 5.0);
        let apply = ApplyOptions::default();
        assert_eq!(apply.near, 0.01);
        assert_eq!(apply.far, 2000.0);
        let export = ExportOptions::default();
        assert_eq!(export.target_position, [0.0; 3]);
        assert_eq!(export.distance_multiplier, 1.0);
        assert_eq!(export.frame_time, 0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let export: ExportOptions = serde_json::from_str(r#"{ "frameTime": 30 }"#).unwrap();
        assert_eq!(export.frame_time, 30);
        assert_eq!(export.distance_multiplier, 1.0);

        let apply: ApplyOptions = serde_json::from_str(r#"{ "far": 500.0 }"#).unwrap();
        assert_eq!(apply.near, 0.01);
        assert_eq!(apply.far, 500.0);
    }
}
