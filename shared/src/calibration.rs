//! Calibration record produced by a perspective-matching tool.
//!
//! Field names follow the tool's JSON payload (camelCase), so an already
//! decoded payload deserializes straight into [`CalibrationRecord`].

use serde::{Deserialize, Serialize};

use crate::math::RowMajorMatrix;

/// 2D point in the tool's image-plane coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// World axis a vanishing point was matched against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisLabel {
    XPositive,
    XNegative,
    YPositive,
    YNegative,
    ZPositive,
    ZNegative,
}

/// Camera geometry computed by the calibration tool.
///
/// Only `vertical_field_of_view`, the image size and `camera_transform` drive
/// the camera. The remaining fields are carried so the record stays a
/// faithful copy of the source data; `horizontal_field_of_view` in particular
/// is derivable from the vertical FOV and aspect and is intentionally unused.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationRecord {
    pub principal_point: Point2,
    /// World-to-camera transform (row-major)
    pub view_transform: RowMajorMatrix,
    /// Camera-to-world transform (row-major)
    pub camera_transform: RowMajorMatrix,
    /// Radians
    pub horizontal_field_of_view: f64,
    /// Radians
    pub vertical_field_of_view: f64,
    pub vanishing_points: Vec<Point2>,
    pub vanishing_point_axes: Vec<AxisLabel>,
    pub relative_focal_length: f64,
    /// Pixels
    pub image_width: u32,
    /// Pixels
    pub image_height: u32,
}

impl Default for CalibrationRecord {
    fn default() -> Self {
        Self {
            principal_point: Point2::default(),
            view_transform: RowMajorMatrix::identity(),
            camera_transform: RowMajorMatrix::identity(),
            horizontal_field_of_view: std::f64::consts::FRAC_PI_2,
            vertical_field_of_view: std::f64::consts::FRAC_PI_2,
            vanishing_points: Vec::new(),
            vanishing_point_axes: Vec::new(),
            relative_focal_length: 1.0,
            image_width: 1,
            image_height: 1,
        }
    }
}

impl CalibrationRecord {
    /// Image aspect ratio (`width / height`).
    ///
    /// Not guarded against a zero height: the result is then infinite (or NaN
    /// for a 0x0 image) and is passed on unchanged.
    pub fn aspect_ratio(&self) -> f64 {
        self.image_width as f64 / self.image_height as f64
    }

    /// Vertical field of view in degrees
    pub fn vertical_fov_degrees(&self) -> f64 {
        self.vertical_field_of_view * 180.0 / std::f64::consts::PI
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "principalPoint": { "x": 0.0, "y": 0.0 },
        "viewTransform": { "rows": [[1,0,0,0],[0,1,0,0],[0,0,1,-10],[0,0,0,1]] },
        "cameraTransform": { "rows": [[1,0,0,0],[0,1,0,0],[0,0,1,10],[0,0,0,1]] },
        "horizontalFieldOfView": 2.0943951,
        "verticalFieldOfView": 1.5707963267948966,
        "vanishingPoints": [{ "x": 0.5, "y": 0.1 }, { "x": -0.7, "y": 0.2 }, { "x": 0.0, "y": -3.0 }],
        "vanishingPointAxes": ["xPositive", "zNegative", "yPositive"],
        "relativeFocalLength": 1.0,
        "imageWidth": 1920,
        "imageHeight": 1080
    }"#;

    #[test]
    fn test_deserialize_payload() {
        let record: CalibrationRecord = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(record.image_width, 1920);
        assert_eq!(record.image_height, 1080);
        assert_eq!(record.vanishing_points.len(), 3);
        assert_eq!(
            record.vanishing_point_axes,
            vec![
                AxisLabel::XPositive,
                AxisLabel::ZNegative,
                AxisLabel::YPositive
            ]
        );
        assert_eq!(record.camera_transform.rows[2][3], Some(10.0));
    }

    #[test]
    fn test_vertical_fov_degrees() {
        let record: CalibrationRecord = serde_json::from_str(PAYLOAD).unwrap();
        assert!((record.vertical_fov_degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_aspect_ratio() {
        let record: CalibrationRecord = serde_json::from_str(PAYLOAD).unwrap();
        assert!((record.aspect_ratio() - 1920.0 / 1080.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_height_aspect_is_not_finite() {
        let record = CalibrationRecord {
            image_width: 1920,
            image_height: 0,
            ..Default::default()
        };
        assert!(record.aspect_ratio().is_infinite());

        let empty = CalibrationRecord {
            image_width: 0,
            image_height: 0,
            ..Default::default()
        };
        assert!(empty.aspect_ratio().is_nan());
    }

    #[test]
    fn test_serialize_roundtrip_keeps_camel_case() {
        let record = CalibrationRecord::default();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"verticalFieldOfView\""));
        assert!(json.contains("\"cameraTransform\""));
        let back: CalibrationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
