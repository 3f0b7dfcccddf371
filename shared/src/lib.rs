//! Shared types for the mmdcam camera exporter.
//!
//! Holds the plain data that crosses crate boundaries:
//! - [`CalibrationRecord`] - camera geometry produced by a perspective-matching tool
//! - [`RowMajorMatrix`] - the tool's 4x4 row-major transform, validated on use
//! - [`ConvertError`] - the single error type surfaced to callers

pub mod calibration;
pub mod error;
pub mod math;

pub use calibration::{AxisLabel, CalibrationRecord, Point2};
pub use error::{ConvertError, MatrixKind, ShapeDefect};
pub use math::{RowMajorMatrix, column_major_to_rows, rows_to_column_major};

/// Stable machine-readable codes for [`ConvertError`] variants.
pub mod error_codes {
    pub const CALIBRATION_NOT_APPLIED: &str = "CALIBRATION_NOT_APPLIED";
    pub const INVALID_TRANSFORM_SHAPE: &str = "INVALID_TRANSFORM_SHAPE";
    pub const INVALID_TRANSFORM_VALUE: &str = "INVALID_TRANSFORM_VALUE";
}
