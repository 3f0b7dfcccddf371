//! Error type for calibration conversion and export.

use std::fmt;

use crate::error_codes;

/// Which transform of a calibration record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    CameraTransform,
    ViewTransform,
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixKind::CameraTransform => write!(f, "camera transform"),
            MatrixKind::ViewTransform => write!(f, "view transform"),
        }
    }
}

/// How a transform failed the 4x4 shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeDefect {
    /// The matrix has this many rows instead of 4
    RowCount(usize),
    /// Row `row` has `len` columns instead of 4
    RowLength { row: usize, len: usize },
}

impl fmt::Display for ShapeDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeDefect::RowCount(rows) => write!(f, "expected 4 rows, got {}", rows),
            ShapeDefect::RowLength { row, len } => {
                write!(f, "expected 4 columns in row {}, got {}", row, len)
            }
        }
    }
}

/// Errors raised while applying a calibration or exporting camera motion.
///
/// Every variant is raised before any camera state is touched, so a failed
/// call leaves the converter exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error("No calibration applied; apply a calibration before exporting")]
    CalibrationNotApplied,

    #[error("Invalid {matrix} shape: {defect}")]
    InvalidTransformShape {
        matrix: MatrixKind,
        defect: ShapeDefect,
    },

    #[error("Invalid {matrix} value: element [{row}][{col}] is missing")]
    InvalidTransformValue {
        matrix: MatrixKind,
        row: usize,
        col: usize,
    },
}

impl ConvertError {
    /// Machine-checkable code, one of the constants in [`error_codes`].
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::CalibrationNotApplied => error_codes::CALIBRATION_NOT_APPLIED,
            ConvertError::InvalidTransformShape { .. } => error_codes::INVALID_TRANSFORM_SHAPE,
            ConvertError::InvalidTransformValue { .. } => error_codes::INVALID_TRANSFORM_VALUE,
        }
    }
}
