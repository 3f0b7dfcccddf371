//! Matrix types for calibration transforms
//!
//! The calibration tool stores 4x4 transforms as nested rows (row-major).
//! Renderers consume flat 16-element arrays in column-major order, so every
//! transform crossing that boundary is transposed, never reinterpreted.

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, MatrixKind, ShapeDefect};

/// 4x4 transform as delivered by the calibration tool (row-major nested rows)
///
/// Elements are optional because the payload is untrusted: a `null` in the
/// source data is kept as `None` and rejected by [`RowMajorMatrix::validate`].
///
/// Memory layout of a valid matrix:
/// - rows[0]: [m00, m01, m02, tx]
/// - rows[1]: [m10, m11, m12, ty]
/// - rows[2]: [m20, m21, m22, tz]
/// - rows[3]: [0, 0, 0, 1]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RowMajorMatrix {
    pub rows: Vec<Vec<Option<f64>>>,
}

impl RowMajorMatrix {
    /// Identity transform
    pub fn identity() -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Create from fully populated rows
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.iter().copied().map(Some).collect())
                .collect(),
        }
    }

    /// Check the matrix is exactly 4x4 and fully populated.
    ///
    /// The shape of every row is checked before any element is read, so a
    /// malformed row is always reported as a shape error even when an earlier
    /// row also has missing elements.
    pub fn validate(&self, matrix: MatrixKind) -> Result<[[f64; 4]; 4], ConvertError> {
        if self.rows.len() != 4 {
            return Err(ConvertError::InvalidTransformShape {
                matrix,
                defect: ShapeDefect::RowCount(self.rows.len()),
            });
        }
        for (row, values) in self.rows.iter().enumerate() {
            if values.len() != 4 {
                return Err(ConvertError::InvalidTransformShape {
                    matrix,
                    defect: ShapeDefect::RowLength {
                        row,
                        len: values.len(),
                    },
                });
            }
        }

        let mut out = [[0.0; 4]; 4];
        for (row, values) in self.rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                out[row][col] =
                    value.ok_or(ConvertError::InvalidTransformValue { matrix, row, col })?;
            }
        }
        Ok(out)
    }

    /// Validate and convert to a column-major 16-element array
    pub fn to_column_major(&self, matrix: MatrixKind) -> Result<[f64; 16], ConvertError> {
        self.validate(matrix).map(|rows| rows_to_column_major(&rows))
    }
}

/// Transpose row-major rows into a column-major flat array.
///
/// `dst[col * 4 + row] = src[row][col]`
pub fn rows_to_column_major(src: &[[f64; 4]; 4]) -> [f64; 16] {
    let mut dst = [0.0; 16];
    for (row, values) in src.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            dst[col * 4 + row] = *value;
        }
    }
    dst
}

/// Inverse of [`rows_to_column_major`]
pub fn column_major_to_rows(src: &[f64; 16]) -> [[f64; 4]; 4] {
    let mut dst = [[0.0; 4]; 4];
    for (row, values) in dst.iter_mut().enumerate() {
        for (col, value) in values.iter_mut().enumerate() {
            *value = src[col * 4 + row];
        }
    }
    dst
}
