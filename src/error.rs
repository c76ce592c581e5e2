//! Error types for sparse matrix operations.

use thiserror::Error;

/// Errors that can occur while accessing or combining sparse matrices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Row or column index at or beyond the declared dimensions.
    #[error("Index ({row}, {column}) out of range for {rows} × {columns} matrix")]
    OutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        column: usize,
        /// Number of rows in the matrix
        rows: usize,
        /// Number of columns in the matrix
        columns: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    #[error("Dimension mismatch in {operation}: {left:?} vs {right:?}")]
    DimensionMismatch {
        /// Name of the operation that failed
        operation: &'static str,
        /// Shape of the left operand
        left: (usize, usize),
        /// Shape of the right operand
        right: (usize, usize),
    },
}

impl MatrixError {
    /// Create an OutOfRange error.
    pub fn out_of_range(row: usize, column: usize, shape: (usize, usize)) -> Self {
        Self::OutOfRange {
            row,
            column,
            rows: shape.0,
            columns: shape.1,
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch {
            operation,
            left,
            right,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatrixError>;
