//! Matrix algebra on [`SparseMatrix`]
//!
//! Every operation builds a new matrix through the public get/set contract and
//! never touches chain internals. Operands are left untouched, and zero results
//! are never stored.

use num_traits::Num;
use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;

impl<T> SparseMatrix<T>
where
    T: Copy + Num,
{
    /// Multiplies every stored entry by `scalar`.
    ///
    /// Entries whose product is zero are omitted, so `m.scale(0)` is empty.
    pub fn scale(&self, scalar: T) -> Self {
        debug!(shape = ?self.shape(), "scalar multiply");
        let (rows, columns) = self.shape();
        let mut result = Self::new(rows, columns);

        for (row, column, value) in self.iter() {
            // Indices come from a matrix of the same shape
            let _ = result.set(row, column, value * scalar);
        }
        result
    }

    /// Computes `self × other` with the dense triple loop over logical indices.
    ///
    /// Fails with a dimension mismatch unless `self.columns() == other.rows()`.
    /// Zero sums are not stored in the result.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.columns() != other.rows() {
            debug!(left = ?self.shape(), right = ?other.shape(), "multiply dimension mismatch");
            return Err(MatrixError::dimension_mismatch(
                "multiply",
                self.shape(),
                other.shape(),
            ));
        }
        debug!(left = ?self.shape(), right = ?other.shape(), "matrix multiply");

        let mut result = Self::new(self.rows(), other.columns());

        for i in 0..self.rows() {
            for j in 0..other.columns() {
                let mut sum = T::zero();
                for k in 0..self.columns() {
                    sum = sum + self.get(i, k)? * other.get(k, j)?;
                }

                if !sum.is_zero() {
                    result.set(i, j, sum)?;
                }
            }
        }

        Ok(result)
    }

    /// Computes `self + other` entrywise. Shapes must match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, "add", |a, b| a + b)
    }

    /// Computes `self - other` entrywise. Shapes must match.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.combine(other, "subtract", |a, b| a - b)
    }

    fn combine<F>(&self, other: &Self, operation: &'static str, op: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape() != other.shape() {
            debug!(left = ?self.shape(), right = ?other.shape(), operation, "dimension mismatch");
            return Err(MatrixError::dimension_mismatch(
                operation,
                self.shape(),
                other.shape(),
            ));
        }
        debug!(shape = ?self.shape(), operation, "entrywise combine");

        let (rows, columns) = self.shape();
        let mut result = Self::new(rows, columns);

        for i in 0..rows {
            for j in 0..columns {
                let value = op(self.get(i, j)?, other.get(i, j)?);
                if !value.is_zero() {
                    result.set(i, j, value)?;
                }
            }
        }

        Ok(result)
    }

    /// Returns the transpose: a `columns × rows` matrix with `result(j, i) = self(i, j)`.
    pub fn transpose(&self) -> Self {
        debug!(shape = ?self.shape(), "transpose");
        let mut result = Self::new(self.columns(), self.rows());

        for (row, column, value) in self.iter() {
            // Swapped indices are in range for the swapped shape
            let _ = result.set(column, row, value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SparseMatrix<i32> {
        // M = [1 2; 3 4]
        SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)])
            .unwrap()
    }

    #[test]
    fn test_add_self() {
        let m = sample();
        let sum = m.add(&m).unwrap();

        assert_eq!(sum.get(0, 0), Ok(2));
        assert_eq!(sum.get(0, 1), Ok(4));
        assert_eq!(sum.get(1, 0), Ok(6));
        assert_eq!(sum.get(1, 1), Ok(8));
        assert_eq!(sum.nnz(), 4);
        sum.lattice().assert_consistent();
    }

    #[test]
    fn test_subtract_self_is_empty() {
        let m = sample();
        let diff = m.subtract(&m).unwrap();

        assert_eq!(diff.shape(), (2, 2));
        assert!(diff.is_empty());
        assert_eq!(diff.lattice().allocated(), 0);
    }

    #[test]
    fn test_scale_by_zero_is_empty() {
        let m = sample();
        let zero = m.scale(0);

        assert_eq!(zero.nnz(), 0);
        for r in 0..2 {
            for c in 0..2 {
                assert_eq!(zero.get(r, c), Ok(0));
            }
        }
    }

    #[test]
    fn test_scale() {
        let scaled = sample().scale(-3);
        assert_eq!(scaled.get(1, 1), Ok(-12));
        assert_eq!(scaled.get(0, 1), Ok(-6));
        assert_eq!(scaled.nnz(), 4);
    }

    #[test]
    fn test_multiply() {
        // A = [1 2; 0 3]
        // B = [4 5; 6 7]
        // Expected result: C = A*B = [16 19; 18 21]
        let a = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1), (0, 1, 2), (1, 1, 3)]).unwrap();
        let b = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 4), (0, 1, 5), (1, 0, 6), (1, 1, 7)])
            .unwrap();

        let c = a.multiply(&b).unwrap();

        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.get(0, 0), Ok(16));
        assert_eq!(c.get(0, 1), Ok(19));
        assert_eq!(c.get(1, 0), Ok(18));
        assert_eq!(c.get(1, 1), Ok(21));
        c.lattice().assert_consistent();
    }

    #[test]
    fn test_multiply_rectangular() {
        // A is 2×3, B is 3×1
        let a = SparseMatrix::from_triplets(2, 3, vec![(0, 0, 1), (0, 2, 2), (1, 1, 5)]).unwrap();
        let b = SparseMatrix::from_triplets(3, 1, vec![(0, 0, 3), (2, 0, 4)]).unwrap();

        let c = a.multiply(&b).unwrap();

        assert_eq!(c.shape(), (2, 1));
        assert_eq!(c.get(0, 0), Ok(11));
        assert_eq!(c.get(1, 0), Ok(0));
        assert_eq!(c.nnz(), 1);
    }

    #[test]
    fn test_multiply_cancelling_sum_is_not_stored() {
        // [1 1] × [1; -1] = [0]
        let a = SparseMatrix::from_triplets(1, 2, vec![(0, 0, 1), (0, 1, 1)]).unwrap();
        let b = SparseMatrix::from_triplets(2, 1, vec![(0, 0, 1), (1, 0, -1)]).unwrap();

        let c = a.multiply(&b).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = SparseMatrix::<i32>::new(2, 3);
        let b = SparseMatrix::<i32>::new(2, 3);

        assert_eq!(
            a.multiply(&b).err(),
            Some(MatrixError::DimensionMismatch {
                operation: "multiply",
                left: (2, 3),
                right: (2, 3),
            })
        );
    }

    #[test]
    fn test_add_subtract_dimension_mismatch() {
        let a = SparseMatrix::<i32>::new(2, 2);
        let b = SparseMatrix::<i32>::new(2, 3);

        assert!(matches!(
            a.add(&b),
            Err(MatrixError::DimensionMismatch { operation: "add", .. })
        ));
        assert!(matches!(
            a.subtract(&b),
            Err(MatrixError::DimensionMismatch { operation: "subtract", .. })
        ));
    }

    #[test]
    fn test_transpose_swaps_shape() {
        let m = SparseMatrix::from_triplets(2, 3, vec![(0, 2, 7), (1, 0, 4)]).unwrap();
        let t = m.transpose();

        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(2, 0), Ok(7));
        assert_eq!(t.get(0, 1), Ok(4));
        assert_eq!(t.nnz(), 2);
        t.lattice().assert_consistent();
    }

    #[test]
    fn test_operands_are_untouched() {
        let m = sample();
        let before = m.clone();

        let _ = m.add(&m).unwrap();
        let _ = m.multiply(&m).unwrap();
        let _ = m.scale(5);
        let _ = m.transpose();

        assert_eq!(m, before);
    }
}
