//! Sparse matrix over an orthogonal linked structure
//!
//! The matrix owns a header lattice and exposes bounds-checked element access.
//! Everything else in the crate (copying, arithmetic, dense views) goes through
//! [`SparseMatrix::get`] and [`SparseMatrix::set`] or the read-only chain iterators.

use std::fmt;

use num_traits::Num;
use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::lattice::{ColumnChain, HeaderLattice, RowChain};

/// A sparse matrix storing only non-zero entries
///
/// Each stored entry is a single node linked into its row chain (ascending column)
/// and its column chain (ascending row). Writing zero removes the node from both chains;
/// writing a non-zero value to an empty position creates it in both.
///
/// Concurrent mutation is not supported: `set` takes `&mut self`, so sharing across
/// threads needs an external lock around the matrix.
pub struct SparseMatrix<T> {
    lattice: HeaderLattice<T>,
}

impl<T> SparseMatrix<T>
where
    T: Copy + Num,
{
    /// Creates an empty matrix with the given dimensions
    pub fn new(rows: usize, columns: usize) -> Self {
        debug!(rows, columns, "constructing sparse matrix");
        Self {
            lattice: HeaderLattice::new(rows, columns),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.lattice.insert(i, i, T::one());
        }
        matrix
    }

    /// Builds a matrix from `(row, column, value)` triplets.
    ///
    /// Triplets are applied in order with [`set`](Self::set) semantics: later writes to the
    /// same position win and zero values clear the position.
    pub fn from_triplets<I>(rows: usize, columns: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, columns);
        for (row, column, value) in triplets {
            matrix.set(row, column, value)?;
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.lattice.shape().0
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.lattice.shape().1
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.lattice.shape()
    }

    /// Returns the number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.lattice.len()
    }

    /// True when no entry is stored
    pub fn is_empty(&self) -> bool {
        self.lattice.is_empty()
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<()> {
        let (rows, columns) = self.shape();
        if row >= rows || column >= columns {
            debug!(row, column, rows, columns, "index out of range");
            return Err(MatrixError::out_of_range(row, column, (rows, columns)));
        }
        Ok(())
    }

    /// Reads the value at (row, column), or zero if nothing is stored there
    pub fn get(&self, row: usize, column: usize) -> Result<T> {
        self.check_bounds(row, column)?;

        Ok(self
            .lattice
            .find(row, column)
            .map_or_else(T::zero, |id| self.lattice.node(id).value()))
    }

    /// Writes `value` at (row, column).
    ///
    /// | stored? | zero? | effect                                   |
    /// |---------|-------|------------------------------------------|
    /// | yes     | no    | value updated in place                   |
    /// | yes     | yes   | node unlinked from both chains and freed |
    /// | no      | no    | node created in both chains              |
    /// | no      | yes   | nothing                                  |
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        self.check_bounds(row, column)?;

        match self.lattice.find(row, column) {
            Some(id) if !value.is_zero() => *self.lattice.value_mut(id) = value,
            Some(_) => {
                self.lattice.remove(row, column);
            }
            None if !value.is_zero() => {
                self.lattice.insert(row, column, value);
            }
            None => {}
        }
        Ok(())
    }

    /// Replaces this matrix with a deep copy of `other`.
    ///
    /// The current lattice is dropped and a fresh one built at `other`'s dimensions.
    pub fn assign(&mut self, other: &Self) {
        debug!(
            from = ?self.shape(),
            to = ?other.shape(),
            "assigning sparse matrix"
        );
        *self = other.deep_copy();
    }

    fn deep_copy(&self) -> Self {
        let (rows, columns) = self.shape();
        let mut copy = Self::new(rows, columns);
        for (row, column, value) in self.iter() {
            copy.lattice.insert(row, column, value);
        }
        copy
    }

    /// Returns an iterator over the stored entries of row `row`
    ///
    /// Each item is a tuple (column, value), in ascending column order.
    pub fn row_iter(&self, row: usize) -> Result<impl Iterator<Item = (usize, T)> + '_> {
        if row >= self.rows() {
            return Err(MatrixError::out_of_range(row, 0, self.shape()));
        }
        Ok(self.stored_row(row))
    }

    /// Row entries without the bounds check; `row` must be `< rows()`
    pub(crate) fn stored_row(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        RowEntries {
            chain: self.lattice.row_chain(row),
        }
    }

    /// Returns an iterator over the stored entries of column `column`
    ///
    /// Each item is a tuple (row, value), in ascending row order.
    pub fn col_iter(&self, column: usize) -> Result<impl Iterator<Item = (usize, T)> + '_> {
        if column >= self.columns() {
            return Err(MatrixError::out_of_range(0, column, self.shape()));
        }
        Ok(ColumnEntries {
            chain: self.lattice.column_chain(column),
        })
    }

    /// Iterates every stored entry as (row, column, value) in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.rows()).flat_map(move |r| {
            self.lattice
                .row_chain(r)
                .map(|node| (node.row(), node.column(), node.value()))
        })
    }

    #[cfg(test)]
    pub(crate) fn lattice(&self) -> &HeaderLattice<T> {
        &self.lattice
    }
}

struct RowEntries<'a, T> {
    chain: RowChain<'a, T>,
}

impl<'a, T: Copy> Iterator for RowEntries<'a, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.next().map(|node| (node.column(), node.value()))
    }
}

struct ColumnEntries<'a, T> {
    chain: ColumnChain<'a, T>,
}

impl<'a, T: Copy> Iterator for ColumnEntries<'a, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.next().map(|node| (node.row(), node.value()))
    }
}

impl<T: Copy + Num> Default for SparseMatrix<T> {
    /// An empty 0 × 0 matrix
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T: Copy + Num> Clone for SparseMatrix<T> {
    fn clone(&self) -> Self {
        self.deep_copy()
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T: Copy + Num> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self.nnz() == other.nnz()
            && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.rows(), self.columns())?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(self.rows());

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let stored = self.lattice.row_chain(i).count();

                if stored == 0 {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(stored);

                    for node in self.lattice.row_chain(i).take(max_elements) {
                        write!(f, "({}, {:?}) ", node.column(), node.value())?;
                    }

                    if stored > max_elements {
                        write!(f, "... ({} more)", stored - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.rows() > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.rows() - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
