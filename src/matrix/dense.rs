//! Dense views of a sparse matrix and the diagnostic dump

use std::fmt;

use ndarray::Array2;
use num_traits::Num;

use crate::matrix::config::DumpConfig;
use crate::matrix::SparseMatrix;

impl<T> SparseMatrix<T>
where
    T: Copy + Num,
{
    /// Converts to a dense `ndarray` matrix with zeros filled in
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::from_elem(self.shape(), T::zero());
        for (row, column, value) in self.iter() {
            dense[[row, column]] = value;
        }
        dense
    }

    /// Builds a sparse matrix from a dense one, skipping zeros
    pub fn from_dense(dense: &Array2<T>) -> Self {
        let (rows, columns) = dense.dim();
        let mut matrix = Self::new(rows, columns);
        for ((row, column), &value) in dense.indexed_iter() {
            // Indices come from an array of the same shape
            let _ = matrix.set(row, column, value);
        }
        matrix
    }
}

impl<T> SparseMatrix<T>
where
    T: Copy + Num + fmt::Display,
{
    /// Renders the dense view, one line of values per row
    pub fn dump(&self) -> String {
        self.dump_with(&DumpConfig::default())
    }

    /// Renders the dense view using `config`
    pub fn dump_with(&self, config: &DumpConfig) -> String {
        let (rows, columns) = self.shape();
        let shown_rows = config.max_rows.map_or(rows, |m| m.min(rows));
        let shown_cols = config.max_cols.map_or(columns, |m| m.min(columns));

        let mut out = String::new();
        for i in 0..shown_rows {
            let mut line: Vec<String> = Vec::with_capacity(shown_cols + 1);

            // Walk the row chain once instead of calling get per cell
            let mut stored = self.stored_row(i).peekable();
            for j in 0..shown_cols {
                let value = match stored.peek() {
                    Some(&(column, value)) if column == j => {
                        stored.next();
                        value
                    }
                    _ => T::zero(),
                };
                line.push(value.to_string());
            }

            if shown_cols < columns {
                line.push("...".to_string());
            }

            out.push_str(&line.join(config.separator.as_str()));
            out.push('\n');
        }

        if shown_rows < rows {
            out.push_str("...\n");
        }
        out
    }

    /// Prints [`dump`](Self::dump) to stdout
    pub fn print(&self) {
        print!("{}", self.dump());
    }
}

impl<T> fmt::Display for SparseMatrix<T>
where
    T: Copy + Num + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_to_dense() {
        let matrix = SparseMatrix::from_triplets(2, 3, vec![(0, 1, 2.0), (1, 2, 5.0)]).unwrap();
        let dense = matrix.to_dense();

        assert_eq!(dense, array![[0.0, 2.0, 0.0], [0.0, 0.0, 5.0]]);
    }

    #[test]
    fn test_from_dense_skips_zeros() {
        let dense = array![[1, 0], [0, 0], [0, 7]];
        let matrix = SparseMatrix::from_dense(&dense);

        assert_eq!(matrix.shape(), (3, 2));
        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.get(2, 1), Ok(7));
        assert_eq!(matrix.to_dense(), dense);
        matrix.lattice().assert_consistent();
    }

    #[test]
    fn test_dump_non_square_prints_every_column() {
        let matrix = SparseMatrix::from_triplets(2, 3, vec![(0, 0, 1), (1, 2, 4)]).unwrap();

        assert_eq!(matrix.dump(), "1 0 0\n0 0 4\n");
        assert_eq!(matrix.to_string(), matrix.dump());
    }

    #[test]
    fn test_dump_tall_matrix() {
        let matrix = SparseMatrix::from_triplets(3, 1, vec![(2, 0, 9)]).unwrap();
        assert_eq!(matrix.dump(), "0\n0\n9\n");
    }

    #[test]
    fn test_dump_truncated() {
        let matrix = SparseMatrix::<i32>::identity(4);
        let config = DumpConfig::truncated(2, 2).with_separator(",");

        assert_eq!(matrix.dump_with(&config), "1,0,...\n0,1,...\n...\n");
    }

    #[test]
    fn test_dump_empty_shape() {
        let matrix = SparseMatrix::<i32>::default();
        assert_eq!(matrix.dump(), "");
    }
}
