//! Configuration for the diagnostic dump

/// Controls how [`SparseMatrix::dump_with`](super::SparseMatrix::dump_with) renders the dense view
#[derive(Debug, Clone, PartialEq)]
pub struct DumpConfig {
    /// Text placed between values on a line
    pub separator: String,

    /// Maximum number of rows to print
    /// If None, every row is printed
    pub max_rows: Option<usize>,

    /// Maximum number of columns to print per row
    /// If None, every column is printed
    pub max_cols: Option<usize>,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            max_rows: None,
            max_cols: None,
        }
    }
}

impl DumpConfig {
    /// Create a config that prints at most `rows × cols` values
    pub fn truncated(rows: usize, cols: usize) -> Self {
        Self {
            max_rows: Some(rows),
            max_cols: Some(cols),
            ..Self::default()
        }
    }

    /// Use a different value separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
