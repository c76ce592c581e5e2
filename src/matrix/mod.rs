// Sparse matrix data structures and operations

pub mod config;
pub mod dense;
pub(crate) mod lattice;
pub(crate) mod node;
pub mod ops;
pub mod sparse;

pub use config::DumpConfig;
pub use sparse::SparseMatrix;
