//! # crossmat: sparse matrices over an orthogonal linked structure
//!
//! Every stored entry is one node that sits in two chains at once: its row chain
//! (ordered by column) and its column chain (ordered by row). Only non-zero values
//! are stored.
//!
//! ## Overview
//!
//! - **Header lattice**: one anchor per row and per column, plus an arena that owns
//!   every entry node. Chains link nodes by handle, so each node is freed exactly once.
//! - **Sparse matrix**: bounds-checked `get`/`set`, deep copy and assignment.
//! - **Algebra**: scalar multiply, matrix multiply, add, subtract and transpose, all
//!   built on `get`/`set` and returning new matrices.
//!
//! ## Usage
//!
//! ```
//! use crossmat::SparseMatrix;
//!
//! let mut m = SparseMatrix::<i64>::new(2, 2);
//! m.set(0, 0, 1).unwrap();
//! m.set(1, 1, 4).unwrap();
//!
//! let doubled = m.add(&m).unwrap();
//! assert_eq!(doubled.get(1, 1), Ok(8));
//!
//! let product = m.multiply(&SparseMatrix::identity(2)).unwrap();
//! assert_eq!(product, m);
//! ```
//!
//! Out-of-range access and shape mismatches are reported as [`MatrixError`]:
//!
//! ```
//! use crossmat::{MatrixError, SparseMatrix};
//!
//! let a = SparseMatrix::<f64>::new(2, 3);
//! assert!(matches!(a.get(2, 0), Err(MatrixError::OutOfRange { .. })));
//! assert!(matches!(a.multiply(&a), Err(MatrixError::DimensionMismatch { .. })));
//! ```
//!
//! A matrix is not safe to mutate from several threads at once; `set` needs
//! `&mut self`, so shared use requires an external lock.

pub mod error;
pub mod matrix;

// Re-export primary components
pub use error::{MatrixError, Result};
pub use matrix::{DumpConfig, SparseMatrix};

/// Version information for the crossmat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
