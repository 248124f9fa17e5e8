//! # wisata Core
//!
//! Core library for the wisata tourism-place recommender.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`DenseMatrix`] - Row-major dense `f32` matrix for features and embeddings
//! - [`Place`] - One tourism place record as loaded from the dataset
//! - [`PlaceCatalog`] - The in-memory place table with case-insensitive lookup
//! - [`ranker`] - Cosine-similarity top-K ranking over an embedding matrix
//!
//! ## Example
//!
//! ```rust
//! use wisata_core::{DenseMatrix, ranker};
//!
//! let embeddings = DenseMatrix::from_rows(vec![
//!     vec![1.0, 0.0],
//!     vec![0.9, 0.1],
//!     vec![0.0, 1.0],
//! ]).unwrap();
//!
//! // Two most similar rows to row 0, excluding row 0 itself
//! let ranked = ranker::top_k(&embeddings, 0, 2).unwrap();
//! assert_eq!(ranked[0].index, 1);
//! ```

pub mod catalog;
pub mod error;
pub mod matrix;
pub mod place;
pub mod ranker;
pub mod vector;

pub use catalog::PlaceCatalog;
pub use error::{Error, Result};
pub use matrix::DenseMatrix;
pub use place::{Place, NUMERIC_COLUMNS};
pub use ranker::{top_k, Scored, DEFAULT_TOP_K};
pub use vector::{cosine_similarity, dot, norm};
