//! # wisata Pipeline
//!
//! The fixed inference pipeline of the wisata recommender.
//!
//! Raw places flow through three pretrained artifacts, loaded once at
//! startup and never refitted:
//!
//! 1. [`TfidfVectorizer`] - concatenated text fields to TF-IDF weights
//! 2. [`StandardScaler`] - numeric columns to zero-mean unit-variance
//! 3. [`Encoder`] - combined feature vector to a dense embedding
//!
//! [`FeatureBuilder`] runs steps 1-2 and concatenates the blocks;
//! [`RecommendEngine`] owns the resulting embedding matrix next to the
//! catalog and serves lookup-by-name queries over it.

pub mod artifacts;
pub mod encoder;
pub mod engine;
pub mod features;
pub mod scaler;
pub mod tfidf;

pub use artifacts::Artifacts;
pub use encoder::{Activation, DenseLayer, Encoder};
pub use engine::RecommendEngine;
pub use features::FeatureBuilder;
pub use scaler::StandardScaler;
pub use tfidf::TfidfVectorizer;
