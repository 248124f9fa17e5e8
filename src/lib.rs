//! # wisata
//!
//! A tourism-place recommendation service: given a place name, return the
//! ten most similar places, ranked by cosine similarity over embeddings
//! derived from text and numeric features.
//!
//! The whole dataset is embedded once at startup through a fixed pipeline
//! (TF-IDF text vectorization, standard scaling of numeric columns, one
//! forward pass through a pretrained feed-forward encoder) and held in
//! memory as read-only state for the lifetime of the process.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! wisata --dataset ./data/tourism.csv --artifacts-dir ./artifacts --http-port 5000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use wisata::prelude::*;
//!
//! let catalog = PlaceCatalog::from_csv_path("data/tourism.csv")?;
//! let artifacts = Artifacts::load_dir("artifacts")?;
//! let engine = RecommendEngine::build(catalog, &artifacts)?;
//!
//! let similar = engine.recommend("Candi Borobudur")?;
//! for place in similar {
//!     println!("{} ({})", place.name, place.city);
//! }
//! # Ok::<(), wisata::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! wisata is composed of several crates:
//!
//! - [`wisata-core`](https://docs.rs/wisata-core) - Dense math, place catalog, similarity ranking
//! - [`wisata-pipeline`](https://docs.rs/wisata-pipeline) - Pretrained artifacts and the recommendation engine
//! - [`wisata-api`](https://docs.rs/wisata-api) - REST API

// Re-export core types
pub use wisata_core::{
    cosine_similarity, top_k, DenseMatrix, Error, Place, PlaceCatalog, Result, Scored,
    DEFAULT_TOP_K,
};

// Re-export the pipeline
pub use wisata_pipeline::{
    Activation, Artifacts, DenseLayer, Encoder, FeatureBuilder, RecommendEngine, StandardScaler,
    TfidfVectorizer,
};

// Re-export the API
pub use wisata_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Artifacts, DenseMatrix, Encoder, Error, FeatureBuilder, Place, PlaceCatalog,
        RecommendEngine, RestApi, Result, StandardScaler, TfidfVectorizer,
    };
}
