use crate::{Encoder, StandardScaler, TfidfVectorizer};
use std::path::Path;
use wisata_core::Result;

/// File names the artifacts directory must contain.
pub const TFIDF_FILE: &str = "tfidf_vectorizer.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const ENCODER_FILE: &str = "encoder.json";

/// The three pretrained artifacts the pipeline runs on.
///
/// Loaded together at startup; any individual failure aborts the load so
/// the service never starts with a partial set.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub tfidf: TfidfVectorizer,
    pub scaler: StandardScaler,
    pub encoder: Encoder,
}

impl Artifacts {
    /// Load all artifacts from a directory.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            tfidf: TfidfVectorizer::load(dir.join(TFIDF_FILE))?,
            scaler: StandardScaler::load(dir.join(SCALER_FILE))?,
            encoder: Encoder::load(dir.join(ENCODER_FILE))?,
        })
    }
}
