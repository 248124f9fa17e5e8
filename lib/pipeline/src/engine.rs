use crate::{Artifacts, FeatureBuilder};
use wisata_core::{ranker, DenseMatrix, Error, Place, PlaceCatalog, Result, DEFAULT_TOP_K};

/// The recommendation engine: the catalog and its embedding matrix.
///
/// Built exactly once at startup. Every row of `embeddings` corresponds to
/// the catalog row at the same index, and neither structure changes after
/// construction, so the engine can be shared read-only across request
/// handlers without locking.
#[derive(Debug)]
pub struct RecommendEngine {
    catalog: PlaceCatalog,
    embeddings: DenseMatrix,
    top_k: usize,
}

impl RecommendEngine {
    /// Run the full pipeline over the catalog: feature building, width
    /// validation against the encoder, then one forward pass per place.
    pub fn build(catalog: PlaceCatalog, artifacts: &Artifacts) -> Result<Self> {
        let builder = FeatureBuilder::new(&artifacts.tfidf, &artifacts.scaler)?;

        if artifacts.encoder.input_dim() != builder.feature_width() {
            return Err(Error::Artifact(format!(
                "encoder expects input width {} but the feature pipeline produces {}",
                artifacts.encoder.input_dim(),
                builder.feature_width()
            )));
        }

        let features = builder.build(&catalog)?;
        let embeddings = artifacts.encoder.encode_matrix(&features)?;

        if embeddings.rows() != catalog.len() {
            return Err(Error::Dataset(format!(
                "embedding rows {} drifted from catalog rows {}",
                embeddings.rows(),
                catalog.len()
            )));
        }

        Ok(Self {
            catalog,
            embeddings,
            top_k: DEFAULT_TOP_K,
        })
    }

    /// Assemble an engine from a catalog and an already-computed embedding
    /// matrix. Rows must align one-to-one.
    pub fn from_embeddings(catalog: PlaceCatalog, embeddings: DenseMatrix) -> Result<Self> {
        if embeddings.rows() != catalog.len() {
            return Err(Error::DimensionMismatch {
                expected: catalog.len(),
                actual: embeddings.rows(),
            });
        }
        Ok(Self {
            catalog,
            embeddings,
            top_k: DEFAULT_TOP_K,
        })
    }

    #[inline]
    #[must_use]
    pub fn place_count(&self) -> usize {
        self.catalog.len()
    }

    #[inline]
    #[must_use]
    pub fn embedding_dim(&self) -> usize {
        self.embeddings.cols()
    }

    #[inline]
    #[must_use]
    pub fn places(&self) -> &[Place] {
        self.catalog.places()
    }

    /// Top recommendations for a place, looked up by case-insensitive name.
    ///
    /// Returns the ten most similar places (fewer only when the catalog
    /// itself is smaller), ranked most similar first and never containing
    /// the query place.
    pub fn recommend(&self, place_name: &str) -> Result<Vec<Place>> {
        if place_name.trim().is_empty() {
            return Err(Error::EmptyPlaceName);
        }

        let query_row = self
            .catalog
            .find_by_name(place_name)
            .ok_or_else(|| Error::PlaceNotFound(place_name.to_string()))?;

        let ranked = ranker::top_k(&self.embeddings, query_row, self.top_k)?;
        Ok(ranked
            .into_iter()
            .map(|scored| self.catalog.places()[scored.index].clone())
            .collect())
    }
}
