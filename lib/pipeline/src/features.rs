use crate::{StandardScaler, TfidfVectorizer};
use wisata_core::{DenseMatrix, Error, PlaceCatalog, Result, NUMERIC_COLUMNS};

/// Builds the combined feature matrix for a catalog.
///
/// Each row is `[TF-IDF weights | scaled numeric columns]` for the place at
/// the same catalog index. Row order is preserved.
pub struct FeatureBuilder<'a> {
    tfidf: &'a TfidfVectorizer,
    scaler: &'a StandardScaler,
}

impl<'a> FeatureBuilder<'a> {
    /// Pair the two feature-block artifacts. Fails when the scaler was not
    /// trained on the catalog's numeric columns.
    pub fn new(tfidf: &'a TfidfVectorizer, scaler: &'a StandardScaler) -> Result<Self> {
        if scaler.columns() != NUMERIC_COLUMNS {
            return Err(Error::Artifact(format!(
                "scaler columns {:?} do not match dataset numeric columns {:?}",
                scaler.columns(),
                NUMERIC_COLUMNS
            )));
        }
        Ok(Self { tfidf, scaler })
    }

    /// Total feature width: vocabulary size plus scaled column count.
    #[inline]
    #[must_use]
    pub fn feature_width(&self) -> usize {
        self.tfidf.vocabulary_size() + self.scaler.n_features()
    }

    /// Build the combined feature matrix, one row per place.
    pub fn build(&self, catalog: &PlaceCatalog) -> Result<DenseMatrix> {
        let mut rows = Vec::with_capacity(catalog.len());
        for place in catalog.places() {
            let mut row = self.tfidf.transform(&place.content_string());
            row.extend(self.scaler.transform(&place.numeric_features())?);
            rows.push(row);
        }
        DenseMatrix::from_rows(rows)
    }
}
