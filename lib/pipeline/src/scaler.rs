use serde::{Deserialize, Serialize};
use std::path::Path;
use wisata_core::{Error, Result};

/// A pretrained standard scaler.
///
/// Applies the affine transform `(x - mean) / scale` per numeric column
/// with constants learned during training. No refitting happens at
/// inference time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    columns: Vec<String>,
    mean: Vec<f32>,
    scale: Vec<f32>,
}

impl StandardScaler {
    /// Build a scaler from its learned constants.
    pub fn new(columns: Vec<String>, mean: Vec<f32>, scale: Vec<f32>) -> Result<Self> {
        let scaler = Self { columns, mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Load the scaler from its JSON artifact.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let scaler: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        scaler.validate()?;
        Ok(scaler)
    }

    fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::Artifact("scaler has no columns".to_string()));
        }
        if self.mean.len() != self.columns.len() || self.scale.len() != self.columns.len() {
            return Err(Error::Artifact(format!(
                "scaler constants do not match column count {} (mean {}, scale {})",
                self.columns.len(),
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.scale.iter().any(|&s| s == 0.0) {
            return Err(Error::Artifact("scaler has a zero scale entry".to_string()));
        }
        Ok(())
    }

    /// Width of the scaled numeric block.
    #[inline]
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.columns.len()
    }

    /// Column names, in feature order.
    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Scale one row of raw numeric values.
    pub fn transform(&self, values: &[f32]) -> Result<Vec<f32>> {
        if values.len() != self.columns.len() {
            return Err(Error::DimensionMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        Ok(values
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}
