use serde::{Deserialize, Serialize};
use std::path::Path;
use wisata_core::{DenseMatrix, Error, Result};

/// Per-layer activation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Linear,
}

impl Activation {
    #[inline]
    fn apply(self, x: f32) -> f32 {
        match self {
            Activation::Relu => x.max(0.0),
            Activation::Linear => x,
        }
    }
}

/// One dense layer with fixed weights: `out = activation(in * W + b)`.
///
/// Weights are stored input-major: `weights[i][j]` connects input i to
/// output j.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayer {
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
    activation: Activation,
}

impl DenseLayer {
    pub fn new(weights: Vec<Vec<f32>>, bias: Vec<f32>, activation: Activation) -> Result<Self> {
        let layer = Self { weights, bias, activation };
        layer.validate()?;
        Ok(layer)
    }

    fn validate(&self) -> Result<()> {
        if self.weights.is_empty() || self.bias.is_empty() {
            return Err(Error::Artifact("encoder layer has empty weights".to_string()));
        }
        for row in &self.weights {
            if row.len() != self.bias.len() {
                return Err(Error::Artifact(format!(
                    "encoder layer weight row width {} does not match bias width {}",
                    row.len(),
                    self.bias.len()
                )));
            }
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn input_dim(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.bias.len()
    }

    fn forward(&self, input: &[f32]) -> Vec<f32> {
        let mut output = self.bias.clone();
        for (x, weight_row) in input.iter().zip(self.weights.iter()) {
            if *x == 0.0 {
                // TF-IDF rows are mostly zeros
                continue;
            }
            for (out, w) in output.iter_mut().zip(weight_row.iter()) {
                *out += x * w;
            }
        }
        for out in output.iter_mut() {
            *out = self.activation.apply(*out);
        }
        output
    }
}

/// A pretrained feed-forward encoder: an ordered stack of dense layers.
///
/// Maps one combined feature vector to one embedding. Layer widths are
/// validated to chain at construction so mismatched artifacts fail at
/// startup, not mid-request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encoder {
    layers: Vec<DenseLayer>,
}

impl Encoder {
    pub fn new(layers: Vec<DenseLayer>) -> Result<Self> {
        let encoder = Self { layers };
        encoder.validate()?;
        Ok(encoder)
    }

    /// Load the encoder from its JSON artifact.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let encoder: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        encoder.validate()?;
        Ok(encoder)
    }

    fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(Error::Artifact("encoder has no layers".to_string()));
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        for pair in self.layers.windows(2) {
            if pair[0].output_dim() != pair[1].input_dim() {
                return Err(Error::Artifact(format!(
                    "encoder layer widths do not chain: {} -> {}",
                    pair[0].output_dim(),
                    pair[1].input_dim()
                )));
            }
        }
        Ok(())
    }

    /// Feature width the encoder expects.
    #[inline]
    #[must_use]
    pub fn input_dim(&self) -> usize {
        self.layers[0].input_dim()
    }

    /// Embedding width the encoder produces.
    #[inline]
    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.layers[self.layers.len() - 1].output_dim()
    }

    /// One forward pass over a single feature vector.
    pub fn forward(&self, input: &[f32]) -> Result<Vec<f32>> {
        if input.len() != self.input_dim() {
            return Err(Error::DimensionMismatch {
                expected: self.input_dim(),
                actual: input.len(),
            });
        }
        let mut current = self.layers[0].forward(input);
        for layer in &self.layers[1..] {
            current = layer.forward(&current);
        }
        Ok(current)
    }

    /// Encode every row of the feature matrix into the embedding matrix.
    pub fn encode_matrix(&self, features: &DenseMatrix) -> Result<DenseMatrix> {
        let mut rows = Vec::with_capacity(features.rows());
        for row in features.iter_rows() {
            rows.push(self.forward(row)?);
        }
        DenseMatrix::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_layer(dim: usize, activation: Activation) -> DenseLayer {
        let weights = (0..dim)
            .map(|i| (0..dim).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        DenseLayer::new(weights, vec![0.0; dim], activation).unwrap()
    }

    #[test]
    fn test_forward_linear() {
        let layer = DenseLayer::new(
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            vec![0.5, -0.5],
            Activation::Linear,
        )
        .unwrap();
        let encoder = Encoder::new(vec![layer]).unwrap();
        let out = encoder.forward(&[1.0, 1.0]).unwrap();
        assert_eq!(out, vec![4.5, 5.5]);
    }

    #[test]
    fn test_relu_clamps_negatives() {
        let layer = DenseLayer::new(
            vec![vec![1.0], vec![1.0]],
            vec![-10.0],
            Activation::Relu,
        )
        .unwrap();
        let encoder = Encoder::new(vec![layer]).unwrap();
        assert_eq!(encoder.forward(&[1.0, 2.0]).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_layer_chaining_validated() {
        let first = identity_layer(2, Activation::Relu);
        let second = identity_layer(3, Activation::Linear);
        let err = Encoder::new(vec![first, second]).unwrap_err();
        assert!(matches!(err, Error::Artifact(_)));
    }

    #[test]
    fn test_forward_wrong_input_width() {
        let encoder = Encoder::new(vec![identity_layer(2, Activation::Linear)]).unwrap();
        let err = encoder.forward(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { expected: 2, actual: 3 }));
    }

    #[test]
    fn test_encode_matrix_preserves_row_order() {
        let encoder = Encoder::new(vec![identity_layer(2, Activation::Linear)]).unwrap();
        let features =
            DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let embeddings = encoder.encode_matrix(&features).unwrap();
        assert_eq!(embeddings.rows(), 2);
        assert_eq!(embeddings.row(0), &[1.0, 2.0]);
        assert_eq!(embeddings.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_two_layer_stack() {
        let first = DenseLayer::new(
            vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]],
            vec![0.0, 0.0],
            Activation::Relu,
        )
        .unwrap();
        let second = DenseLayer::new(
            vec![vec![2.0], vec![2.0]],
            vec![1.0],
            Activation::Linear,
        )
        .unwrap();
        let encoder = Encoder::new(vec![first, second]).unwrap();
        assert_eq!(encoder.input_dim(), 3);
        assert_eq!(encoder.output_dim(), 1);
        // [1,1,1] -> relu([2,2]) -> 2*2 + 2*2 + 1 = 9
        assert_eq!(encoder.forward(&[1.0, 1.0, 1.0]).unwrap(), vec![9.0]);
    }
}
