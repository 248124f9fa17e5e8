use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use wisata_core::{vector, Error, Result};

/// A pretrained TF-IDF vectorizer.
///
/// Carries a fixed vocabulary (term to column index) and the matching IDF
/// weights learned during training. `transform` maps a document to a
/// fixed-width row: term counts multiplied by IDF, then L2-normalized.
/// Terms outside the vocabulary are silently ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Build a vectorizer from a vocabulary and its IDF table.
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f32>) -> Result<Self> {
        let vectorizer = Self { vocabulary, idf };
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    /// Load the vectorizer from its JSON artifact.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let vectorizer: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    fn validate(&self) -> Result<()> {
        if self.vocabulary.is_empty() {
            return Err(Error::Artifact("vectorizer vocabulary is empty".to_string()));
        }
        if self.idf.len() != self.vocabulary.len() {
            return Err(Error::Artifact(format!(
                "IDF table length {} does not match vocabulary size {}",
                self.idf.len(),
                self.vocabulary.len()
            )));
        }
        for (term, &column) in &self.vocabulary {
            if column >= self.idf.len() {
                return Err(Error::Artifact(format!(
                    "vocabulary term '{term}' maps to column {column} beyond width {}",
                    self.idf.len()
                )));
            }
        }
        Ok(())
    }

    /// Width of the TF-IDF block.
    #[inline]
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Tokenize text: lowercase, split on whitespace and punctuation, drop
    /// single-character tokens.
    #[must_use]
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
            .map(|s| s.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|s| s.len() > 1)
            .collect()
    }

    /// Transform one document into its TF-IDF row.
    #[must_use]
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut row = vec![0.0; self.idf.len()];
        for token in Self::tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&token) {
                row[column] += 1.0;
            }
        }
        for (count, idf) in row.iter_mut().zip(self.idf.iter()) {
            *count *= idf;
        }
        vector::normalize(&mut row);
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vectorizer() -> TfidfVectorizer {
        let vocabulary = HashMap::from([
            ("candi".to_string(), 0),
            ("pantai".to_string(), 1),
            ("museum".to_string(), 2),
        ]);
        TfidfVectorizer::new(vocabulary, vec![1.0, 2.0, 1.5]).unwrap()
    }

    #[test]
    fn test_tokenize() {
        let tokens = TfidfVectorizer::tokenize("Candi Borobudur, di Magelang!");
        assert_eq!(tokens, vec!["candi", "borobudur", "di", "magelang"]);
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        let tokens = TfidfVectorizer::tokenize("a b candi");
        assert_eq!(tokens, vec!["candi"]);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let row = vectorizer().transform("candi pantai pantai");
        assert_eq!(row.len(), 3);
        let norm: f32 = row.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        // pantai has the higher IDF and the higher count
        assert!(row[1] > row[0]);
    }

    #[test]
    fn test_unseen_terms_ignored() {
        let row = vectorizer().transform("atlantis wakanda");
        assert!(row.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_idf_length_mismatch_rejected() {
        let vocabulary = HashMap::from([("candi".to_string(), 0)]);
        let err = TfidfVectorizer::new(vocabulary, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::Artifact(_)));
    }

    #[test]
    fn test_column_out_of_range_rejected() {
        let vocabulary = HashMap::from([("candi".to_string(), 5)]);
        assert!(TfidfVectorizer::new(vocabulary, vec![1.0]).is_err());
    }

    #[test]
    fn test_load_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"vocabulary": {{"candi": 0, "pantai": 1}}, "idf": [1.0, 2.0]}}"#
        )
        .unwrap();
        let vectorizer = TfidfVectorizer::load(file.path()).unwrap();
        assert_eq!(vectorizer.vocabulary_size(), 2);
    }
}
