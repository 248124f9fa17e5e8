//! Cosine-similarity top-K ranking over the embedding matrix.

use crate::vector::cosine_similarity;
use crate::{DenseMatrix, Error, Result};
use std::cmp::Ordering;

/// Number of recommendations returned per query.
pub const DEFAULT_TOP_K: usize = 10;

/// One ranked row: its catalog index and similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub index: usize,
    pub score: f32,
}

/// Rank every row of `embeddings` against row `query_row` and return the
/// `k` most similar rows, most similar first.
///
/// The query row is excluded by index, never by score, so a duplicate
/// embedding elsewhere in the matrix still appears in the results. Ties are
/// broken by ascending original row index, which keeps the ordering
/// deterministic. When the matrix has fewer than `k + 1` rows, all rows
/// except the query are returned.
pub fn top_k(embeddings: &DenseMatrix, query_row: usize, k: usize) -> Result<Vec<Scored>> {
    if query_row >= embeddings.rows() {
        return Err(Error::Dataset(format!(
            "query row {} out of bounds for {} rows",
            query_row,
            embeddings.rows()
        )));
    }

    let query = embeddings.row(query_row);
    let mut scored: Vec<Scored> = embeddings
        .iter_rows()
        .enumerate()
        .filter(|(i, _)| *i != query_row)
        .map(|(i, row)| Scored {
            index: i,
            score: cosine_similarity(query, row),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    scored.truncate(k);
    Ok(scored)
}
