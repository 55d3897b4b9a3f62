//! Nearest admissible neighbor lookup over a [`WorkingCorpus`].
//!
//! Candidates are ranked by cosine distance to the query embedding. The query
//! itself never competes, and blacklisted sentences (everything under
//! evaluation) are skipped, so the winner is always a reference sentence.

mod error;


pub use error::SearchError;

use tracing::trace;

use crate::corpus::WorkingCorpus;

/// Best admissible match for a query sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    /// Position in the working corpus.
    pub index: usize,
    pub sentence: &'a str,
    /// `1 - cosine_distance`, clamped to `[0, 1]`.
    pub similarity: f32,
}

/// Cosine similarity; `0.0` for empty, mismatched or zero-norm inputs.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

/// Cosine distance in `[0, 2]`.
#[inline]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    1.0 - cosine_similarity(a, b)
}

/// Finds the most similar admissible sentence among the `k` closest to item `index`.
///
/// `k` must be at least `blacklist + 1`; otherwise, or when every one of the
/// `k` candidates is blacklisted, [`SearchError::NoAdmissibleNeighbor`] is
/// returned. Ties in distance rank the lower index first.
pub fn find_best_admissible(
    working: &WorkingCorpus,
    index: usize,
    k: usize,
) -> Result<Neighbor<'_>, SearchError> {
    let query = working
        .encoding(index)
        .ok_or(SearchError::IndexOutOfRange {
            index,
            len: working.len(),
        })?;

    let blacklisted = working.blacklist_len();
    let no_admissible = SearchError::NoAdmissibleNeighbor {
        index,
        k,
        blacklisted,
    };

    if k < blacklisted + 1 {
        return Err(no_admissible);
    }

    let mut ranked: Vec<(usize, f32)> = working
        .encodings()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(i, encoding)| (i, cosine_distance(query, encoding)))
        .collect();

    ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
    ranked.truncate(k);

    for (candidate, distance) in ranked {
        let sentence = &working.items()[candidate];
        if working.is_blacklisted(sentence) {
            trace!(index, candidate, distance, "Skipping blacklisted candidate");
            continue;
        }

        return Ok(Neighbor {
            index: candidate,
            sentence,
            similarity: (1.0 - distance).clamp(0.0, 1.0),
        });
    }

    Err(no_admissible)
}
