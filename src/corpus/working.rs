use std::collections::HashSet;

use tracing::debug;

use super::reference::ReferenceCorpus;
use crate::embedding::{Embedder, EmbeddingError};

/// Sentences under evaluation followed by the reference corpus, with aligned embeddings.
///
/// Built fresh for every scoring call and passed by reference to neighbor
/// search. The evaluated sentences occupy indices `0..evaluated_len()` and
/// make up the blacklist.
#[derive(Debug, Clone)]
pub struct WorkingCorpus {
    items: Vec<String>,
    encodings: Vec<Vec<f32>>,
    blacklist: HashSet<String>,
    evaluated: usize,
}

impl WorkingCorpus {
    /// Builds the working corpus for `batch` with one batched embedder call.
    pub async fn build<E: Embedder>(
        batch: &[String],
        reference: &ReferenceCorpus,
        embedder: &E,
    ) -> Result<Self, EmbeddingError> {
        let mut items = Vec::with_capacity(batch.len() + reference.len());
        items.extend(batch.iter().cloned());
        items.extend(reference.sentences().map(str::to_string));

        let texts: Vec<&str> = items.iter().map(String::as_str).collect();
        let encodings = embedder.encode(&texts).await?;

        debug!(
            evaluated = batch.len(),
            total = items.len(),
            "Working corpus embedded"
        );

        Self::from_parts(items, encodings, batch.len())
    }

    /// Assembles a working corpus from precomputed encodings.
    ///
    /// The first `evaluated` items are blacklisted. Encodings must align with
    /// items and share a single non-zero dimension.
    pub fn from_parts(
        items: Vec<String>,
        encodings: Vec<Vec<f32>>,
        evaluated: usize,
    ) -> Result<Self, EmbeddingError> {
        if encodings.len() != items.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: items.len(),
                actual: encodings.len(),
            });
        }

        if let Some(first) = encodings.first() {
            let expected = first.len();
            if expected == 0 {
                return Err(EmbeddingError::DimensionMismatch {
                    index: 0,
                    expected: 1,
                    actual: 0,
                });
            }
            if let Some((index, bad)) = encodings
                .iter()
                .enumerate()
                .find(|(_, e)| e.len() != expected)
            {
                return Err(EmbeddingError::DimensionMismatch {
                    index,
                    expected,
                    actual: bad.len(),
                });
            }
        }

        let evaluated = evaluated.min(items.len());
        let blacklist = items[..evaluated].iter().cloned().collect();

        Ok(Self {
            items,
            encodings,
            blacklist,
            evaluated,
        })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn encodings(&self) -> &[Vec<f32>] {
        &self.encodings
    }

    pub fn encoding(&self, index: usize) -> Option<&[f32]> {
        self.encodings.get(index).map(Vec::as_slice)
    }

    pub fn blacklist(&self) -> &HashSet<String> {
        &self.blacklist
    }

    /// Number of distinct blacklisted sentences.
    pub fn blacklist_len(&self) -> usize {
        self.blacklist.len()
    }

    #[inline]
    pub fn is_blacklisted(&self, sentence: &str) -> bool {
        self.blacklist.contains(sentence)
    }

    /// Number of items whose text is blacklisted, counting repeats and the
    /// reference copies of quoted corpus sentences.
    pub fn blacklisted_items(&self) -> usize {
        self.items
            .iter()
            .filter(|s| self.blacklist.contains(s.as_str()))
            .count()
    }

    /// Number of sentences under evaluation (the leading items).
    pub fn evaluated_len(&self) -> usize {
        self.evaluated
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
