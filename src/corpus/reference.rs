use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::CorpusError;
use super::leaning::Leaning;

/// A reference sentence and its leaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSentence {
    pub text: String,
    pub label: Leaning,
}

/// On-disk layout: one list of sentences per leaning.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CorpusFile {
    #[serde(default)]
    liberal: Vec<String>,
    #[serde(default)]
    conservative: Vec<String>,
    #[serde(default)]
    neutral: Vec<String>,
}

/// Number of sentences per leaning after duplicate resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionCounts {
    pub liberal: usize,
    pub conservative: usize,
    pub neutral: usize,
}

/// Immutable labeled reference dataset.
///
/// Sentences keep their first-seen order. When the same text appears in more
/// than one partition, the last partition loaded wins (liberal, then
/// conservative, then neutral) and the overwrite is logged.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCorpus {
    sentences: Vec<LabeledSentence>,
    index: HashMap<String, usize>,
}

impl ReferenceCorpus {
    /// Builds a corpus from the three labeled partitions.
    pub fn from_partitions<L, C, N>(liberal: L, conservative: C, neutral: N) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let mut corpus = Self::default();
        for text in liberal {
            corpus.insert(text.into(), Leaning::Liberal);
        }
        for text in conservative {
            corpus.insert(text.into(), Leaning::Conservative);
        }
        for text in neutral {
            corpus.insert(text.into(), Leaning::Neutral);
        }
        corpus
    }

    /// Loads a corpus from a JSON file with `liberal`, `conservative` and `neutral` arrays.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CorpusFile = serde_json::from_str(&raw).map_err(|source| CorpusError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let corpus = Self::from_partitions(file.liberal, file.conservative, file.neutral);
        if corpus.is_empty() {
            return Err(CorpusError::Empty);
        }

        let counts = corpus.partition_counts();
        info!(
            path = %path.display(),
            sentences = corpus.len(),
            liberal = counts.liberal,
            conservative = counts.conservative,
            neutral = counts.neutral,
            "Reference corpus loaded"
        );

        Ok(corpus)
    }

    /// Writes the corpus back out in the three-partition JSON layout.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CorpusError> {
        let path = path.as_ref();
        let mut file = CorpusFile::default();
        for sentence in &self.sentences {
            let bucket = match sentence.label {
                Leaning::Liberal => &mut file.liberal,
                Leaning::Conservative => &mut file.conservative,
                Leaning::Neutral => &mut file.neutral,
            };
            bucket.push(sentence.text.clone());
        }

        let json = serde_json::to_string_pretty(&file).map_err(CorpusError::Serialize)?;
        std::fs::write(path, json).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn insert(&mut self, text: String, label: Leaning) {
        if let Some(&pos) = self.index.get(&text) {
            let previous = self.sentences[pos].label;
            if previous != label {
                warn!(
                    sentence = %text,
                    previous = %previous,
                    replacement = %label,
                    "Sentence appears in multiple partitions; keeping the later label"
                );
            }
            self.sentences[pos].label = label;
            return;
        }

        self.index.insert(text.clone(), self.sentences.len());
        self.sentences.push(LabeledSentence { text, label });
    }

    /// Returns the leaning of a reference sentence.
    pub fn label_of(&self, sentence: &str) -> Result<Leaning, CorpusError> {
        self.index
            .get(sentence)
            .map(|&pos| self.sentences[pos].label)
            .ok_or_else(|| CorpusError::UnknownSentence {
                sentence: sentence.to_string(),
            })
    }

    /// Returns `true` if `sentence` was ingested.
    pub fn contains(&self, sentence: &str) -> bool {
        self.index.contains_key(sentence)
    }

    /// Iterates sentence texts in corpus order.
    pub fn sentences(&self) -> impl ExactSizeIterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }

    /// Iterates labeled entries in corpus order.
    pub fn entries(&self) -> &[LabeledSentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn partition_counts(&self) -> PartitionCounts {
        self.sentences
            .iter()
            .fold(PartitionCounts::default(), |mut counts, s| {
                match s.label {
                    Leaning::Liberal => counts.liberal += 1,
                    Leaning::Conservative => counts.conservative += 1,
                    Leaning::Neutral => counts.neutral += 1,
                }
                counts
            })
    }
}
