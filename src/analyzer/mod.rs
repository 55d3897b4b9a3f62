//! Bias analyzer: sentence, paragraph and article scoring.
//!
//! Every scoring call builds one [`WorkingCorpus`] for all sentences it
//! evaluates, so the embedder is invoked exactly once per call. For each
//! sentence the analyzer finds the best admissible neighbor, looks up its
//! label, scores sentiment and fuses the three signals with the configured
//! [`FusionStrategy`].
//!
//! # Aggregation
//!
//! Within a paragraph each intensity is weighted by the sentence's share of
//! the paragraph's characters before it is routed into an [`AggregateScore`].
//! Paragraph aggregates are combined the same way by paragraph share of the
//! article. The article score itself is the plain mean of the raw sentence
//! intensities, not derived from the weighted sums.

pub mod aggregate;
pub mod text;


use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::constants::scoring_neighbor_bound;
use crate::corpus::{ReferenceCorpus, WorkingCorpus};
use crate::embedding::Embedder;
use crate::scoring::{BiasScore, FusionStrategy, ScoringError};
use crate::search::find_best_admissible;
use crate::sentiment::{SentimentScorer, validate_polarity};

pub use aggregate::{AggregateScore, ArticleBias, ParagraphBias, SentenceBias};
pub use text::{char_len, content_to_sentences, paragraph_sentences};

/// Scores text against a reference corpus.
///
/// Immutable after construction; share it behind an `Arc`.
pub struct BiasAnalyzer<E, S> {
    corpus: Arc<ReferenceCorpus>,
    embedder: E,
    sentiment: S,
    strategy: FusionStrategy,
}

impl<E, S> std::fmt::Debug for BiasAnalyzer<E, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BiasAnalyzer")
            .field("corpus_len", &self.corpus.len())
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl<E: Embedder, S: SentimentScorer> BiasAnalyzer<E, S> {
    /// Creates an analyzer using heuristic fusion.
    pub fn new(corpus: Arc<ReferenceCorpus>, embedder: E, sentiment: S) -> Self {
        Self {
            corpus,
            embedder,
            sentiment,
            strategy: FusionStrategy::Heuristic,
        }
    }

    pub fn with_strategy(mut self, strategy: FusionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn corpus(&self) -> &ReferenceCorpus {
        &self.corpus
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    pub fn strategy(&self) -> &FusionStrategy {
        &self.strategy
    }

    /// Scores a batch of sentences against the reference corpus.
    ///
    /// The batch shares one working corpus; every sentence in it is excluded
    /// as a neighbor for the others.
    pub async fn score_sentences(
        &self,
        sentences: &[String],
    ) -> Result<Vec<SentenceBias>, ScoringError> {
        if sentences.is_empty() {
            return Err(ScoringError::EmptyArticle);
        }

        let working = WorkingCorpus::build(sentences, &self.corpus, &self.embedder).await?;
        let k = scoring_neighbor_bound(working.blacklisted_items());

        let mut scored = Vec::with_capacity(sentences.len());
        for (index, sentence) in sentences.iter().enumerate() {
            scored.push(self.score_one(&working, index, sentence, k)?);
        }
        Ok(scored)
    }

    fn score_one(
        &self,
        working: &WorkingCorpus,
        index: usize,
        sentence: &str,
        k: usize,
    ) -> Result<SentenceBias, ScoringError> {
        let neighbor = find_best_admissible(working, index, k)?;
        let label = self.corpus.label_of(neighbor.sentence)?;
        let sentiment = validate_polarity(self.sentiment.polarity(sentence)?)?;

        let score = BiasScore::new(label.value(), neighbor.similarity, sentiment);
        let intensity = self.strategy.intensity(&score)?;

        debug!(
            index,
            neighbor_label = %label,
            similarity = neighbor.similarity,
            sentiment,
            intensity,
            "Sentence scored"
        );

        Ok(SentenceBias {
            sentence: sentence.to_string(),
            neighbor: neighbor.sentence.to_string(),
            score,
            intensity,
        })
    }

    /// Scores one paragraph given as its sentences.
    pub async fn score_paragraph(
        &self,
        sentences: &[String],
    ) -> Result<ParagraphBias, ScoringError> {
        let scored = self.score_sentences(sentences).await?;
        Ok(paragraph_bias(scored))
    }

    /// Scores an article given as paragraphs of sentences.
    ///
    /// All sentences share one working corpus.
    #[instrument(skip_all, fields(paragraphs = paragraphs.len()))]
    pub async fn score_paragraphs(
        &self,
        paragraphs: &[Vec<String>],
    ) -> Result<ArticleBias, ScoringError> {
        let flat: Vec<String> = paragraphs.iter().flatten().cloned().collect();
        if flat.is_empty() {
            return Err(ScoringError::EmptyArticle);
        }

        let mut scored = self.score_sentences(&flat).await?.into_iter();
        let paragraph_results: Vec<ParagraphBias> = paragraphs
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| paragraph_bias(scored.by_ref().take(p.len()).collect()))
            .collect();

        let article = article_bias(paragraph_results);
        info!(
            sentences = flat.len(),
            mean = article.mean,
            liberal = article.aggregate.liberal,
            conservative = article.aggregate.conservative,
            neutral = article.aggregate.neutral,
            "Article scored"
        );
        Ok(article)
    }

    /// Splits raw article text and scores it.
    pub async fn score_article(&self, article: &str) -> Result<ArticleBias, ScoringError> {
        let paragraphs = content_to_sentences(article);
        self.score_paragraphs(&paragraphs).await
    }
}

/// Length weights for `sentences`. Sum to 1 for a non-empty slice.
pub fn sentence_weights<T: AsRef<str>>(sentences: &[T]) -> Vec<f32> {
    let lengths: Vec<usize> = sentences.iter().map(|s| char_len(s.as_ref())).collect();
    let total: usize = lengths.iter().sum();
    if total == 0 {
        let n = sentences.len() as f32;
        return vec![1.0 / n; sentences.len()];
    }
    lengths
        .into_iter()
        .map(|len| len as f32 / total as f32)
        .collect()
}

fn paragraph_bias(sentences: Vec<SentenceBias>) -> ParagraphBias {
    let weights = sentence_weights(
        &sentences
            .iter()
            .map(|s| s.sentence.as_str())
            .collect::<Vec<_>>(),
    );
    let chars = sentences.iter().map(|s| char_len(&s.sentence)).sum();

    let mut aggregate = AggregateScore::default();
    for (sentence, weight) in sentences.iter().zip(&weights) {
        aggregate.record(sentence.intensity * weight);
    }

    ParagraphBias {
        sentences,
        weights,
        aggregate,
        chars,
    }
}

fn article_bias(paragraphs: Vec<ParagraphBias>) -> ArticleBias {
    let total_chars: usize = paragraphs.iter().map(|p| p.chars).sum();
    let mut aggregate = AggregateScore::default();
    for paragraph in &paragraphs {
        let scale = if total_chars == 0 {
            1.0 / paragraphs.len() as f32
        } else {
            paragraph.chars as f32 / total_chars as f32
        };
        aggregate.add_scaled(&paragraph.aggregate, scale);
    }

    let intensities: Vec<f32> = paragraphs
        .iter()
        .flat_map(ParagraphBias::intensities)
        .collect();
    let mean = if intensities.is_empty() {
        0.0
    } else {
        intensities.iter().sum::<f32>() / intensities.len() as f32
    };

    let sentence_bias: HashMap<String, f32> = paragraphs
        .iter()
        .flat_map(|p| &p.sentences)
        .map(|s| (s.sentence.clone(), s.intensity))
        .collect();

    ArticleBias {
        mean,
        aggregate,
        paragraphs,
        sentence_bias,
    }
}
