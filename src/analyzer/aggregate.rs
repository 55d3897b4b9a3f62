use std::collections::HashMap;

use crate::scoring::BiasScore;

/// Length-weighted intensity totals.
///
/// `liberal` only accumulates positive weighted intensities and stays `>= 0`;
/// `conservative` only accumulates negative ones and stays `<= 0`. Zero
/// intensities are counted in `neutral`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateScore {
    pub liberal: f32,
    pub conservative: f32,
    pub neutral: u32,
}

impl AggregateScore {
    /// Routes one weighted intensity into the matching bucket.
    pub fn record(&mut self, weighted: f32) {
        if weighted > 0.0 {
            self.liberal += weighted;
        } else if weighted < 0.0 {
            self.conservative += weighted;
        } else {
            self.neutral += 1;
        }
    }

    /// Adds `other` with its sums scaled by `scale`. Neutral counts are added unscaled.
    pub fn add_scaled(&mut self, other: &AggregateScore, scale: f32) {
        self.liberal += other.liberal * scale;
        self.conservative += other.conservative * scale;
        self.neutral += other.neutral;
    }

    /// Net leaning: `liberal + conservative`.
    pub fn net(&self) -> f32 {
        self.liberal + self.conservative
    }
}

/// Scoring trace for one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceBias {
    pub sentence: String,
    /// Best admissible reference sentence.
    pub neighbor: String,
    pub score: BiasScore,
    pub intensity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphBias {
    pub sentences: Vec<SentenceBias>,
    /// Per-sentence length weights, aligned with `sentences`. Sum to 1.
    pub weights: Vec<f32>,
    pub aggregate: AggregateScore,
    /// Sum of the sentences' character counts.
    pub chars: usize,
}

impl ParagraphBias {
    pub fn intensities(&self) -> impl Iterator<Item = f32> + '_ {
        self.sentences.iter().map(|s| s.intensity)
    }
}

/// Article-level result, as stored in the result cache.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleBias {
    /// Arithmetic mean of all raw sentence intensities.
    pub mean: f32,
    /// Paragraph aggregates scaled by paragraph share of the article length.
    pub aggregate: AggregateScore,
    pub paragraphs: Vec<ParagraphBias>,
    /// Sentence to intensity. A sentence repeated in the article keeps its last value.
    pub sentence_bias: HashMap<String, f32>,
}

impl ArticleBias {
    pub fn sentence_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.sentences.len()).sum()
    }

    pub fn intensities(&self) -> impl Iterator<Item = f32> + '_ {
        self.paragraphs.iter().flat_map(ParagraphBias::intensities)
    }
}
