use crate::classifier::Features;

/// Raw per-sentence signals fed into fusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasScore {
    /// Leaning value of the best admissible neighbor (`1`, `-1` or `0`).
    pub neighbor_label: f32,
    /// Similarity to that neighbor, in `[0, 1]`.
    pub similarity: f32,
    /// Compound sentiment polarity, in `[-1, 1]`.
    pub sentiment: f32,
}

impl BiasScore {
    pub fn new(neighbor_label: f32, similarity: f32, sentiment: f32) -> Self {
        Self {
            neighbor_label,
            similarity,
            sentiment,
        }
    }

    /// Classifier feature vector `[sentiment, similarity, neighbor_label]`.
    pub fn features(&self) -> Features {
        [self.sentiment, self.similarity, self.neighbor_label]
    }
}
