use tracing::{debug, info};

use super::error::ClassifierError;
use super::model::{Features, LeaningClassifier, TrainingParams};
use crate::constants::TRAINING_NEIGHBORS;
use crate::corpus::{ReferenceCorpus, WorkingCorpus};
use crate::embedding::Embedder;
use crate::search::find_best_admissible;
use crate::sentiment::{SentimentScorer, validate_polarity};

/// A training row derived from one reference sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    pub features: Features,
    pub class: u8,
}

/// Fitted model plus the data it was fitted on.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub classifier: LeaningClassifier,
    pub samples: Vec<TrainingSample>,
    /// Accuracy on the training set.
    pub accuracy: f32,
}

/// Builds classifier training data by querying the reference corpus against itself.
pub struct ClassifierTrainer<'a, E, S> {
    corpus: &'a ReferenceCorpus,
    embedder: &'a E,
    sentiment: &'a S,
    params: TrainingParams,
    neighbors: usize,
}

impl<'a, E: Embedder, S: SentimentScorer> ClassifierTrainer<'a, E, S> {
    pub fn new(corpus: &'a ReferenceCorpus, embedder: &'a E, sentiment: &'a S) -> Self {
        Self {
            corpus,
            embedder,
            sentiment,
            params: TrainingParams::default(),
            neighbors: TRAINING_NEIGHBORS,
        }
    }

    pub fn params(mut self, params: TrainingParams) -> Self {
        self.params = params;
        self
    }

    /// Neighbor window used for each reference sentence.
    pub fn neighbors(mut self, k: usize) -> Self {
        self.neighbors = k;
        self
    }

    /// Computes `[sentiment, similarity, neighbor_label]` and the remapped
    /// class label for every reference sentence.
    pub async fn collect_samples(&self) -> Result<Vec<TrainingSample>, ClassifierError> {
        let required = self.params.min_samples.max(2);
        if self.corpus.len() < required {
            return Err(ClassifierError::InsufficientData {
                samples: self.corpus.len(),
                required,
            });
        }

        let working = WorkingCorpus::build(&[], self.corpus, self.embedder).await?;

        let mut samples = Vec::with_capacity(self.corpus.len());
        for (index, entry) in self.corpus.entries().iter().enumerate() {
            let sentiment = validate_polarity(self.sentiment.polarity(&entry.text)?)?;
            let neighbor = find_best_admissible(&working, index, self.neighbors)?;
            let neighbor_label = self.corpus.label_of(neighbor.sentence)?;

            debug!(
                index,
                sentiment,
                similarity = neighbor.similarity,
                neighbor_label = %neighbor_label,
                "Training sample"
            );

            samples.push(TrainingSample {
                features: [sentiment, neighbor.similarity, neighbor_label.value()],
                class: entry.label.class_label(),
            });
        }
        Ok(samples)
    }

    /// Collects samples and fits a [`LeaningClassifier`].
    pub async fn train(&self) -> Result<TrainingOutcome, ClassifierError> {
        let samples = self.collect_samples().await?;
        let rows: Vec<(Features, u8)> = samples.iter().map(|s| (s.features, s.class)).collect();

        let classifier = LeaningClassifier::fit(&rows, &self.params)?;
        let accuracy = classifier.accuracy(&rows);

        info!(
            samples = rows.len(),
            accuracy,
            neighbors = self.neighbors,
            "Classifier trained"
        );

        Ok(TrainingOutcome {
            classifier,
            samples,
            accuracy,
        })
    }
}
