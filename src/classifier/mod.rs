//! Leaning classifier used by the classifier fusion path.
//!
//! [`LeaningClassifier`] is a one-vs-rest linear SVM over the feature vector
//! `[sentiment, similarity, neighbor_label]`. Class labels follow
//! [`Leaning::class_label`](crate::corpus::Leaning::class_label): conservative
//! is stored as `2` so every label is non-negative.
//!
//! [`ClassifierTrainer`] builds the training set from the reference corpus
//! queried against itself and fits the model. Models persist as JSON.

mod error;
pub mod model;
pub mod trainer;

#[cfg(test)]
mod tests;

pub use error::ClassifierError;
pub use model::{ClassHyperplane, FEATURE_COUNT, Features, LeaningClassifier, TrainingParams};
pub use trainer::{ClassifierTrainer, TrainingOutcome, TrainingSample};
