//! Bias fusion: turning a sentence's neighbor label, neighbor similarity and
//! sentiment polarity into a signed intensity.
//!
//! Positive intensities lean liberal, negative lean conservative, and the
//! magnitude is the strength of the leaning. Two strategies exist:
//!
//! - [`FusionStrategy::Heuristic`] applies [`fuse`], a fixed set of
//!   threshold rules.
//! - [`FusionStrategy::Classifier`] lets a trained
//!   [`LeaningClassifier`](crate::classifier::LeaningClassifier) pick the
//!   direction and keeps the heuristic's magnitude rules.
//!
//! The strategy is chosen once when an analyzer is built and never mixed
//! within a call.

pub mod error;
pub mod fusion;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ScoringError;
pub use fusion::{FusionStrategy, fuse, fuse_with_direction};
pub use types::BiasScore;
