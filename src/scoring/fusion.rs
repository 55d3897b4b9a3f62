use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use super::error::ScoringError;
use super::types::BiasScore;
use crate::classifier::LeaningClassifier;
use crate::constants::{MAGNITUDE_CAP, SEMANTIC_THRESHOLD, SENTIMENT_THRESHOLD};
use crate::corpus::Leaning;

/// Heuristic fusion of neighbor label, similarity and sentiment.
///
/// A close match (`similarity >= SEMANTIC_THRESHOLD`) takes the neighbor's
/// leaning as is. Otherwise sentiment decides: for a partisan neighbor the
/// signed sentiment can flip the direction (negative talk about a
/// conservative position leans liberal), for a neutral one only its strength
/// scales the result.
pub fn fuse(neighbor_label: f32, similarity: f32, sentiment: f32) -> f32 {
    let mut intensity = similarity * neighbor_label;

    if similarity.abs() < SEMANTIC_THRESHOLD {
        let mut label = neighbor_label;
        // Inert for integer labels; only affects branch selection.
        if label.abs() < MAGNITUDE_CAP {
            label = if label < 0.0 {
                -MAGNITUDE_CAP
            } else {
                MAGNITUDE_CAP
            };
        }

        if label.abs() > SENTIMENT_THRESHOLD {
            intensity *= sentiment;
        } else {
            intensity *= sentiment.abs();
        }
    }

    intensity
}

/// Fusion with an externally chosen direction.
///
/// Magnitude is `|similarity * neighbor_label|`, further scaled by
/// `|sentiment|` once that exceeds `MAGNITUDE_CAP`.
pub fn fuse_with_direction(
    direction: Leaning,
    neighbor_label: f32,
    similarity: f32,
    sentiment: f32,
) -> f32 {
    let mut intensity = (similarity * neighbor_label).abs() * direction.value();
    if sentiment.abs() > MAGNITUDE_CAP {
        intensity *= sentiment.abs();
    }
    intensity
}

/// How sentence signals become an intensity. Fixed per analyzer.
#[derive(Debug, Clone, Default)]
pub enum FusionStrategy {
    #[default]
    Heuristic,
    Classifier(Arc<LeaningClassifier>),
}

impl FusionStrategy {
    /// Wraps a fitted model. Fails if the model knows classes outside the
    /// three leanings.
    pub fn classifier(model: LeaningClassifier) -> Result<Self, ScoringError> {
        if let Some(label) = model
            .classes()
            .find(|&c| Leaning::from_class_label(c).is_none())
        {
            return Err(ScoringError::ClassifierUnavailable {
                reason: format!("model has unknown class label {label}"),
            });
        }
        Ok(Self::Classifier(Arc::new(model)))
    }

    /// Picks the strategy from configuration, loading the model when asked to.
    pub fn load(use_classifier: bool, path: Option<&Path>) -> Result<Self, ScoringError> {
        if !use_classifier {
            return Ok(Self::Heuristic);
        }

        let path = path.ok_or_else(|| ScoringError::ClassifierUnavailable {
            reason: "classifier enabled but no model path configured".to_string(),
        })?;
        let model =
            LeaningClassifier::load(path).map_err(|e| ScoringError::ClassifierUnavailable {
                reason: e.to_string(),
            })?;

        info!(path = %path.display(), "Using classifier fusion");
        Self::classifier(model)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Heuristic => "heuristic",
            Self::Classifier(_) => "classifier",
        }
    }

    /// Signed intensity for one sentence.
    pub fn intensity(&self, score: &BiasScore) -> Result<f32, ScoringError> {
        match self {
            Self::Heuristic => Ok(fuse(score.neighbor_label, score.similarity, score.sentiment)),
            Self::Classifier(model) => {
                let direction = model.predict(&score.features()).map_err(|e| {
                    ScoringError::ClassifierUnavailable {
                        reason: e.to_string(),
                    }
                })?;
                debug!(direction = %direction, "Classifier direction");
                Ok(fuse_with_direction(
                    direction,
                    score.neighbor_label,
                    score.similarity,
                    score.sentiment,
                ))
            }
        }
    }
}
