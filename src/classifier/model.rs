use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::ClassifierError;
use crate::corpus::Leaning;

/// Number of features per sample: `[sentiment, similarity, neighbor_label]`.
pub const FEATURE_COUNT: usize = 3;

pub type Features = [f32; FEATURE_COUNT];

const FORMAT_VERSION: u32 = 1;

/// Standard deviations below this are treated as constant features.
const MIN_SCALE: f32 = 1e-6;

/// SGD hyperparameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingParams {
    pub epochs: usize,
    pub learning_rate: f32,
    /// L2 regularization strength.
    pub regularization: f32,
    /// Seed for the per-epoch sample shuffle.
    pub seed: u64,
    pub min_samples: usize,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            epochs: 60,
            learning_rate: 0.1,
            regularization: 1e-3,
            seed: 42,
            min_samples: 4,
        }
    }
}

/// One-vs-rest separating hyperplane for a single class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassHyperplane {
    pub class: u8,
    pub weights: Features,
    pub bias: f32,
}

impl ClassHyperplane {
    #[inline]
    fn decision(&self, x: &Features) -> f32 {
        dot(&self.weights, x) + self.bias
    }
}

/// Linear one-vs-rest SVM over standardized features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaningClassifier {
    version: u32,
    means: Features,
    scales: Features,
    hyperplanes: Vec<ClassHyperplane>,
}

impl LeaningClassifier {
    /// Fits the model on `(features, class_label)` pairs.
    ///
    /// Training is deterministic for a given `params.seed`.
    pub fn fit(
        samples: &[(Features, u8)],
        params: &TrainingParams,
    ) -> Result<Self, ClassifierError> {
        let required = params.min_samples.max(2);
        if samples.len() < required {
            return Err(ClassifierError::InsufficientData {
                samples: samples.len(),
                required,
            });
        }
        if let Some(index) = samples
            .iter()
            .position(|(x, _)| x.iter().any(|v| !v.is_finite()))
        {
            return Err(ClassifierError::InvalidFeatures { index });
        }

        let mut classes: Vec<u8> = samples.iter().map(|(_, c)| *c).collect();
        classes.sort_unstable();
        classes.dedup();
        if classes.len() < 2 {
            return Err(ClassifierError::InsufficientClasses {
                found: classes.len(),
            });
        }

        let (means, scales) = standardization(samples);
        let standardized: Vec<(Features, u8)> = samples
            .iter()
            .map(|(x, c)| (standardize(x, &means, &scales), *c))
            .collect();

        let mut hyperplanes: Vec<ClassHyperplane> = classes
            .iter()
            .map(|&class| ClassHyperplane {
                class,
                weights: [0.0; FEATURE_COUNT],
                bias: 0.0,
            })
            .collect();

        let mut order: Vec<usize> = (0..standardized.len()).collect();
        let mut rng = StdRng::seed_from_u64(params.seed);
        let lambda = params.regularization;
        let mut step = 0_u64;

        for _ in 0..params.epochs {
            order.shuffle(&mut rng);
            for &i in &order {
                step += 1;
                let eta =
                    params.learning_rate / (1.0 + params.learning_rate * lambda * step as f32);
                let (x, class) = &standardized[i];

                for plane in &mut hyperplanes {
                    let y = if plane.class == *class { 1.0 } else { -1.0 };
                    let margin = y * plane.decision(x);
                    let decay = 1.0 - eta * lambda;
                    for w in &mut plane.weights {
                        *w *= decay;
                    }
                    if margin < 1.0 {
                        for (w, xi) in plane.weights.iter_mut().zip(x) {
                            *w += eta * y * xi;
                        }
                        plane.bias += eta * y;
                    }
                }
            }
        }

        let diverged = hyperplanes
            .iter()
            .any(|p| !p.bias.is_finite() || p.weights.iter().any(|w| !w.is_finite()));
        if diverged {
            return Err(ClassifierError::NotConverged {
                reason: format!("non-finite weights after {} epochs", params.epochs),
            });
        }

        let model = Self {
            version: FORMAT_VERSION,
            means,
            scales,
            hyperplanes,
        };
        debug!(
            samples = samples.len(),
            classes = classes.len(),
            epochs = params.epochs,
            "Classifier fitted"
        );
        Ok(model)
    }

    /// Class labels known to the model, ascending.
    pub fn classes(&self) -> impl Iterator<Item = u8> + '_ {
        self.hyperplanes.iter().map(|p| p.class)
    }

    /// Per-class decision values for a raw (unstandardized) feature vector.
    pub fn decision_values(&self, features: &Features) -> Vec<(u8, f32)> {
        let x = standardize(features, &self.means, &self.scales);
        self.hyperplanes
            .iter()
            .map(|p| (p.class, p.decision(&x)))
            .collect()
    }

    /// Highest-scoring class label. Ties go to the lower label.
    pub fn predict_class(&self, features: &Features) -> Option<u8> {
        self.decision_values(features)
            .into_iter()
            .fold(None, |best: Option<(u8, f32)>, (class, value)| match best {
                Some((_, v)) if v >= value => best,
                _ => Some((class, value)),
            })
            .map(|(class, _)| class)
    }

    /// Predicted leaning for `[sentiment, similarity, neighbor_label]`.
    pub fn predict(&self, features: &Features) -> Result<Leaning, ClassifierError> {
        let label = self
            .predict_class(features)
            .ok_or(ClassifierError::UnknownClass { label: u8::MAX })?;
        Leaning::from_class_label(label).ok_or(ClassifierError::UnknownClass { label })
    }

    /// Fraction of samples classified correctly.
    pub fn accuracy(&self, samples: &[(Features, u8)]) -> f32 {
        if samples.is_empty() {
            return 0.0;
        }
        let correct = samples
            .iter()
            .filter(|(x, c)| self.predict_class(x) == Some(*c))
            .count();
        correct as f32 / samples.len() as f32
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ClassifierError> {
        let path = path.as_ref();
        let json = serde_json::to_vec_pretty(self).map_err(ClassifierError::Serialize)?;
        std::fs::write(path, json).map_err(|source| ClassifierError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Classifier saved");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ClassifierError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_slice(&bytes).map_err(|source| ClassifierError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if model.version != FORMAT_VERSION {
            return Err(ClassifierError::UnsupportedVersion {
                found: model.version,
            });
        }
        if let Some(label) = model
            .classes()
            .find(|&c| Leaning::from_class_label(c).is_none())
        {
            return Err(ClassifierError::UnknownClass { label });
        }

        info!(
            path = %path.display(),
            classes = model.hyperplanes.len(),
            "Classifier loaded"
        );
        Ok(model)
    }
}

#[inline]
fn dot(a: &Features, b: &Features) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn standardization(samples: &[(Features, u8)]) -> (Features, Features) {
    let n = samples.len() as f32;
    let mut means = [0.0; FEATURE_COUNT];
    for (x, _) in samples {
        for (m, v) in means.iter_mut().zip(x) {
            *m += v / n;
        }
    }

    let mut scales = [0.0; FEATURE_COUNT];
    for (x, _) in samples {
        for ((s, v), m) in scales.iter_mut().zip(x).zip(&means) {
            *s += (v - m) * (v - m) / n;
        }
    }
    for s in &mut scales {
        *s = s.sqrt();
        if *s < MIN_SCALE {
            *s = 1.0;
        }
    }
    (means, scales)
}

#[inline]
fn standardize(x: &Features, means: &Features, scales: &Features) -> Features {
    let mut out = [0.0; FEATURE_COUNT];
    for i in 0..FEATURE_COUNT {
        out[i] = (x[i] - means[i]) / scales[i];
    }
    out
}
