//! Valence-lexicon sentiment scorer.
//!
//! Word valences are on a `[-4, 4]` scale. Negators within the three preceding
//! tokens flip and dampen a valence, intensifiers scale it, and a contrastive
//! "but" down-weights what came before it. The summed valence is squashed into
//! `[-1, 1]` with `x / sqrt(x² + ALPHA)`.

use super::{SentimentError, SentimentScorer};

/// Normalization constant for the compound score.
const ALPHA: f32 = 15.0;

/// Multiplier applied to a valence preceded by a negator.
const NEGATION_SCALAR: f32 = -0.74;

/// Additive boost (in the valence's direction) from an intensifier.
const BOOSTER_INCREMENT: f32 = 0.293;

/// How far back a negator or intensifier reaches.
const LOOKBACK: usize = 3;

pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("love", 3.2),
    ("loved", 2.9),
    ("like", 1.5),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("fair", 1.3),
    ("fairness", 1.6),
    ("free", 2.3),
    ("freedom", 3.2),
    ("protect", 1.6),
    ("protects", 1.5),
    ("safe", 1.9),
    ("secure", 1.4),
    ("strong", 2.3),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("supports", 1.5),
    ("benefit", 2.0),
    ("benefits", 1.6),
    ("help", 1.7),
    ("helps", 1.6),
    ("improve", 1.9),
    ("improved", 2.1),
    ("prosperity", 2.6),
    ("opportunity", 1.8),
    ("justice", 2.4),
    ("equal", 1.3),
    ("win", 2.8),
    ("victory", 2.8),
    ("thriving", 2.3),
    ("honest", 2.3),
    ("responsible", 1.3),
    // Negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("hate", -2.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("crisis", -3.1),
    ("disaster", -3.1),
    ("dangerous", -2.1),
    ("threat", -2.4),
    ("attack", -2.1),
    ("attacks", -1.9),
    ("corrupt", -3.0),
    ("corruption", -2.8),
    ("lie", -1.6),
    ("lies", -1.8),
    ("fraud", -2.8),
    ("illegal", -2.6),
    ("unfair", -2.1),
    ("injustice", -2.7),
    ("poverty", -2.3),
    ("violence", -3.1),
    ("crime", -2.5),
    ("kill", -3.7),
    ("killed", -3.5),
    ("destroy", -2.8),
    ("destroying", -2.6),
    ("waste", -1.8),
    ("weak", -1.9),
    ("radical", -0.6),
    ("extreme", -0.9),
    ("burden", -1.9),
    ("harm", -2.5),
    ("harmful", -2.6),
    ("ban", -2.6),
    ("banned", -2.0),
    ("problem", -1.7),
    ("wrong", -2.1),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "without", "cannot",
    "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "werent", "wont", "shouldnt", "cant",
    "couldnt", "wouldnt", "hasnt", "havent", "hadnt", "aint", "neednt", "mustnt",
];

const BOOSTERS: &[(&str, f32)] = &[
    ("very", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("really", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT),
    ("deeply", BOOSTER_INCREMENT),
    ("totally", BOOSTER_INCREMENT),
    ("so", BOOSTER_INCREMENT),
    ("slightly", -BOOSTER_INCREMENT),
    ("somewhat", -BOOSTER_INCREMENT),
    ("barely", -BOOSTER_INCREMENT),
    ("marginally", -BOOSTER_INCREMENT),
];

/// Built-in lexicon scorer. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }

    /// Raw summed valence before normalization.
    pub fn valence(&self, sentence: &str) -> f32 {
        let tokens = tokenize(sentence);
        let but_at = tokens.iter().position(|t| t == "but");

        let mut total = 0.0_f32;
        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = lookup(token) else {
                continue;
            };

            let window = &tokens[i.saturating_sub(LOOKBACK)..i];
            for prior in window {
                if let Some(boost) = booster(prior) {
                    valence += boost * valence.signum();
                }
            }
            if window.iter().any(|t| is_negator(t)) {
                valence *= NEGATION_SCALAR;
            }

            if let Some(pos) = but_at {
                if i < pos {
                    valence *= 0.5;
                } else if i > pos {
                    valence *= 1.5;
                }
            }

            total += valence;
        }
        total
    }
}

impl SentimentScorer for LexiconSentiment {
    fn polarity(&self, sentence: &str) -> Result<f32, SentimentError> {
        Ok(compound(self.valence(sentence)))
    }
}

/// Squashes a summed valence into `[-1, 1]`.
pub fn compound(valence: f32) -> f32 {
    if valence == 0.0 {
        return 0.0;
    }
    (valence / (valence * valence + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

fn lookup(token: &str) -> Option<f32> {
    LEXICON
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, valence)| valence)
}

fn booster(token: &str) -> Option<f32> {
    BOOSTERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, boost)| boost)
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token)
}
