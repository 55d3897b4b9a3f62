use super::*;
use crate::classifier::{Features, LeaningClassifier, TrainingParams};
use crate::corpus::{CorpusError, Leaning};
use crate::search::SearchError;
use std::path::Path;
use tempfile::NamedTempFile;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

fn fitted_model() -> LeaningClassifier {
    let mut rows: Vec<(Features, u8)> = Vec::new();
    for i in 0..8 {
        let j = i as f32 * 0.01;
        rows.push(([0.5 + j, 0.9 - j, 1.0], 1));
        rows.push(([-0.5 - j, 0.9 - j, -1.0], 2));
        rows.push(([j, 0.1 + j, 0.0], 0));
    }
    LeaningClassifier::fit(&rows, &TrainingParams::default()).unwrap()
}

mod heuristic {
    use super::*;

    #[test]
    fn test_close_match_takes_neighbor_leaning() {
        assert!(approx(fuse(1.0, 0.9, -0.8), 0.9));
        assert!(approx(fuse(-1.0, 0.8, 0.7), -0.8));
        assert!(approx(fuse(1.0, 0.75, -1.0), 0.75));
    }

    #[test]
    fn test_weak_match_signed_sentiment_can_flip_direction() {
        // negative talk about a conservative position leans liberal
        assert!(approx(fuse(-1.0, 0.5, -0.6), 0.3));
        assert!(approx(fuse(1.0, 0.5, -0.6), -0.3));
    }

    #[test]
    fn test_neutral_neighbor_is_zero() {
        assert_eq!(fuse(0.0, 0.5, -0.9), 0.0);
        assert_eq!(fuse(0.0, 0.95, 0.9), 0.0);
    }

    #[test]
    fn test_weak_label_uses_sentiment_strength_only() {
        // 0.2 clamps to 0.33, below the sentiment threshold
        assert!(approx(fuse(0.2, 0.5, -0.6), 0.06));
        // 0.35 is not clamped but still below the threshold
        assert!(approx(fuse(0.35, 0.5, -0.6), 0.105));
        // 0.5 is above it, so the sign of the sentiment applies
        assert!(approx(fuse(0.5, 0.5, -0.6), -0.15));
    }

    #[test]
    fn test_zero_similarity_is_zero() {
        assert_eq!(fuse(1.0, 0.0, 1.0), 0.0);
    }
}

mod directed {
    use super::*;

    #[test]
    fn test_direction_overrides_label_sign() {
        assert!(approx(fuse_with_direction(Leaning::Conservative, 1.0, 0.6, 0.2), -0.6));
        assert!(approx(fuse_with_direction(Leaning::Liberal, -1.0, 0.6, 0.2), 0.6));
        assert_eq!(fuse_with_direction(Leaning::Neutral, 1.0, 0.6, 0.9), 0.0);
    }

    #[test]
    fn test_strong_sentiment_scales_magnitude() {
        assert!(approx(fuse_with_direction(Leaning::Liberal, 1.0, 0.6, -0.5), 0.3));
        // at the cap sentiment is ignored
        assert!(approx(fuse_with_direction(Leaning::Liberal, 1.0, 0.6, 0.33), 0.6));
    }
}

mod strategy {
    use super::*;

    #[test]
    fn test_load_heuristic_when_disabled() {
        let strategy = FusionStrategy::load(false, None).unwrap();
        assert!(matches!(strategy, FusionStrategy::Heuristic));
        assert_eq!(strategy.name(), "heuristic");
    }

    #[test]
    fn test_load_without_path_is_unavailable() {
        let err = FusionStrategy::load(true, None).unwrap_err();
        assert!(matches!(err, ScoringError::ClassifierUnavailable { .. }));
    }

    #[test]
    fn test_load_missing_model_is_unavailable() {
        let err =
            FusionStrategy::load(true, Some(Path::new("/nonexistent/model.json"))).unwrap_err();
        assert!(matches!(err, ScoringError::ClassifierUnavailable { .. }));
    }

    #[test]
    fn test_load_saved_model() {
        let file = NamedTempFile::new().unwrap();
        fitted_model().save(file.path()).unwrap();

        let strategy = FusionStrategy::load(true, Some(file.path())).unwrap();
        assert_eq!(strategy.name(), "classifier");
    }

    #[test]
    fn test_classifier_rejects_unknown_classes() {
        let rows: Vec<(Features, u8)> = (0..6)
            .map(|i| ([i as f32, 0.5, 1.0], if i % 2 == 0 { 1 } else { 7 }))
            .collect();
        let model = LeaningClassifier::fit(&rows, &TrainingParams::default()).unwrap();
        assert!(matches!(
            FusionStrategy::classifier(model),
            Err(ScoringError::ClassifierUnavailable { .. })
        ));
    }

    #[test]
    fn test_heuristic_intensity_matches_fuse() {
        let score = BiasScore::new(-1.0, 0.5, -0.6);
        let value = FusionStrategy::Heuristic.intensity(&score).unwrap();
        assert!(approx(value, fuse(-1.0, 0.5, -0.6)));
    }

    #[test]
    fn test_classifier_intensity_uses_predicted_direction() {
        let strategy = FusionStrategy::classifier(fitted_model()).unwrap();

        let liberal = strategy.intensity(&BiasScore::new(1.0, 0.9, 0.5)).unwrap();
        assert!(approx(liberal, 0.9 * 0.5));

        let conservative = strategy.intensity(&BiasScore::new(-1.0, 0.9, -0.5)).unwrap();
        assert!(approx(conservative, -0.9 * 0.5));
    }

    #[test]
    fn test_features_order() {
        assert_eq!(BiasScore::new(1.0, 0.8, -0.2).features(), [-0.2, 0.8, 1.0]);
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_search_errors_flatten() {
        let err: ScoringError = SearchError::NoAdmissibleNeighbor {
            index: 0,
            k: 2,
            blacklisted: 2,
        }
        .into();
        assert!(matches!(
            err,
            ScoringError::NoAdmissibleNeighbor { k: 2, .. }
        ));

        let err: ScoringError = SearchError::IndexOutOfRange { index: 9, len: 1 }.into();
        assert!(matches!(err, ScoringError::Search(_)));
    }

    #[test]
    fn test_corpus_errors_flatten() {
        let err: ScoringError = CorpusError::UnknownSentence {
            sentence: "x".to_string(),
        }
        .into();
        assert!(matches!(err, ScoringError::UnknownSentence { ref sentence } if sentence == "x"));
        assert!(matches!(
            ScoringError::from(CorpusError::Empty),
            ScoringError::Corpus(CorpusError::Empty)
        ));
    }

    #[test]
    fn test_only_empty_article_is_invalid_input() {
        assert!(ScoringError::EmptyArticle.is_invalid_input());
        assert!(!ScoringError::ClassifierUnavailable { reason: String::new() }.is_invalid_input());
    }
}
