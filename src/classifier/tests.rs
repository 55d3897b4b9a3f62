use super::*;
use crate::corpus::{Leaning, ReferenceCorpus};
use crate::embedding::MockEmbedder;
use crate::sentiment::MockSentiment;
use tempfile::NamedTempFile;

fn separable_rows() -> Vec<(Features, u8)> {
    let mut rows = Vec::new();
    for i in 0..8 {
        let jitter = i as f32 * 0.01;
        rows.push(([0.5 + jitter, 0.9 - jitter, 1.0], 1));
        rows.push(([-0.5 - jitter, 0.9 - jitter, -1.0], 2));
        rows.push(([jitter, 0.1 + jitter, 0.0], 0));
    }
    rows
}

#[test]
fn test_fit_separates_leanings() {
    let rows = separable_rows();
    let model = LeaningClassifier::fit(&rows, &TrainingParams::default()).unwrap();

    assert_eq!(model.classes().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(model.predict(&[0.5, 0.9, 1.0]).unwrap(), Leaning::Liberal);
    assert_eq!(model.predict(&[-0.5, 0.9, -1.0]).unwrap(), Leaning::Conservative);
    assert_eq!(model.predict(&[0.0, 0.1, 0.0]).unwrap(), Leaning::Neutral);
    assert!(model.accuracy(&rows) > 0.9);
}

#[test]
fn test_fit_is_deterministic_for_seed() {
    let rows = separable_rows();
    let params = TrainingParams::default();
    let a = LeaningClassifier::fit(&rows, &params).unwrap();
    let b = LeaningClassifier::fit(&rows, &params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_fit_rejects_too_few_samples() {
    let rows = vec![([0.0, 0.5, 1.0], 1), ([0.0, 0.5, -1.0], 2)];
    let err = LeaningClassifier::fit(&rows, &TrainingParams::default()).unwrap_err();
    assert!(matches!(
        err,
        ClassifierError::InsufficientData {
            samples: 2,
            required: 4
        }
    ));
}

#[test]
fn test_fit_rejects_single_class() {
    let rows = vec![([0.1, 0.5, 1.0], 1); 6];
    let err = LeaningClassifier::fit(&rows, &TrainingParams::default()).unwrap_err();
    assert!(matches!(err, ClassifierError::InsufficientClasses { found: 1 }));
}

#[test]
fn test_fit_rejects_non_finite_features() {
    let mut rows = separable_rows();
    rows[3].0[1] = f32::NAN;
    let err = LeaningClassifier::fit(&rows, &TrainingParams::default()).unwrap_err();
    assert!(matches!(err, ClassifierError::InvalidFeatures { index: 3 }));
}

#[test]
fn test_divergent_training_reports_not_converged() {
    let params = TrainingParams {
        learning_rate: f32::INFINITY,
        ..TrainingParams::default()
    };
    let err = LeaningClassifier::fit(&separable_rows(), &params).unwrap_err();
    assert!(matches!(err, ClassifierError::NotConverged { .. }));
}

#[test]
fn test_save_and_load_round_trip() {
    let model = LeaningClassifier::fit(&separable_rows(), &TrainingParams::default()).unwrap();
    let file = NamedTempFile::new().unwrap();
    model.save(file.path()).unwrap();

    let loaded = LeaningClassifier::load(file.path()).unwrap();
    assert_eq!(loaded, model);
}

#[test]
fn test_load_rejects_unknown_version() {
    let model = LeaningClassifier::fit(&separable_rows(), &TrainingParams::default()).unwrap();
    let mut json = serde_json::to_value(&model).unwrap();
    json["version"] = serde_json::json!(99);

    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), json.to_string()).unwrap();

    assert!(matches!(
        LeaningClassifier::load(file.path()),
        Err(ClassifierError::UnsupportedVersion { found: 99 })
    ));
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        LeaningClassifier::load("/nonexistent/classifier.json"),
        Err(ClassifierError::Io { .. })
    ));
}

fn training_corpus() -> (ReferenceCorpus, MockEmbedder) {
    let corpus = ReferenceCorpus::from_partitions(
        ["lib a", "lib b"],
        ["con a", "con b"],
        ["neu a", "neu b"],
    );
    let embedder = MockEmbedder::new(4)
        .with_vector("lib a", vec![1.0, 0.0, 0.0, 0.0])
        .with_vector("lib b", vec![0.99, 0.141, 0.0, 0.0])
        .with_vector("con a", vec![0.0, 0.0, 0.0, 1.0])
        .with_vector("con b", vec![0.0, 0.0, 0.141, 0.99])
        .with_vector("neu a", vec![0.0, 1.0, 0.0, 0.0])
        .with_vector("neu b", vec![0.0, 0.6, 0.8, 0.0]);
    (corpus, embedder)
}

#[tokio::test]
async fn test_trainer_collects_one_sample_per_reference_sentence() {
    let (corpus, embedder) = training_corpus();
    let sentiment = MockSentiment::new().with_score("lib a", 0.5);

    let samples = ClassifierTrainer::new(&corpus, &embedder, &sentiment)
        .collect_samples()
        .await
        .unwrap();

    assert_eq!(embedder.call_count(), 1);
    assert_eq!(samples.len(), corpus.len());

    // "lib a" pairs with "lib b", never with itself
    let first = &samples[0];
    assert_eq!(first.class, 1);
    assert_eq!(first.features[0], 0.5);
    assert!(first.features[1] > 0.98 && first.features[1] < 1.0);
    assert_eq!(first.features[2], 1.0);

    // conservative labels are remapped to class 2
    assert_eq!(samples[2].class, 2);
    assert_eq!(samples[2].features[2], -1.0);
    assert_eq!(samples[4].class, 0);
}

#[tokio::test]
async fn test_trainer_fits_model() {
    let (corpus, embedder) = training_corpus();
    let sentiment = MockSentiment::new();

    let outcome = ClassifierTrainer::new(&corpus, &embedder, &sentiment)
        .train()
        .await
        .unwrap();

    assert_eq!(outcome.samples.len(), 6);
    assert!((0.0..=1.0).contains(&outcome.accuracy));
    assert_eq!(outcome.classifier.classes().count(), 3);
}

#[tokio::test]
async fn test_trainer_rejects_tiny_corpus() {
    let corpus = ReferenceCorpus::from_partitions(["a"], ["b"], Vec::<String>::new());
    let embedder = MockEmbedder::new(4);
    let sentiment = MockSentiment::new();

    let err = ClassifierTrainer::new(&corpus, &embedder, &sentiment)
        .train()
        .await
        .unwrap_err();
    assert!(matches!(err, ClassifierError::InsufficientData { .. }));
    assert_eq!(embedder.call_count(), 0);
}

#[tokio::test]
async fn test_trainer_propagates_sentiment_failure() {
    let (corpus, embedder) = training_corpus();
    let sentiment = MockSentiment::new().with_failure("con b");

    let err = ClassifierTrainer::new(&corpus, &embedder, &sentiment)
        .collect_samples()
        .await
        .unwrap_err();
    assert!(matches!(err, ClassifierError::Sentiment(_)));
}
