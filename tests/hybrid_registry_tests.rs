//! End-to-end tests for the hybrid strategy over real and stub registries.

use std::sync::Arc;

use veridoc::classifier::write_artifact;
use veridoc::config::Config;
use veridoc::constants::DEFAULT_EMBEDDING_DIM;
use veridoc::document::DocumentMetadata;
use veridoc::registry::ModelRegistry;
use veridoc::scoring::{HybridScorer, score_hybrid};

/// Registry with a stub embedder and a real logistic artifact whose bias
/// forces the probability towards `sigmoid(bias)`.
fn registry_with_bias(bias: f32) -> (tempfile::TempDir, Arc<ModelRegistry>) {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path(), &vec![0.0; DEFAULT_EMBEDDING_DIM], bias).unwrap();

    let config = Config {
        classifier_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let registry = ModelRegistry::initialize(&config).unwrap();
    (dir, registry)
}

#[test]
fn test_hybrid_score_is_not_clamped_above_one_hundred() {
    // Documents current behavior, not an endorsement: the heuristic strategy
    // clamps, the hybrid one does not.
    let (_dir, registry) = registry_with_bias(100.0);
    let scorer = HybridScorer::new(registry);

    let (score, breakdown) = scorer
        .score(
            "Deed signed 2021, amounts 1,000 and 2,000, signature present",
            &DocumentMetadata::default(),
        )
        .unwrap();

    let model = breakdown.find("model_probability").unwrap();
    assert!(model.score > 99.9);
    assert!(score > 100.0);
}

#[test]
fn test_hybrid_score_tracks_the_classifier_probability() {
    let (_dir_low, low_registry) = registry_with_bias(-100.0);
    let (_dir_high, high_registry) = registry_with_bias(100.0);

    let text = "property agreement";
    let (low, _) = score_hybrid(&low_registry, text, &DocumentMetadata::default()).unwrap();
    let (high, _) = score_hybrid(&high_registry, text, &DocumentMetadata::default()).unwrap();

    // Same boosters either side; only the model contribution differs.
    assert!((high - low - 100.0).abs() < 0.1);
}

#[test]
fn test_zero_bias_artifact_scores_fifty_plus_boosters() {
    let (_dir, registry) = registry_with_bias(0.0);
    let scorer = HybridScorer::new(registry);

    // sigmoid(0) = 0.5 regardless of the embedding.
    let (score, breakdown) = scorer
        .score("signed 2021, 1,000", &DocumentMetadata::default())
        .unwrap();

    let model = breakdown.find("model_probability").unwrap();
    assert!((model.score - 50.0).abs() < 1e-4);
    // Boosters: 2 numeric entities (+4), date (+5), signature (+5).
    assert!((score - 64.0).abs() < 1e-4);
}

#[test]
fn test_stub_registry_is_deterministic_across_instances() {
    let text = "Invoice #1 for asset purchase, total 50,000, signed 2022";
    let metadata = DocumentMetadata::default();

    let first = score_hybrid(&ModelRegistry::stub().unwrap(), text, &metadata).unwrap();
    let second = score_hybrid(&ModelRegistry::stub().unwrap(), text, &metadata).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_concurrent_scoring_needs_no_coordination() {
    let (_dir, registry) = registry_with_bias(0.0);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let scorer = HybridScorer::new(registry);
                let text = format!("deed number {i} signed 2021");
                scorer.score(&text, &DocumentMetadata::default()).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let (score, breakdown) = handle.join().unwrap();
        assert!(score > 0.0);
        assert_eq!(breakdown.entries()[0].reason, "model_probability");
    }
}

#[test]
fn test_empty_document_bypasses_the_models() {
    // A registry pointing at a broken artifact would fail on use; blank text
    // must not touch the models at all.
    let scorer = HybridScorer::new(ModelRegistry::stub().unwrap());
    let (score, breakdown) = scorer.score("   ", &DocumentMetadata::default()).unwrap();
    assert_eq!(score, 0.0);
    assert_eq!(breakdown.entries()[0].reason, "no_text");
}
