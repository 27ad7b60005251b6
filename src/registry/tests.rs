use super::*;

use std::sync::Arc;

use crate::classifier::write_artifact;
use crate::config::Config;
use crate::constants::DEFAULT_EMBEDDING_DIM;

#[test]
fn test_default_config_initializes_stub_registry() {
    let registry = ModelRegistry::stub().unwrap();
    assert!(registry.is_stub());
    assert!(registry.embedder().is_stub());
    assert!(registry.classifier().is_stub());
    assert_eq!(registry.embedder().embedding_dim(), DEFAULT_EMBEDDING_DIM);
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = ModelRegistry::stub().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let embedding = registry.embedder().encode("title deed").unwrap();
                registry.classifier().predict_probability(&embedding).unwrap()
            })
        })
        .collect();

    let probabilities: Vec<f32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    // Same input, same read-only models: every thread sees the same value.
    assert!(probabilities.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_broken_classifier_dir_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // Directory exists but contains no manifest.
    let config = Config {
        classifier_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };

    assert!(matches!(
        ModelRegistry::initialize(&config),
        Err(RegistryError::Classifier(_))
    ));
}

#[test]
fn test_real_artifact_with_stub_embedder() {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path(), &vec![0.0; DEFAULT_EMBEDDING_DIM], 0.0).unwrap();

    let config = Config {
        classifier_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let registry = ModelRegistry::initialize(&config).unwrap();
    assert!(registry.embedder().is_stub());
    assert!(!registry.classifier().is_stub());

    let embedding = registry.embedder().encode("deed").unwrap();
    let p = registry.classifier().predict_probability(&embedding).unwrap();
    assert!((p - 0.5).abs() < 1e-6);
}
