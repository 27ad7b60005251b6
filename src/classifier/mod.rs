//! Classifier capability for the hybrid strategy.
//!
//! [`ArtifactClassifier`] maps a sentence embedding to the probability that
//! the document belongs to the "valid asset document" class. The model is an
//! offline-trained [`artifact`] loaded once and read-only afterwards; use
//! [`ClassifierConfig::stub`] in tests and environments without an artifact.

pub mod artifact;
/// Classifier configuration.
pub mod config;
pub mod error;


pub use artifact::{ARTIFACT_FORMAT_VERSION, ArtifactKind, ArtifactManifest, write_artifact};
pub use config::ClassifierConfig;
pub use error::ClassifierError;

use candle_core::{DType, Device, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use tracing::{debug, info, warn};

enum ClassifierBackend {
    Model {
        head: Linear,
        device: Device,
        manifest: ArtifactManifest,
    },
    Stub,
}

/// Probability model over sentence embeddings (supports stub mode).
pub struct ArtifactClassifier {
    backend: ClassifierBackend,
    embedding_dim: usize,
}

impl std::fmt::Debug for ArtifactClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactClassifier")
            .field(
                "backend",
                &match &self.backend {
                    ClassifierBackend::Model { manifest, .. } => {
                        format!("Model(v{}, dim {})", manifest.format_version, manifest.embedding_dim)
                    }
                    ClassifierBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.embedding_dim)
            .finish()
    }
}

impl ArtifactClassifier {
    /// Loads the classifier from a config (stub mode is supported).
    pub fn load(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Classifier running in STUB mode (testing only)");
            return Ok(Self {
                backend: ClassifierBackend::Stub,
                embedding_dim: config.embedding_dim,
            });
        }

        let manifest = ArtifactManifest::load(&config.artifact_dir)?;
        if manifest.embedding_dim != config.embedding_dim {
            return Err(ClassifierError::DimensionMismatch {
                expected: config.embedding_dim,
                actual: manifest.embedding_dim,
            });
        }

        let weights_path = config.artifact_dir.join(artifact::WEIGHTS_FILENAME);
        if !weights_path.exists() {
            return Err(ClassifierError::ArtifactNotFound { path: weights_path });
        }

        let device = Device::Cpu;
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device).map_err(
                |e| ClassifierError::ArtifactLoadFailed {
                    reason: e.to_string(),
                },
            )?
        };
        let head = candle_nn::linear(manifest.embedding_dim, 1, vb.pp("classifier")).map_err(
            |e| ClassifierError::ArtifactLoadFailed {
                reason: format!("Failed to load logistic head: {}", e),
            },
        )?;

        info!(
            artifact_dir = %config.artifact_dir.display(),
            embedding_dim = manifest.embedding_dim,
            format_version = manifest.format_version,
            "Classifier artifact loaded"
        );

        Ok(Self {
            backend: ClassifierBackend::Model {
                head,
                device,
                manifest,
            },
            embedding_dim: config.embedding_dim,
        })
    }

    /// Probability in `[0, 1]` that the embedded document is a valid asset
    /// document.
    pub fn predict_probability(&self, embedding: &[f32]) -> Result<f32, ClassifierError> {
        if embedding.len() != self.embedding_dim {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.embedding_dim,
                actual: embedding.len(),
            });
        }

        match &self.backend {
            ClassifierBackend::Model { head, device, .. } => {
                let input = Tensor::from_slice(embedding, (1, embedding.len()), device)?;
                let logit = head.forward(&input)?;
                let probability = candle_nn::ops::sigmoid(&logit)?
                    .flatten_all()?
                    .to_vec1::<f32>()?[0];

                debug!(probability = probability, "Classifier inference complete");

                Ok(probability.clamp(0.0, 1.0))
            }
            ClassifierBackend::Stub => Ok(Self::stub_probability(embedding)),
        }
    }

    /// Returns the expected embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, ClassifierBackend::Stub)
    }

    // Deterministic pseudo-probability from the embedding bits.
    fn stub_probability(embedding: &[f32]) -> f32 {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        for value in embedding {
            value.to_bits().hash(&mut hasher);
        }

        (hasher.finish() % 10_000) as f32 / 10_000.0
    }
}
