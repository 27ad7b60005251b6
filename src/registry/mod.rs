//! Process-wide model state.
//!
//! The embedder and classifier are loaded exactly once, before any scoring
//! call, via [`ModelRegistry::initialize`]. The returned `Arc` handle is the
//! only way to reach the models, so "score before init" cannot be expressed;
//! after initialization the registry is read-only and needs no locks.
//! Initialization failure is fatal to the caller: there is no retry and no
//! degraded fallback.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::RegistryError;

use std::sync::Arc;

use tracing::{info, warn};

use crate::classifier::{ArtifactClassifier, ClassifierConfig};
use crate::config::Config;
use crate::embedding::{SentenceConfig, SentenceEmbedder};

/// Immutable holder of the loaded embedding model and classifier artifact.
///
/// Shared freely across concurrent scoring calls; lives for the process
/// lifetime.
pub struct ModelRegistry {
    embedder: SentenceEmbedder,
    classifier: ArtifactClassifier,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("embedder", &self.embedder)
            .field("classifier", &self.classifier)
            .finish()
    }
}

impl ModelRegistry {
    /// Loads both models per `config` and returns the shared handle.
    ///
    /// Missing model paths fall back to stub mode with a warning, mirroring
    /// how the server boots without model files; a present-but-broken path is
    /// an error.
    pub fn initialize(config: &Config) -> Result<Arc<Self>, RegistryError> {
        let sentence_config = match &config.embed_model_dir {
            Some(dir) => {
                let mut c = SentenceConfig::new(dir.clone());
                c.max_seq_len = config.max_seq_len;
                c
            }
            None => {
                warn!("No embedding model dir configured, running embedder in stub mode");
                SentenceConfig::stub()
            }
        };
        let embedder = SentenceEmbedder::load(sentence_config)?;

        let classifier_config = match &config.classifier_dir {
            Some(dir) => {
                let mut c = ClassifierConfig::new(dir.clone());
                c.embedding_dim = embedder.embedding_dim();
                c
            }
            None => {
                warn!("No classifier artifact dir configured, running classifier in stub mode");
                ClassifierConfig {
                    embedding_dim: embedder.embedding_dim(),
                    ..ClassifierConfig::stub()
                }
            }
        };
        let classifier = ArtifactClassifier::load(classifier_config)?;

        if classifier.embedding_dim() != embedder.embedding_dim() {
            return Err(RegistryError::DimensionMismatch {
                embedder: embedder.embedding_dim(),
                classifier: classifier.embedding_dim(),
            });
        }

        info!(
            embedder_stub = embedder.is_stub(),
            classifier_stub = classifier.is_stub(),
            embedding_dim = embedder.embedding_dim(),
            "Model registry initialized"
        );

        Ok(Arc::new(Self {
            embedder,
            classifier,
        }))
    }

    /// Builds a fully stubbed registry (no model files required).
    #[cfg(any(test, feature = "mock"))]
    pub fn stub() -> Result<Arc<Self>, RegistryError> {
        Self::initialize(&Config::default())
    }

    /// The loaded sentence embedder.
    pub fn embedder(&self) -> &SentenceEmbedder {
        &self.embedder
    }

    /// The loaded classifier.
    pub fn classifier(&self) -> &ArtifactClassifier {
        &self.classifier
    }

    /// Returns `true` if either capability runs in stub mode.
    pub fn is_stub(&self) -> bool {
        self.embedder.is_stub() || self.classifier.is_stub()
    }
}
