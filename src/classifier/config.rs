use std::path::PathBuf;

use crate::constants::DEFAULT_EMBEDDING_DIM;
use crate::classifier::error::ClassifierError;

#[derive(Debug, Clone)]
/// Configuration for [`ArtifactClassifier`](super::ArtifactClassifier).
pub struct ClassifierConfig {
    /// Artifact directory (`manifest.json` + `weights.safetensors`).
    pub artifact_dir: PathBuf,
    /// Expected embedding dimension.
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no artifact required).
    pub testing_stub: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::new(),
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl ClassifierConfig {
    /// Creates a config for an artifact directory.
    pub fn new<P: Into<PathBuf>>(artifact_dir: P) -> Self {
        Self {
            artifact_dir: artifact_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no artifact; deterministic probabilities).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.testing_stub {
            return Ok(());
        }

        if self.artifact_dir.as_os_str().is_empty() {
            return Err(ClassifierError::InvalidConfig {
                reason: "artifact_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.artifact_dir.is_dir() {
            return Err(ClassifierError::ArtifactNotFound {
                path: self.artifact_dir.clone(),
            });
        }

        Ok(())
    }
}
