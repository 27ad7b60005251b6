//! Versioned classifier artifact format.
//!
//! An artifact is a directory produced by the offline training pipeline:
//!
//! - `manifest.json` — format version, embedding dimension, head kind;
//! - `weights.safetensors` — `classifier.weight` `[1, dim]` and
//!   `classifier.bias` `[1]`.
//!
//! Loading rejects unknown format versions and dimension mismatches instead
//! of silently consuming an incompatible blob.

use std::collections::HashMap;
use std::path::Path;

use candle_core::{Device, Tensor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ClassifierError;

/// Current artifact format version.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Manifest filename inside an artifact directory.
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Weights filename inside an artifact directory.
pub const WEIGHTS_FILENAME: &str = "weights.safetensors";

/// Classifier head kind recorded in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Logistic head: `sigmoid(w . x + b)`.
    Logistic,
}

/// Declared schema of a classifier artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactManifest {
    /// Format version; loading fails on unknown versions.
    pub format_version: u32,
    /// Embedding dimension the head was trained against.
    pub embedding_dim: usize,
    /// Head kind.
    pub kind: ArtifactKind,
}

impl ArtifactManifest {
    /// Manifest for a freshly written logistic artifact.
    pub fn new(embedding_dim: usize) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            embedding_dim,
            kind: ArtifactKind::Logistic,
        }
    }

    /// Reads and validates the manifest from an artifact directory.
    pub fn load(artifact_dir: &Path) -> Result<Self, ClassifierError> {
        let manifest_path = artifact_dir.join(MANIFEST_FILENAME);
        if !manifest_path.exists() {
            return Err(ClassifierError::ArtifactNotFound {
                path: manifest_path,
            });
        }

        let content = std::fs::read_to_string(&manifest_path)?;
        let manifest: Self =
            serde_json::from_str(&content).map_err(|e| ClassifierError::ManifestInvalid {
                reason: e.to_string(),
            })?;

        if manifest.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ClassifierError::UnsupportedVersion {
                found: manifest.format_version,
                supported: ARTIFACT_FORMAT_VERSION,
            });
        }

        if manifest.embedding_dim == 0 {
            return Err(ClassifierError::ManifestInvalid {
                reason: "embedding_dim must be non-zero".to_string(),
            });
        }

        debug!(
            embedding_dim = manifest.embedding_dim,
            ?manifest.kind,
            "Loaded classifier artifact manifest"
        );

        Ok(manifest)
    }

    /// Writes the manifest into an artifact directory.
    pub fn save(&self, artifact_dir: &Path) -> Result<(), ClassifierError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ClassifierError::ManifestInvalid {
                reason: e.to_string(),
            })?;
        std::fs::write(artifact_dir.join(MANIFEST_FILENAME), content)?;
        Ok(())
    }
}

/// Writes a complete logistic artifact (manifest + weights) into `dir`.
///
/// Used by tests and offline tooling; the training loop that produces the
/// weights is out of scope here.
pub fn write_artifact(dir: &Path, weights: &[f32], bias: f32) -> Result<(), ClassifierError> {
    if weights.is_empty() {
        return Err(ClassifierError::ManifestInvalid {
            reason: "weights must be non-empty".to_string(),
        });
    }

    std::fs::create_dir_all(dir)?;
    ArtifactManifest::new(weights.len()).save(dir)?;

    let device = Device::Cpu;
    let weight = Tensor::from_slice(weights, (1, weights.len()), &device)?;
    let bias = Tensor::from_slice(&[bias], (1,), &device)?;

    let tensors = HashMap::from([
        ("classifier.weight".to_string(), weight),
        ("classifier.bias".to_string(), bias),
    ]);
    candle_core::safetensors::save(&tensors, dir.join(WEIGHTS_FILENAME)).map_err(|e| {
        ClassifierError::ArtifactLoadFailed {
            reason: format!("Failed to write weights: {}", e),
        }
    })?;

    Ok(())
}
