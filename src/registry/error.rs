use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::embedding::EmbeddingError;

/// Errors during model registry initialization. Fatal: the caller is
/// expected to abort, not retry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error(
        "embedding dimension mismatch: embedder produces {embedder}, classifier expects {classifier}"
    )]
    DimensionMismatch { embedder: usize, classifier: usize },
}
