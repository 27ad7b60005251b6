use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::embedding::EmbeddingError;

/// Errors from the hybrid strategy's model capabilities.
///
/// The heuristic strategy is infallible; only embedding and classification
/// can fail once text is non-blank.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),
}
