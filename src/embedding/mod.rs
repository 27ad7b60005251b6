//! Sentence-embedding capability for the hybrid strategy.
//!
//! [`sentence`] wraps a MiniLM-class BERT encoder (safetensors + tokenizer)
//! behind [`SentenceEmbedder`]; use [`SentenceConfig::stub`] in tests and
//! environments without model files.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Sentence encoder.
pub mod sentence;

pub use error::EmbeddingError;
pub use sentence::{SentenceConfig, SentenceEmbedder};
