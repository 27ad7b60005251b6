//! Veridoc library crate (used by the CLI binary and integration tests).
//!
//! Explainable plausibility scoring for real-world-asset documents (deeds,
//! invoices, agreements). Every score ships with an ordered breakdown of why
//! it was produced; that audit trail, not the scoring math, is the contract.
//!
//! # Public API Surface
//!
//! ## Scoring (Stable)
//! - [`HeuristicScorer`], [`score_heuristic`] - Transparent rule-based
//!   strategy, clamped to `[0, 100]`
//! - [`HybridScorer`], [`score_hybrid`] - Classifier probability plus
//!   explainable boosters, deliberately unclamped
//! - [`ScoreBreakdown`], [`ScoreContribution`] - The audit trail
//!
//! ## Features
//! - [`FeatureVector`] and the scanners in [`features`] - Deterministic
//!   feature detection with pinned boundary semantics
//! - [`KEYWORD_TABLE`] - Fixed ordered keyword/weight table
//!
//! ## Models
//! - [`ModelRegistry`] - Init-once handle over the embedder + classifier
//! - [`SentenceEmbedder`], [`SentenceConfig`] - Sentence encoder
//! - [`ArtifactClassifier`], [`ClassifierConfig`] - Versioned classifier
//!   artifact
//!
//! ## Input
//! - [`Document`], [`DocumentMetadata`] - Carrier types
//! - [`TextExtractor`], [`PlainTextExtractor`] - Best-effort extraction
//!   (failures swallow to empty text)
//!
//! Stub modes (no model files required) are first-class: construct via
//! [`SentenceConfig::stub`] / [`ClassifierConfig::stub`], or
//! `ModelRegistry::stub` under the `mock` feature.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod document;
pub mod embedding;
pub mod extract;
pub mod features;
pub mod registry;
pub mod scoring;

pub use classifier::{
    ARTIFACT_FORMAT_VERSION, ArtifactClassifier, ArtifactManifest, ClassifierConfig,
    ClassifierError,
};
pub use config::{Config, ConfigError};
pub use document::{Document, DocumentMetadata};
pub use embedding::{EmbeddingError, SentenceConfig, SentenceEmbedder};
pub use extract::{PlainTextExtractor, TextExtractor};
pub use features::{FeatureVector, KEYWORD_TABLE, KeywordHits};
pub use registry::{ModelRegistry, RegistryError};
pub use scoring::{
    BreakdownAccumulator, ContributionValue, HeuristicScorer, HybridScorer, ScoreBreakdown,
    ScoreContribution, ScoringError, score_heuristic, score_hybrid,
};
