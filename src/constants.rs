//! Cross-cutting scoring constants.
//!
//! The scoring weights are part of the output contract: auditors read a
//! breakdown against these fixed values, so changing any of them changes the
//! meaning of every historical score. Prefer deriving secondary values from
//! the primaries here rather than repeating literals in the scorers.

/// Starting base for the heuristic strategy (non-blank text only).
pub const HEURISTIC_BASE: f64 = 10.0;

/// Upper clamp bound for the heuristic strategy.
pub const MAX_SCORE: f64 = 100.0;

/// Points per detected numeric entity.
pub const NUMERIC_ENTITY_WEIGHT: u32 = 2;

/// Saturation cap for the numeric-entity contribution.
pub const NUMERIC_ENTITY_CAP: u32 = 20;

/// Boost when a year-like token is present.
pub const DATE_BOOST: f64 = 5.0;

/// Boost when a signature marker is present (hybrid strategy only).
pub const SIGNATURE_BOOST: f64 = 5.0;

/// Boost for `verified_offchain` metadata (heuristic strategy only).
pub const VERIFIED_OFFCHAIN_BOOST: f64 = 20.0;

/// Boost for `audited` metadata (heuristic strategy only).
pub const AUDITED_BOOST: f64 = 10.0;

/// Scale factor applied to the classifier probability in the hybrid strategy.
pub const MODEL_PROBABILITY_SCALE: f64 = 100.0;

/// Default sentence-embedding dimension (MiniLM-class encoders).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Default max tokens fed to the sentence encoder.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Returns the saturating numeric-entity contribution for `count` entities.
pub fn numeric_entity_score(count: usize) -> f64 {
    let scaled = (count as u64).saturating_mul(u64::from(NUMERIC_ENTITY_WEIGHT));
    scaled.min(u64::from(NUMERIC_ENTITY_CAP)) as f64
}
