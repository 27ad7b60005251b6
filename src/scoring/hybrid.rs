//! Hybrid scoring strategy.

use std::sync::Arc;

use tracing::debug;

use crate::constants::{
    DATE_BOOST, MODEL_PROBABILITY_SCALE, SIGNATURE_BOOST, numeric_entity_score,
};
use crate::document::{Document, DocumentMetadata};
use crate::features;
use crate::registry::ModelRegistry;

use super::breakdown::{
    BreakdownAccumulator, REASON_HAS_DATE, REASON_HAS_SIGNATURE, REASON_MODEL_PROBABILITY,
    REASON_NUM_ENTITIES, ScoreBreakdown, ScoreContribution,
};
use super::error::ScoringError;

/// Scorer blending the classifier probability with explainable boosters.
///
/// The probability is scaled to `[0, 100]` and a subset of the heuristic
/// boosters (numeric, date, signature) is layered on top. Two deliberate
/// asymmetries with [`HeuristicScorer`](super::HeuristicScorer) are carried
/// from the original behavior and pinned by tests:
///
/// - the final score is an uncapped sum and can exceed 100;
/// - metadata flags are accepted but have no effect on the score.
pub struct HybridScorer {
    registry: Arc<ModelRegistry>,
}

impl std::fmt::Debug for HybridScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HybridScorer")
            .field("registry", &self.registry)
            .finish()
    }
}

impl HybridScorer {
    /// Creates a scorer over an initialized registry handle.
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    /// Returns `true` if the underlying models run in stub mode.
    pub fn is_stub(&self) -> bool {
        self.registry.is_stub()
    }

    /// Scores a [`Document`]. Metadata flags are accepted for interface
    /// parity with the heuristic strategy but do not affect the score.
    pub fn score_document(
        &self,
        document: &Document,
    ) -> Result<(f64, ScoreBreakdown), ScoringError> {
        self.score(&document.text, &document.metadata)
    }

    /// Scores `text`, producing the final score and its ordered breakdown.
    ///
    /// Blank text is the same terminal case as the heuristic strategy.
    /// Deterministic for a fixed registry: repeated calls on the same text
    /// yield identical scores and breakdowns.
    pub fn score(
        &self,
        text: &str,
        metadata: &DocumentMetadata,
    ) -> Result<(f64, ScoreBreakdown), ScoringError> {
        if text.trim().is_empty() {
            debug!("Blank text, returning no_text terminal case");
            return Ok((0.0, ScoreBreakdown::no_text()));
        }

        if !metadata.is_empty() {
            // Recognized flags are a heuristic-only signal.
            debug!(
                verified_offchain = metadata.verified_offchain,
                audited = metadata.audited,
                "Metadata flags present but not applied by the hybrid strategy"
            );
        }

        let embedding = self.registry.embedder().encode(text)?;
        let probability = self.registry.classifier().predict_probability(&embedding)?;
        let model_score = f64::from(probability) * MODEL_PROBABILITY_SCALE;

        let mut acc = BreakdownAccumulator::new(0.0);
        acc.push(ScoreContribution::new(REASON_MODEL_PROBABILITY, model_score));

        let numeric_count = features::count_numeric_entities(text);
        acc.push(
            ScoreContribution::new(REASON_NUM_ENTITIES, numeric_entity_score(numeric_count))
                .with_count(numeric_count),
        );

        let has_date = features::has_date_like_token(text);
        acc.push(
            ScoreContribution::new(REASON_HAS_DATE, if has_date { DATE_BOOST } else { 0.0 })
                .with_flag(has_date),
        );

        let has_signature = features::has_signature_marker(text);
        acc.push(
            ScoreContribution::new(
                REASON_HAS_SIGNATURE,
                if has_signature { SIGNATURE_BOOST } else { 0.0 },
            )
            .with_flag(has_signature),
        );

        // Uncapped: probability near 1 plus positive boosters exceeds 100.
        let (score, breakdown) = acc.finish();

        debug!(
            score = score,
            probability = probability,
            numeric_entities = numeric_count,
            has_date = has_date,
            has_signature = has_signature,
            "Hybrid scoring complete"
        );

        Ok((score, breakdown))
    }
}

/// Convenience entry point for one-shot hybrid scoring.
pub fn score_hybrid(
    registry: &Arc<ModelRegistry>,
    text: &str,
    metadata: &DocumentMetadata,
) -> Result<(f64, ScoreBreakdown), ScoringError> {
    HybridScorer::new(Arc::clone(registry)).score(text, metadata)
}
