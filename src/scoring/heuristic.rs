//! Rule-based scoring strategy.

use tracing::debug;

use crate::constants::{
    AUDITED_BOOST, DATE_BOOST, HEURISTIC_BASE, VERIFIED_OFFCHAIN_BOOST, numeric_entity_score,
};
use crate::document::{Document, DocumentMetadata};
use crate::features::FeatureVector;

use super::breakdown::{
    BreakdownAccumulator, REASON_DATE_PRESENCE, REASON_KEYWORD_PRESENCE, REASON_METADATA_AUDITED,
    REASON_METADATA_VERIFIED_OFFCHAIN, REASON_NUMERIC_ENTITIES, ScoreBreakdown, ScoreContribution,
};

/// Transparent rule-based scorer.
///
/// Stateless and pure: the result depends only on the text, the metadata
/// flags, and the fixed keyword table. The final score is clamped to
/// `[0, 100]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    /// Creates the scorer.
    pub fn new() -> Self {
        Self
    }

    /// Scores a [`Document`] (text plus metadata flags).
    pub fn score_document(&self, document: &Document) -> (f64, ScoreBreakdown) {
        self.score(&document.text, &document.metadata)
    }

    /// Scores `text`, producing the final score and its ordered breakdown.
    ///
    /// Blank text (after trimming) is the terminal case: `(0.0, [no_text])`
    /// with no other contribution computed. Contribution order is fixed:
    /// keywords, numeric entities, date, then metadata boosts.
    pub fn score(&self, text: &str, metadata: &DocumentMetadata) -> (f64, ScoreBreakdown) {
        if text.trim().is_empty() {
            debug!("Blank text, returning no_text terminal case");
            return (0.0, ScoreBreakdown::no_text());
        }

        let features = FeatureVector::extract(text);
        let mut acc = BreakdownAccumulator::new(HEURISTIC_BASE);

        acc.push(
            ScoreContribution::new(REASON_KEYWORD_PRESENCE, f64::from(features.keyword_weight))
                .with_detail(features.keyword_hits.clone()),
        );

        acc.push(
            ScoreContribution::new(
                REASON_NUMERIC_ENTITIES,
                numeric_entity_score(features.numeric_entity_count),
            )
            .with_count(features.numeric_entity_count),
        );

        let date_score = if features.has_date { DATE_BOOST } else { 0.0 };
        acc.push(
            ScoreContribution::new(REASON_DATE_PRESENCE, date_score).with_flag(features.has_date),
        );

        // Metadata boosts are appended only when set, in this fixed order.
        if metadata.verified_offchain {
            acc.push(ScoreContribution::new(
                REASON_METADATA_VERIFIED_OFFCHAIN,
                VERIFIED_OFFCHAIN_BOOST,
            ));
        }
        if metadata.audited {
            acc.push(ScoreContribution::new(REASON_METADATA_AUDITED, AUDITED_BOOST));
        }

        let (score, breakdown) = acc.finish_clamped();

        debug!(
            score = score,
            keyword_weight = features.keyword_weight,
            numeric_entities = features.numeric_entity_count,
            has_date = features.has_date,
            "Heuristic scoring complete"
        );

        (score, breakdown)
    }
}

/// Convenience entry point for one-shot heuristic scoring.
pub fn score_heuristic(text: &str, metadata: &DocumentMetadata) -> (f64, ScoreBreakdown) {
    HeuristicScorer::new().score(text, metadata)
}
