//! Ordered score breakdowns.
//!
//! A breakdown is the audit trail for a score: an append-only sequence of
//! labeled contributions whose order is the evaluation order. Consumers
//! render it top-to-bottom, so entries are never reordered or deduplicated.

use serde::Serialize;

use crate::features::KeywordHits;

/// Stable reason identifier: terminal empty-text case (both strategies).
pub const REASON_NO_TEXT: &str = "no_text";
/// Stable reason identifier: keyword table contribution (heuristic).
pub const REASON_KEYWORD_PRESENCE: &str = "keyword_presence";
/// Stable reason identifier: numeric richness (heuristic).
pub const REASON_NUMERIC_ENTITIES: &str = "numeric_entities";
/// Stable reason identifier: year-like token (heuristic).
pub const REASON_DATE_PRESENCE: &str = "date_presence";
/// Stable reason identifier: `verified_offchain` boost (heuristic).
pub const REASON_METADATA_VERIFIED_OFFCHAIN: &str = "metadata_verified_offchain";
/// Stable reason identifier: `audited` boost (heuristic).
pub const REASON_METADATA_AUDITED: &str = "metadata_audited";
/// Stable reason identifier: scaled classifier probability (hybrid).
pub const REASON_MODEL_PROBABILITY: &str = "model_probability";
/// Stable reason identifier: numeric richness booster (hybrid).
pub const REASON_NUM_ENTITIES: &str = "num_entities";
/// Stable reason identifier: year-like token booster (hybrid).
pub const REASON_HAS_DATE: &str = "has_date";
/// Stable reason identifier: signature marker booster (hybrid).
pub const REASON_HAS_SIGNATURE: &str = "has_signature";

/// Feature value attached to a contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContributionValue {
    /// A detector count (e.g. numeric entities).
    Count(usize),
    /// A detector flag (e.g. date presence).
    Flag(bool),
}

/// One labeled contribution to a final score. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreContribution {
    /// Stable identifier; one of the `REASON_*` constants.
    pub reason: &'static str,
    /// Feature value behind the contribution, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ContributionValue>,
    /// Per-keyword hit map (keyword contributions only), in table order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<KeywordHits>,
    /// Points contributed (possibly zero).
    pub score: f64,
}

impl ScoreContribution {
    /// A contribution with no attached value.
    pub fn new(reason: &'static str, score: f64) -> Self {
        Self {
            reason,
            value: None,
            detail: None,
            score,
        }
    }

    /// Attaches a count value.
    pub fn with_count(mut self, count: usize) -> Self {
        self.value = Some(ContributionValue::Count(count));
        self
    }

    /// Attaches a flag value.
    pub fn with_flag(mut self, flag: bool) -> Self {
        self.value = Some(ContributionValue::Flag(flag));
        self
    }

    /// Attaches a keyword hit map.
    pub fn with_detail(mut self, detail: KeywordHits) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// Ordered sequence of contributions explaining a final score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreBreakdown(Vec<ScoreContribution>);

impl ScoreBreakdown {
    /// The terminal breakdown for blank input text.
    pub fn no_text() -> Self {
        Self(vec![ScoreContribution::new(REASON_NO_TEXT, 0.0)])
    }

    /// Contributions in evaluation order.
    pub fn entries(&self) -> &[ScoreContribution] {
        &self.0
    }

    /// Number of contributions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no contribution was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up the first contribution with the given reason.
    pub fn find(&self, reason: &str) -> Option<&ScoreContribution> {
        self.0.iter().find(|c| c.reason == reason)
    }
}

impl std::fmt::Display for ScoreBreakdown {
    /// One `reason: +score` line per contribution, top to bottom.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, c) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: +{}", c.reason, c.score)?;
        }
        Ok(())
    }
}

/// Builds a breakdown while tracking the running score.
///
/// `push` both appends the contribution and adds its score to the running
/// total, keeping the two views of a scoring call consistent by construction.
#[derive(Debug)]
pub struct BreakdownAccumulator {
    total: f64,
    entries: Vec<ScoreContribution>,
}

impl BreakdownAccumulator {
    /// Starts an accumulator from `base` points.
    pub fn new(base: f64) -> Self {
        Self {
            total: base,
            entries: Vec::new(),
        }
    }

    /// Appends a contribution and adds its score to the running total.
    pub fn push(&mut self, contribution: ScoreContribution) {
        self.total += contribution.score;
        self.entries.push(contribution);
    }

    /// Running total including the base.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Finishes without clamping (hybrid strategy).
    pub fn finish(self) -> (f64, ScoreBreakdown) {
        (self.total, ScoreBreakdown(self.entries))
    }

    /// Finishes with the total clamped to `[0, MAX_SCORE]` (heuristic
    /// strategy).
    pub fn finish_clamped(self) -> (f64, ScoreBreakdown) {
        let clamped = self.total.clamp(0.0, crate::constants::MAX_SCORE);
        (clamped, ScoreBreakdown(self.entries))
    }
}
