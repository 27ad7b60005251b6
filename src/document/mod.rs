//! Document carrier types.

use serde::{Deserialize, Serialize};

/// Optional triage flags attached to a submitted document.
///
/// Each flag is an explicit boolean with a documented effect on the heuristic
/// strategy; unknown keys in serialized input are ignored, never an error.
/// The hybrid strategy does not consume these flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    /// Document was verified against an off-chain source (+20 heuristic).
    pub verified_offchain: bool,
    /// Document passed a manual audit (+10 heuristic).
    pub audited: bool,
}

impl DocumentMetadata {
    /// Returns `true` if no flag is set.
    pub fn is_empty(&self) -> bool {
        !self.verified_offchain && !self.audited
    }
}

/// A real-world-asset document submitted for plausibility scoring.
///
/// Created per scoring call and discarded afterwards. `text` may be empty:
/// upstream extraction swallows failures to the empty string, so an empty
/// document and a failed extraction are indistinguishable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Extracted text (possibly empty).
    pub text: String,
    /// Optional triage flags.
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

impl Document {
    /// Creates a document with default metadata.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: DocumentMetadata::default(),
        }
    }

    /// Creates a document with explicit metadata flags.
    pub fn with_metadata(text: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }

    /// Returns `true` if the text is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blankness_ignores_whitespace() {
        assert!(Document::new("").is_blank());
        assert!(Document::new("  \n\t ").is_blank());
        assert!(!Document::new("deed").is_blank());
    }

    #[test]
    fn test_metadata_unknown_keys_are_ignored() {
        let meta: DocumentMetadata =
            serde_json::from_str(r#"{"verified_offchain": true, "chain_id": 5}"#).unwrap();
        assert!(meta.verified_offchain);
        assert!(!meta.audited);
    }

    #[test]
    fn test_metadata_defaults_to_no_flags() {
        let meta: DocumentMetadata = serde_json::from_str("{}").unwrap();
        assert!(meta.is_empty());
    }
}
