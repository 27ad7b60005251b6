//! Fixed keyword table and presence scoring.
//!
//! The table is an ordered constant: breakdown consumers render the hit map
//! top-to-bottom, so the entry order is part of the output contract.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered `(keyword, weight)` table used by both scoring strategies.
///
/// Matching is case-insensitive substring containment, so short entries like
/// `"id"` intentionally fire inside longer words (`"paid"`, `"valid"`).
pub const KEYWORD_TABLE: &[(&str, u32)] = &[
    ("deed", 10),
    ("title", 8),
    ("invoice", 8),
    ("amount", 6),
    ("signature", 6),
    ("owner", 6),
    ("property", 8),
    ("asset", 5),
    ("id", 3),
    ("date", 4),
    ("valuation", 8),
    ("price", 5),
    ("tax", 4),
    ("agreement", 6),
];

/// Per-keyword presence flags (0/1) for every table entry, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordHits(Vec<(&'static str, u8)>);

impl KeywordHits {
    /// Iterates `(keyword, 0|1)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.0.iter().copied()
    }

    /// Returns the flag for `keyword`, or `None` if it is not a table entry.
    pub fn get(&self, keyword: &str) -> Option<u8> {
        self.0.iter().find(|(k, _)| *k == keyword).map(|(_, v)| *v)
    }

    /// Number of keywords that were present.
    pub fn hit_count(&self) -> usize {
        self.0.iter().filter(|(_, v)| *v == 1).count()
    }

    /// Total entries (always the full table).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: every table entry is recorded, present or not.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Serialized as a JSON map in table order. `serde_json`'s default map type
// would sort keys alphabetically, which breaks the ordering contract, so the
// map is emitted manually.
impl Serialize for KeywordHits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (keyword, flag) in &self.0 {
            map.serialize_entry(keyword, flag)?;
        }
        map.end()
    }
}

/// Scores `text` against [`KEYWORD_TABLE`].
///
/// Returns the summed weight of present keywords and the full hit map. The
/// caller is expected to pass already-extracted text; no normalization beyond
/// lowercasing is applied.
pub fn score_by_presence(text: &str) -> (u32, KeywordHits) {
    let lower = text.to_lowercase();
    let mut total = 0u32;
    let mut hits = Vec::with_capacity(KEYWORD_TABLE.len());

    for &(keyword, weight) in KEYWORD_TABLE {
        let present = lower.contains(keyword);
        if present {
            total += weight;
        }
        hits.push((keyword, u8::from(present)));
    }

    (total, KeywordHits(hits))
}
