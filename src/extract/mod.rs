//! Best-effort text extraction.
//!
//! Extraction is a capability consumed by the scoring core, not part of it.
//! The contract is deliberately lossy: any failure (missing file, unreadable
//! bytes) yields the empty string, which the scorers treat as the `no_text`
//! terminal case. Callers who need to distinguish "empty document" from
//! "extraction failed" must do so at this seam, not in the scorers.

use std::path::Path;

use tracing::{debug, warn};

/// Turns a file path into scoreable text.
pub trait TextExtractor {
    /// Extracts text from `path`. Failures are swallowed to `""`.
    fn extract(&self, path: &Path) -> String;
}

/// Reads the file as lossy UTF-8 text.
///
/// OCR backends plug in behind [`TextExtractor`]; this implementation covers
/// plain-text and text-adjacent formats only.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> String {
        match std::fs::read(path) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes).into_owned();
                debug!(
                    path = %path.display(),
                    bytes = bytes.len(),
                    chars = text.len(),
                    "Extracted document text"
                );
                text
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Text extraction failed, treating document as empty"
                );
                String::new()
            }
        }
    }
}
