//! Study document extraction
//!
//! Converts a PDF source document into plain text. Pages that yield no
//! extractable text are skipped; the remaining page texts are joined with
//! newlines in page order.

use std::path::PathBuf;

use crate::{Error, Result};

/// Reference to a source document
///
/// A document is either on disk or already in memory (e.g. an upload held
/// as bytes). It is read once per acquisition.
#[derive(Debug, Clone)]
pub enum DocumentRef {
    /// Document at a filesystem path
    Path(PathBuf),
    /// Document held in memory
    Bytes(Vec<u8>),
}

/// Extract plain text from a PDF document
///
/// Returns the newline-joined text of all pages with non-empty extracted
/// text. Pages without a text layer are skipped, not treated as errors.
///
/// # Errors
///
/// Returns [`Error::Extraction`] if the document cannot be opened or parsed.
pub fn extract_text(document: &DocumentRef) -> Result<String> {
    let parsed = match document {
        DocumentRef::Path(path) => {
            tracing::debug!(path = %path.display(), "loading document");
            lopdf::Document::load(path)
        }
        DocumentRef::Bytes(bytes) => {
            tracing::debug!(bytes = bytes.len(), "loading in-memory document");
            lopdf::Document::load_mem(bytes)
        }
    }
    .map_err(|e| Error::Extraction(e.to_string()))?;

    let mut pages: Vec<String> = Vec::new();
    for &number in parsed.get_pages().keys() {
        match parsed.extract_text(&[number]) {
            Ok(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    pages.push(text.to_string());
                }
            }
            Err(e) => {
                tracing::debug!(page = number, error = %e, "page yielded no text");
            }
        }
    }

    tracing::info!(pages = pages.len(), "document extraction complete");
    Ok(pages.join("\n"))
}

/// Extract plain text, collapsing open/parse failures to empty output
///
/// Callers that cannot act on a failed read (the acquisition pipeline
/// degrades instead of aborting) treat empty output as "no usable text".
#[must_use]
pub fn extract_text_or_empty(document: &DocumentRef) -> String {
    match extract_text(document) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "document extraction failed");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_path_yields_typed_error() {
        let doc = DocumentRef::Path(PathBuf::from("/nonexistent/study.pdf"));
        assert!(matches!(extract_text(&doc), Err(Error::Extraction(_))));
    }

    #[test]
    fn unreadable_path_collapses_to_empty() {
        let doc = DocumentRef::Path(PathBuf::from("/nonexistent/study.pdf"));
        assert_eq!(extract_text_or_empty(&doc), "");
    }

    #[test]
    fn garbage_bytes_collapse_to_empty() {
        let doc = DocumentRef::Bytes(b"not a pdf at all".to_vec());
        assert_eq!(extract_text_or_empty(&doc), "");
    }
}
