//! Study-material acquisition pipeline
//!
//! Read-through orchestration: cached material is reused when present;
//! otherwise the document is extracted, compressed, and the result cached.
//! Acquisition never fails — every failure path resolves to a best-effort
//! string so the voice session always has content to work with.

use std::path::PathBuf;

use crate::cache::MaterialStore;
use crate::compress::{CompressionSettings, Compressor};
use crate::document::{self, DocumentRef};

/// Literal study content used when no document is available at all
pub const FALLBACK_STUDY_CONTENT: &str = "Default context if no PDF provided";

/// Marker prefixing degraded results so they are never mistaken for
/// compressed study material
pub const DEGRADED_PREFIX: &str = "[study material unavailable]";

/// Acquires study material for a session
///
/// Holds the cache store, the compression client, and an optional default
/// document used when the caller passes none.
pub struct MaterialProvider<S, C> {
    store: S,
    compressor: C,
    default_document: Option<PathBuf>,
}

impl<S: MaterialStore, C: Compressor> MaterialProvider<S, C> {
    /// Create a provider over the given store and compression client
    #[must_use]
    pub fn new(store: S, compressor: C) -> Self {
        Self {
            store,
            compressor,
            default_document: None,
        }
    }

    /// Set the document used when `acquire` is called without one
    #[must_use]
    pub fn with_default_document(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_document = Some(path.into());
        self
    }

    /// Acquire study material, preferring the cache
    ///
    /// 1. A non-empty cache slot is returned immediately; no extraction or
    ///    compression runs.
    /// 2. Otherwise the document is resolved: the argument, else the
    ///    configured default, else [`FALLBACK_STUDY_CONTENT`] as literal
    ///    study content.
    /// 3. Extraction and compression run once each. Successful non-empty
    ///    output is cached and returned.
    /// 4. Failure or empty output yields a diagnostic string marked with
    ///    [`DEGRADED_PREFIX`]; raw extracted text is never substituted for
    ///    compressed material.
    pub async fn acquire(&self, document: Option<&DocumentRef>) -> String {
        if let Some(cached) = self.store.read() {
            tracing::info!(bytes = cached.len(), "using cached study material");
            return cached;
        }

        let source_text = match document {
            Some(doc) => document::extract_text_or_empty(doc),
            None => match &self.default_document {
                Some(path) => {
                    document::extract_text_or_empty(&DocumentRef::Path(path.clone()))
                }
                None => {
                    tracing::warn!("no study document configured, using fallback content");
                    FALLBACK_STUDY_CONTENT.to_string()
                }
            },
        };

        match self
            .compressor
            .compress(&source_text, &CompressionSettings::default())
            .await
        {
            Ok(output) if !output.trim().is_empty() => {
                if let Err(e) = self.store.write(&output) {
                    tracing::warn!(error = %e, "failed to persist study material cache");
                }
                output
            }
            Ok(_) => {
                tracing::warn!("compression returned no output");
                format!("{DEGRADED_PREFIX} compression service returned no output")
            }
            Err(e) => {
                tracing::warn!(error = %e, "compression failed, returning degraded material");
                format!("{DEGRADED_PREFIX} {e}")
            }
        }
    }
}
