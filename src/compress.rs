//! Compression client for The Token Company API
//!
//! Sends extracted study text to the remote compression endpoint and
//! returns the condensed representation. One best-effort attempt per
//! invocation: no retry, no backoff, no timeout override.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default compression endpoint base URL
pub const DEFAULT_BASE_URL: &str = "https://api.thetokencompany.com";

/// Default compression model identifier
pub const DEFAULT_MODEL: &str = "bear-1";

/// Parameters controlling a compression call
///
/// Constructed fresh per call and never mutated after send.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompressionSettings {
    /// Compression aggressiveness, 0.0 (lossless-ish) to 1.0 (maximal)
    pub aggressiveness: f64,

    /// Optional upper bound on output tokens
    pub max_output_tokens: Option<u32>,

    /// Optional lower bound on output tokens
    pub min_output_tokens: Option<u32>,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            aggressiveness: 0.5,
            max_output_tokens: None,
            min_output_tokens: None,
        }
    }
}

/// Request body for the compression endpoint
#[derive(Serialize)]
struct CompressRequest<'a> {
    model: &'a str,
    compression_settings: CompressionSettings,
    input: &'a str,
}

/// Response body on HTTP success
///
/// An empty or missing `output` field is a successful call that produced
/// no usable material; callers must not cache it.
#[derive(Deserialize)]
struct CompressResponse {
    #[serde(default)]
    output: String,
}

/// Compresses study text
///
/// Seam for the acquisition pipeline so tests can substitute a mock and
/// assert on call counts.
#[async_trait]
pub trait Compressor: Send + Sync {
    /// Compress `input` with the given settings
    ///
    /// Returns the condensed output on success. An empty string means the
    /// service answered successfully but produced no usable material.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] if no credential is configured,
    /// [`Error::CompressionHttp`] on a non-success status, and
    /// [`Error::CompressionTransport`] on network or decoding failures.
    async fn compress(&self, input: &str, settings: &CompressionSettings) -> Result<String>;
}

#[async_trait]
impl<T: Compressor + ?Sized> Compressor for &T {
    async fn compress(&self, input: &str, settings: &CompressionSettings) -> Result<String> {
        (**self).compress(input, settings).await
    }
}

/// Production client for The Token Company compression API
pub struct TokenCompanyClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl TokenCompanyClient {
    /// Create a client against the default endpoint
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (used by tests)
    #[must_use]
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[async_trait]
impl Compressor for TokenCompanyClient {
    async fn compress(&self, input: &str, settings: &CompressionSettings) -> Result<String> {
        let Some(api_key) = &self.api_key else {
            return Err(Error::MissingCredential);
        };

        tracing::debug!(
            input_bytes = input.len(),
            aggressiveness = settings.aggressiveness,
            "starting compression request"
        );

        let body = CompressRequest {
            model: &self.model,
            compression_settings: *settings,
            input,
        };

        let response = self
            .client
            .post(format!("{}/v1/compress", self.base_url))
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "compression request failed");
                Error::CompressionTransport(e.to_string())
            })?;

        let status = response.status();
        tracing::debug!(status = %status, "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "compression API error");
            return Err(Error::CompressionHttp {
                status: status.as_u16(),
                body,
            });
        }

        let result: CompressResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "failed to parse compression response");
            Error::CompressionTransport(e.to_string())
        })?;

        tracing::info!(output_bytes = result.output.len(), "compression complete");
        Ok(result.output)
    }
}
