//! Environment-derived configuration.
//!
//! Read once at startup into an immutable [`OrchoConfig`] value that is
//! injected into the risk client; nothing reads the environment after that.

use crate::error::OrchoError;

/// Basic risk scoring endpoint (prompt only).
pub const API_URL: &str = "https://app.orcho.ai/risk/api/v1/generate-risk";

/// Context-aware endpoint (prompt + repository/editor context).
pub const API_URL_WITH_CONTEXT: &str =
    "https://app.orcho.ai/risk/api/v1/generate-risk-with-context";

/// Immutable server configuration.
#[derive(Debug, Clone)]
pub struct OrchoConfig {
    /// API key sent as the `X-API-Key` header. Required.
    pub api_key: String,
    /// When set, the full outbound request and inbound response are logged.
    pub debug: bool,
    /// Basic risk scoring endpoint.
    pub api_url: String,
    /// Context-aware risk scoring endpoint.
    pub api_url_with_context: String,
}

impl Default for OrchoConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            debug: false,
            api_url: API_URL.to_string(),
            api_url_with_context: API_URL_WITH_CONTEXT.to_string(),
        }
    }
}

impl OrchoConfig {
    /// Load configuration from `ORCHO_API_KEY` and `ORCHO_DEBUG`.
    ///
    /// A missing or empty API key is fatal — the server refuses to start
    /// rather than issue unauthenticated requests.
    pub fn from_env() -> Result<Self, OrchoError> {
        let api_key = std::env::var("ORCHO_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                OrchoError::Config("ORCHO_API_KEY environment variable is not set".into())
            })?;

        let debug = matches!(
            std::env::var("ORCHO_DEBUG").as_deref(),
            Ok("true") | Ok("1")
        );

        Ok(Self {
            api_key,
            debug,
            ..Self::default()
        })
    }

    /// Redacted form of the API key, safe for logs.
    ///
    /// Shows at most the first 10 characters. Keys that short are masked
    /// entirely so the full key never appears in any log output.
    pub fn redacted_key(&self) -> String {
        const VISIBLE_PREFIX: usize = 10;
        if self.api_key.chars().count() <= VISIBLE_PREFIX {
            return "***".to_string();
        }
        let shown: String = self.api_key.chars().take(VISIBLE_PREFIX).collect();
        format!("{shown}...")
    }
}
