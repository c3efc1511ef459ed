//! Risk client — builds and issues requests to the Orcho risk scoring API.
//!
//! The client never propagates upstream failures: network errors, non-success
//! statuses, and malformed payloads all degrade to the default low-risk
//! result so the calling assistant is never blocked by this tool.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::OrchoConfig;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Two-level risk classification derived from the upstream payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::High => "high",
        }
    }
}

/// Normalized assessment returned to the tool adapter.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Integer score in [0, 100].
    pub score: u8,
    /// Full decoded API payload; `None` on the empty-prompt and failure paths.
    pub details: Option<Value>,
}

impl Default for RiskAssessment {
    fn default() -> Self {
        Self {
            level: RiskLevel::Low,
            score: 0,
            details: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Request context
// ---------------------------------------------------------------------------

/// Editor/repository context supplied by the calling assistant.
///
/// Assembled field-by-field from tool arguments; only populated members are
/// serialized into the request body.
#[derive(Debug, Clone, Default)]
pub struct AssessmentContext {
    pub repo_full_name: Option<String>,
    pub current_file: Option<String>,
    pub other_files: Option<Vec<String>>,
    pub weights: Option<serde_json::Map<String, Value>>,
}

impl AssessmentContext {
    /// True when no contextual field is populated.
    pub fn is_empty(&self) -> bool {
        self.repo_full_name.is_none()
            && self.current_file.is_none()
            && self.other_files.is_none()
            && self.weights.is_none()
    }
}

// Wire types. `weights` always sits at the top level of the body, never
// inside the context object.

#[derive(Serialize)]
struct BasicBody<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    weights: Option<&'a serde_json::Map<String, Value>>,
}

#[derive(Serialize)]
struct WireContext<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    repo_full_name: Option<&'a str>,
    current_file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    other_files: Option<&'a [String]>,
}

#[derive(Serialize)]
struct ContextBody<'a> {
    prompt: &'a str,
    context: WireContext<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weights: Option<&'a serde_json::Map<String, Value>>,
}

/// Select the endpoint and build the request body for an assessment.
///
/// The context-aware endpoint is used only when the context carries a
/// `current_file`; otherwise the basic endpoint gets a prompt-only body.
pub fn build_request<'a>(
    config: &'a OrchoConfig,
    prompt: &str,
    context: Option<&AssessmentContext>,
) -> (&'a str, Value) {
    let weights = context.and_then(|c| c.weights.as_ref());

    match context.filter(|c| c.current_file.is_some()) {
        Some(ctx) => {
            let body = ContextBody {
                prompt,
                context: WireContext {
                    repo_full_name: ctx.repo_full_name.as_deref(),
                    current_file: ctx.current_file.as_deref().unwrap_or_default(),
                    other_files: ctx
                        .other_files
                        .as_deref()
                        .filter(|files| !files.is_empty()),
                },
                weights,
            };
            (
                config.api_url_with_context.as_str(),
                serde_json::to_value(body).unwrap_or(Value::Null),
            )
        }
        None => {
            let body = BasicBody { prompt, weights };
            (
                config.api_url.as_str(),
                serde_json::to_value(body).unwrap_or(Value::Null),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Response normalization
// ---------------------------------------------------------------------------

/// Normalize a decoded API payload into a [`RiskAssessment`].
///
/// `overall_risk_level` maps to [`RiskLevel::High`] only for `high` or
/// `critical` (case-insensitive); anything else, including a missing field,
/// is low. `overall_score` is scaled ×100 when fractional, rounded, and
/// clamped into [0, 100]. Missing or malformed fields default rather than
/// error.
pub fn normalize_response(data: Value) -> RiskAssessment {
    let level = match data.get("overall_risk_level").and_then(Value::as_str) {
        Some(s) if s.eq_ignore_ascii_case("high") || s.eq_ignore_ascii_case("critical") => {
            RiskLevel::High
        }
        _ => RiskLevel::Low,
    };

    let mut score = data
        .get("overall_score")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    if score < 1.0 {
        score *= 100.0;
    }
    let score = score.round().clamp(0.0, 100.0) as u8;

    RiskAssessment {
        level,
        score,
        details: Some(data),
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the Orcho risk scoring API.
pub struct RiskClient {
    config: OrchoConfig,
    client: reqwest::Client,
}

impl RiskClient {
    /// Create a client with platform-default transport settings.
    pub fn new(config: OrchoConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client with a shared HTTP client.
    pub fn with_http_client(config: OrchoConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Assess the risk of a coding prompt.
    ///
    /// Empty or whitespace-only prompts short-circuit to the default result
    /// without touching the network. All transport and decoding failures are
    /// logged and absorbed into the same default.
    pub async fn assess(
        &self,
        prompt: &str,
        context: Option<&AssessmentContext>,
    ) -> RiskAssessment {
        if prompt.trim().is_empty() {
            return RiskAssessment::default();
        }

        let (url, body) = build_request(&self.config, prompt, context);

        if self.config.debug {
            info!(
                url,
                api_key = %self.config.redacted_key(),
                body = %serde_json::to_string_pretty(&body).unwrap_or_default(),
                "outbound risk API request"
            );
        }

        let response = self
            .client
            .post(url)
            .header("X-API-Key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "risk API request failed");
                return RiskAssessment::default();
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(%status, body = %error_body, "risk API returned an error status");
            return RiskAssessment::default();
        }

        match response.json::<Value>().await {
            Ok(data) => {
                if self.config.debug {
                    info!(
                        %status,
                        response = %serde_json::to_string_pretty(&data).unwrap_or_default(),
                        "risk API response"
                    );
                }
                normalize_response(data)
            }
            Err(e) => {
                warn!(error = %e, "failed to decode risk API response");
                RiskAssessment::default()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
