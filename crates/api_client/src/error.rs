use serde::Deserialize;

use crate::config::API_KEY_VAR;

/// Configuration problems. These are fatal and reported at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no YouTube API key configured (set {})", API_KEY_VAR)]
    MissingApiKey,

    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Why a provider call produced no data. Only ever logged; fetchers turn it
/// into an empty result.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    #[error("provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Deserialize)]
struct ProviderError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ProviderErrorDetail>,
}

#[derive(Deserialize)]
struct ProviderErrorDetail {
    #[serde(default)]
    reason: Option<String>,
}

/// Summarizes a Google-style `{ "error": { ... } }` body for logging,
/// falling back to the raw text.
pub(crate) fn describe_error_body(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ProviderErrorBody>(body) else {
        return body.trim().chars().take(200).collect();
    };
    let reason = parsed
        .error
        .errors
        .iter()
        .find_map(|detail| detail.reason.as_deref())
        .unwrap_or("");
    if reason.is_empty() {
        parsed.error.message
    } else {
        format!("{} (reason={reason})", parsed.error.message)
    }
}
