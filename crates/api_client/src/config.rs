use std::fmt;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_REGION_CODE: &str = "IN";

pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";
pub const BASE_URL_VAR: &str = "YOUTUBE_API_BASE_URL";
pub const REGION_CODE_VAR: &str = "YOUTUBE_REGION_CODE";

/// Credentials and endpoint location, fixed for the lifetime of a client.
///
/// A config always carries a non-empty API key, so a client can never issue
/// a request without one.
#[derive(Clone)]
pub struct ApiConfig {
    api_key: String,
    base_url: Url,
    region_code: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
            region_code: DEFAULT_REGION_CODE.to_string(),
        })
    }

    /// Reads `YOUTUBE_API_KEY`, `YOUTUBE_API_BASE_URL` and `YOUTUBE_REGION_CODE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`ApiConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::new(lookup(API_KEY_VAR).unwrap_or_default())?;
        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(&base_url)?;
        }
        if let Some(region_code) = lookup(REGION_CODE_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_region_code(region_code);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_region_code(mut self, region_code: impl Into<String>) -> Self {
        self.region_code = region_code.into().trim().to_string();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    /// `<base>/<endpoint>`, tolerating a trailing slash on the base.
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(endpoint);
        }
        url
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("region_code", &self.region_code)
            .finish()
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|err| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_key_is_an_error() {
        assert!(matches!(ApiConfig::new(""), Err(ConfigError::MissingApiKey)));
        assert!(matches!(ApiConfig::new("   "), Err(ConfigError::MissingApiKey)));
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[(API_KEY_VAR, "secret")])).unwrap();
        assert_eq!(config.api_key(), "secret");
        assert_eq!(config.base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.region_code(), DEFAULT_REGION_CODE);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = ApiConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "secret"),
            (BASE_URL_VAR, "http://127.0.0.1:8080/youtube/v3/"),
            (REGION_CODE_VAR, "US"),
        ]))
        .unwrap();
        assert_eq!(config.region_code(), "US");
        assert_eq!(
            config.endpoint_url("videos").as_str(),
            "http://127.0.0.1:8080/youtube/v3/videos"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiConfig::new("k").unwrap().with_base_url("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
        let err = ApiConfig::new("k").unwrap().with_base_url("mailto:me@example.com").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ApiConfig::new("super-secret").unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("redacted"));
    }

    #[test]
    fn test_endpoint_url_joins_segments() {
        let config = ApiConfig::new("k").unwrap();
        assert_eq!(
            config.endpoint_url("commentThreads").as_str(),
            "https://www.googleapis.com/youtube/v3/commentThreads"
        );
    }
}
