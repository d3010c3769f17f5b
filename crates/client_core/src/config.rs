use thiserror::Error;
use url::Url;

pub const API_URL_ENV: &str = "MOVIE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid catalog API url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("catalog API url '{url}' must use http or https, not '{scheme}'")]
    UnsupportedScheme { url: String, scheme: String },
}

/// Where the viewer finds the catalog service. Validated once on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    base_url: String,
}

impl ViewerConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                url: trimmed.to_string(),
                scheme: parsed.scheme().to_string(),
            });
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// An unset or blank variable falls back to the local default.
    pub fn from_lookup(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match env(API_URL_ENV) {
            Some(v) if !v.trim().is_empty() => Self::new(&v),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
