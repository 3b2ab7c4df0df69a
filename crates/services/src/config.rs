use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Environment variable consulted for the remote service address.
pub const BASE_URL_ENV: &str = "REVISION_API_URL";
/// Address used when neither a flag nor the environment provides one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Where the remote service lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteConfig {
    base_url: Url,
    timeout: Duration,
}

impl RemoteConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` when `raw` is blank, unparsable, or not http(s).
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        let base_url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            raw: trimmed.to_string(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base_url.scheme().to_string()));
        }
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Appends `reference` to the base address.
    ///
    /// A leading slash is optional. References that do not form a valid URL
    /// when appended are added as percent-encoded path segments instead.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        let reference = reference.trim();
        let joined = if reference.starts_with('/') {
            format!("{base}{reference}")
        } else {
            format!("{base}/{reference}")
        };
        if let Ok(url) = Url::parse(&joined) {
            return url;
        }

        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(reference.split('/').filter(|segment| !segment.is_empty()));
        }
        url
    }
}
