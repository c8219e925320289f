//! Configuration types for Docs-to-Markdown conversion.
//!
//! All behaviour is controlled through [`ConversionConfig`], built via its
//! [`ConversionConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share configs across calls and to diff two runs to
//! understand why their outputs differ.
//!
//! # Design choice: builder over constructor
//! The builder lets callers set only what they care about and rely on
//! documented defaults for the rest.

use crate::error::Gdoc2MdError;
use crate::session::Session;
use std::fmt;

/// Default `documents.get` endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://docs.googleapis.com/v1/documents";

/// Configuration for a Docs-to-Markdown conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use gdoc2md::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .access_token("ya29.…")
///     .fetch_timeout_secs(60)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// OAuth bearer token for the Docs API. If None along with `session`,
    /// the token is read from the environment (see [`crate::session`]).
    pub access_token: Option<String>,

    /// Pre-constructed session. Takes precedence over `access_token`.
    pub session: Option<Session>,

    /// Base URL of the `documents.get` endpoint. Default:
    /// [`DEFAULT_API_BASE_URL`]. Overridable for tests and proxies.
    pub api_base_url: String,

    /// Fetch timeout in seconds. Default: 30.
    ///
    /// Large documents with hundreds of footnotes serialise to multi-MB
    /// JSON responses; 30 s covers those comfortably on slow links while
    /// still failing fast on a dead network.
    pub fetch_timeout_secs: u64,

    /// Prepend YAML front-matter with the document title and source.
    /// Default: false.
    pub include_metadata: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            session: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            fetch_timeout_secs: 30,
            include_metadata: false,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("session", &self.session)
            .field("api_base_url", &self.api_base_url)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("include_metadata", &self.include_metadata)
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = Some(token.into());
        self
    }

    pub fn session(mut self, session: Session) -> Self {
        self.config.session = Some(session);
        self
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.config.fetch_timeout_secs = secs;
        self
    }

    pub fn include_metadata(mut self, v: bool) -> Self {
        self.config.include_metadata = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Gdoc2MdError> {
        let c = &self.config;
        if c.fetch_timeout_secs == 0 {
            return Err(Gdoc2MdError::InvalidConfig(
                "Fetch timeout must be ≥ 1 second".into(),
            ));
        }
        if c.api_base_url.is_empty() {
            return Err(Gdoc2MdError::InvalidConfig(
                "API base URL must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = ConversionConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.fetch_timeout_secs, 30);
        assert!(!config.include_metadata);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = ConversionConfig::builder().fetch_timeout_secs(0).build();
        assert!(matches!(result, Err(Gdoc2MdError::InvalidConfig(_))));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let result = ConversionConfig::builder().api_base_url("").build();
        assert!(matches!(result, Err(Gdoc2MdError::InvalidConfig(_))));
    }

    #[test]
    fn debug_redacts_the_token() {
        let config = ConversionConfig::builder()
            .access_token("ya29.secret")
            .build()
            .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
    }
}
