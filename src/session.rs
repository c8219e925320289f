//! Session handling: an opaque, already-authorized API session.
//!
//! The library does not run OAuth consent flows or refresh tokens — that
//! is the credential provider's job (gcloud, a service account helper,
//! whatever issued the token). All the fetch stage needs is a bearer token
//! with the `documents.readonly` scope, wrapped here so it can't leak
//! through `Debug` output or logs.

use crate::config::ConversionConfig;
use crate::error::Gdoc2MdError;
use std::fmt;

/// Environment variables checked, in order, when no token is configured.
const TOKEN_ENV_VARS: [&str; 2] = ["GDOC2MD_ACCESS_TOKEN", "GOOGLE_ACCESS_TOKEN"];

/// An authorized Docs API session.
#[derive(Clone)]
pub struct Session {
    access_token: String,
}

impl Session {
    /// Wrap an existing OAuth bearer token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    /// The bearer token for the `Authorization` header.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Resolve a session, from most-specific to least-specific.
///
/// 1. **Pre-built session** (`config.session`) — the caller constructed it;
///    used as-is. Useful in tests or with custom token plumbing.
/// 2. **Configured token** (`config.access_token`) — set programmatically
///    or via the CLI `--token` flag.
/// 3. **Environment** — `GDOC2MD_ACCESS_TOKEN`, then `GOOGLE_ACCESS_TOKEN`
///    (the variable `gcloud auth print-access-token` pipelines export).
///
/// Failing all three is an unrecoverable auth failure: the pipeline must
/// abort before any network call is made.
pub fn resolve_session(config: &ConversionConfig) -> Result<Session, Gdoc2MdError> {
    if let Some(ref session) = config.session {
        return Ok(session.clone());
    }

    if let Some(ref token) = config.access_token {
        if !token.is_empty() {
            return Ok(Session::new(token.clone()));
        }
    }

    for var in TOKEN_ENV_VARS {
        if let Ok(token) = std::env::var(var) {
            if !token.is_empty() {
                return Ok(Session::new(token));
            }
        }
    }

    Err(Gdoc2MdError::AuthNotConfigured {
        hint: "Set GDOC2MD_ACCESS_TOKEN (e.g. from `gcloud auth print-access-token`),\n\
               pass --token, or provide a Session programmatically."
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_the_token() {
        let session = Session::new("ya29.secret-token");
        let debug = format!("{:?}", session);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn prebuilt_session_takes_priority() {
        let config = ConversionConfig::builder()
            .session(Session::new("prebuilt"))
            .access_token("ignored")
            .build()
            .unwrap();
        let session = resolve_session(&config).unwrap();
        assert_eq!(session.access_token(), "prebuilt");
    }

    #[test]
    fn configured_token_is_used() {
        let config = ConversionConfig::builder()
            .access_token("tok-123")
            .build()
            .unwrap();
        assert_eq!(resolve_session(&config).unwrap().access_token(), "tok-123");
    }
}
