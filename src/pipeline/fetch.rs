//! Document fetch: the only network stage.
//!
//! One GET against the Docs API (`documents.get` with read-only scope)
//! returns the full hierarchical document as JSON. The interesting part is
//! the status mapping: 404/403/401 are distinct, user-actionable outcomes
//! (wrong ID, no access, stale token) and must surface as such rather than
//! as a generic transport error. No retries happen here — a failed fetch
//! is reported once; retry policy belongs to the caller.

use crate::config::ConversionConfig;
use crate::error::Gdoc2MdError;
use crate::model::Document;
use crate::session::Session;
use reqwest::StatusCode;
use tracing::{debug, info};

/// Fetch a document by ID using an authorized session.
pub async fn fetch_document(
    document_id: &str,
    session: &Session,
    config: &ConversionConfig,
) -> Result<Document, Gdoc2MdError> {
    let url = format!(
        "{}/{}",
        config.api_base_url.trim_end_matches('/'),
        document_id
    );
    info!("Fetching document {}", document_id);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.fetch_timeout_secs))
        .build()
        .map_err(|e| Gdoc2MdError::FetchFailed {
            document_id: document_id.to_string(),
            reason: e.to_string(),
        })?;

    let response = client
        .get(&url)
        .bearer_auth(session.access_token())
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                Gdoc2MdError::FetchTimeout {
                    document_id: document_id.to_string(),
                    secs: config.fetch_timeout_secs,
                }
            } else {
                Gdoc2MdError::FetchFailed {
                    document_id: document_id.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

    match response.status() {
        StatusCode::NOT_FOUND => {
            return Err(Gdoc2MdError::DocumentNotFound {
                document_id: document_id.to_string(),
            })
        }
        StatusCode::FORBIDDEN => {
            return Err(Gdoc2MdError::PermissionDenied {
                document_id: document_id.to_string(),
            })
        }
        StatusCode::UNAUTHORIZED => {
            return Err(Gdoc2MdError::Unauthorized {
                document_id: document_id.to_string(),
            })
        }
        status if !status.is_success() => {
            return Err(Gdoc2MdError::FetchFailed {
                document_id: document_id.to_string(),
                reason: format!("HTTP {status}"),
            })
        }
        _ => {}
    }

    let document: Document =
        response
            .json()
            .await
            .map_err(|e| Gdoc2MdError::MalformedResponse {
                document_id: document_id.to_string(),
                detail: e.to_string(),
            })?;

    debug!(
        "Fetched document: {} body blocks, {} footnotes",
        document.body.content.len(),
        document.footnotes.len()
    );

    Ok(document)
}
