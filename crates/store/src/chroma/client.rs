//! Chroma REST client plumbing: request helpers and boundary error mapping

use crate::error::StoreError;
use chromactl_core::config::StoreConfig;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Chroma store client speaking the server's v1 REST API
pub(crate) struct ChromaStore {
    pub(super) http: reqwest::Client,
    pub(super) config: StoreConfig,
}

impl ChromaStore {
    /// Absolute URL for an API path
    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", self.config.base_url())
    }

    /// GET a JSON payload.
    ///
    /// `missing` names the collection a 404 should be attributed to; `None`
    /// means a 404 on this route is a backend failure, not a lookup miss.
    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        context: &str,
        missing: Option<&str>,
        path: &str,
    ) -> Result<T, StoreError> {
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| classify_request_error(context, e))?;

        let response = check_status(context, missing, response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::SerializationError(format!("{context}: {e}")))
    }

    /// Probe the server heartbeat endpoint
    pub(super) async fn heartbeat(&self) -> Result<(), StoreError> {
        let context = "Heartbeat failed";
        let response = self
            .http
            .get(self.endpoint("heartbeat"))
            .send()
            .await
            .map_err(|e| classify_request_error(context, e))?;

        let response = check_status(context, None, response).await?;
        response
            .json::<Heartbeat>()
            .await
            .map_err(|e| StoreError::SerializationError(format!("{context}: {e}")))?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct Heartbeat {
    #[serde(rename = "nanosecond heartbeat")]
    #[allow(dead_code)]
    nanosecond_heartbeat: u64,
}

/// Map a transport-level failure into the boundary taxonomy
pub(super) fn classify_request_error(context: &str, err: reqwest::Error) -> StoreError {
    if err.is_connect() || err.is_timeout() {
        StoreError::ConnectionFailed(format!("{context}: {err}"))
    } else if err.is_decode() {
        StoreError::SerializationError(format!("{context}: {err}"))
    } else {
        StoreError::BackendError(format!("{context}: {err}"))
    }
}

/// Map a non-success HTTP status into the boundary taxonomy.
///
/// The server reports a missing collection either as a 404 or, on older
/// releases, as an error body containing "does not exist"; both map to
/// `CollectionNotFound` when the route targets a named collection.
pub(super) async fn check_status(
    context: &str,
    missing: Option<&str>,
    response: Response,
) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    if let Some(name) = missing {
        if status == StatusCode::NOT_FOUND || body.contains("does not exist") {
            return Err(StoreError::CollectionNotFound(name.to_string()));
        }
    }

    if status.is_client_error() {
        Err(StoreError::RequestRejected(format!(
            "{context}: HTTP {status}: {body}"
        )))
    } else {
        Err(StoreError::BackendError(format!(
            "{context}: HTTP {status}: {body}"
        )))
    }
}
