//! REST API helpers for communicating with the research backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so screens can surface transport,
//! status, and shape failures uniformly instead of degrading silently.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::OnceLock;

use super::error::ApiError;
use super::types::{DocumentSummary, SearchHit, SynthesisReport};
#[cfg(feature = "hydrate")]
use super::types::{SearchResponse, UploadReceipt};

static API_BASE: OnceLock<String> = OnceLock::new();

/// Inject the backend origin used by every endpoint, e.g.
/// `http://localhost:8000`. The default (empty) base produces same-origin
/// relative paths. Only the first call before any request takes effect.
pub fn set_api_base(base: &str) {
    let _ = API_BASE.set(base.trim_end_matches('/').to_owned());
}

#[cfg(any(test, feature = "hydrate"))]
fn join_api_base(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    join_api_base(API_BASE.get().map_or("", String::as_str), path)
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_endpoint() -> String {
    api_url("/api/v1/ingestion/upload")
}

#[cfg(any(test, feature = "hydrate"))]
fn documents_endpoint() -> String {
    api_url("/api/v1/ingestion/")
}

#[cfg(any(test, feature = "hydrate"))]
fn search_endpoint(query: &str) -> String {
    api_url(&format!("/api/v1/analysis/search?query={}", urlencoding::encode(query)))
}

#[cfg(any(test, feature = "hydrate"))]
fn synthesis_endpoint(term: &str) -> String {
    api_url(&format!("/api/v1/analysis/synthesis?term={}", urlencoding::encode(term)))
}

#[cfg(any(test, feature = "hydrate"))]
fn status_fallback_detail(status: u16) -> String {
    format!("request failed with status {status}")
}

/// Turn a non-2xx response into [`ApiError::Status`], extracting the
/// backend's `detail` message when the body carries one.
#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }
    let status = resp.status();
    let detail = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| status_fallback_detail(status));
    ApiError::Status { status, detail }
}

/// Upload one document to the ingestion pipeline as multipart form data
/// under the field name `file`.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] on network/body failures and
/// [`ApiError::Status`] when the backend rejects the file.
#[cfg(feature = "hydrate")]
pub async fn upload_document(file: &web_sys::File) -> Result<UploadReceipt, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Transport("could not build multipart form".to_owned()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Transport("could not attach file to form".to_owned()))?;
    let resp = gloo_net::http::Request::post(&upload_endpoint())
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<UploadReceipt>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Fetch the stored-document inventory from the ingestion service.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failures or non-2xx responses.
pub async fn fetch_documents() -> Result<Vec<DocumentSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&documents_endpoint())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<Vec<DocumentSummary>>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Run a keyword search and flatten the backend's nested-array envelope into
/// row-aligned hits.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failures, non-2xx responses, or a
/// success body whose parallel arrays are misaligned.
pub async fn search_documents(query: &str) -> Result<Vec<SearchHit>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&search_endpoint(query))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        let body: SearchResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        body.into_hits()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Request a multi-decade synthesis report for one concept term.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failures or non-2xx responses; the
/// backend's `detail` message (e.g. "Synthesis failed") surfaces verbatim.
pub async fn fetch_synthesis(term: &str) -> Result<SynthesisReport, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&synthesis_endpoint(term))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<SynthesisReport>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = term;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
