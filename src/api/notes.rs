//! Note Endpoints
//!
//! HTTP binding of the notes service using gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{parse_envelope, parse_envelope_data, ApiError, ApiResult, NotesApi};
use crate::models::{Note, NoteDraft};

/// Everything but unreserved characters is encoded inside a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'~');

/// Notes service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    base_url: String,
}

impl HttpNotesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `/notes/{id}{suffix}` with the id percent-encoded
    fn note_url(&self, id: &str, suffix: &str) -> String {
        let id = utf8_percent_encode(id, PATH_SEGMENT);
        self.url(&format!("/notes/{}{}", id, suffix))
    }
}

// ========================
// Response Helpers
// ========================

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

async fn body_text(response: Response) -> ApiResult<String> {
    log::debug!("[API] {} {}", response.status(), response.url());
    response.text().await.map_err(transport)
}

async fn expect_data<T: serde::de::DeserializeOwned>(response: Response) -> ApiResult<T> {
    let text = body_text(response).await?;
    parse_envelope_data(&text)
}

async fn expect_ok(response: Response) -> ApiResult<()> {
    let text = body_text(response).await?;
    parse_envelope::<serde_json::Value>(&text).map(|_| ())
}

// ========================
// Commands
// ========================

#[async_trait(?Send)]
impl NotesApi for HttpNotesApi {
    async fn list_active(&self) -> ApiResult<Vec<Note>> {
        let response = Request::get(&self.url("/notes")).send().await.map_err(transport)?;
        expect_data(response).await
    }

    async fn list_archived(&self) -> ApiResult<Vec<Note>> {
        let response = Request::get(&self.url("/notes/archived")).send().await.map_err(transport)?;
        expect_data(response).await
    }

    async fn create(&self, draft: &NoteDraft) -> ApiResult<Note> {
        let response = Request::post(&self.url("/notes"))
            .json(draft)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        expect_data(response).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        let response = Request::delete(&self.note_url(id, "")).send().await.map_err(transport)?;
        expect_ok(response).await
    }

    async fn archive(&self, id: &str) -> ApiResult<()> {
        let response =
            Request::post(&self.note_url(id, "/archive")).send().await.map_err(transport)?;
        expect_ok(response).await
    }

    async fn unarchive(&self, id: &str) -> ApiResult<()> {
        let response =
            Request::post(&self.note_url(id, "/unarchive")).send().await.map_err(transport)?;
        expect_ok(response).await
    }
}
