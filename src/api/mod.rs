//! Remote Notes Service
//!
//! Contract of the notes service plus its HTTP binding, organized by concern.

mod envelope;
mod notes;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Note, NoteDraft};

pub use envelope::{parse_envelope, parse_envelope_data};
pub use notes::HttpNotesApi;

/// Failure of any call to the notes service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Service answered with a non-"success" status
    #[error("{0}")]
    Rejected(String),
    /// Request never produced a response
    #[error("{0}")]
    Transport(String),
    /// Response body was not a valid envelope
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations of the remote notes service.
///
/// Futures are not `Send`: the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait NotesApi: Send + Sync {
    async fn list_active(&self) -> ApiResult<Vec<Note>>;
    async fn list_archived(&self) -> ApiResult<Vec<Note>>;
    async fn create(&self, draft: &NoteDraft) -> ApiResult<Note>;
    async fn delete(&self, id: &str) -> ApiResult<()>;
    async fn archive(&self, id: &str) -> ApiResult<()>;
    async fn unarchive(&self, id: &str) -> ApiResult<()>;
}
