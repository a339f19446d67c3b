//! Controller Collaborators
//!
//! Capabilities the note controller is built from. Browser implementations
//! live in `store`, `overlay` and `transition`; tests substitute fakes.

use async_trait::async_trait;

use crate::api::NotesApi;
use crate::models::{Note, Partition};

/// Icon / tone of a prompt or notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warning",
        }
    }
}

/// A user-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: title.into(), message: message.into() }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: title.into(), message: message.into() }
    }

    /// Errors stay on screen until dismissed
    pub fn is_sticky(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// A blocking yes/no question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Asks the user a yes/no question
#[async_trait(?Send)]
pub trait ConfirmationPrompt: Send + Sync {
    /// Resolves to `true` only when the user confirmed
    async fn confirm(&self, request: Confirmation) -> bool;
}

/// Shows notices; never affects control flow
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Plays the entrance of freshly rendered cards
pub trait Transitioner: Send + Sync {
    fn stagger_in(&self, partition: Partition, count: usize);
}

/// The two rendered list containers
pub trait NoteBoard: Send + Sync {
    /// Discard the partition's cards and rebuild them from `notes`
    fn replace(&self, partition: Partition, notes: Vec<Note>);
}

/// Global busy indicator
pub trait LoadingIndicator: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// Everything a controller is constructed from
pub struct Collaborators {
    pub api: Box<dyn NotesApi>,
    pub board: Box<dyn NoteBoard>,
    pub loading: Box<dyn LoadingIndicator>,
    pub prompt: Box<dyn ConfirmationPrompt>,
    pub notifier: Box<dyn Notifier>,
    pub transitioner: Box<dyn Transitioner>,
}
