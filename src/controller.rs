//! Note Controller
//!
//! Page-level orchestration: turns component events into remote calls,
//! re-fetches after every mutation and reports outcomes to the user.
//!
//! The rendered lists are only ever replaced wholesale from a fetch. Each
//! `load_notes` call takes a new token; a load that resolves after a newer
//! one was requested is discarded, so the last *requested* load wins.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::NotesApi;
use crate::collaborators::{
    Collaborators, Confirmation, ConfirmationPrompt, LoadingIndicator, NoteBoard, Notice,
    NoticeKind, Notifier, Transitioner,
};
use crate::models::{Note, NoteDraft, NoteEvent, Partition};

// ========================
// User-facing Text
// ========================

const ERROR_TITLE: &str = "Error!";
const CREATED_TITLE: &str = "Success!";
const CREATED_MESSAGE: &str = "New note added successfully!";
const DELETED_TITLE: &str = "Deleted!";
const DELETED_MESSAGE: &str = "Your note has been deleted.";
const ARCHIVED_TITLE: &str = "Archived!";
const ARCHIVED_MESSAGE: &str = "The note has been archived.";
const RESTORED_TITLE: &str = "Restored!";
const RESTORED_MESSAGE: &str = "The note was moved back to active notes.";

fn delete_confirmation() -> Confirmation {
    Confirmation {
        kind: NoticeKind::Warning,
        title: "Are you sure?".to_string(),
        text: "Deleted notes cannot be recovered!".to_string(),
        confirm_label: "Yes, delete it!".to_string(),
        cancel_label: "Cancel".to_string(),
    }
}

/// What became of a single controller operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Failed,
    /// The user declined the confirmation
    Cancelled,
    /// A newer load was requested before this one resolved
    Superseded,
}

/// Shows the loading indicator for as long as it lives
struct LoadingGuard<'a> {
    indicator: &'a dyn LoadingIndicator,
}

impl<'a> LoadingGuard<'a> {
    fn show(indicator: &'a dyn LoadingIndicator) -> Self {
        indicator.show();
        Self { indicator }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

/// Sole owner of remote synchronization and list rendering
pub struct NoteController {
    api: Box<dyn NotesApi>,
    board: Box<dyn NoteBoard>,
    loading: Box<dyn LoadingIndicator>,
    prompt: Box<dyn ConfirmationPrompt>,
    notifier: Box<dyn Notifier>,
    transitioner: Box<dyn Transitioner>,
    load_token: AtomicU64,
}

impl NoteController {
    pub fn new(collaborators: Collaborators) -> Self {
        let Collaborators { api, board, loading, prompt, notifier, transitioner } = collaborators;
        Self { api, board, loading, prompt, notifier, transitioner, load_token: AtomicU64::new(0) }
    }

    /// Route a component event to its handler
    pub async fn dispatch(&self, event: NoteEvent) -> Outcome {
        match event {
            NoteEvent::CreateRequested(draft) => self.handle_create(draft).await,
            NoteEvent::DeleteRequested { id } => self.handle_delete(&id).await,
            NoteEvent::ArchiveToggleRequested { id, archived } => {
                self.handle_archive_toggle(&id, archived).await
            }
        }
    }

    /// Fetch both partitions and rebuild both lists, or neither
    pub async fn load_notes(&self) -> Outcome {
        let token = self.load_token.fetch_add(1, Ordering::SeqCst) + 1;
        let _loading = LoadingGuard::show(self.loading.as_ref());
        log::debug!("[LOAD] request #{}", token);

        let fetched = futures::try_join!(self.api.list_active(), self.api.list_archived());

        let latest = self.load_token.load(Ordering::SeqCst);
        if latest != token {
            match &fetched {
                Ok(_) => log::debug!("[LOAD] dropping result of #{}, #{} is newer", token, latest),
                Err(e) => log::warn!(
                    "[LOAD] dropping failure of #{} ({}), #{} is newer",
                    token,
                    e,
                    latest
                ),
            }
            return Outcome::Superseded;
        }

        match fetched {
            Ok((active, archived)) => {
                log::info!(
                    "[LOAD] #{}: {} active, {} archived",
                    token,
                    active.len(),
                    archived.len()
                );
                self.render(Partition::Active, active);
                self.render(Partition::Archived, archived);
                Outcome::Completed
            }
            Err(e) => {
                log::error!("[LOAD] #{} failed: {}", token, e);
                let message = format!("Failed to load notes: {}", e);
                self.notifier.notify(Notice::error(ERROR_TITLE, message));
                Outcome::Failed
            }
        }
    }

    pub async fn handle_create(&self, draft: NoteDraft) -> Outcome {
        let _loading = LoadingGuard::show(self.loading.as_ref());

        match self.api.create(&draft).await {
            Ok(note) => {
                log::info!("[CREATE] created {}", note.id);
                self.notifier.notify(Notice::success(CREATED_TITLE, CREATED_MESSAGE));
                self.load_notes().await;
                Outcome::Completed
            }
            Err(e) => {
                log::error!("[CREATE] failed: {}", e);
                let message = format!("Failed to add note: {}", e);
                self.notifier.notify(Notice::error(ERROR_TITLE, message));
                Outcome::Failed
            }
        }
    }

    pub async fn handle_delete(&self, id: &str) -> Outcome {
        if !self.prompt.confirm(delete_confirmation()).await {
            log::debug!("[DELETE] {} kept, user declined", id);
            return Outcome::Cancelled;
        }

        let _loading = LoadingGuard::show(self.loading.as_ref());
        match self.api.delete(id).await {
            Ok(()) => {
                log::info!("[DELETE] deleted {}", id);
                self.notifier.notify(Notice::success(DELETED_TITLE, DELETED_MESSAGE));
                self.load_notes().await;
                Outcome::Completed
            }
            Err(e) => {
                log::error!("[DELETE] {} failed: {}", id, e);
                let message = format!("Failed to delete note: {}", e);
                self.notifier.notify(Notice::error(ERROR_TITLE, message));
                Outcome::Failed
            }
        }
    }

    pub async fn handle_archive_toggle(&self, id: &str, currently_archived: bool) -> Outcome {
        let _loading = LoadingGuard::show(self.loading.as_ref());

        let (result, done) = if currently_archived {
            (self.api.unarchive(id).await, Notice::success(RESTORED_TITLE, RESTORED_MESSAGE))
        } else {
            (self.api.archive(id).await, Notice::success(ARCHIVED_TITLE, ARCHIVED_MESSAGE))
        };

        match result {
            Ok(()) => {
                log::info!("[ARCHIVE] {} archived={}", id, !currently_archived);
                self.notifier.notify(done);
                self.load_notes().await;
                Outcome::Completed
            }
            Err(e) => {
                log::error!("[ARCHIVE] {} failed: {}", id, e);
                let message = format!("Failed to update note: {}", e);
                self.notifier.notify(Notice::error(ERROR_TITLE, message));
                Outcome::Failed
            }
        }
    }

    fn render(&self, partition: Partition, notes: Vec<Note>) {
        let count = notes.len();
        self.board.replace(partition, notes);
        self.transitioner.stagger_in(partition, count);
    }
}
