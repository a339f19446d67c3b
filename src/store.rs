//! Notes Board Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only the
//! controller writes here, through the `NoteBoard`, `LoadingIndicator` and
//! `Transitioner` implementations.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collaborators::{LoadingIndicator, NoteBoard};
use crate::models::{Note, Partition};

/// Rendered board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct NotesState {
    /// Active notes as of the last rendered fetch
    pub active: Vec<Note>,
    /// Archived notes as of the last rendered fetch
    pub archived: Vec<Note>,
    /// Bumped on every rebuild; part of each card key so cards are recreated
    pub generation: u64,
    /// Operations currently holding the loading indicator
    pub loading: u32,
    /// Per-card entrance styles of the active list
    pub active_entrance: Vec<String>,
    /// Per-card entrance styles of the archived list
    pub archived_entrance: Vec<String>,
}

/// Type alias for the store
pub type NotesStore = Store<NotesState>;

/// Get the notes store from context
pub fn use_notes_store() -> NotesStore {
    expect_context::<NotesStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Notes of one partition (tracked)
pub fn store_notes(store: &NotesStore, partition: Partition) -> Vec<Note> {
    match partition {
        Partition::Active => store.active().get(),
        Partition::Archived => store.archived().get(),
    }
}

/// Entrance style of the card at `index` (tracked)
pub fn store_entrance_style(
    store: &NotesStore,
    partition: Partition,
    index: usize,
) -> Option<String> {
    let pick = |styles: &Vec<String>| styles.get(index).cloned();
    match partition {
        Partition::Active => store.active_entrance().with(pick),
        Partition::Archived => store.archived_entrance().with(pick),
    }
}

/// Replace the entrance styles of one partition
pub fn store_set_entrance(store: &NotesStore, partition: Partition, styles: Vec<String>) {
    match partition {
        Partition::Active => *store.active_entrance().write() = styles,
        Partition::Archived => *store.archived_entrance().write() = styles,
    }
}

pub fn store_is_loading(store: &NotesStore) -> bool {
    store.loading().get() > 0
}

impl NoteBoard for NotesStore {
    fn replace(&self, partition: Partition, notes: Vec<Note>) {
        match partition {
            Partition::Active => *self.active().write() = notes,
            Partition::Archived => *self.archived().write() = notes,
        }
        *self.generation().write() += 1;
    }
}

impl LoadingIndicator for NotesStore {
    fn show(&self) {
        *self.loading().write() += 1;
    }

    fn hide(&self) {
        self.loading().update(|n| *n = n.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            title: format!("Note {}", id),
            body: String::new(),
            created_at: Utc.timestamp_millis_opt(0).unwrap(),
            archived: false,
        }
    }

    #[test]
    fn test_replace_rebuilds_partition() {
        let store = NotesStore::new(NotesState::default());

        store.replace(Partition::Active, vec![note("1"), note("2")]);
        store.replace(Partition::Archived, vec![note("3")]);
        store.replace(Partition::Active, vec![note("4")]);

        let active: Vec<String> =
            store.active().get_untracked().into_iter().map(|n| n.id).collect();
        assert_eq!(active, vec!["4"]);
        assert_eq!(store.archived().get_untracked().len(), 1);
        assert_eq!(store.generation().get_untracked(), 3);
    }

    #[test]
    fn test_loading_counter_nests() {
        let store = NotesStore::new(NotesState::default());

        store.show();
        store.show();
        store.hide();
        assert_eq!(store.loading().get_untracked(), 1);
        store.hide();
        assert_eq!(store.loading().get_untracked(), 0);

        // an unpaired hide never wraps below zero
        store.hide();
        assert_eq!(store.loading().get_untracked(), 0);
    }
}
