//! Note Card Component
//!
//! One note with its date and the archive/delete actions.

use leptos::prelude::*;

use crate::models::{Note, NoteEvent};

/// A single note card
///
/// Title and body are rendered as text nodes, so any markup in them is
/// displayed literally. The card never calls the service; both buttons only
/// emit a `NoteEvent` through `on_event`.
#[component]
pub fn NoteCard(
    note: Note,
    #[prop(into)] on_event: Callback<NoteEvent>,
    /// Inline entrance animation, if any
    #[prop(into)] entrance_style: Signal<Option<String>>,
) -> impl IntoView {
    let archive_label = note.archive_label();
    let date = note.formatted_date();
    let archive_event = NoteEvent::archive_toggle(&note);
    let delete_event = NoteEvent::delete(&note);
    let Note { title, body, archived, .. } = note;

    view! {
        <article
            class=if archived { "note-card archived" } else { "note-card" }
            style=move || entrance_style.get().unwrap_or_default()
        >
            <h3 class="note-card-title">{title}</h3>
            <p class="note-card-date">{date}</p>
            <p class="note-card-body">{body}</p>
            <div class="note-card-actions">
                <button
                    class="note-card-archive"
                    on:click=move |_| on_event.run(archive_event.clone())
                >
                    {archive_label}
                </button>
                <button
                    class="note-card-delete"
                    on:click=move |_| on_event.run(delete_event.clone())
                >
                    "Delete"
                </button>
            </div>
        </article>
    }
}
