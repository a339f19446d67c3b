//! Note List Component
//!
//! Renders one partition of the board as a grid of cards.

use leptos::prelude::*;

use crate::components::NoteCard;
use crate::models::{NoteEvent, Partition};
use crate::store::{store_entrance_style, store_notes, use_notes_store, NotesStateStoreFields};

/// Cards of one partition, rebuilt from scratch on every render
#[component]
pub fn NoteList(
    partition: Partition,
    #[prop(into)] on_event: Callback<NoteEvent>,
) -> impl IntoView {
    let store = use_notes_store();

    // The render generation is part of the key, so every rebuild recreates
    // all cards instead of reusing the ones with matching ids
    let cards = move || {
        let generation = store.generation().get();
        store_notes(&store, partition)
            .into_iter()
            .enumerate()
            .map(|(index, note)| (generation, index, note))
            .collect::<Vec<_>>()
    };
    let is_empty = move || store_notes(&store, partition).is_empty();

    view! {
        <section class="note-list">
            <h2 class="note-list-heading">{partition.heading()}</h2>
            <Show when=is_empty>
                <p class="note-list-empty">"No notes here yet."</p>
            </Show>
            <div class="note-list-grid">
                <For
                    each=cards
                    key=|(generation, _, note)| (*generation, note.id.clone())
                    children=move |(_, index, note)| {
                        let entrance_style = Signal::derive(move || {
                            store_entrance_style(&store, partition, index)
                        });
                        view! {
                            <NoteCard note=note on_event=on_event entrance_style=entrance_style />
                        }
                    }
                />
            </div>
        </section>
    }
}
