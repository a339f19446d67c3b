//! Notes Board App
//!
//! Root component: builds the controller from its collaborators and wires
//! every component event into it.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpNotesApi;
use crate::collaborators::Collaborators;
use crate::components::{DialogHost, HeaderBar, LoadingSpinner, NoteComposer, NoteList};
use crate::config::AppConfig;
use crate::controller::NoteController;
use crate::models::{NoteEvent, Partition};
use crate::overlay::Overlay;
use crate::store::{store_is_loading, NotesState, NotesStore};
use crate::transition::CssTransitioner;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store: NotesStore = Store::new(NotesState::default());
    let overlay = Overlay::new(config.notice_timeout_ms);

    // Provide the store to the lists
    provide_context(store);

    let controller = Arc::new(NoteController::new(Collaborators {
        api: Box::new(HttpNotesApi::new(config.api_base_url.clone())),
        board: Box::new(store),
        loading: Box::new(store),
        prompt: Box::new(overlay.clone()),
        notifier: Box::new(overlay.clone()),
        transitioner: Box::new(CssTransitioner::new(store, config.entrance)),
    }));

    // Every event runs as its own task; a pending confirmation does not
    // block other cards
    let on_event = {
        let controller = controller.clone();
        Callback::new(move |event: NoteEvent| {
            log::debug!("[APP] {:?}", event);
            let controller = controller.clone();
            spawn_local(async move {
                controller.dispatch(event).await;
            });
        })
    };

    // Initial load on mount
    Effect::new(move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.load_notes().await;
        });
    });

    view! {
        <div class="app-layout">
            <HeaderBar title=config.title.clone() />

            <main class="main-content">
                <NoteComposer on_event=on_event />
                <LoadingSpinner visible=Signal::derive(move || store_is_loading(&store)) />
                <NoteList partition=Partition::Active on_event=on_event />
                <NoteList partition=Partition::Archived on_event=on_event />
            </main>

            <DialogHost overlay=overlay />
        </div>
    }
}
