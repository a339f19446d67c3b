//! Note Composer Component
//!
//! Form for creating new notes; validates both fields on every keystroke.

use leptos::prelude::*;

use crate::composer::ComposerState;
use crate::models::NoteEvent;

/// Form emitting `NoteEvent::CreateRequested` when both fields are filled
#[component]
pub fn NoteComposer(
    #[prop(into)] on_event: Callback<NoteEvent>,
) -> impl IntoView {
    let state = RwSignal::new(ComposerState::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut draft = None;
        state.update(|s| draft = s.submit());
        if let Some(draft) = draft {
            on_event.run(NoteEvent::CreateRequested(draft));
        }
    };

    view! {
        <div class="note-composer">
            <h2>"Create a new note"</h2>
            <form on:submit=submit>
                <div class="note-composer-group">
                    <label for="note-composer-title">"Title"</label>
                    <input
                        type="text"
                        id="note-composer-title"
                        name="title"
                        required
                        prop:value=move || state.with(|s| s.title.value.clone())
                        on:input=move |ev| state.update(|s| s.set_title(event_target_value(&ev)))
                    />
                    <div class="note-composer-message">
                        {move || state.with(|s| s.title_message())}
                    </div>
                </div>
                <div class="note-composer-group">
                    <label for="note-composer-body">"Note"</label>
                    <textarea
                        id="note-composer-body"
                        name="body"
                        required
                        prop:value=move || state.with(|s| s.body.value.clone())
                        on:input=move |ev| state.update(|s| s.set_body(event_target_value(&ev)))
                    />
                    <div class="note-composer-message">
                        {move || state.with(|s| s.body_message())}
                    </div>
                </div>
                <button type="submit" disabled=move || state.with(|s| !s.can_submit())>
                    "Add note"
                </button>
            </form>
        </div>
    }
}
