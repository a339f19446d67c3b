//! UI Components
//!
//! Reusable Leptos components. Each takes its data as props and reports
//! user actions through a callback; none of them talks to another directly.

mod dialog_host;
mod header_bar;
mod note_card;
mod note_composer;
mod note_list;

pub use dialog_host::{DialogHost, LoadingSpinner};
pub use header_bar::HeaderBar;
pub use note_card::NoteCard;
pub use note_composer::NoteComposer;
pub use note_list::NoteList;
