//! Note Composer State
//!
//! Two required fields, validated on every keystroke. The form moves through
//! Empty -> PartiallyFilled -> Valid and only a Valid form yields a draft.

use crate::models::NoteDraft;

pub const TITLE_REQUIRED: &str = "Title is required!";
pub const BODY_REQUIRED: &str = "Note body cannot be empty!";

/// Overall form phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerPhase {
    Empty,
    PartiallyFilled,
    Valid,
}

/// One required text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    /// Edited at least once since the last reset
    pub touched: bool,
}

impl Field {
    pub fn is_valid(&self) -> bool {
        !self.value.trim().is_empty()
    }

    fn edit(&mut self, value: String) {
        self.value = value;
        self.touched = true;
    }

    fn message(&self, required: &'static str) -> Option<&'static str> {
        (self.touched && !self.is_valid()).then_some(required)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub title: Field,
    pub body: Field,
}

impl ComposerState {
    pub fn set_title(&mut self, value: String) {
        self.title.edit(value);
    }

    pub fn set_body(&mut self, value: String) {
        self.body.edit(value);
    }

    pub fn phase(&self) -> ComposerPhase {
        match (self.title.is_valid(), self.body.is_valid()) {
            (true, true) => ComposerPhase::Valid,
            (false, false) => ComposerPhase::Empty,
            _ => ComposerPhase::PartiallyFilled,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.phase() == ComposerPhase::Valid
    }

    pub fn title_message(&self) -> Option<&'static str> {
        self.title.message(TITLE_REQUIRED)
    }

    pub fn body_message(&self) -> Option<&'static str> {
        self.body.message(BODY_REQUIRED)
    }

    /// Take the draft (values verbatim) and reset, or do nothing when invalid
    pub fn submit(&mut self) -> Option<NoteDraft> {
        if !self.can_submit() {
            return None;
        }
        let state = std::mem::take(self);
        Some(NoteDraft { title: state.title.value, body: state.body.value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(title: &str, body: &str) -> ComposerState {
        let mut state = ComposerState::default();
        state.set_title(title.to_string());
        state.set_body(body.to_string());
        state
    }

    #[test]
    fn test_pristine_form() {
        let state = ComposerState::default();
        assert_eq!(state.phase(), ComposerPhase::Empty);
        assert!(!state.can_submit());
        assert_eq!(state.title_message(), None);
        assert_eq!(state.body_message(), None);
    }

    #[test]
    fn test_submit_enablement() {
        let cases = [
            ("", "", false, ComposerPhase::Empty),
            ("Groceries", "", false, ComposerPhase::PartiallyFilled),
            ("", "Milk", false, ComposerPhase::PartiallyFilled),
            ("   ", "\n\t", false, ComposerPhase::Empty),
            ("Groceries", "  ", false, ComposerPhase::PartiallyFilled),
            ("Groceries", "Milk", true, ComposerPhase::Valid),
        ];
        for (title, body, enabled, phase) in cases {
            let state = filled(title, body);
            assert_eq!(state.can_submit(), enabled, "title={:?} body={:?}", title, body);
            assert_eq!(state.phase(), phase, "title={:?} body={:?}", title, body);
        }
    }

    #[test]
    fn test_messages_follow_edits() {
        let mut state = ComposerState::default();
        state.set_title("  ".to_string());
        assert_eq!(state.title_message(), Some(TITLE_REQUIRED));
        assert_eq!(state.body_message(), None);

        state.set_title("Groceries".to_string());
        assert_eq!(state.title_message(), None);

        state.set_body(String::new());
        assert_eq!(state.body_message(), Some(BODY_REQUIRED));
    }

    #[test]
    fn test_submit_keeps_values_verbatim_and_resets() {
        let mut state = filled("  Groceries ", "Milk, eggs\n");

        let draft = state.submit().expect("valid form should submit");
        assert_eq!(draft, NoteDraft { title: "  Groceries ".into(), body: "Milk, eggs\n".into() });

        assert_eq!(state, ComposerState::default());
        assert!(!state.can_submit());
        assert_eq!(state.title_message(), None);
    }

    #[test]
    fn test_invalid_submit_is_inert() {
        let mut state = filled("Groceries", " ");
        let before = state.clone();
        assert_eq!(state.submit(), None);
        assert_eq!(state, before);
    }
}
