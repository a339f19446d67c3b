//! Staggered Entrance
//!
//! Freshly rendered cards fade and slide in one after another. Each card
//! gets an inline CSS animation; the `note-entrance` keyframes live in
//! `index.html`.

use crate::collaborators::Transitioner;
use crate::models::Partition;
use crate::store::{store_set_entrance, NotesStore};

/// Timing of the entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceTiming {
    pub duration_ms: u32,
    pub stagger_ms: u32,
    pub offset_px: u32,
}

impl Default for EntranceTiming {
    fn default() -> Self {
        Self { duration_ms: 500, stagger_ms: 100, offset_px: 30 }
    }
}

impl EntranceTiming {
    pub fn delay_ms(&self, index: usize) -> u32 {
        u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(self.stagger_ms)
    }

    /// Inline style of the card at `index`
    pub fn style(&self, index: usize) -> String {
        format!(
            "--entrance-offset: {}px; animation: note-entrance {}ms ease-out {}ms both;",
            self.offset_px,
            self.duration_ms,
            self.delay_ms(index)
        )
    }

    pub fn styles(&self, count: usize) -> Vec<String> {
        (0..count).map(|index| self.style(index)).collect()
    }
}

/// Transitioner writing per-card animation styles into the store
pub struct CssTransitioner {
    store: NotesStore,
    timing: EntranceTiming,
}

impl CssTransitioner {
    pub fn new(store: NotesStore, timing: EntranceTiming) -> Self {
        Self { store, timing }
    }
}

impl Transitioner for CssTransitioner {
    fn stagger_in(&self, partition: Partition, count: usize) {
        store_set_entrance(&self.store, partition, self.timing.styles(count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_are_staggered() {
        let timing = EntranceTiming::default();
        assert_eq!(timing.delay_ms(0), 0);
        assert_eq!(timing.delay_ms(1), 100);
        assert_eq!(timing.delay_ms(7), 700);
        assert_eq!(timing.delay_ms(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_style() {
        let timing = EntranceTiming { duration_ms: 400, stagger_ms: 50, offset_px: 20 };
        assert_eq!(
            timing.style(2),
            "--entrance-offset: 20px; animation: note-entrance 400ms ease-out 100ms both;"
        );
        assert_eq!(timing.styles(3).len(), 3);
        assert!(timing.styles(0).is_empty());
    }
}
