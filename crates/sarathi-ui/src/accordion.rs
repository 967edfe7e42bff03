//! FAQ accordion state machine.

use serde::{Deserialize, Serialize};

/// One question/answer entry of the accordion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqItem {
    /// The question text.
    pub question: String,

    /// The answer text.
    pub answer: String,
}

impl FaqItem {
    /// Create a new FAQ item.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Open/close state of an accordion with at most one item expanded.
///
/// The first item starts open; selecting an open item closes it, selecting
/// a closed item moves the expansion there. The served pages render this
/// initial state into markup and drive the transitions from the base
/// template script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionState {
    len: usize,
    open: Option<usize>,
}

impl AccordionState {
    /// Initial state for `len` items: the first item open when any exist.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: if len > 0 { Some(0) } else { None },
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the accordion has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the currently open item, if any.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Whether the item at `index` is open.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Toggle the item at `index`. Out-of-range indices close everything.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) || index >= self.len {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_item_starts_open() {
        let state = AccordionState::new(4);
        assert_eq!(state.open_index(), Some(0));
        assert!(state.is_open(0));
        assert!(!state.is_open(1));
    }

    #[test]
    fn test_empty_accordion_has_nothing_open() {
        let state = AccordionState::new(0);
        assert!(state.is_empty());
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn test_toggle_open_item_closes_it() {
        let mut state = AccordionState::new(3);
        state.toggle(0);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn test_toggle_moves_expansion() {
        let mut state = AccordionState::new(3);
        state.toggle(2);
        assert!(state.is_open(2));
        assert!(!state.is_open(0));

        state.toggle(1);
        assert_eq!(state.open_index(), Some(1));
    }

    #[test]
    fn test_at_most_one_open() {
        let mut state = AccordionState::new(5);
        for index in 0..5 {
            state.toggle(index);
            let open_count = (0..5).filter(|&i| state.is_open(i)).count();
            assert!(open_count <= 1);
        }
    }

    #[test]
    fn test_out_of_range_toggle_closes() {
        let mut state = AccordionState::new(2);
        state.toggle(9);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn test_faq_item_creation() {
        let item = FaqItem::new("How many attempts?", "Six for the general category.");
        assert_eq!(item.question, "How many attempts?");
        assert!(item.answer.contains("Six"));
    }
}
