//! Search matching and trailing-edge debounce

use super::card::Card;
use std::time::{Duration, Instant};

/// Defers a recomputation until input has been quiet for a fixed period.
///
/// Every `schedule` replaces the pending deadline, so only the last input
/// inside a quiet period is ever acted upon.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    due_at: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            due_at: None,
        }
    }

    pub fn schedule(&mut self, now: Instant) {
        self.due_at = Some(now + self.quiet);
    }

    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    /// Consume the pending deadline if it has passed
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due_at {
            Some(due) if due <= now => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }
}

/// Case-insensitive substring match on title or category label.
///
/// `query` must already be lower-cased.
pub fn card_matches(card: &Card, query: &str) -> bool {
    card.title.to_lowercase().contains(query) || card.category_label.to_lowercase().contains(query)
}
