//! Two-phase show/hide transitions for cards
//!
//! A show makes the card part of the layout immediately and fades it in
//! after a short delay. A hide fades the card out immediately and removes it
//! from the layout once the fade has finished. Each card keeps at most one
//! pending follow-up; starting a new transition replaces it.

use std::time::{Duration, Instant};

/// Where a card is in its show/hide cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Shown,
    Showing,
    Hiding,
    Hidden,
}

/// Presentation attributes the renderer reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    /// Whether the card takes part in layout
    pub displayed: bool,
    pub opacity: f32,
    /// Downward offset in logical pixels
    pub offset_px: u32,
}

impl Visual {
    const SHOWN: Visual = Visual {
        displayed: true,
        opacity: 1.0,
        offset_px: 0,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    phase: Phase,
    visual: Visual,
    due: Option<Instant>,
}

impl Default for Transition {
    fn default() -> Self {
        Self::shown()
    }
}

impl Transition {
    /// A card that is fully visible with nothing pending
    pub fn shown() -> Self {
        Self {
            phase: Phase::Shown,
            visual: Visual::SHOWN,
            due: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn visual(&self) -> Visual {
        self.visual
    }

    /// True once the card has settled in the shown state
    pub fn is_shown(&self) -> bool {
        self.phase == Phase::Shown
    }

    /// True while the card is, or is becoming, visible
    pub fn is_visible_target(&self) -> bool {
        matches!(self.phase, Phase::Shown | Phase::Showing)
    }

    /// Begin showing: display now, fade in after `delay`
    pub fn show(&mut self, now: Instant, delay: Duration) {
        if self.is_visible_target() {
            return;
        }
        self.phase = Phase::Showing;
        self.visual.displayed = true;
        self.due = Some(now + delay);
    }

    /// Begin hiding: fade out now, leave the layout after `delay`
    pub fn hide(&mut self, now: Instant, delay: Duration, offset_px: u32) {
        if !self.is_visible_target() {
            return;
        }
        self.phase = Phase::Hiding;
        self.visual.opacity = 0.0;
        self.visual.offset_px = offset_px;
        self.due = Some(now + delay);
    }

    /// Run the pending follow-up if its deadline has passed.
    ///
    /// Returns `true` when the card changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {}
            _ => return false,
        }
        self.due = None;
        match self.phase {
            Phase::Showing => {
                self.phase = Phase::Shown;
                self.visual = Visual::SHOWN;
            }
            Phase::Hiding => {
                self.phase = Phase::Hidden;
                self.visual.displayed = false;
            }
            Phase::Shown | Phase::Hidden => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOW: Duration = Duration::from_millis(100);
    const HIDE: Duration = Duration::from_millis(300);

    #[test]
    fn test_hide_fades_then_leaves_layout() {
        let start = Instant::now();
        let mut t = Transition::shown();

        t.hide(start, HIDE, 30);
        assert_eq!(t.phase(), Phase::Hiding);
        assert!(t.visual().displayed);
        assert_eq!(t.visual().opacity, 0.0);
        assert_eq!(t.visual().offset_px, 30);

        assert!(!t.advance(start + Duration::from_millis(299)));
        assert!(t.visual().displayed);

        assert!(t.advance(start + HIDE));
        assert_eq!(t.phase(), Phase::Hidden);
        assert!(!t.visual().displayed);
        assert!(!t.advance(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_show_displays_then_fades_in() {
        let start = Instant::now();
        let mut t = Transition::shown();
        t.hide(start, HIDE, 30);
        t.advance(start + HIDE);

        let later = start + Duration::from_secs(1);
        t.show(later, SHOW);
        assert_eq!(t.phase(), Phase::Showing);
        assert!(t.visual().displayed);
        assert_eq!(t.visual().opacity, 0.0);

        assert!(t.advance(later + SHOW));
        assert!(t.is_shown());
        assert_eq!(t.visual(), Visual::SHOWN);
    }

    #[test]
    fn test_show_preempts_pending_hide() {
        let start = Instant::now();
        let mut t = Transition::shown();
        t.hide(start, HIDE, 30);

        // Re-shown before the hide completes; the stale hide must not fire
        t.show(start + Duration::from_millis(50), SHOW);
        assert!(t.advance(start + Duration::from_millis(150)));
        assert!(t.is_shown());

        assert!(!t.advance(start + Duration::from_millis(400)));
        assert!(t.visual().displayed);
    }

    #[test]
    fn test_repeated_requests_are_no_ops() {
        let start = Instant::now();
        let mut t = Transition::shown();
        t.show(start, SHOW);
        assert_eq!(t.phase(), Phase::Shown);
        assert!(!t.advance(start + Duration::from_secs(1)));

        // A second hide keeps the first deadline
        t.hide(start, HIDE, 30);
        t.hide(start + Duration::from_millis(200), HIDE, 30);
        assert!(t.advance(start + HIDE));
        assert_eq!(t.phase(), Phase::Hidden);
    }
}
