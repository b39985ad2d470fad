//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::controller::ClickTarget;
use crate::model::ViewMode;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for timers and transitions
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Card focus
    // ─────────────────────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    FocusUp,
    FocusDown,
    /// Launch the focused card
    ActivateFocused,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Categories & sidebar
    // ─────────────────────────────────────────────────────────────────────────
    NextCategory,
    PrevCategory,
    /// Filter by the "all" category
    ShowAll,
    ToggleSidebar,

    // ─────────────────────────────────────────────────────────────────────────
    // View mode
    // ─────────────────────────────────────────────────────────────────────────
    ToggleView,
    ChangeView(ViewMode),

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    FocusSearch,
    /// Leave the search box, keeping its value
    BlurSearch,
    /// Clear the search box and leave it
    ClearSearch,
    SearchInput(char),
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Pointer
    // ─────────────────────────────────────────────────────────────────────────
    Click(ClickTarget),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::FocusUp => write!(f, "FocusUp"),
            Action::FocusDown => write!(f, "FocusDown"),
            Action::ActivateFocused => write!(f, "ActivateFocused"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::NextCategory => write!(f, "NextCategory"),
            Action::PrevCategory => write!(f, "PrevCategory"),
            Action::ShowAll => write!(f, "ShowAll"),
            Action::ToggleSidebar => write!(f, "ToggleSidebar"),
            Action::ToggleView => write!(f, "ToggleView"),
            Action::ChangeView(mode) => write!(f, "ChangeView({})", mode.name()),
            Action::FocusSearch => write!(f, "FocusSearch"),
            Action::BlurSearch => write!(f, "BlurSearch"),
            Action::ClearSearch => write!(f, "ClearSearch"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::Click(target) => write!(f, "Click({:?})", target),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
