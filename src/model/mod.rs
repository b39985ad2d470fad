//! Model layer - page state
//!
//! This module contains the state the interaction controller works on:
//! - `Card` - catalog entries with grouping and transition state
//! - `SelectorSet` / `Sidebar` - category navigation
//! - `Debouncer` / `RevealObserver` - time and scroll driven helpers
//! - `ModalStack` - modal overlay management

pub mod card;
pub mod modal;
pub mod reveal;
pub mod search;
pub mod selector;
pub mod sidebar;
pub mod transition;
pub mod ui;

// Re-export commonly used types
pub use card::{Card, CardField, GameEntry, LayoutNode};
pub use selector::{SelectorSet, ALL_CATEGORY};
pub use sidebar::{Sidebar, SidebarVisibility};
pub use ui::{HeaderBackdrop, ViewMode, Viewport};
