//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod card_grid;
pub mod header;
pub mod help_dialog;
pub mod hit_map;
pub mod home;
pub mod layout;
pub mod notice_dialog;
pub mod quit_dialog;
pub mod sidebar;

pub use help_dialog::HelpDialog;
pub use home::{draw_page, FocusMove, HomeComponent};
pub use layout::centered_popup;
pub use notice_dialog::NoticeDialog;
pub use quit_dialog::QuitDialog;
