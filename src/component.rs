//! Component trait - the seam between terminal input and page state
//!
//! Components map raw key and mouse events to `Action`s, apply actions in
//! `update`, and render in `draw`. Page-wide interaction state is owned by
//! `PageController`; components keep only presentation state.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// Called once after construction, before the first draw
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Translate a key press into an Action. No state changes here.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Translate a click or wheel event into an Action
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Apply an Action, optionally returning a follow-up
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
