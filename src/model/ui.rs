//! UI state - presentation primitives shared by the controller and components

use serde::{Deserialize, Serialize};

/// Logical pixels covered by one terminal column
pub const CELL_WIDTH_PX: u32 = 8;

/// Logical pixels covered by one terminal row
pub const CELL_HEIGHT_PX: u32 = 16;

/// Card arrangement mode, shared by every card on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn all() -> [ViewMode; 2] {
        [ViewMode::Grid, ViewMode::List]
    }

    pub fn name(&self) -> &str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }

    pub fn toggled(&self) -> ViewMode {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Viewport size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert a terminal size (columns, rows) to logical pixels
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as u32 * CELL_WIDTH_PX,
            height: rows as u32 * CELL_HEIGHT_PX,
        }
    }

    pub fn is_mobile(&self, breakpoint: u32) -> bool {
        self.width <= breakpoint
    }
}

/// Header background, which firms up once the page has scrolled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderBackdrop {
    Translucent,
    Solid,
}

impl HeaderBackdrop {
    pub fn for_scroll(scroll_px: u32, threshold_px: u32) -> Self {
        if scroll_px > threshold_px {
            HeaderBackdrop::Solid
        } else {
            HeaderBackdrop::Translucent
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            HeaderBackdrop::Translucent => 0.9,
            HeaderBackdrop::Solid => 0.95,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_from_terminal() {
        let viewport = Viewport::from_terminal(96, 40);
        assert_eq!(viewport.width, 768);
        assert_eq!(viewport.height, 640);
        assert!(viewport.is_mobile(768));
        assert!(!Viewport::from_terminal(97, 40).is_mobile(768));
    }

    #[test]
    fn test_header_backdrop_threshold() {
        assert_eq!(HeaderBackdrop::for_scroll(0, 100), HeaderBackdrop::Translucent);
        assert_eq!(HeaderBackdrop::for_scroll(100, 100), HeaderBackdrop::Translucent);
        assert_eq!(HeaderBackdrop::for_scroll(101, 100), HeaderBackdrop::Solid);
    }

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
    }
}
