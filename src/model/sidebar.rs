//! Category sidebar state
//!
//! Narrow viewports show the sidebar as an overlay (`active`), wide ones
//! collapse it in place (`hidden`). Only one flag matters for a given width.

use super::ui::Viewport;

/// What the sidebar currently looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarVisibility {
    Hidden,
    Shown,
    Collapsed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebar {
    /// Overlay open (narrow viewports)
    pub active: bool,
    /// Collapsed (wide viewports)
    pub hidden: bool,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, viewport: Viewport, breakpoint: u32) {
        if viewport.is_mobile(breakpoint) {
            self.active = !self.active;
        } else {
            self.hidden = !self.hidden;
        }
    }

    pub fn close_overlay(&mut self) {
        self.active = false;
    }

    /// Normalize flags after the viewport changed size
    pub fn on_resize(&mut self, viewport: Viewport, breakpoint: u32) {
        self.active = false;
        if !viewport.is_mobile(breakpoint) {
            self.hidden = false;
        }
    }

    pub fn visibility(&self, viewport: Viewport, breakpoint: u32) -> SidebarVisibility {
        if viewport.is_mobile(breakpoint) {
            if self.active {
                SidebarVisibility::Shown
            } else {
                SidebarVisibility::Hidden
            }
        } else if self.hidden {
            SidebarVisibility::Collapsed
        } else {
            SidebarVisibility::Shown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BREAKPOINT: u32 = 768;

    #[test]
    fn test_toggle_uses_overlay_on_mobile() {
        let mut sidebar = Sidebar::new();
        let mobile = Viewport::new(500, 800);
        assert_eq!(sidebar.visibility(mobile, BREAKPOINT), SidebarVisibility::Hidden);

        sidebar.toggle(mobile, BREAKPOINT);
        assert!(sidebar.active);
        assert!(!sidebar.hidden);
        assert_eq!(sidebar.visibility(mobile, BREAKPOINT), SidebarVisibility::Shown);
    }

    #[test]
    fn test_toggle_collapses_on_desktop() {
        let mut sidebar = Sidebar::new();
        let desktop = Viewport::new(1200, 800);
        assert_eq!(sidebar.visibility(desktop, BREAKPOINT), SidebarVisibility::Shown);

        sidebar.toggle(desktop, BREAKPOINT);
        assert!(sidebar.hidden);
        assert_eq!(sidebar.visibility(desktop, BREAKPOINT), SidebarVisibility::Collapsed);
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        let mut sidebar = Sidebar::new();
        sidebar.toggle(Viewport::new(768, 800), BREAKPOINT);
        assert!(sidebar.active);
    }

    #[test]
    fn test_resize_to_desktop_clears_both_flags() {
        let mut sidebar = Sidebar {
            active: true,
            hidden: true,
        };
        sidebar.on_resize(Viewport::new(1200, 800), BREAKPOINT);
        assert_eq!(sidebar, Sidebar::new());
    }

    #[test]
    fn test_resize_on_mobile_keeps_collapse_flag() {
        let mut sidebar = Sidebar {
            active: true,
            hidden: true,
        };
        sidebar.on_resize(Viewport::new(400, 800), BREAKPOINT);
        assert!(!sidebar.active);
        assert!(sidebar.hidden);
    }
}
