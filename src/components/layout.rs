//! Layout calculations for the page

use crate::model::{SidebarVisibility, ViewMode};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const SIDEBAR_WIDTH: u16 = 24;
pub const GRID_CARD_WIDTH: u16 = 26;
/// Border plus one line per field
pub const GRID_CARD_HEIGHT: u16 = 6;
/// Border plus the details row and the stats row
pub const LIST_CARD_HEIGHT: u16 = 4;

const HEADER_HEIGHT: u16 = 3;
const TOGGLE_WIDTH: u16 = 5;
const TITLE_WIDTH: u16 = 11;
const VIEW_BUTTONS_WIDTH: u16 = 20;

/// Page layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub toggle: Rect,
    pub title: Rect,
    pub search: Rect,
    pub view_buttons: Rect,
    /// Sidebar area when it is shown; overlaps `grid` on narrow viewports
    pub sidebar: Option<Rect>,
    pub grid: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the page layout for the current sidebar state
pub fn calculate_page_layout(area: Rect, sidebar: SidebarVisibility, is_mobile: bool) -> PageLayout {
    // Header + body + status line + help bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(TOGGLE_WIDTH),
            Constraint::Length(TITLE_WIDTH),
            Constraint::Min(0),
            Constraint::Length(VIEW_BUTTONS_WIDTH),
        ])
        .split(rows[0]);

    let body = rows[1];
    let (sidebar_area, grid_area) = match sidebar {
        SidebarVisibility::Shown if is_mobile => {
            let overlay = Rect::new(body.x, body.y, SIDEBAR_WIDTH.min(body.width), body.height);
            (Some(overlay), body)
        }
        SidebarVisibility::Shown => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(body);
            (Some(columns[0]), columns[1])
        }
        SidebarVisibility::Hidden | SidebarVisibility::Collapsed => (None, body),
    };

    PageLayout {
        toggle: header[0],
        title: header[1],
        search: header[2],
        view_buttons: header[3],
        sidebar: sidebar_area,
        grid: grid_area,
        status: rows[2],
        help: rows[3],
    }
}

/// Position of a card relative to the top-left of the scrolling content.
/// `y` counts content rows, which can exceed the terminal's `u16` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub id: usize,
    pub x: u16,
    pub y: u32,
    pub width: u16,
    pub height: u16,
}

pub fn grid_columns(mode: ViewMode, width: u16) -> usize {
    match mode {
        ViewMode::Grid => ((width / GRID_CARD_WIDTH) as usize).max(1),
        ViewMode::List => 1,
    }
}

/// Flow the displayed cards into rows
pub fn card_slots(ids: &[usize], mode: ViewMode, width: u16) -> Vec<CardSlot> {
    let columns = grid_columns(mode, width);
    let (card_width, card_height) = match mode {
        ViewMode::Grid => (GRID_CARD_WIDTH.min(width), GRID_CARD_HEIGHT),
        ViewMode::List => (width, LIST_CARD_HEIGHT),
    };

    ids.iter()
        .enumerate()
        .map(|(index, &id)| {
            let column = (index % columns) as u16;
            let row = u32::try_from(index / columns).unwrap_or(u32::MAX);
            CardSlot {
                id,
                x: column * card_width,
                y: row.saturating_mul(card_height as u32),
                width: card_width,
                height: card_height,
            }
        })
        .collect()
}

/// Total height of the scrolling content in rows
pub fn content_height(slots: &[CardSlot]) -> u32 {
    slots
        .iter()
        .map(|slot| slot.y.saturating_add(slot.height as u32))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_sidebar_takes_a_column() {
        let layout = calculate_page_layout(Rect::new(0, 0, 120, 40), SidebarVisibility::Shown, false);
        let sidebar = layout.sidebar.unwrap_or_default();
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.grid.x, SIDEBAR_WIDTH);
        assert_eq!(layout.grid.width, 120 - SIDEBAR_WIDTH);
        assert_eq!(layout.help.y, 39);
        assert_eq!(layout.status.y, 38);
    }

    #[test]
    fn test_mobile_sidebar_overlays_the_grid() {
        let layout = calculate_page_layout(Rect::new(0, 0, 80, 30), SidebarVisibility::Shown, true);
        assert_eq!(layout.grid.x, 0);
        assert_eq!(layout.grid.width, 80);
        assert!(layout.sidebar.is_some());
    }

    #[test]
    fn test_collapsed_sidebar_gives_grid_full_width() {
        let layout = calculate_page_layout(Rect::new(0, 0, 120, 40), SidebarVisibility::Collapsed, false);
        assert_eq!(layout.sidebar, None);
        assert_eq!(layout.grid.width, 120);
    }

    #[test]
    fn test_grid_slots_wrap_rows() {
        let slots = card_slots(&[0, 1, 2, 5], ViewMode::Grid, GRID_CARD_WIDTH * 3 + 4);
        assert_eq!(slots.len(), 4);
        assert_eq!((slots[2].x, slots[2].y), (GRID_CARD_WIDTH * 2, 0));
        assert_eq!((slots[3].id, slots[3].x, slots[3].y), (5, 0, GRID_CARD_HEIGHT as u32));
        assert_eq!(content_height(&slots), GRID_CARD_HEIGHT as u32 * 2);
    }

    #[test]
    fn test_list_slots_stack() {
        let slots = card_slots(&[3, 4], ViewMode::List, 60);
        assert_eq!(slots[1].y, LIST_CARD_HEIGHT as u32);
        assert_eq!(slots[1].width, 60);
        assert_eq!(grid_columns(ViewMode::List, 200), 1);
    }

    #[test]
    fn test_large_catalog_flows_past_terminal_rows() {
        let ids: Vec<usize> = (0..20_000).collect();

        let grid = card_slots(&ids, ViewMode::Grid, GRID_CARD_WIDTH);
        assert_eq!(grid[19_999].y, 19_999 * GRID_CARD_HEIGHT as u32);
        assert_eq!(content_height(&grid), 20_000 * GRID_CARD_HEIGHT as u32);

        let list = card_slots(&ids, ViewMode::List, 80);
        assert_eq!(list[19_999].y, 19_999 * LIST_CARD_HEIGHT as u32);
        assert_eq!(content_height(&list), 20_000 * LIST_CARD_HEIGHT as u32);
    }

    #[test]
    fn test_centered_popup_respects_origin() {
        let popup = centered_popup(Rect::new(10, 5, 40, 20), 20, 10);
        assert_eq!(popup, Rect::new(20, 10, 20, 10));
    }
}
