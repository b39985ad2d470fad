//! Home component - the game listing page
//!
//! Owns card focus and the scroll position of the card area. Interaction
//! state lives in `PageController`; this component maps input to actions
//! and renders the page from the controller.

use crate::action::Action;
use crate::component::Component;
use crate::components::card_grid::render_cards;
use crate::components::header::render_header;
use crate::components::hit_map::HitMap;
use crate::components::layout::{calculate_page_layout, card_slots, content_height, grid_columns, CardSlot, PageLayout};
use crate::components::sidebar::render_sidebar;
use crate::controller::PageController;
use crate::model::reveal::Extent;
use crate::model::ui::CELL_HEIGHT_PX;
use crate::model::{SidebarVisibility, ViewMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows moved by one wheel notch or Ctrl+e / Ctrl+y
const SCROLL_STEP: i64 = 3;

/// Direction for keyboard focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Prev,
    Up,
    Down,
}

#[derive(Default)]
pub struct HomeComponent {
    /// Id of the focused card
    pub focused: Option<usize>,
    /// First content row shown in the card area
    pub scroll_rows: u32,
    /// Card area from the last layout pass
    pub grid_area: Rect,
    /// Card positions from the last layout pass
    pub slots: Vec<CardSlot>,
    pub layout: Option<PageLayout>,
    pub hit_map: HitMap,
    view_mode: ViewMode,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout & scroll
    // ─────────────────────────────────────────────────────────────────────────

    /// Recompute layout for `area` and push scroll and visibility into the
    /// controller.
    pub fn sync(&mut self, area: Rect, page: &mut PageController) {
        let layout = calculate_page_layout(area, page.sidebar_visibility(), page.is_mobile());
        self.grid_area = layout.grid;
        self.layout = Some(layout);
        self.view_mode = page.view_mode();
        self.slots = card_slots(&page.displayed_ids(), self.view_mode, self.grid_area.width);

        self.scroll_rows = self.scroll_rows.min(self.max_scroll());
        self.fix_focus(page);

        page.scroll_to(self.scroll_rows.saturating_mul(CELL_HEIGHT_PX));
        let extents: Vec<(usize, Extent)> = self
            .slots
            .iter()
            .map(|slot| {
                (
                    slot.id,
                    Extent {
                        top: slot.y.saturating_mul(CELL_HEIGHT_PX),
                        height: slot.height as u32 * CELL_HEIGHT_PX,
                    },
                )
            })
            .collect();
        let revealed = page.observe_visibility(&extents, self.grid_area.height as u32 * CELL_HEIGHT_PX);
        if revealed > 0 {
            log::trace!("revealed {} cards", revealed);
        }
    }

    pub fn max_scroll(&self) -> u32 {
        content_height(&self.slots).saturating_sub(self.grid_area.height as u32)
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let next = (self.scroll_rows as i64 + delta).clamp(0, self.max_scroll() as i64);
        self.scroll_rows = next as u32;
    }

    pub fn scroll_step(&self) -> i64 {
        SCROLL_STEP
    }

    pub fn page_size(&self) -> i64 {
        self.grid_area.height.max(1) as i64
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────────

    fn is_focusable(page: &PageController, id: usize) -> bool {
        page.card(id)
            .map(|card| card.transition.is_visible_target())
            .unwrap_or(false)
    }

    /// Keep focus on a card that is still visible
    fn fix_focus(&mut self, page: &PageController) {
        if let Some(id) = self.focused {
            if self.slots.iter().any(|slot| slot.id == id) && Self::is_focusable(page, id) {
                return;
            }
        }
        self.focused = self
            .slots
            .iter()
            .map(|slot| slot.id)
            .find(|&id| Self::is_focusable(page, id));
    }

    pub fn move_focus(&mut self, direction: FocusMove, page: &PageController) {
        if self.slots.is_empty() {
            return;
        }
        let current = self
            .focused
            .and_then(|id| self.slots.iter().position(|slot| slot.id == id));
        let Some(current) = current else {
            self.fix_focus(page);
            self.scroll_into_view();
            return;
        };

        let step = match direction {
            FocusMove::Next | FocusMove::Prev => 1,
            FocusMove::Up | FocusMove::Down => grid_columns(self.view_mode, self.grid_area.width),
        };
        let forward = matches!(direction, FocusMove::Next | FocusMove::Down);

        let mut index = current;
        loop {
            let next = if forward {
                index.checked_add(step).filter(|&i| i < self.slots.len())
            } else {
                index.checked_sub(step)
            };
            let Some(next) = next else {
                break;
            };
            index = next;
            if Self::is_focusable(page, self.slots[index].id) {
                self.focused = Some(self.slots[index].id);
                break;
            }
        }
        self.scroll_into_view();
    }

    /// Scroll so the focused card is fully inside the card area
    pub fn scroll_into_view(&mut self) {
        let Some(slot) = self
            .focused
            .and_then(|id| self.slots.iter().find(|slot| slot.id == id))
        else {
            return;
        };
        let visible = self.grid_area.height as u32;
        let bottom = slot.y.saturating_add(slot.height as u32);
        if slot.y < self.scroll_rows {
            self.scroll_rows = slot.y;
        } else if bottom > self.scroll_rows.saturating_add(visible) {
            self.scroll_rows = bottom.saturating_sub(visible);
        }
        self.scroll_rows = self.scroll_rows.min(self.max_scroll());
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Scrolling
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ScrollDown)
            }
            KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ScrollUp)
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),

            // Card focus
            KeyCode::Char('l') | KeyCode::Right => Some(Action::FocusNext),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::FocusPrev),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::FocusUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::FocusDown),
            KeyCode::Enter => Some(Action::ActivateFocused),

            // Categories
            KeyCode::Tab => Some(Action::NextCategory),
            KeyCode::BackTab => Some(Action::PrevCategory),
            KeyCode::Char('a') => Some(Action::ShowAll),
            KeyCode::Char('s') => Some(Action::ToggleSidebar),

            // View
            KeyCode::Char('v') => Some(Action::ToggleView),
            KeyCode::Char('1') => Some(Action::ChangeView(ViewMode::Grid)),
            KeyCode::Char('2') => Some(Action::ChangeView(ViewMode::List)),

            // Search
            KeyCode::Char('/') => Some(Action::FocusSearch),

            // Modals
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Action::Click(
                self.hit_map.target_at(mouse.column, mouse.row),
            )),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_page which takes the controller
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the page. `sync` must have run for this area first.
pub fn draw_page(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    page: &PageController,
    error: Option<&str>,
) {
    let layout = home
        .layout
        .unwrap_or_else(|| calculate_page_layout(area, page.sidebar_visibility(), page.is_mobile()));
    home.hit_map.clear();

    render_header(frame, &layout, page, &mut home.hit_map);
    render_cards(
        frame,
        layout.grid,
        page,
        &home.slots,
        home.focused,
        home.scroll_rows,
        &mut home.hit_map,
    );

    // Sidebar goes last so the overlay sits on top of the cards
    if let Some(sidebar_area) = layout.sidebar {
        let overlay = page.is_mobile() && page.sidebar_visibility() == SidebarVisibility::Shown;
        render_sidebar(frame, sidebar_area, page, overlay, &mut home.hit_map);
    }

    render_status_bar(frame, layout.status, home, page, error);
    render_help_bar(frame, layout.help, page);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    home: &HomeComponent,
    page: &PageController,
    error: Option<&str>,
) {
    let shown = page
        .cards()
        .iter()
        .filter(|card| card.transition.is_visible_target())
        .count();

    let mut spans = vec![
        Span::styled(
            format!(" {}/{} games ", shown, page.cards().len()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    if let Some(selector) = page.selectors().active() {
        spans.push(Span::styled(
            selector.label.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    } else if !page.search_query().is_empty() {
        spans.push(Span::styled(
            format!("Search: {}", page.search_query()),
            Style::default().fg(Color::Cyan),
        ));
    }

    if let Some(card) = home.focused.and_then(|id| page.card(id)) {
        spans.push(Span::styled("  ▶ ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(card.title.clone(), Style::default().fg(Color::White)));
    }

    if let Some(error) = error {
        spans.push(Span::styled(
            format!("  Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, page: &PageController) {
    let key = |text: &str, color: Color| {
        Span::styled(
            format!(" {} ", text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    let help_spans = if page.is_search_focused() {
        vec![
            key("Esc", Color::Yellow),
            Span::raw("Clear  "),
            key("Enter", Color::Green),
            Span::raw("Done  "),
            Span::styled("Type to search", Style::default().fg(Color::DarkGray)),
        ]
    } else {
        vec![
            key("q", Color::Yellow),
            Span::raw("Quit "),
            key("Enter", Color::Green),
            Span::raw("Play "),
            key("/", Color::Cyan),
            Span::raw("Search "),
            key("Tab", Color::Cyan),
            Span::raw("Category "),
            key("v", Color::Magenta),
            Span::raw("View "),
            key("s", Color::Magenta),
            Span::raw("Sidebar "),
            key("?", Color::White),
            Span::raw("Help"),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(help_spans)), area);
}
