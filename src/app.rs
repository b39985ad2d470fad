//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! Interaction rules live in `PageController`; App routes input to it and
//! keeps the modal stack.

use crate::action::Action;
use crate::component::Component;
use crate::components::{draw_page, FocusMove, HelpDialog, HomeComponent, NoticeDialog, QuitDialog};
use crate::config::Config;
use crate::controller::{ClickTarget, PageController};
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::model::{Card, Viewport, ALL_CATEGORY};
use crate::services;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Interaction state for the page
    pub page: PageController,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Terminal area from the last resize or draw
    pub area: Rect,

    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub notice_dialog: NoticeDialog,
}

/// Load the configured catalog, falling back to the built-in one
fn load_cards(config: &Config) -> (Vec<Card>, Option<String>) {
    let Some(path) = config.catalog_path.as_deref() else {
        return (services::builtin_catalog(), None);
    };

    match services::load_catalog(path) {
        Ok(cards) if !cards.is_empty() => {
            log::info!("loaded {} games from {}", cards.len(), path);
            (cards, None)
        }
        Ok(_) => {
            let message = format!("Catalog {} has no games", path);
            log::warn!("{}, using built-in catalog", message);
            (services::builtin_catalog(), Some(message))
        }
        Err(e) => {
            log::warn!("{}, using built-in catalog", e);
            (services::builtin_catalog(), Some(e))
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: Config, viewport: Viewport) -> App {
        let (cards, error) = load_cards(&config);
        let mut page = PageController::new(cards, config.interaction.clone(), viewport);
        page.change_view(config.default_view);

        let area = Rect::new(
            0,
            0,
            (viewport.width / CELL_WIDTH_PX) as u16,
            (viewport.height / CELL_HEIGHT_PX) as u16,
        );

        let mut app = App {
            page,
            modals: ModalStack::new(),
            should_quit: false,
            error,
            area,
            config,
            home: HomeComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            notice_dialog: NoticeDialog::default(),
        };
        app.home.sync(app.area, &mut app.page);
        app
    }

    fn show_notice(&mut self, message: Option<String>) {
        if let Some(message) = message {
            self.notice_dialog.set_message(&message);
            self.modals.push(Modal::LaunchNotice { message });
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::LaunchNotice { .. } => self.notice_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::ClearSearch),
            KeyCode::Enter | KeyCode::Tab => Some(Action::BlurSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
            Modal::LaunchNotice { message } => {
                self.notice_dialog.set_message(message);
                self.notice_dialog.draw(frame, area)?;
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        log::info!(
            "{} games in {} categories, {} view, viewport {}x{}px",
            self.page.cards().len(),
            self.page.selectors().len().saturating_sub(1),
            self.page.view_mode().name(),
            self.page.viewport().width,
            self.page.viewport().height,
        );
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else if self.page.is_search_focused() {
            self.handle_search_key_event(key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        self.home.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            log::debug!("action {}", action);
        }
        let now = Instant::now();

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                self.page.tick(now);
            }
            Action::Resize(w, h) => {
                self.area = Rect::new(0, 0, w, h);
                self.page.resize(Viewport::from_terminal(w, h));
            }
            Action::ForceQuit => {
                log::info!("quitting");
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Card focus
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext => self.home.move_focus(FocusMove::Next, &self.page),
            Action::FocusPrev => self.home.move_focus(FocusMove::Prev, &self.page),
            Action::FocusUp => self.home.move_focus(FocusMove::Up, &self.page),
            Action::FocusDown => self.home.move_focus(FocusMove::Down, &self.page),
            Action::ActivateFocused => {
                let notice = self.home.focused.and_then(|id| self.page.activate_card(id));
                self.show_notice(notice);
            }

            // ─────────────────────────────────────────────────────────────────
            // Scrolling
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp => self.home.scroll_by(-self.home.scroll_step()),
            Action::ScrollDown => self.home.scroll_by(self.home.scroll_step()),
            Action::PageUp => self.home.scroll_by(-self.home.page_size()),
            Action::PageDown => self.home.scroll_by(self.home.page_size()),

            // ─────────────────────────────────────────────────────────────────
            // Categories & sidebar
            // ─────────────────────────────────────────────────────────────────
            Action::NextCategory => self.page.cycle_category(true, now),
            Action::PrevCategory => self.page.cycle_category(false, now),
            Action::ShowAll => self.page.filter_games(ALL_CATEGORY, now),
            Action::ToggleSidebar => self.page.toggle_sidebar(),

            // ─────────────────────────────────────────────────────────────────
            // View mode
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleView => {
                let mode = self.page.view_mode().toggled();
                self.page.change_view(mode);
            }
            Action::ChangeView(mode) => self.page.change_view(mode),

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::FocusSearch => self.page.focus_search(),
            Action::BlurSearch => self.page.blur_search(),
            Action::ClearSearch => self.page.escape_search(now),
            Action::SearchInput(c) => self.page.push_search_char(c, now),
            Action::SearchBackspace => self.page.pop_search_char(now),

            // ─────────────────────────────────────────────────────────────────
            // Pointer
            // ─────────────────────────────────────────────────────────────────
            Action::Click(target) => {
                if let ClickTarget::Card(id) = target {
                    self.home.focused = Some(id);
                }
                let notice = self.page.click(target, now);
                self.show_notice(notice);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        self.home.sync(self.area, &mut self.page);
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.area = area;
        self.home.sync(area, &mut self.page);
        draw_page(frame, area, &mut self.home, &self.page, self.error.as_deref());

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::launch_notice;
    use crate::model::{SidebarVisibility, ViewMode};
    use ratatui::{backend::TestBackend, Terminal};
    use std::io::Write;

    fn app() -> App {
        App::new(Config::default(), Viewport::from_terminal(120, 40))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dispatch(app: &mut App, code: KeyCode) {
        if let Ok(Some(action)) = app.handle_key_event(key(code)) {
            let _ = app.update(action);
        }
    }

    #[test]
    fn test_missing_catalog_falls_back_to_builtin() {
        let config = Config {
            catalog_path: Some("/nonexistent/games.json".to_string()),
            ..Config::default()
        };
        let app = App::new(config, Viewport::from_terminal(120, 40));
        assert_eq!(app.page.cards().len(), services::builtin_catalog().len());
        assert!(app.error.as_deref().unwrap_or("").contains("Failed to read catalog"));
    }

    #[test]
    fn test_catalog_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"games": [{{"title": "Go", "category": "board"}}, {{"title": "Snap", "category": "card"}}]}}"#
        )
        .expect("write catalog");
        let config = Config {
            catalog_path: Some(file.path().to_string_lossy().to_string()),
            default_view: ViewMode::List,
            ..Config::default()
        };
        let app = App::new(config, Viewport::from_terminal(120, 40));
        assert_eq!(app.page.cards().len(), 2);
        assert_eq!(app.page.view_mode(), ViewMode::List);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_search_mode_captures_keys() {
        let mut app = app();
        dispatch(&mut app, KeyCode::Char('/'));
        assert!(app.page.is_search_focused());

        dispatch(&mut app, KeyCode::Char('q'));
        assert_eq!(app.page.search_query(), "q");
        assert!(app.modals.is_empty());
        assert!(app.page.is_search_pending());

        dispatch(&mut app, KeyCode::Esc);
        assert_eq!(app.page.search_query(), "");
        assert!(!app.page.is_search_focused());
    }

    #[test]
    fn test_enter_on_focused_card_opens_notice() {
        let mut app = app();
        dispatch(&mut app, KeyCode::Enter);

        let title = app.page.cards()[0].title.clone();
        assert_eq!(
            app.modals.top(),
            Some(&Modal::LaunchNotice {
                message: launch_notice(&title)
            })
        );

        dispatch(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_click_on_card_focuses_and_notifies() {
        let mut app = app();
        let _ = app.update(Action::Click(ClickTarget::Card(2)));
        assert_eq!(app.home.focused, Some(2));
        assert!(matches!(app.modals.top(), Some(Modal::LaunchNotice { .. })));
    }

    #[test]
    fn test_quit_flow() {
        let mut app = app();
        dispatch(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        dispatch(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        dispatch(&mut app, KeyCode::Char('q'));
        dispatch(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_resize_to_narrow_hides_sidebar() {
        let mut app = app();
        assert_eq!(app.page.sidebar_visibility(), SidebarVisibility::Shown);

        let _ = app.update(Action::Resize(80, 30));
        assert!(app.page.is_mobile());
        assert_eq!(app.page.sidebar_visibility(), SidebarVisibility::Hidden);

        dispatch(&mut app, KeyCode::Char('s'));
        assert_eq!(app.page.sidebar_visibility(), SidebarVisibility::Shown);
        let _ = app.update(Action::Click(ClickTarget::Elsewhere));
        assert_eq!(app.page.sidebar_visibility(), SidebarVisibility::Hidden);
    }

    #[test]
    fn test_draw_registers_click_targets() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        terminal
            .draw(|frame| {
                let _ = app.draw(frame, frame.area());
            })
            .expect("draw");

        assert_eq!(app.home.hit_map.target_at(2, 1), ClickTarget::SidebarToggle);
        assert_eq!(
            app.home.hit_map.target_at(5, 4),
            ClickTarget::Selector(ALL_CATEGORY.to_string())
        );
    }
}
