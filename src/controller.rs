//! Page interaction controller
//!
//! Owns every piece of interaction state for the page: cards, category
//! selectors, sidebar flags, view mode, search box and scroll position. It is
//! created once at startup and driven by `App` through the methods below.
//! Nothing here reads the clock; timed operations take `now` so that the
//! debounce and card transitions are deterministic.

use crate::config::InteractionConfig;
use crate::model::reveal::{Extent, RevealObserver};
use crate::model::search::{card_matches, Debouncer};
use crate::model::{
    Card, HeaderBackdrop, SelectorSet, Sidebar, SidebarVisibility, ViewMode, Viewport,
    ALL_CATEGORY,
};
use crate::services;
use std::time::Instant;

/// Page element a pointer click landed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// Sidebar background (not a selector)
    Sidebar,
    /// Category selector inside the sidebar
    Selector(String),
    SidebarToggle,
    SearchBox,
    ViewButton(ViewMode),
    Card(usize),
    Elsewhere,
}

impl ClickTarget {
    fn is_inside_sidebar(&self) -> bool {
        matches!(
            self,
            ClickTarget::Sidebar | ClickTarget::Selector(_) | ClickTarget::SidebarToggle
        )
    }
}

pub struct PageController {
    config: InteractionConfig,
    cards: Vec<Card>,
    selectors: SelectorSet,
    sidebar: Sidebar,
    view_mode: ViewMode,
    search_query: String,
    search_focused: bool,
    debouncer: Debouncer,
    observer: RevealObserver,
    viewport: Viewport,
    scroll_px: u32,
}

impl PageController {
    pub fn new(cards: Vec<Card>, config: InteractionConfig, viewport: Viewport) -> Self {
        let selectors = SelectorSet::new(services::categories(&cards));
        let debouncer = Debouncer::new(config.search_debounce());
        let observer = RevealObserver::new(config.reveal_threshold, config.reveal_bottom_margin_px);
        Self {
            config,
            cards,
            selectors,
            sidebar: Sidebar::new(),
            view_mode: ViewMode::Grid,
            search_query: String::new(),
            search_focused: false,
            debouncer,
            observer,
            viewport,
            scroll_px: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: usize) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn selectors(&self) -> &SelectorSet {
        &self.selectors
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn sidebar_visibility(&self) -> SidebarVisibility {
        self.sidebar
            .visibility(self.viewport, self.config.mobile_breakpoint_px)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile(self.config.mobile_breakpoint_px)
    }

    pub fn scroll_px(&self) -> u32 {
        self.scroll_px
    }

    pub fn header_backdrop(&self) -> HeaderBackdrop {
        HeaderBackdrop::for_scroll(self.scroll_px, self.config.header_scroll_threshold_px)
    }

    /// Ids of cards currently taking part in layout, in catalog order
    pub fn displayed_ids(&self) -> Vec<usize> {
        self.cards
            .iter()
            .filter(|card| card.is_displayed())
            .map(|card| card.id)
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Category filter
    // ─────────────────────────────────────────────────────────────────────────

    /// Show only the cards in `category` ("all" shows everything)
    pub fn filter_games(&mut self, category: &str, now: Instant) {
        if !self.selectors.activate(category) {
            log::debug!("no selector for category '{}'", category);
        }

        for card in &mut self.cards {
            if category == ALL_CATEGORY || card.category == category {
                card.transition.show(now, self.config.show_delay());
            } else {
                card.transition
                    .hide(now, self.config.hide_delay(), self.config.hide_offset_px);
            }
        }

        if self.is_mobile() {
            self.sidebar.close_overlay();
        }
        log::debug!("filtered by category '{}'", category);
    }

    /// Activate the selector after (`forward`) or before the active one
    pub fn cycle_category(&mut self, forward: bool, now: Instant) {
        let len = self.selectors.len();
        if len == 0 {
            return;
        }
        let next = match self.selectors.active_index() {
            Some(current) if forward => (current + 1) % len,
            Some(current) => (current + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        if let Some(category) = self.selectors.get(next).map(|s| s.category.clone()) {
            self.filter_games(&category, now);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn focus_search(&mut self) {
        self.search_focused = true;
    }

    pub fn blur_search(&mut self) {
        self.search_focused = false;
    }

    /// Replace the search box value and restart the quiet period
    pub fn search_input(&mut self, value: String, now: Instant) {
        self.search_query = value;
        self.debouncer.schedule(now);
    }

    pub fn push_search_char(&mut self, c: char, now: Instant) {
        let mut value = self.search_query.clone();
        value.push(c);
        self.search_input(value, now);
    }

    pub fn pop_search_char(&mut self, now: Instant) {
        let mut value = self.search_query.clone();
        if value.pop().is_some() {
            self.search_input(value, now);
        }
    }

    /// Clear and blur the focused search box; no-op when it is not focused
    pub fn escape_search(&mut self, now: Instant) {
        if !self.search_focused {
            return;
        }
        self.search_input(String::new(), now);
        self.blur_search();
    }

    /// Show cards matching `query` and hide the rest
    pub fn apply_search(&mut self, query: &str, now: Instant) {
        let query = query.to_lowercase();
        for card in &mut self.cards {
            if card_matches(card, &query) {
                card.transition.show(now, self.config.show_delay());
            } else {
                card.transition
                    .hide(now, self.config.hide_delay(), self.config.hide_offset_px);
            }
        }

        if query.is_empty() {
            self.selectors.activate(ALL_CATEGORY);
        } else {
            self.selectors.clear();
        }
        log::debug!("search applied for '{}'", query);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Timers
    // ─────────────────────────────────────────────────────────────────────────

    /// Fire the debounced search and advance card transitions that are due.
    ///
    /// Returns `true` if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.debouncer.fire(now) {
            let query = self.search_query.clone();
            self.apply_search(&query, now);
            changed = true;
        }
        for card in &mut self.cards {
            changed |= card.transition.advance(now);
        }
        changed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // View mode
    // ─────────────────────────────────────────────────────────────────────────

    /// Switch every card between grid and list grouping
    pub fn change_view(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        let regrouped = self
            .cards
            .iter_mut()
            .map(|card| card.apply_view(mode))
            .filter(|changed| *changed)
            .count();
        log::debug!("view mode {} ({} cards regrouped)", mode.name(), regrouped);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sidebar & pointer
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_sidebar(&mut self) {
        self.sidebar
            .toggle(self.viewport, self.config.mobile_breakpoint_px);
    }

    /// Handle a click on `target`. Returns the launch notice when a card
    /// was clicked.
    pub fn click(&mut self, target: ClickTarget, now: Instant) -> Option<String> {
        if self.is_mobile() && self.sidebar.active && !target.is_inside_sidebar() {
            self.sidebar.close_overlay();
        }

        if target != ClickTarget::SearchBox {
            self.blur_search();
        }

        match target {
            ClickTarget::Selector(category) => self.filter_games(&category, now),
            ClickTarget::SidebarToggle => self.toggle_sidebar(),
            ClickTarget::SearchBox => self.focus_search(),
            ClickTarget::ViewButton(mode) => self.change_view(mode),
            ClickTarget::Card(id) => return self.activate_card(id),
            ClickTarget::Sidebar | ClickTarget::Elsewhere => {}
        }
        None
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.sidebar
            .on_resize(viewport, self.config.mobile_breakpoint_px);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scroll
    // ─────────────────────────────────────────────────────────────────────────

    pub fn scroll_to(&mut self, scroll_px: u32) {
        self.scroll_px = scroll_px;
    }

    /// Reveal cards whose extent intersects the current viewport.
    ///
    /// `viewport_height` is the height of the scrolling area in logical
    /// pixels. Returns the number of newly revealed cards.
    pub fn observe_visibility(&mut self, extents: &[(usize, Extent)], viewport_height: u32) -> usize {
        let mut revealed = 0;
        for (id, extent) in extents {
            let Some(card) = self.cards.get_mut(*id) else {
                continue;
            };
            if self
                .observer
                .is_intersecting(*extent, self.scroll_px, viewport_height)
                && !card.revealed
            {
                card.revealed = true;
                revealed += 1;
            }
        }
        revealed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cards
    // ─────────────────────────────────────────────────────────────────────────

    /// Launch placeholder for a card
    pub fn activate_card(&self, id: usize) -> Option<String> {
        let card = self.cards.get(id)?;
        log::info!("launch requested for '{}'", card.title);
        Some(launch_notice(&card.title))
    }
}

/// Text of the placeholder shown instead of launching a game
pub fn launch_notice(title: &str) -> String {
    format!("Loading {}... (real game integration goes here)", title)
}
