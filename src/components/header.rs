//! Page header: sidebar toggle, title, search box and view buttons

use crate::components::hit_map::HitMap;
use crate::components::layout::PageLayout;
use crate::controller::{ClickTarget, PageController};
use crate::model::{HeaderBackdrop, ViewMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HEADER_BASE: (u8, u8, u8) = (26, 26, 46);

/// Background for the header, blended against black by the backdrop opacity
pub fn backdrop_color(backdrop: HeaderBackdrop) -> Color {
    let (r, g, b) = HEADER_BASE;
    let alpha = backdrop.opacity();
    let scale = |c: u8| (c as f32 * alpha).round() as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

pub fn render_header(frame: &mut Frame, layout: &PageLayout, page: &PageController, hits: &mut HitMap) {
    let bg = Style::default().bg(backdrop_color(page.header_backdrop()));

    // Sidebar toggle
    let toggle = Paragraph::new("☰")
        .alignment(Alignment::Center)
        .style(bg.fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).border_style(bg.fg(Color::DarkGray)));
    frame.render_widget(toggle, layout.toggle);
    hits.push(layout.toggle, ClickTarget::SidebarToggle);

    // Title
    let title = Paragraph::new(Line::from(vec![
        Span::styled("Game", bg.fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        Span::styled("Hub", bg.fg(Color::White).add_modifier(Modifier::BOLD)),
    ]))
    .style(bg)
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP | Borders::BOTTOM).border_style(bg.fg(Color::DarkGray)));
    frame.render_widget(title, layout.title);

    render_search_box(frame, layout, page, bg);
    hits.push(layout.search, ClickTarget::SearchBox);

    render_view_buttons(frame, layout, page, bg, hits);
}

fn render_search_box(frame: &mut Frame, layout: &PageLayout, page: &PageController, bg: Style) {
    let focused = page.is_search_focused();
    let query = page.search_query();

    let mut spans = vec![Span::styled(" 🔍 ", bg.fg(Color::DarkGray))];
    if query.is_empty() && !focused {
        spans.push(Span::styled("Search games...", bg.fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(query.to_string(), bg.fg(Color::White)));
    }
    if focused {
        spans.push(Span::styled("█", bg.fg(Color::Cyan)));
    }
    if page.is_search_pending() {
        spans.push(Span::styled(" …", bg.fg(Color::DarkGray)));
    }

    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let search = Paragraph::new(Line::from(spans))
        .style(bg)
        .block(Block::default().borders(Borders::ALL).border_style(bg.fg(border)));
    frame.render_widget(search, layout.search);
}

fn render_view_buttons(
    frame: &mut Frame,
    layout: &PageLayout,
    page: &PageController,
    bg: Style,
    hits: &mut HitMap,
) {
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout.view_buttons);

    for (mode, area) in ViewMode::all().into_iter().zip(areas.iter()) {
        let active = page.view_mode() == mode;
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            bg.fg(Color::Gray)
        };
        let icon = match mode {
            ViewMode::Grid => "▦",
            ViewMode::List => "☰",
        };
        let button = Paragraph::new(format!("{} {}", icon, mode.name()))
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(bg.fg(Color::DarkGray)));
        frame.render_widget(button, *area);
        hits.push(*area, ClickTarget::ViewButton(mode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_color_scales_with_opacity() {
        assert_eq!(backdrop_color(HeaderBackdrop::Solid), Color::Rgb(25, 25, 44));
        assert_eq!(backdrop_color(HeaderBackdrop::Translucent), Color::Rgb(23, 23, 41));
    }
}
