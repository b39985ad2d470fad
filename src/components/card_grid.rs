//! Card rendering for grid and list views

use crate::components::hit_map::HitMap;
use crate::components::layout::CardSlot;
use crate::controller::{ClickTarget, PageController};
use crate::model::ui::CELL_HEIGHT_PX;
use crate::model::{Card, CardField, LayoutNode};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Cut `text` to at most `width` columns, ending in an ellipsis when cut
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Screen rectangle for a slot, or `None` when it is scrolled out of `grid`
pub fn slot_area(grid: Rect, slot: &CardSlot, offset_px: u32, scroll_rows: u32) -> Option<Rect> {
    let offset_rows = (offset_px / CELL_HEIGHT_PX) as i64;
    let top = grid.y as i64 + slot.y as i64 + offset_rows - scroll_rows as i64;
    let bottom = top + slot.height as i64;
    let grid_bottom = grid.y as i64 + grid.height as i64;
    if bottom <= grid.y as i64 || top >= grid_bottom {
        return None;
    }

    let left = grid.x + slot.x;
    let width = slot.width.min((grid.x + grid.width).saturating_sub(left));
    let clipped_top = top.max(grid.y as i64);
    let clipped_bottom = bottom.min(grid_bottom);
    let area = Rect::new(
        left,
        clipped_top as u16,
        width,
        (clipped_bottom - clipped_top) as u16,
    );
    (!area.is_empty()).then_some(area)
}

fn card_lines(card: &Card, inner_width: usize, text_style: Style) -> Vec<Line<'static>> {
    let field_style = |field: CardField| match field {
        CardField::Title => text_style.add_modifier(Modifier::BOLD),
        CardField::Category => text_style.fg(Color::Magenta),
        CardField::Rating => text_style.fg(Color::Yellow),
        CardField::Stats => text_style.fg(Color::DarkGray),
    };

    card.children()
        .into_iter()
        .map(|node| match node {
            LayoutNode::Field(field) => Line::from(Span::styled(
                truncate(&card.field_text(field), inner_width),
                field_style(field),
            )),
            LayoutNode::Details(fields) => {
                let mut spans = Vec::new();
                let mut used = 0;
                for (i, field) in fields.into_iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
                        used += 3;
                    }
                    let text = truncate(&card.field_text(field), inner_width.saturating_sub(used));
                    used += text.width();
                    spans.push(Span::styled(text, field_style(field)));
                }
                Line::from(spans)
            }
        })
        .collect()
}

/// Draw every laid-out card that intersects `grid`
pub fn render_cards(
    frame: &mut Frame,
    grid: Rect,
    page: &PageController,
    slots: &[CardSlot],
    focused: Option<usize>,
    scroll_rows: u32,
    hits: &mut HitMap,
) {
    if slots.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No games match",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, grid);
        return;
    }

    for slot in slots {
        let Some(card) = page.card(slot.id) else {
            continue;
        };
        let visual = card.transition.visual();
        let Some(area) = slot_area(grid, slot, visual.offset_px, scroll_rows) else {
            continue;
        };

        let faded = visual.opacity < 1.0;
        let mut text_style = Style::default().fg(if faded { Color::DarkGray } else { Color::White });
        if !card.revealed {
            text_style = text_style.add_modifier(Modifier::DIM);
        }

        let border_style = if focused == Some(card.id) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if faded {
            Style::default().fg(Color::Black)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let inner_width = area.width.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(card_lines(card, inner_width, text_style)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(paragraph, area);
        hits.push(area, ClickTarget::Card(card.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(y: u32) -> CardSlot {
        CardSlot {
            id: 0,
            x: 0,
            y,
            width: 20,
            height: 6,
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Chess", 10), "Chess");
        assert_eq!(truncate("Solitaire", 5), "Soli…");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn test_slot_area_follows_scroll() {
        let grid = Rect::new(0, 3, 80, 20);
        assert_eq!(slot_area(grid, &slot(6), 0, 0), Some(Rect::new(0, 9, 20, 6)));
        assert_eq!(slot_area(grid, &slot(6), 0, 6), Some(Rect::new(0, 3, 20, 6)));
        // Scrolled past
        assert_eq!(slot_area(grid, &slot(0), 0, 6), None);
        // Clipped at the bottom edge
        assert_eq!(slot_area(grid, &slot(18), 0, 0), Some(Rect::new(0, 21, 20, 2)));
    }

    #[test]
    fn test_hiding_offset_moves_card_down() {
        let grid = Rect::new(0, 0, 80, 20);
        let area = slot_area(grid, &slot(0), 32, 0);
        assert_eq!(area.map(|a| a.y), Some(2));
    }

    #[test]
    fn test_slot_deep_in_content_maps_to_screen() {
        let grid = Rect::new(0, 3, 80, 20);
        let deep = 120_000;
        assert_eq!(slot_area(grid, &slot(deep), 0, deep - 4), Some(Rect::new(0, 7, 20, 6)));
        assert_eq!(slot_area(grid, &slot(deep), 0, 0), None);
        assert_eq!(slot_area(grid, &slot(0), 0, deep), None);
    }
}
