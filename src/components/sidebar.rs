//! Category sidebar rendering

use crate::components::hit_map::HitMap;
use crate::controller::{ClickTarget, PageController};
use crate::model::ALL_CATEGORY;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Draw the selectors. `overlay` clears what is underneath first.
pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    page: &PageController,
    overlay: bool,
    hits: &mut HitMap,
) {
    if overlay {
        frame.render_widget(Clear, area);
    }
    hits.push(area, ClickTarget::Sidebar);

    let items: Vec<ListItem> = page
        .selectors()
        .iter()
        .map(|selector| {
            let (marker, style) = if selector.active {
                (
                    "● ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            let count = page
                .cards()
                .iter()
                .filter(|card| selector.category == ALL_CATEGORY || card.category == selector.category)
                .count();
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(selector.label.clone(), style),
                Span::styled(format!(" ({})", count), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let border_color = if overlay { Color::Magenta } else { Color::DarkGray };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Categories ")
            .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(list, area);

    // One selector per line inside the border
    let inner_height = area.height.saturating_sub(2);
    for (row, selector) in page.selectors().iter().enumerate() {
        if row as u16 >= inner_height {
            break;
        }
        let line = Rect::new(area.x + 1, area.y + 1 + row as u16, area.width.saturating_sub(2), 1);
        hits.push(line, ClickTarget::Selector(selector.category.clone()));
    }
}
