//! Launch notice shown in place of starting a game

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Default)]
pub struct NoticeDialog {
    pub message: String,
}

impl NoticeDialog {
    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}

impl Component for NoticeDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 48, 8);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Enter ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw("OK"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta))
                    .title(" 🎮 Play ")
                    .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
            );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_any_confirm_key_closes() {
        let mut dialog = NoticeDialog::default();
        dialog.set_message("Loading Chess...");
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char(' ')] {
            assert_eq!(
                dialog.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE)).ok().flatten(),
                Some(Action::CloseModal)
            );
        }
        assert_eq!(
            dialog
                .handle_key_event(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE))
                .ok()
                .flatten(),
            None
        );
        assert_eq!(dialog.message, "Loading Chess...");
    }
}
