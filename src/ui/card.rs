//! Drawing one card into its grid slot.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::icons;
use crate::card::Card;

pub fn draw_card(f: &mut Frame, area: Rect, card: &Card, focused: bool) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if focused {
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", icons::glyph(card.icon())),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(card.title().to_string(), title_style),
        ]),
        Line::from(Span::styled(
            format!(" {}", card.description()),
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(border_style))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
