use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod card;
pub mod icons;
pub mod layout;

use crate::app::{App, StatusLevel};

pub fn draw(f: &mut Frame, app: &mut App) {
    let areas = layout::areas(f.size());

    // Adopt this frame's geometry before anything is placed.
    let spec = layout::grid_spec(areas.grid, app.card_count());
    app.sync_grid(spec.cols, spec.visible_rows);

    draw_header(f, areas.header, app);
    draw_grid(f, areas.grid, app);
    draw_status_line(f, areas.status_line, app);
    draw_label_line(f, areas.label_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Portada",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Reportes e Indicadores", Style::default().fg(Color::DarkGray)),
    ]);
    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let position = if app.card_count() == 0 {
        "no dashboards".to_string()
    } else {
        format!("{}/{} dashboards", app.cursor + 1, app.card_count())
    };
    let right = Paragraph::new(Line::from(vec![Span::styled(
        position,
        Style::default().fg(Color::DarkGray),
    )]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

/// The card grid. A page whose grid mount is missing, or was never
/// rendered into, leaves this region blank.
fn draw_grid(f: &mut Frame, area: Rect, app: &App) {
    for (index, slot) in layout::card_slots(area, app.card_count(), app.scroll_row) {
        if let Some(c) = app.cards().get(index) {
            card::draw_card(f, slot, c, index == app.cursor);
        }
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let content = if let Some((text, level)) = app.status_text() {
        let color = match level {
            StatusLevel::Info => Color::LightGreen,
            StatusLevel::Warn => Color::LightYellow,
            StatusLevel::Error => Color::LightRed,
        };
        Line::from(vec![
            Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
            Span::styled(text.to_string(), Style::default().fg(color)),
        ])
    } else {
        action_hints()
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

/// Spoken-form label of the focused card plus its destination, the
/// terminal stand-in for an accessible activation label.
fn draw_label_line(f: &mut Frame, area: Rect, app: &App) {
    let Some(focused) = app.focused_card() else {
        return;
    };
    let line = Line::from(vec![
        Span::styled(
            format!("{}  ", focused.action_label()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            focused.url().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn action_hints() -> Line<'static> {
    Line::from(vec![
        Span::styled("Enter/Space", Style::default().fg(Color::LightCyan)),
        Span::raw(" Open  "),
        Span::styled("hjkl/arrows", Style::default().fg(Color::LightCyan)),
        Span::raw(" Move  "),
        Span::styled("y", Style::default().fg(Color::LightCyan)),
        Span::raw(" Copy URL  "),
        Span::styled("?", Style::default().fg(Color::LightCyan)),
        Span::raw(" Help  "),
        Span::styled("q", Style::default().fg(Color::LightCyan)),
        Span::raw(" Quit"),
    ])
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(56, 52, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  h / l, ← / →   Move across a row"),
        Line::from("  j / k, ↓ / ↑   Move between rows"),
        Line::from("  g / Home       First dashboard"),
        Line::from("  G / End        Last dashboard"),
        Line::from("  Mouse          Scroll + click to open"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  Enter / Space  Open the focused dashboard"),
        Line::from("  y              Copy its URL"),
        Line::from("  ?              Toggle help"),
        Line::from("  q / Esc        Quit"),
        Line::from(""),
        Line::from("Dashboards open in the system browser; #/ routes are"),
        Line::from("handed off as-is."),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::catalog::Catalog;
    use crate::nav::testing::RecordingNavigator;
    use crate::page::Page;

    fn rendered_text(width: u16, height: u16, app: &mut App) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn test_app(page: Page) -> App {
        let mut app = App::new(
            Catalog::builtin(),
            page,
            Box::new(RecordingNavigator::default()),
        );
        app.init();
        app
    }

    #[test]
    fn draw_shows_header_and_cards() {
        let mut app = test_app(Page::standard());
        let text = rendered_text(100, 30, &mut app);
        assert!(text.contains("Portada"));
        assert!(text.contains("MIPRES"));
        assert!(text.contains("Juntas Médicas"));
        assert!(text.contains("Open dashboard for MIPRES"));
    }

    #[test]
    fn draw_with_missing_mount_leaves_the_grid_blank() {
        let mut app = test_app(Page::empty());
        let text = rendered_text(100, 30, &mut app);
        assert!(text.contains("Portada"));
        assert!(!text.contains("MIPRES"));
        assert!(text.contains("no dashboards"));
    }

    #[test]
    fn help_popup_draws_over_the_grid() {
        let mut app = test_app(Page::standard());
        app.help_open = true;
        let text = rendered_text(100, 30, &mut app);
        assert!(text.contains("Toggle help"));
    }

    #[test]
    fn draw_survives_a_tiny_terminal() {
        let mut app = test_app(Page::standard());
        let text = rendered_text(20, 7, &mut app);
        assert!(text.contains("Portada"));
    }
}
