//! Application state and input handling for the interactive grid.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};

use crate::card::Card;
use crate::catalog::Catalog;
use crate::nav::Navigator;
use crate::page::{Page, MOUNT_ID};
use crate::render::{RenderState, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Holds the page, the renderer, and everything the event loop mutates.
pub struct App {
    pub page: Page,
    pub renderer: Renderer,
    pub navigator: Box<dyn Navigator>,
    /// Index of the focused card within the grid mount.
    pub cursor: usize,
    /// First visible grid row.
    pub scroll_row: usize,
    /// Columns of the last drawn frame; 1 until the first draw.
    pub grid_cols: usize,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, page: Page, navigator: Box<dyn Navigator>) -> Self {
        Self {
            page,
            renderer: Renderer::new(catalog),
            navigator,
            cursor: 0,
            scroll_row: 0,
            grid_cols: 1,
            status: None,
            help_open: false,
            should_quit: false,
        }
    }

    /// Page-ready hook: materialize the catalog into the grid mount.
    pub fn init(&mut self) {
        self.renderer.init(&mut self.page);
    }

    pub fn rendered(&self) -> bool {
        self.renderer.state() == RenderState::Rendered
    }

    /// The cards in the grid mount. A page without the mount reads as an
    /// empty grid.
    pub fn cards(&self) -> &[Card] {
        self.page
            .mount(MOUNT_ID)
            .map(|m| m.cards())
            .unwrap_or_default()
    }

    pub fn card_count(&self) -> usize {
        self.cards().len()
    }

    pub fn focused_card(&self) -> Option<&Card> {
        self.cards().get(self.cursor)
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status.as_ref().map(|s| (s.text.as_str(), s.level))
    }

    /// Periodic upkeep from the event loop.
    pub fn on_tick(&mut self) {
        if let Some(status) = &self.status {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }

    /// Key dispatch. An open help overlay swallows everything except its
    /// close keys. Otherwise the focused card gets first refusal; keys it
    /// does not consume fall through to the shell bindings.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.help_open {
            if matches!(
                key.code,
                KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
            ) {
                self.help_open = false;
            }
            return;
        }
        if self.activate_key(key) {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.help_open = true,
            KeyCode::Char('y') => self.copy_focused_url(),
            KeyCode::Left | KeyCode::Char('h') => self.move_left(),
            KeyCode::Right | KeyCode::Char('l') => self.move_right(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Home | KeyCode::Char('g') => self.go_to_first(),
            KeyCode::End | KeyCode::Char('G') => self.go_to_last(),
            _ => {}
        }
    }

    fn activate_key(&mut self, key: KeyEvent) -> bool {
        let status = {
            let Some(card) = self.focused_card() else {
                return false;
            };
            if !card.handle_key(key, self.navigator.as_ref()) {
                return false;
            }
            format!("Opening {}", card.title())
        };
        self.set_status(status, StatusLevel::Info);
        true
    }

    /// Pointer activation: focus the card under the click and hand off.
    pub fn click_card(&mut self, index: usize) {
        let status = {
            let Some(card) = self.cards().get(index) else {
                return;
            };
            card.click(self.navigator.as_ref());
            format!("Opening {}", card.title())
        };
        self.cursor = index;
        self.set_status(status, StatusLevel::Info);
    }

    pub fn copy_focused_url(&mut self) {
        let Some(url) = self.focused_card().map(|c| c.url().to_string()) else {
            self.set_status("Nothing to copy", StatusLevel::Warn);
            return;
        };
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(&url).is_ok() {
                    self.set_status(format!("Copied: {}", short(&url, 48)), StatusLevel::Info);
                } else {
                    self.set_status("Failed to copy to clipboard", StatusLevel::Error);
                }
            }
            Err(_) => self.set_status("Clipboard not available", StatusLevel::Error),
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor + 1 < self.card_count() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor >= self.grid_cols {
            self.cursor -= self.grid_cols;
        }
    }

    pub fn move_down(&mut self) {
        let next = self.cursor + self.grid_cols;
        if next < self.card_count() {
            self.cursor = next;
        }
    }

    pub fn go_to_first(&mut self) {
        self.cursor = 0;
    }

    pub fn go_to_last(&mut self) {
        self.cursor = self.card_count().saturating_sub(1);
    }

    pub fn select(&mut self, index: usize) {
        if index < self.card_count() {
            self.cursor = index;
        }
    }

    /// Adopt this frame's grid geometry and keep the cursor's row in view.
    /// Called from the draw path once the column count is known.
    pub fn sync_grid(&mut self, cols: usize, visible_rows: usize) {
        self.grid_cols = cols.max(1);
        self.cursor = self.cursor.min(self.card_count().saturating_sub(1));
        if visible_rows == 0 {
            self.scroll_row = 0;
            return;
        }
        let row = self.cursor / self.grid_cols;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
        let total_rows = self.card_count().div_ceil(self.grid_cols);
        self.scroll_row = self
            .scroll_row
            .min(total_rows.saturating_sub(visible_rows));
    }
}

fn short(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}…")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::nav::testing::RecordingNavigator;

    fn test_app(page: Page) -> (App, RecordingNavigator) {
        let nav = RecordingNavigator::default();
        let mut app = App::new(Catalog::builtin(), page, Box::new(nav.clone()));
        app.init();
        (app, nav)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn init_materializes_the_catalog() {
        let (app, _) = test_app(Page::standard());
        assert!(app.rendered());
        assert_eq!(app.card_count(), 8);
        assert_eq!(app.focused_card().unwrap().id(), "mipres");
    }

    #[test]
    fn enter_opens_the_focused_card() {
        let (mut app, nav) = test_app(Page::standard());
        app.select(2);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(nav.opened_urls(), vec!["#/recobros"]);
        assert!(app.status_text().unwrap().0.contains("Recobros"));
    }

    #[test]
    fn space_opens_the_focused_card() {
        let (mut app, nav) = test_app(Page::standard());
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(nav.opened_urls().len(), 1);
    }

    #[test]
    fn unconsumed_keys_fall_through_to_the_shell() {
        let (mut app, nav) = test_app(Page::standard());
        app.handle_key(key(KeyCode::Char('l')));
        assert_eq!(app.cursor, 1);
        assert!(nav.opened_urls().is_empty());
    }

    #[test]
    fn click_focuses_and_opens() {
        let (mut app, nav) = test_app(Page::standard());
        app.click_card(3);
        assert_eq!(app.cursor, 3);
        assert_eq!(nav.opened_urls().len(), 1);
        assert!(nav.opened_urls()[0].contains("app.powerbi.com"));
    }

    #[test]
    fn click_outside_the_cards_does_nothing() {
        let (mut app, nav) = test_app(Page::standard());
        app.click_card(99);
        assert_eq!(app.cursor, 0);
        assert!(nav.opened_urls().is_empty());
    }

    #[test]
    fn cursor_moves_by_row_and_column() {
        let (mut app, _) = test_app(Page::standard());
        app.sync_grid(2, 10);

        app.move_down();
        assert_eq!(app.cursor, 2);
        app.move_right();
        assert_eq!(app.cursor, 3);
        app.move_up();
        assert_eq!(app.cursor, 1);
        app.move_left();
        assert_eq!(app.cursor, 0);
        app.move_left();
        assert_eq!(app.cursor, 0);

        app.go_to_last();
        assert_eq!(app.cursor, 7);
        app.move_down();
        assert_eq!(app.cursor, 7);
        app.go_to_first();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn scroll_follows_the_cursor() {
        let (mut app, _) = test_app(Page::standard());
        app.sync_grid(2, 2);
        assert_eq!(app.scroll_row, 0);

        app.go_to_last();
        app.sync_grid(2, 2);
        // Cursor sits on row 3 of 4; the window shows rows 2 and 3.
        assert_eq!(app.scroll_row, 2);

        app.go_to_first();
        app.sync_grid(2, 2);
        assert_eq!(app.scroll_row, 0);
    }

    #[test]
    fn help_overlay_swallows_keys_until_closed() {
        let (mut app, nav) = test_app(Page::standard());
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.help_open);

        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('j')));
        assert!(nav.opened_urls().is_empty());
        assert_eq!(app.cursor, 0);

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.help_open);
        assert!(!app.should_quit);
    }

    #[test]
    fn q_quits() {
        let (mut app, _) = test_app(Page::standard());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn missing_mount_leaves_an_inert_shell() {
        let (mut app, nav) = test_app(Page::empty());
        assert!(!app.rendered());
        assert_eq!(app.card_count(), 0);

        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Down));
        assert!(nav.opened_urls().is_empty());
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn status_messages_replace_each_other() {
        let (mut app, _) = test_app(Page::standard());
        app.set_status("first", StatusLevel::Info);
        app.set_status("second", StatusLevel::Warn);
        let (text, level) = app.status_text().unwrap();
        assert_eq!(text, "second");
        assert_eq!(level, StatusLevel::Warn);
    }

    #[test]
    fn short_truncates_on_char_boundaries() {
        assert_eq!(short("población", 20), "población");
        assert_eq!(
            short("https://example.test/a/very/long/path", 12),
            "https://exam…"
        );
    }
}
