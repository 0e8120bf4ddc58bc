use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Narrowest a card slot may get before the grid drops a column.
pub const CARD_MIN_WIDTH: u16 = 34;
/// Fixed height of one card slot, borders included.
pub const CARD_HEIGHT: u16 = 6;
/// Upper bound on columns, however wide the terminal gets.
pub const MAX_COLS: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub grid: Rect,
    pub status_line: Rect,
    pub label_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        grid: vertical[1],
        status_line: footer_chunks[0],
        label_line: footer_chunks[1],
    }
}

/// Grid geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub cols: usize,
    pub visible_rows: usize,
    pub total_rows: usize,
}

pub fn grid_spec(area: Rect, count: usize) -> GridSpec {
    let cols = ((area.width / CARD_MIN_WIDTH) as usize).clamp(1, MAX_COLS);
    let visible_rows = (area.height / CARD_HEIGHT) as usize;
    GridSpec {
        cols,
        visible_rows,
        total_rows: count.div_ceil(cols),
    }
}

/// Slot rectangles for the cards visible at `scroll_row`, each paired with
/// the card's index in the mount. Stateless: recomputed per frame and per
/// mouse event from the same inputs.
pub fn card_slots(area: Rect, count: usize, scroll_row: usize) -> Vec<(usize, Rect)> {
    let spec = grid_spec(area, count);
    if count == 0 || spec.visible_rows == 0 {
        return Vec::new();
    }
    let slot_width = area.width / spec.cols as u16;
    let mut slots = Vec::new();
    for visible_row in 0..spec.visible_rows {
        let row = scroll_row + visible_row;
        for col in 0..spec.cols {
            let index = row * spec.cols + col;
            if index >= count {
                return slots;
            }
            slots.push((
                index,
                Rect {
                    x: area.x + col as u16 * slot_width,
                    y: area.y + visible_row as u16 * CARD_HEIGHT,
                    width: slot_width,
                    height: CARD_HEIGHT,
                },
            ));
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: u16, height: u16) -> Rect {
        Rect {
            x: 0,
            y: 3,
            width,
            height,
        }
    }

    #[test]
    fn columns_track_terminal_width() {
        assert_eq!(grid_spec(area(20, 18), 8).cols, 1);
        assert_eq!(grid_spec(area(80, 18), 8).cols, 2);
        assert_eq!(grid_spec(area(110, 18), 8).cols, 3);
        assert_eq!(grid_spec(area(200, 18), 8).cols, 4);
    }

    #[test]
    fn total_rows_round_up() {
        assert_eq!(grid_spec(area(80, 18), 8).total_rows, 4);
        assert_eq!(grid_spec(area(80, 18), 7).total_rows, 4);
        assert_eq!(grid_spec(area(80, 18), 0).total_rows, 0);
    }

    #[test]
    fn slots_are_indexed_from_the_scroll_row() {
        // Two columns, three visible rows, eight cards, scrolled one row.
        let slots = card_slots(area(80, 18), 8, 1);
        let indices: Vec<usize> = slots.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn a_partial_last_row_yields_fewer_slots() {
        let slots = card_slots(area(80, 18), 3, 0);
        assert_eq!(slots.len(), 3);
    }

    #[test]
    fn no_cards_means_no_slots() {
        assert!(card_slots(area(80, 18), 0, 0).is_empty());
    }

    #[test]
    fn slots_do_not_overlap() {
        let slots = card_slots(area(80, 18), 4, 0);
        let (_, first) = slots[0];
        let (_, second) = slots[1];
        let (_, third) = slots[2];
        assert_eq!(first.y, second.y);
        assert_eq!(first.x + first.width, second.x);
        assert_eq!(third.y, first.y + CARD_HEIGHT);
    }

    #[test]
    fn tiny_grid_area_draws_nothing() {
        assert!(card_slots(area(80, 3), 8, 0).is_empty());
    }
}
