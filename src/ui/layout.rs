//! Screen geometry: chrome rows, card grid placement, detail panel placement.
//!
//! All coordinates are 1-indexed terminal cells, matching the ANSI cursor
//! addressing used by the renderers. Mouse events from Zellij are 0-indexed
//! and converted by the caller.
//!
//! ```text
//! row 1        (blank)
//! row 2        title
//! row 3        lead text
//! row 4        ────────
//! rows 5-7     ┌ Search: … ┐
//! row 8        status line
//! row 9        (blank)
//! rows 10..    card grid
//! rows-1       ────────
//! rows         footer
//! ```

pub const HEADER_ROW: usize = 2;
pub const LEAD_ROW: usize = 3;
pub const HEADER_BORDER_ROW: usize = 4;
pub const SEARCH_BAR_ROW: usize = 5;
pub const SEARCH_BAR_HEIGHT: usize = 3;
pub const STATUS_ROW: usize = 8;
pub const GRID_TOP: usize = 10;

/// Rows below the grid: border and footer.
pub const FOOTER_ROWS: usize = 2;

pub const CARD_WIDTH: usize = 30;
pub const MIN_CARD_WIDTH: usize = 12;
/// Border, name, temperament, image label, border.
pub const CARD_HEIGHT: usize = 5;
pub const COLUMN_GAP: usize = 2;
pub const ROW_GAP: usize = 1;
pub const SIDE_MARGIN: usize = 2;

pub const MODAL_MAX_WIDTH: usize = 72;
pub const MODAL_MIN_WIDTH: usize = 24;
/// Border plus one column of padding on each side.
pub const MODAL_CHROME_WIDTH: usize = 4;
/// Border, title, blank line (top) and border (bottom).
pub const MODAL_CHROME_HEIGHT: usize = 4;

/// A rectangle of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.height
            && col >= self.col
            && col < self.col + self.width
    }

    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.row + self.height - 1
    }
}

/// Number of card columns that fit in `cols`.
#[must_use]
pub fn grid_columns(cols: usize) -> usize {
    let usable = cols.saturating_sub(SIDE_MARGIN * 2) + COLUMN_GAP;
    (usable / (CARD_WIDTH + COLUMN_GAP)).max(1)
}

/// Placement of the visible part of the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub card_width: usize,
    /// Grid rows that fit on screen.
    pub visible_rows: usize,
    /// First grid row on screen.
    pub first_row: usize,
    pub item_count: usize,
}

impl GridLayout {
    /// Lays out `item_count` cards so that the row holding `cursor` is
    /// visible, centred where the grid is taller than the screen.
    #[must_use]
    pub fn compute(rows: usize, cols: usize, item_count: usize, cursor: usize) -> Self {
        let columns = grid_columns(cols);
        let card_width = CARD_WIDTH
            .min(cols.saturating_sub(SIDE_MARGIN * 2))
            .max(MIN_CARD_WIDTH);

        let available = rows.saturating_sub(GRID_TOP - 1 + FOOTER_ROWS);
        let visible_rows = ((available + ROW_GAP) / (CARD_HEIGHT + ROW_GAP)).max(1);

        let total_rows = (item_count + columns - 1) / columns;
        let cursor_row = cursor.min(item_count.saturating_sub(1)) / columns;
        let mut first_row = cursor_row.saturating_sub(visible_rows / 2);
        if total_rows >= visible_rows {
            first_row = first_row.min(total_rows - visible_rows);
        } else {
            first_row = 0;
        }

        Self {
            columns,
            card_width,
            visible_rows,
            first_row,
            item_count,
        }
    }

    /// Indices of the cards currently on screen.
    #[must_use]
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = (self.first_row * self.columns).min(self.item_count);
        let end = ((self.first_row + self.visible_rows) * self.columns).min(self.item_count);
        start..end
    }

    /// Screen rectangle of card `index`, or `None` if it is scrolled away.
    #[must_use]
    pub fn card_rect(&self, index: usize) -> Option<Rect> {
        if !self.visible_range().contains(&index) {
            return None;
        }
        let grid_row = index / self.columns - self.first_row;
        let grid_col = index % self.columns;
        Some(Rect {
            row: GRID_TOP + grid_row * (CARD_HEIGHT + ROW_GAP),
            col: SIDE_MARGIN + 1 + grid_col * (self.card_width + COLUMN_GAP),
            width: self.card_width,
            height: CARD_HEIGHT,
        })
    }

    /// Card under the given cell, if any.
    #[must_use]
    pub fn hit(&self, row: usize, col: usize) -> Option<usize> {
        self.visible_range()
            .find(|&index| self.card_rect(index).is_some_and(|r| r.contains(row, col)))
    }
}

/// Outer width of the detail panel for a terminal `cols` wide.
#[must_use]
pub fn modal_width(cols: usize) -> usize {
    cols.saturating_sub(8)
        .min(MODAL_MAX_WIDTH)
        .max(MODAL_MIN_WIDTH.min(cols))
}

/// Centred detail panel big enough for `content_lines`, clamped to the screen.
#[must_use]
pub fn modal_rect(rows: usize, cols: usize, content_lines: usize) -> Rect {
    let width = modal_width(cols);
    let height = (content_lines + MODAL_CHROME_HEIGHT)
        .min(rows.saturating_sub(2))
        .max(MODAL_CHROME_HEIGHT.min(rows));
    Rect {
        row: rows.saturating_sub(height) / 2 + 1,
        col: cols.saturating_sub(width) / 2 + 1,
        width,
        height,
    }
}

/// Cell of the `×` close glyph on the panel's top border.
#[must_use]
pub const fn close_glyph_cell(modal: &Rect) -> (usize, usize) {
    (modal.row, modal.col + modal.width.saturating_sub(3))
}

/// Search input box: full width minus margins.
#[must_use]
pub const fn search_bar_rect(cols: usize) -> Rect {
    Rect {
        row: SEARCH_BAR_ROW,
        col: 1,
        width: cols,
        height: SEARCH_BAR_HEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_terminal_still_has_one_column() {
        assert_eq!(grid_columns(10), 1);
        assert_eq!(grid_columns(0), 1);
    }

    #[test]
    fn columns_fit_width() {
        // 2 margins of 2, cards of 30 with gaps of 2: 3 cards need 4 + 94 = 98.
        assert_eq!(grid_columns(97), 2);
        assert_eq!(grid_columns(98), 3);
    }

    #[test]
    fn cards_are_placed_row_major() {
        let layout = GridLayout::compute(40, 98, 5, 0);
        assert_eq!(layout.columns, 3);
        let first = layout.card_rect(0).unwrap();
        let fourth = layout.card_rect(3).unwrap();
        assert_eq!((first.row, first.col), (GRID_TOP, SIDE_MARGIN + 1));
        assert_eq!(fourth.row, GRID_TOP + CARD_HEIGHT + ROW_GAP);
        assert_eq!(fourth.col, first.col);
        assert_eq!(layout.card_rect(1).unwrap().col, SIDE_MARGIN + 1 + CARD_WIDTH + COLUMN_GAP);
    }

    #[test]
    fn grid_scrolls_to_keep_cursor_visible() {
        // 24 rows leave 13 grid lines: two card rows.
        let layout = GridLayout::compute(24, 40, 10, 9);
        assert_eq!(layout.columns, 1);
        assert_eq!(layout.visible_rows, 2);
        assert!(layout.card_rect(9).is_some());
        assert!(layout.card_rect(0).is_none());
        assert_eq!(layout.visible_range(), 8..10);
    }

    #[test]
    fn hit_testing_finds_card_and_misses_gaps() {
        let layout = GridLayout::compute(40, 98, 3, 0);
        let second = layout.card_rect(1).unwrap();
        assert_eq!(layout.hit(second.row + 1, second.col + 1), Some(1));

        let gap_col = second.col - 1;
        assert_eq!(layout.hit(second.row + 1, gap_col), None);
        assert_eq!(layout.hit(GRID_TOP - 1, second.col), None);
    }

    #[test]
    fn modal_is_centred_and_clamped() {
        let rect = modal_rect(30, 100, 10);
        assert_eq!(rect.width, MODAL_MAX_WIDTH);
        assert_eq!(rect.height, 14);
        assert_eq!(rect.row, 9);
        assert_eq!(rect.col, 15);

        let tall = modal_rect(10, 100, 50);
        assert_eq!(tall.height, 8);
    }

    #[test]
    fn close_glyph_sits_on_top_border() {
        let rect = modal_rect(30, 100, 10);
        let (row, col) = close_glyph_cell(&rect);
        assert_eq!(row, rect.row);
        assert!(rect.contains(row, col));
    }
}
