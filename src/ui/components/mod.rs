//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at positions taken from
//! [`layout`](crate::ui::layout).
//!
//! # Components
//!
//! - [`header`]: title and lead line
//! - [`search`]: search input box
//! - [`status`]: loading/error/result-count line
//! - [`cards`]: result grid
//! - [`empty`]: message in place of the grid
//! - [`modal`]: detail panel for the selected item
//! - [`footer`]: keybinding hints

mod cards;
mod empty;
mod footer;
mod header;
mod modal;
mod search;
mod status;

pub use cards::render_cards;
pub use empty::render_empty_state;
pub use footer::render_footer;
pub use header::render_header;
pub use modal::render_modal;
pub use search::render_search_bar;
pub use status::render_status;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{self, FOOTER_ROWS, GRID_TOP};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders a horizontal separator at `row`. Returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen.
///
/// ```text
/// [blank line]
/// [Title]
/// [Lead]
/// [Border]
/// [Search Bar - 3 lines]
/// [Status]
/// [blank line]
/// [Cards or empty state]
/// [Border]
/// [Footer]
/// [Detail panel on top, when open]
/// ```
pub fn render_screen(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = layout::HEADER_ROW;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    let _current_row = render_status(current_row, &vm.status, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(GRID_TOP + 1, empty, theme, cols);
    } else {
        render_cards(&vm.cards, theme);
    }

    if rows >= GRID_TOP + FOOTER_ROWS {
        let footer_row = rows;
        render_border(footer_row - 1, &theme.colors.border, cols);
        render_footer(footer_row, &vm.footer, theme, cols);
    }

    if let Some(modal) = &vm.modal {
        render_modal(modal, theme);
    }
}
