//! Search bar component renderer.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::layout::SIDE_MARGIN;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Renders the 3-line search input box starting at `row`.
///
/// Returns the next free row.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// The border switches to `search_bar_focused` while typing goes to the
/// query, and a block cursor is drawn after the text. Queries longer than
/// the box show their tail so the insertion point stays visible.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SIDE_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        &theme.colors.search_bar_focused
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SIDE_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let prefix = " Search: ";
    let caret = if search.focused { "█" } else { "" };
    let room = inner_width.saturating_sub(text_width(prefix) + text_width(caret));
    let query_len = text_width(&search.query);
    let visible: String = if query_len > room {
        search.query.chars().skip(query_len - room).collect()
    } else {
        search.query.clone()
    };
    let content = truncate(&format!("{prefix}{visible}{caret}"), inner_width);
    let padding = inner_width.saturating_sub(text_width(&content));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SIDE_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{content}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SIDE_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
