//! Header component renderer: title and lead line.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title at `row` and the lead text on the row below, both
/// centred and padded to the full width.
///
/// Returns the next free row.
///
/// # Example
///
/// ```rust
/// use breed_search::ui::components::render_header;
/// use breed_search::ui::viewmodel::HeaderInfo;
/// use breed_search::ui::Theme;
///
/// let header = HeaderInfo {
///     title: "Dog Search".to_string(),
///     lead: "Search by name or description".to_string(),
/// };
/// assert_eq!(render_header(2, &header, &Theme::default(), 80), 4);
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print_centered(&header.title, cols);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.lead_fg));
    print_centered(&header.lead, cols);
    print!("{}", Theme::reset());

    row + 2
}

/// Prints `text` centred in `cols` cells, padding both sides.
pub(super) fn print_centered(text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}
