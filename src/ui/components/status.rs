//! Status line renderer: hint, `Loading…`, error message or result count.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::layout::SIDE_MARGIN;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusInfo, StatusKind};

pub fn render_status(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    let color = match status.kind {
        StatusKind::Hint | StatusKind::Results => &theme.colors.text_dim,
        StatusKind::Loading => &theme.colors.loading_fg,
        StatusKind::Error => &theme.colors.error_fg,
    };
    let text = truncate(&status.text, cols.saturating_sub(SIDE_MARGIN * 2));

    position_cursor(row, 1);
    print!("{}", " ".repeat(SIDE_MARGIN + 1));
    if status.kind == StatusKind::Error {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", Theme::reset());
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(SIDE_MARGIN + 1 + text_width(&text)))
    );
    row + 1
}
