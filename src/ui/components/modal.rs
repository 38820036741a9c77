//! Detail panel renderer.
//!
//! Drawn last, over the grid, at the rectangle computed by
//! [`modal_rect`](crate::ui::layout::modal_rect):
//!
//! ```text
//! ┌──────────────────────────×─┐
//! │ Pug                        │
//! │                            │
//! │ Temperament  Stubborn      │
//! │ Description  —             │
//! └────────────────────────────┘
//! ```

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalView;

pub fn render_modal(modal: &ModalView, theme: &Theme) {
    let rect = modal.rect;
    if rect.width < 4 || rect.height < 2 {
        return;
    }
    let inner = rect.width - 4;
    let border = Theme::fg(&theme.colors.modal_border);
    let fill = theme
        .colors
        .modal_bg
        .as_deref()
        .map(Theme::bg)
        .unwrap_or_default();

    position_cursor(rect.row, rect.col);
    print!("{fill}{border}┌{}", "─".repeat(rect.width - 4));
    print!("{}×{}", Theme::bold(), Theme::reset());
    print!("{fill}{border}─┐{}", Theme::reset());

    let body_rows = rect.height.saturating_sub(2);
    for offset in 0..body_rows {
        let row = rect.row + 1 + offset;
        position_cursor(row, rect.col);
        print!("{fill}{border}│{}{fill} ", Theme::reset());

        let used = match offset {
            0 => {
                let title = truncate(&modal.title, inner);
                print!(
                    "{}{}{title}{}",
                    Theme::bold(),
                    Theme::fg(&theme.colors.header_fg),
                    Theme::reset()
                );
                text_width(&title)
            }
            1 => 0,
            n => modal.lines.get(n - 2).map_or(0, |line| {
                let label = format!("{:<width$}", line.label, width = modal.label_width);
                let text = truncate(&line.text, inner.saturating_sub(modal.label_width));
                print!("{}{label}", Theme::fg(&theme.colors.label_fg));
                print!("{fill}{}{text}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
                text_width(&label) + text_width(&text)
            }),
        };

        print!("{fill}{}", " ".repeat(inner.saturating_sub(used)));
        print!(" {border}│{}", Theme::reset());
    }

    position_cursor(rect.bottom(), rect.col);
    print!("{fill}{border}└{}┘{}", "─".repeat(rect.width - 2), Theme::reset());
}
