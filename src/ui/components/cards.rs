//! Result card renderer.
//!
//! Each card is a bordered box of [`CARD_HEIGHT`](crate::ui::layout::CARD_HEIGHT)
//! rows placed at the rectangle computed by the grid layout:
//!
//! ```text
//! ┌────────────────────────────┐
//! │ Pug                        │
//! │ Stubborn, Playful          │
//! │ pug.jpg                    │
//! └────────────────────────────┘
//! ```

use crate::ui::helpers::{self, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardView;

pub fn render_cards(cards: &[CardView], theme: &Theme) {
    for card in cards {
        render_card(card, theme);
    }
}

fn render_card(card: &CardView, theme: &Theme) {
    let rect = card.rect;
    let inner = rect.width.saturating_sub(2);
    let colors = &theme.colors;

    let (border, title, temperament, image) = if card.is_cursor {
        let body = format!("{}{}", Theme::fg(&colors.cursor_fg), Theme::bg(&colors.cursor_bg));
        (
            Theme::fg(&colors.cursor_bg),
            format!("{body}{}", Theme::bold()),
            body.clone(),
            body,
        )
    } else {
        let image = if card.has_image {
            Theme::fg(&colors.text_normal)
        } else {
            format!("{}{}", Theme::dim(), Theme::fg(&colors.text_dim))
        };
        (
            Theme::fg(&colors.card_border),
            format!("{}{}", Theme::bold(), Theme::fg(&colors.card_title_fg)),
            Theme::fg(&colors.text_dim),
            image,
        )
    };

    position_cursor(rect.row, rect.col);
    print!("{border}┌{}┐{}", "─".repeat(inner), Theme::reset());

    let card_line = |row: usize, text: &str, style: &str, ranges: &[(usize, usize)]| {
        position_cursor(row, rect.col);
        print!("{border}│{}", Theme::reset());
        print!("{style} ");
        helpers::render_highlighted_text(text, ranges, theme, style);
        print!("{}", " ".repeat(inner.saturating_sub(1 + text_width(text))));
        print!("{}{border}│{}", Theme::reset(), Theme::reset());
    };

    card_line(rect.row + 1, &card.name, &title, &card.highlight_ranges);
    card_line(rect.row + 2, &card.temperament, &temperament, &[]);
    card_line(rect.row + 3, &card.image, &image, &[]);

    position_cursor(rect.bottom(), rect.col);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
}
