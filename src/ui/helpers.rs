//! Shared rendering utilities.
//!
//! Text measurement here counts `char`s, which is what the em-dash
//! placeholder, the `×` glyph and typical breed names need. Wide CJK glyphs
//! are not accounted for.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of display cells `text` occupies.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` cells, ending in `…` when shortened.
///
/// # Example
///
/// ```rust
/// use breed_search::ui::helpers::truncate;
///
/// assert_eq!(truncate("Staffordshire Bull Terrier", 12), "Staffordshi…");
/// assert_eq!(truncate("Pug", 12), "Pug");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Greedy word wrap to `width` cells. Words longer than a line are split.
///
/// Always returns at least one line, so an empty value still occupies a row.
///
/// # Example
///
/// ```rust
/// use breed_search::ui::helpers::wrap_text;
///
/// assert_eq!(wrap_text("small friendly dogs", 10), vec!["small", "friendly", "dogs"]);
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current.is_empty() {
            word.len()
        } else {
            text_width(&current) + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Merges sorted character indices into `(start, end)` ranges, end exclusive.
///
/// # Example
///
/// ```rust
/// use breed_search::ui::helpers::coalesce_ranges;
///
/// assert_eq!(coalesce_ranges(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
/// ```
#[must_use]
pub fn coalesce_ranges(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Prints `text` with the given character ranges highlighted.
///
/// `base` is the escape sequence to restore after each highlighted run so
/// that the surrounding style (card title color, cursor background) is kept.
/// Ranges past the end of `text` are clipped.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, base: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < pos || start >= end {
            continue;
        }

        let plain: String = chars[pos..start].iter().collect();
        let marked: String = chars[start..end].iter().collect();
        print!("{plain}");
        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        print!("{marked}");
        print!("{}{base}", Theme::reset());
        pos = end;
    }

    let rest: String = chars[pos..].iter().collect();
    print!("{rest}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("—", 1), "—");
        assert_eq!(truncate("Épagneul Breton", 5), "Épag…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("to abcdefgh", 4), vec!["to", "abcd", "efgh"]);
    }

    #[test]
    fn wrap_keeps_words_together_when_they_fit() {
        assert_eq!(
            wrap_text("Friendly, Loyal, Playful", 16),
            vec!["Friendly, Loyal,", "Playful"]
        );
    }

    #[test]
    fn wrap_of_blank_text_is_one_empty_line() {
        assert_eq!(wrap_text("   ", 10), vec![String::new()]);
    }

    #[test]
    fn coalesce_handles_empty_and_single() {
        assert!(coalesce_ranges(&[]).is_empty());
        assert_eq!(coalesce_ranges(&[4]), vec![(4, 5)]);
    }
}
