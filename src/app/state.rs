//! Application state and view model computation.
//!
//! [`AppState`] wraps the [`SearchController`] with what only the terminal
//! view needs: input focus, the grid cursor, the theme, the last known pane
//! size and whether web access has been granted. It is the single source of
//! truth the event handler mutates and the renderer reads.
//!
//! # Example
//!
//! ```rust
//! use breed_search::app::AppState;
//! use breed_search::ui::Theme;
//!
//! let state = AppState::new(Default::default(), Theme::default());
//! let vm = state.compute_viewmodel(24, 80);
//! assert_eq!(vm.header.title, "Dog Search");
//! assert!(vm.empty_state.is_some());
//! ```

use super::controller::{SearchController, SearchState};
use super::modes::{Direction, Focus};
use crate::domain::{display_or_placeholder, ResultItem};
use crate::ui::helpers::{coalesce_ranges, truncate, wrap_text};
use crate::ui::layout::{self, GridLayout, Rect};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardView, DetailLine, EmptyState, FooterInfo, HeaderInfo, ModalView, SearchBarInfo,
    StatusInfo, StatusKind, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

pub const TITLE: &str = "Dog Search";
pub const LEAD: &str = "Search by name or description (e.g. \u{201c}small friendly dogs\u{201d})";
pub const LOADING_TEXT: &str = "Loading\u{2026}";
pub const NO_IMAGE_TEXT: &str = "No image";

/// Pane size used before Zellij's first render call.
const DEFAULT_VIEWPORT: (usize, usize) = (24, 80);

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query, search state, selection and request sequencing.
    pub search: SearchController,

    /// Which part of the view receives keystrokes.
    pub focus: Focus,

    /// Index of the keyboard-highlighted card.
    ///
    /// Distinct from the selection: moving the cursor never opens the detail
    /// panel. Reset to 0 whenever a new result set is applied.
    pub cursor: usize,

    pub theme: Theme,

    /// `(rows, cols)` of the last render, used for mouse hit-testing and
    /// vertical cursor movement.
    pub viewport: (usize, usize),

    /// Set once Zellij reports the `WebAccess` permission as granted.
    pub web_access: bool,
}

impl AppState {
    #[must_use]
    pub const fn new(search: SearchController, theme: Theme) -> Self {
        Self {
            search,
            focus: Focus::Query,
            cursor: 0,
            theme,
            viewport: DEFAULT_VIEWPORT,
            web_access: false,
        }
    }

    /// Records the pane size; called from `render`.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = (rows, cols);
    }

    /// Number of cards in the current result set.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.search.results().map_or(0, <[ResultItem]>::len)
    }

    /// Moves the grid cursor, clamping at the grid edges.
    ///
    /// Up and down move by one grid row using the column count of the
    /// current viewport. Returns `true` if the cursor moved.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        let count = self.result_count();
        if count == 0 {
            return false;
        }

        let columns = layout::grid_columns(self.viewport.1);
        let last = count - 1;
        let current = self.cursor.min(last);

        let next = match direction {
            Direction::Left => current.saturating_sub(1),
            Direction::Right => (current + 1).min(last),
            Direction::Up => current.checked_sub(columns).unwrap_or(current),
            Direction::Down => {
                let below = current + columns;
                if below <= last {
                    below
                } else {
                    current
                }
            }
        };

        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    /// Opens the detail panel for the card under the cursor.
    pub fn select_cursor(&mut self) -> bool {
        self.search.select(self.cursor)
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            rows = rows,
            cols = cols,
            result_count = self.result_count()
        )
        .entered();

        UIViewModel {
            header: HeaderInfo {
                title: TITLE.to_string(),
                lead: LEAD.to_string(),
            },
            search_bar: SearchBarInfo {
                query: self.search.query().to_string(),
                focused: self.focus == Focus::Query && self.search.selection().is_none(),
            },
            status: self.compute_status(),
            cards: self.compute_cards(rows, cols),
            modal: self.compute_modal(rows, cols),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
        }
    }

    fn compute_status(&self) -> StatusInfo {
        let (kind, text) = match self.search.state() {
            SearchState::Idle => (
                StatusKind::Hint,
                "Type a query and press Enter to search".to_string(),
            ),
            SearchState::Loading { .. } => (StatusKind::Loading, LOADING_TEXT.to_string()),
            SearchState::Failed { message } => (StatusKind::Error, message.clone()),
            SearchState::Success { query, results } => {
                let noun = if results.len() == 1 { "result" } else { "results" };
                (
                    StatusKind::Results,
                    format!("{} {noun} for \u{201c}{}\u{201d}", results.len(), query.trim()),
                )
            }
        };
        StatusInfo { kind, text }
    }

    fn compute_cards(&self, rows: usize, cols: usize) -> Vec<CardView> {
        let SearchState::Success { query, results } = self.search.state() else {
            return vec![];
        };
        if results.is_empty() {
            return vec![];
        }

        let grid = GridLayout::compute(rows, cols, results.len(), self.cursor);
        let matcher = SkimMatcherV2::default();
        let inner = grid.card_width.saturating_sub(4);

        grid.visible_range()
            .filter_map(|index| {
                let rect = grid.card_rect(index)?;
                let item = results.get(index)?;
                let name = truncate(&item.name, inner);
                let image_label = item.image_label();
                Some(CardView {
                    index,
                    rect,
                    highlight_ranges: highlight_ranges(&matcher, &name, query),
                    name,
                    temperament: truncate(item.temperament_or_placeholder(), inner),
                    image: truncate(image_label.as_deref().unwrap_or(NO_IMAGE_TEXT), inner),
                    has_image: image_label.is_some(),
                    is_cursor: self.focus == Focus::Results && index == self.cursor,
                })
            })
            .collect()
    }

    fn compute_modal(&self, rows: usize, cols: usize) -> Option<ModalView> {
        let item = self.search.selection()?;

        let width = layout::modal_width(cols);
        let inner = width.saturating_sub(layout::MODAL_CHROME_WIDTH);
        let fields = detail_fields(item);
        let label_width = fields
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0)
            + 2;
        let text_width = inner.saturating_sub(label_width).max(1);

        let mut lines = Vec::new();
        for (label, value) in fields {
            for (i, text) in wrap_text(&value, text_width).into_iter().enumerate() {
                lines.push(DetailLine {
                    label: if i == 0 { label.to_string() } else { String::new() },
                    text,
                });
            }
        }

        let rect: Rect = layout::modal_rect(rows, cols, lines.len());
        lines.truncate(rect.height.saturating_sub(layout::MODAL_CHROME_HEIGHT));

        Some(ModalView {
            rect,
            title: truncate(&item.name, inner.saturating_sub(4)),
            lines,
            label_width,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.search.selection().is_some() {
            "Esc/Enter/q: close details  Click outside: close"
        } else {
            match self.focus {
                Focus::Query => "Type to edit  Enter: search  Tab/\u{2193}: results  Esc: clear/close",
                Focus::Results => "\u{2190}\u{2191}\u{2192}\u{2193}/hjkl: move  Enter: details  /: edit query  q: close",
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        match self.search.state() {
            SearchState::Idle => Some(EmptyState {
                message: "No search yet".to_string(),
                subtitle: "Describe the dog you are looking for".to_string(),
            }),
            SearchState::Success { results, .. } if results.is_empty() => Some(EmptyState {
                message: "Nothing matched".to_string(),
                subtitle: "Try a broader description".to_string(),
            }),
            _ => None,
        }
    }
}

/// Label/value pairs for the detail panel, in display order.
fn detail_fields(item: &ResultItem) -> Vec<(&'static str, String)> {
    let image = item.image.as_deref().filter(|url| !url.is_empty());
    vec![
        ("Image", image.unwrap_or(NO_IMAGE_TEXT).to_string()),
        ("Temperament", item.temperament_or_placeholder().to_string()),
        (
            "Description",
            display_or_placeholder(item.description.as_deref()).to_string(),
        ),
        (
            "Life Span",
            display_or_placeholder(item.life_span.as_deref()).to_string(),
        ),
        (
            "Bred For",
            display_or_placeholder(item.bred_for.as_deref()).to_string(),
        ),
        ("Match", item.score_label()),
    ]
}

/// Character ranges of `name` matched by any token of `query`.
fn highlight_ranges(matcher: &SkimMatcherV2, name: &str, query: &str) -> Vec<(usize, usize)> {
    let mut indices: Vec<usize> = query
        .split_whitespace()
        .filter_map(|token| matcher.fuzzy_indices(name, token))
        .flat_map(|(_score, indices)| indices)
        .collect();
    indices.sort_unstable();
    indices.dedup();
    coalesce_ranges(&indices)
}
