//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed
//! by the renderer. They hold display-ready text and screen rectangles, so
//! the renderer never looks at search state and click handling can hit-test
//! against exactly what was drawn.
//!
//! # Example
//!
//! ```rust
//! use breed_search::app::AppState;
//! use breed_search::ui::Theme;
//!
//! let state = AppState::new(Default::default(), Theme::default());
//! let vm = state.compute_viewmodel(24, 80);
//! assert!(vm.cards.is_empty());
//! assert!(vm.modal.is_none());
//! ```

use crate::ui::layout::Rect;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub status: StatusInfo,
    /// Cards currently on screen.
    pub cards: Vec<CardView>,
    /// Detail panel, present while an item is selected.
    pub modal: Option<ModalView>,
    pub footer: FooterInfo,
    /// Shown in the grid area before the first search.
    pub empty_state: Option<EmptyState>,
}

impl UIViewModel {
    /// Index of the card drawn under the given cell.
    #[must_use]
    pub fn card_at(&self, row: usize, col: usize) -> Option<usize> {
        self.cards
            .iter()
            .find(|card| card.rect.contains(row, col))
            .map(|card| card.index)
    }
}

/// Title and lead text.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub lead: String,
}

/// Search input box.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently edit the query.
    pub focused: bool,
}

/// Visual weight of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Hint,
    Loading,
    Error,
    Results,
}

/// Line between the search box and the grid.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub kind: StatusKind,
    pub text: String,
}

/// One result card.
#[derive(Debug, Clone)]
pub struct CardView {
    /// Position of the item in the result set.
    pub index: usize,
    pub rect: Rect,
    /// Name truncated to the card's inner width.
    pub name: String,
    /// Temperament, or the em-dash placeholder, truncated.
    pub temperament: String,
    /// Image file label, or `No image`.
    pub image: String,
    pub has_image: bool,
    /// Whether the keyboard cursor is on this card.
    pub is_cursor: bool,
    /// Character ranges of `name` matching the submitted query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// The detail panel for the selected item.
#[derive(Debug, Clone)]
pub struct ModalView {
    pub rect: Rect,
    pub title: String,
    /// Field lines, already wrapped to the panel's inner width and cut to
    /// its height.
    pub lines: Vec<DetailLine>,
    /// Width reserved for labels so wrapped values line up.
    pub label_width: usize,
}

/// One line of the detail panel.
///
/// Continuation lines of a wrapped value have an empty label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub label: String,
    pub text: String,
}

/// Keybinding hints.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown in place of the grid before any search.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
