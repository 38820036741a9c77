//! Input focus and navigation types.
//!
//! Keyboard input is interpreted according to [`Focus`], unless the detail
//! panel is open, in which case it captures all keys. Whether the panel is
//! open is not a mode of its own; it follows from the controller's
//! selection.
//!
//! # Example
//!
//! ```rust
//! use breed_search::app::{Direction, Focus};
//!
//! let focus = Focus::Query;
//! assert_ne!(focus, Focus::Results);
//! let _ = Direction::Down;
//! ```

/// Which part of the view receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing into the search input.
    ///
    /// Printable characters edit the query, `Enter` submits.
    #[default]
    Query,

    /// Moving the cursor across the result grid.
    ///
    /// Arrows and `h/j/k/l` move, `Enter` opens the card under the cursor.
    Results,
}

/// Cursor movement across the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
