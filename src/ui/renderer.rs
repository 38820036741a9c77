//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`UIViewModel`] from [`AppState`],
//! then hand it to the components. Output goes to stdout through `print!`,
//! which Zellij captures as the pane content.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI for a pane of `rows` x `cols`.
///
/// # Example
///
/// ```rust
/// use breed_search::app::AppState;
/// use breed_search::ui::{render, Theme};
///
/// let state = AppState::new(Default::default(), Theme::default());
/// render(&state, 24, 80);
/// ```
///
/// [`UIViewModel`]: crate::ui::viewmodel::UIViewModel
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::debug_span!("render", rows = rows, cols = cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_screen(&viewmodel, &state.theme, rows, cols);
}
