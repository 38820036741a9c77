//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`layout`]: screen geometry shared by rendering and mouse hit-testing
//! - [`viewmodel`]: display-ready view state
//! - [`renderer`]: top-level render entry point
//! - [`components`]: per-region renderers
//! - [`helpers`]: text measurement, wrapping and highlighting
//! - [`theme`]: colors and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardView, DetailLine, EmptyState, FooterInfo, HeaderInfo, ModalView, SearchBarInfo,
    StatusInfo, StatusKind, UIViewModel,
};
