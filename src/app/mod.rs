//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain/client layers.
//!
//! ```text
//! Zellij Event → Event → handle_event → state mutation → Actions → Zellij API
//!                   ↑                                          │
//!                   └──────── WebRequestResult / Timer ────────┘
//! ```
//!
//! # Modules
//!
//! - [`controller`]: the search state machine (query, state, selection)
//! - [`policy`]: timeout and response-ordering policies
//! - [`state`]: view state around the controller and view model computation
//! - [`handler`]: event processing
//! - [`actions`]: side effects emitted by the handler
//! - [`modes`]: focus and navigation types

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod policy;
pub mod state;

pub use actions::Action;
pub use controller::{Completion, SearchController, SearchState};
pub use handler::{handle_event, Event};
pub use modes::{Direction, Focus};
pub use policy::{ResponseOrdering, TimeoutPolicy};
pub use state::AppState;
