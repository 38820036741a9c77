//! Breed search: a Zellij plugin that queries a dog-breed search service and
//! shows the results as a card grid with a detail panel.
//!
//! The user types a free-text description, submits it, and the plugin issues
//! `GET http://<host>:<port>/search?q=<query>` through Zellij's web request
//! API. The response, a JSON array of breed records, is shown as cards; a
//! card can be opened for its full details.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Search controller (state machine)                │
//! │  - Event handling, action dispatching               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Client Layer  │
//! │ (ui/)         │                     │ (client/)     │
//! │ - Layout      │                     │ - URL build   │
//! │ - Components  │                     │ - Decoding    │
//! │ - Theming     │                     │ - Sequencing  │
//! └───────────────┘                     └───────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - ResultItem, errors (domain/)                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file OTLP export          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/breed-search.wasm" {
//!         host "127.0.0.1"
//!         port "8000"
//!         request_timeout "15"
//!         stale_responses "discard"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use breed_search::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! for c in "pug".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! let Action::FetchResults(request) = &actions[0] else { unreachable!() };
//! assert_eq!(request.url, "http://127.0.0.1:8000/search?q=pug");
//! # Ok::<(), breed_search::BreedSearchError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, ResponseOrdering, SearchController, TimeoutPolicy};
pub use client::{Endpoint, SearchClient};
pub use domain::{BreedSearchError, ResultItem, Result, SearchError};
pub use ui::Theme;

use client::{DEFAULT_HOST, DEFAULT_PORT};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/breed-search.wasm" {
///     host "search.internal"
///     port "8080"
///     request_timeout "none"
///     stale_responses "accept"
///     theme_file "~/.config/breed-search/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where the search service listens. Default: `http://127.0.0.1:8000/search`.
    pub endpoint: Endpoint,

    /// How long a search may stay in flight. Default: no timeout.
    pub request_timeout: TimeoutPolicy,

    /// Which completion wins when several searches overlap. Default: only the
    /// latest submitted search may complete.
    pub stale_responses: ResponseOrdering,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file, `~` already expanded.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable values fall back to their defaults with a warning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use breed_search::{Config, TimeoutPolicy};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("port".to_string(), "9000".to_string());
    /// map.insert("request_timeout".to_string(), "20".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint.port, 9000);
    /// assert_eq!(config.request_timeout, TimeoutPolicy::After { seconds: 20 });
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let host = config
            .get("host")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_HOST);

        let port = config.get("port").map_or(DEFAULT_PORT, |value| {
            parse_port(value).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default port");
                DEFAULT_PORT
            })
        });

        let request_timeout = config
            .get("request_timeout")
            .map_or_else(TimeoutPolicy::default, |value| {
                parse_option("request_timeout", value, TimeoutPolicy::parse)
            });

        let stale_responses = config
            .get("stale_responses")
            .map_or_else(ResponseOrdering::default, |value| {
                parse_option("stale_responses", value, ResponseOrdering::parse)
            });

        Self {
            endpoint: Endpoint::new(host, port),
            request_timeout,
            stale_responses,
            theme_name: config.get("theme").cloned(),
            theme_file: config
                .get("theme_file")
                .map(String::as_str)
                .map(infrastructure::expand_tilde),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Parses a TCP port, rejecting 0.
///
/// # Errors
///
/// Returns [`BreedSearchError::Config`] for anything that is not a number in
/// `1..=65535`.
pub fn parse_port(value: &str) -> Result<u16> {
    match value.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(BreedSearchError::Config(format!("invalid port {value:?}"))),
    }
}

fn parse_option<T: Default>(key: &str, value: &str, parse: impl Fn(&str) -> Option<T>) -> T {
    parse(value).unwrap_or_else(|| {
        let error = BreedSearchError::Config(format!("invalid {key} {value:?}"));
        tracing::warn!(error = %error, "using default");
        T::default()
    })
}

/// Builds the initial [`AppState`] from configuration.
///
/// The theme comes from `theme_file`, then `theme`, then the default;
/// a theme that fails to load falls back to the default with a log line.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing breed search plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let search = SearchController::new(
        SearchClient::new(config.endpoint.clone()),
        config.request_timeout,
        config.stale_responses,
    );

    AppState::new(search, theme)
}
