//! Zellij plugin wrapper and entry point.
//!
//! A thin integration layer: Zellij events are translated into library
//! [`Event`]s, [`handle_event`] decides what happens, and the returned
//! [`Action`]s are carried out through the Zellij API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create `AppState`, request
//!    `WebAccess`, subscribe to events
//! 2. **Update**: map Zellij events, delegate to the library, run actions
//! 3. **Render**: record the pane size, call the library renderer
//!
//! # Event Mapping
//!
//! - `Key` → query editing, grid navigation or panel dismissal, by focus
//! - `Mouse(LeftClick)` → `Event::Click` (converted to 1-indexed cells)
//! - `WebRequestResult` → `Event::SearchCompleted` with the sequence number
//!   read back from the request context
//! - `Timer` → `Event::Tick`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! Query focus:
//! - Printable characters: edit the query
//! - `Backspace`: delete
//! - `Enter`: search
//! - `Tab`/`Down`: move to results
//! - `Esc`: clear the query, or close when it is empty
//!
//! Results focus:
//! - Arrows or `h`/`j`/`k`/`l`: move the cursor
//! - `Enter`: open details
//! - `/` or `Tab`: back to the query
//! - `q`/`Esc`: close
//!
//! Detail panel open:
//! - `Esc`, `Enter`, `q`, `x`: close the panel

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use breed_search::app::{Direction, Focus};
use breed_search::client::SearchRequest;
use breed_search::observability::TraceContext;
use breed_search::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Timers can fire slightly early; the controller compares whole elapsed
/// seconds, so the check runs a little after the deadline.
const TIMER_SLACK_SECS: f64 = 0.25;

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: breed_search::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: breed_search::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        breed_search::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            endpoint = %config.endpoint,
            timeout = ?config.request_timeout,
            ordering = ?config.stale_responses,
            "parsed configuration"
        );
        self.app = breed_search::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, headers, body, context) => {
                if let Some(parent) = TraceContext::read_from(&context) {
                    parent.adopt_as_parent(&span);
                }
                match Self::map_web_result_event(status, headers, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                }
            }
            _ => return false,
        };

        let _guard = span.entered();
        tracing::debug!(event = %event_name, "processing event");

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        breed_search::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events according to focus.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.search.selection().is_some() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q' | 'x') => Some(Event::Dismiss),
                _ => None,
            };
        }

        match self.app.focus {
            Focus::Query => Self::map_query_key(key),
            Focus::Results => Self::map_results_key(key),
        }
    }

    fn map_query_key(key: &KeyWithModifier) -> Option<Event> {
        let plain = key.key_modifiers.is_empty() || key.has_modifiers(&[KeyModifier::Shift]);
        Some(match key.bare_key {
            BareKey::Enter => Event::Submit,
            BareKey::Backspace => Event::Backspace,
            BareKey::Esc => Event::Escape,
            BareKey::Tab | BareKey::Down => Event::FocusResults,
            BareKey::Char(c) if plain => Event::Char(c),
            _ => return None,
        })
    }

    fn map_results_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Up | BareKey::Char('k') => Event::Move(Direction::Up),
            BareKey::Down | BareKey::Char('j') => Event::Move(Direction::Down),
            BareKey::Left | BareKey::Char('h') => Event::Move(Direction::Left),
            BareKey::Right | BareKey::Char('l') => Event::Move(Direction::Right),
            BareKey::Enter => Event::SelectCursor,
            BareKey::Tab | BareKey::Char('/') => Event::FocusQuery,
            BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Left clicks only; Zellij reports 0-indexed lines and columns.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()? + 1;
                Some(Event::Click { row, col: col + 1 })
            }
            _ => None,
        }
    }

    fn map_web_result_event(
        status: u16,
        headers: BTreeMap<String, String>,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(seq) = SearchRequest::sequence_from_context(context) else {
            tracing::debug!(status = status, "web request result without sequence number, ignoring");
            return None;
        };
        tracing::debug!(
            seq = seq,
            status = status,
            header_count = headers.len(),
            body_len = body.len(),
            "search response"
        );
        Some(Event::SearchCompleted {
            seq,
            status,
            headers,
            body,
        })
    }

    /// Executes an action returned by the event handler.
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
            Action::FetchResults(request) => {
                tracing::debug!(seq = request.seq, url = %request.url, "web request");
                web_request(
                    request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context,
                );
            }
            Action::ScheduleTimeout { seconds } => {
                set_timeout(f64::from(seconds) + TIMER_SLACK_SECS);
            }
        }
    }
}
