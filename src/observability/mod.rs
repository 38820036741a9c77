//! OpenTelemetry-based observability with file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → OTLP JSON lines → rotating file
//! ```
//!
//! Traces land in `~/.local/share/zellij/breed-search/breed-search-otlp.json`
//! (seen from the sandbox as `/host/.local/share/zellij/breed-search/`). The
//! file rotates at 10 MB and keeps three backups.
//!
//! Each search request carries the submitting span's ids in its web request
//! context, so the span that handles the response is parented to the submit
//! and a whole search shows up as one trace.
//!
//! # Configuration
//!
//! `trace_level` in the plugin configuration sets the `EnvFilter` directive;
//! it defaults to `info`.
//!
//! # Modules
//!
//! - `init`: subscriber installation
//! - `exporter`: file span exporter and OTLP/JSON encoding
//! - `rotation`: size-rotated append-only file
//! - `propagation`: trace context in request context maps

mod exporter;
mod init;
mod propagation;
mod rotation;

pub use init::{init_tracing, TRACE_FILE_NAME};
pub use propagation::TraceContext;
pub use rotation::RotatingFile;
