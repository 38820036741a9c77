//! Trace context carried through web request context maps.
//!
//! Zellij returns the context map of a `web_request` unchanged with its
//! `WebRequestResult`. Writing the submitting span's ids into that map lets
//! the span that handles the response join the same trace.

use opentelemetry::trace::{
    SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
};
use std::collections::BTreeMap;
use tracing_opentelemetry::OpenTelemetrySpanExt;

const TRACE_ID_KEY: &str = "breed_search.trace_id";
const SPAN_ID_KEY: &str = "breed_search.span_id";

/// Trace and span ids of the span that issued a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// 32 hex chars.
    pub trace_id: String,
    /// 16 hex chars.
    pub span_id: String,
}

impl TraceContext {
    /// Captures the ids of the current `tracing` span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span is
    /// not sampled, which is the normal case in tests.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        let context = tracing::Span::current().context();
        let span = context.span();
        let span_context = span.span_context();

        span_context.is_valid().then(|| Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    pub fn write_to(&self, map: &mut BTreeMap<String, String>) {
        map.insert(TRACE_ID_KEY.to_string(), self.trace_id.clone());
        map.insert(SPAN_ID_KEY.to_string(), self.span_id.clone());
    }

    #[must_use]
    pub fn read_from(map: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            trace_id: map.get(TRACE_ID_KEY)?.clone(),
            span_id: map.get(SPAN_ID_KEY)?.clone(),
        })
    }

    /// Makes `span` a child of the remote span described by this context.
    ///
    /// Malformed ids are ignored and the span stays a root.
    pub fn adopt_as_parent(&self, span: &tracing::Span) {
        let (Ok(trace_id), Ok(span_id)) = (
            TraceId::from_hex(&self.trace_id),
            SpanId::from_hex(&self.span_id),
        ) else {
            tracing::debug!(trace_id = %self.trace_id, "ignoring malformed trace context");
            return;
        };

        let remote = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );
        span.set_parent(opentelemetry::Context::new().with_remote_span_context(remote));
    }
}
