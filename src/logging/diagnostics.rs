// src/logging/diagnostics.rs

use std::sync::Mutex;

use tracing::{debug, warn};

/// Structured diagnostic events the adapter emits instead of failing.
/// None of these abort an auction round; they exist so the host can see
/// why a demand request was rejected or a response degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Video spec rejected: `mimes` missing or empty.
    MissingVideoMimes { request_id: String },
    /// Video spec rejected: a supplied dimension was zero or negative.
    InvalidVideoDimension {
        request_id: String,
        field: &'static str,
        value: i64,
    },
    /// Response body absent or unparseable.
    EmptyResponseBody,
    /// Response body carried no `seatbid` array.
    MalformedSeatBid,
    /// A seat group's first bid record did not deserialize.
    MalformedBidRecord { seat_index: usize },
    /// Bid record carried no markup-type code; media type defaulted to banner.
    MissingMarkupType { impid: Option<String> },
    /// Bid record carried a markup-type code the adapter does not know;
    /// the bid is returned without a media type.
    UnknownMarkupType { impid: Option<String>, mtype: i64 },
}

/// Sink the adapter reports diagnostics to. Injectable so hosts can route
/// events into their own telemetry and tests can assert on them directly.
pub trait DiagnosticsSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink: forwards events to `tracing`. Validation rejections and
/// unknown codes are warnings; the banner fallback is merely debug noise.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::MissingVideoMimes { ref request_id } => {
                warn!(%request_id, "video demand rejected: no mimes declared");
            }
            Diagnostic::InvalidVideoDimension {
                ref request_id,
                field,
                value,
            } => {
                warn!(%request_id, field, value, "video demand rejected: non-positive dimension");
            }
            Diagnostic::EmptyResponseBody => {
                debug!("ssp response had no body; returning zero bids");
            }
            Diagnostic::MalformedSeatBid => {
                debug!("ssp response had no seatbid array; returning zero bids");
            }
            Diagnostic::MalformedBidRecord { seat_index } => {
                warn!(seat_index, "skipping seat group with undecodable bid record");
            }
            Diagnostic::MissingMarkupType { ref impid } => {
                debug!(?impid, "bid record without mtype; defaulting media type to banner");
            }
            Diagnostic::UnknownMarkupType { ref impid, mtype } => {
                warn!(?impid, mtype, "unknown mtype on bid record; media type left unset");
            }
        }
    }
}

/// Sink that retains every event, for assertions in tests and for hosts
/// that batch diagnostics out-of-band.
#[derive(Debug, Default)]
pub struct CapturingDiagnostics {
    events: Mutex<Vec<Diagnostic>>,
}

impl CapturingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the captured events and clears the buffer.
    pub fn drain(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl DiagnosticsSink for CapturingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        match self.events.lock() {
            Ok(mut events) => events.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}
