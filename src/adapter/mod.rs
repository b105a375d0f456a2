// src/adapter/mod.rs

pub mod request;
pub mod response;
pub mod sync;
pub mod validate;

use std::sync::Arc;

use serde_json::Value;

use crate::config;
use crate::logging::diagnostics::{DiagnosticsSink, TracingDiagnostics};
use crate::model::bid::NormalizedBid;
use crate::model::context::{AuctionContext, GdprConsent, GppConsent};
use crate::model::request::DemandRequest;
use crate::model::sync::{SyncOptions, SyncParams, UserSync};
use crate::openrtb::request::BidRequest;

/// Outbound request envelope handed back to the host: the wire payload
/// plus the transport metadata the host needs to dispatch it, plus the
/// sync parameters the host threads into a later [`Adapter::build_user_syncs`]
/// call.
#[derive(Debug, Clone)]
pub struct ServerRequest {
    pub method: &'static str,
    pub url: &'static str,
    /// The host should compress the payload.
    pub gzip: bool,
    pub data: BidRequest,
    /// Extracted from the first demand request of the batch; `None` when
    /// the batch was empty.
    pub sync_params: Option<SyncParams>,
}

/// Raw SSP reply as captured by the host. The body stays a loose
/// [`Value`] because the interpreter must tolerate any shape the SSP sends
/// back without failing the auction round.
#[derive(Debug, Clone, Default)]
pub struct ServerResponse {
    pub body: Option<Value>,
}

impl ServerResponse {
    /// Wraps a raw reply body. Unparseable bytes become an empty response,
    /// never an error.
    pub fn from_json(bytes: &[u8]) -> Self {
        Self {
            body: serde_json::from_slice(bytes).ok(),
        }
    }
}

/// The bid adapter. Holds the diagnostics sink every operation reports
/// into; all four operations are synchronous, infallible and free of I/O.
#[derive(Clone)]
pub struct Adapter {
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl Default for Adapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter {
    /// Adapter reporting diagnostics through `tracing`.
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        Self { diagnostics }
    }

    /// Decides whether a demand request may enter the auction. See
    /// [`validate`](self::validate) for the rules.
    pub fn is_demand_valid(&self, request: &DemandRequest) -> bool {
        validate::is_demand_valid(request, self.diagnostics.as_ref())
    }

    /// Builds the outbound bid request for a batch of eligible demand
    /// requests. Deterministic; an empty batch yields an empty `imp` list
    /// with fully formed top-level fields.
    pub fn build_request(
        &self,
        requests: &[DemandRequest],
        context: &AuctionContext,
    ) -> ServerRequest {
        let (data, sync_params) = request::build(requests, context);
        ServerRequest {
            method: "POST",
            url: config::BID_ENDPOINT,
            gzip: true,
            data,
            sync_params,
        }
    }

    /// Maps an SSP reply to normalized bids, one per seat group that holds
    /// at least one bid record. Malformed replies yield zero bids.
    pub fn interpret_response(
        &self,
        response: &ServerResponse,
        original_request: &BidRequest,
    ) -> Vec<NormalizedBid> {
        response::interpret(response, original_request, self.diagnostics.as_ref())
    }

    /// Builds the user-sync callbacks for the page, at most one.
    pub fn build_user_syncs(
        &self,
        options: &SyncOptions,
        responses: &[ServerResponse],
        gdpr_consent: Option<&GdprConsent>,
        usp_consent: Option<&str>,
        gpp_consent: Option<&GppConsent>,
        sync_params: Option<&SyncParams>,
    ) -> Vec<UserSync> {
        sync::build_user_syncs(
            options,
            responses,
            gdpr_consent,
            usp_consent,
            gpp_consent,
            sync_params,
        )
    }
}
