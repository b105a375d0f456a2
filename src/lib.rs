//! OpenRTB bid adapter for the Rust ADX supply-side platform.
//!
//! The host auction orchestrator owns bidder registration, transport,
//! timeout enforcement and rendering; this crate is the pure transformation
//! layer in between. It validates demand requests, builds the outbound
//! OpenRTB request (impressions, consent blocks, partner extensions),
//! interprets the SSP reply into normalized bids, and assembles user-sync
//! callback URLs.
//!
//! ```
//! use rust_adx_adapter::{Adapter, AuctionContext, DemandRequest, SyncOptions};
//!
//! let adapter = Adapter::new();
//! let demand: Vec<DemandRequest> = serde_json::from_value(serde_json::json!([
//!     { "id": "1abc", "mediaTypes": { "banner": { "sizes": [[300, 250]] } } }
//! ])).unwrap();
//! let context = AuctionContext::default();
//!
//! let eligible: Vec<_> = demand
//!     .into_iter()
//!     .filter(|d| adapter.is_demand_valid(d))
//!     .collect();
//! let server_request = adapter.build_request(&eligible, &context);
//! assert_eq!(server_request.method, "POST");
//!
//! // ... the host posts `server_request.data`, and later:
//! let syncs = adapter.build_user_syncs(
//!     &SyncOptions { iframe_enabled: true, pixel_enabled: false },
//!     &[],
//!     None,
//!     None,
//!     None,
//!     server_request.sync_params.as_ref(),
//! );
//! assert_eq!(syncs.len(), 1);
//! ```

pub mod adapter;
pub mod config;
pub mod logging;
pub mod model;
pub mod openrtb;

pub use adapter::{Adapter, ServerRequest, ServerResponse};
pub use logging::diagnostics::{
    CapturingDiagnostics, Diagnostic, DiagnosticsSink, TracingDiagnostics,
};
pub use model::bid::{BidMeta, MediaType, NormalizedBid};
pub use model::context::{AuctionContext, GdprConsent, GppConsent};
pub use model::request::{BannerSpec, DemandRequest, MediaTypes, PartnerParams, VideoSpec};
pub use model::sync::{SyncOptions, SyncParams, SyncType, UserSync};
