//! Fixed protocol constants for the Rust ADX endpoint.

/// Auction endpoint the host posts the outbound request to.
pub const BID_ENDPOINT: &str = "https://ssp.rust-adx.com/openrtb/bid";

/// User-sync endpoint; query parameters are appended by the sync builder.
pub const SYNC_ENDPOINT: &str = "https://ssp.rust-adx.com/openrtb/sync";

/// Currency advertised in `cur` and substituted when a response omits one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Seconds a normalized bid stays eligible for rendering.
pub const DEFAULT_TTL_SECS: u32 = 300;
