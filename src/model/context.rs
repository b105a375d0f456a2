// src/model/context.rs

use serde::{Deserialize, Serialize};

/// Shared per-auction-round metadata supplied by the host alongside the
/// demand batch. Every consent field is independently optional; absence
/// means "signal not collected", never explicit denial.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AuctionContext {
    /// Page referrer of the auctioning page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    /// Auction timeout budget in milliseconds, copied to `tmax`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    /// Host-level test flag, copied to the top-level `test` field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gdpr_consent: Option<GdprConsent>,
    /// CCPA/USP string, e.g. "1YNN".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usp_consent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpp_consent: Option<GppConsent>,
    /// Standardized first-party user identifier (ortb2 `user.id`), the
    /// fallback when no partner-level user id override is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// GDPR signal as collected by the host's CMP. The object being present at
/// all is itself a signal: it forces the `regs`/`user` blocks onto the
/// outbound request even when both fields are empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GdprConsent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gdpr_applies: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_string: Option<String>,
}

/// GPP signal. Both the string and the section list must be non-empty for
/// the sync builder to forward it.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GppConsent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpp_string: Option<String>,
    #[serde(default)]
    pub applicable_sections: Vec<u32>,
}
