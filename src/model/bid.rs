// src/model/bid.rs

use serde::{Deserialize, Serialize};

/// Resolved creative format of a normalized bid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Banner,
    Video,
}

/// One accepted bid, normalized for the host's auction logic. Serializes
/// camelCase; optional fields are omitted entirely when unset rather than
/// emitted as null.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBid {
    /// Matches the `id` of the originating [`DemandRequest`].
    ///
    /// [`DemandRequest`]: crate::model::request::DemandRequest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Price as quoted by the SSP. Passed through verbatim; a record
    /// without a price yields a bid without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpm: Option<f64>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    /// Creative markup payload (`adm` on the wire).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_id: Option<String>,
    /// Always true: the SSP quotes net revenue.
    pub net_revenue: bool,
    /// Seconds the bid stays eligible for rendering.
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<String>,
    /// Unset when the response carried an unrecognized markup-type code;
    /// the host decides what to do with such bids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    /// Video only: mirrors the markup payload as VAST.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vast_xml: Option<String>,
    pub meta: BidMeta,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BidMeta {
    #[serde(default)]
    pub advertiser_domains: Vec<String>,
}
