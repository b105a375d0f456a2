// src/model/request.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One advertiser's request to compete for one ad placement, as handed in
/// by the host per slot per auction round. Read-only to the adapter.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DemandRequest {
    /// Correlation identifier, unique within an auction batch. Becomes the
    /// impression id on the wire and `request_id` on the normalized bid.
    pub id: String,

    /// Declared format support for the placement.
    #[serde(rename = "mediaTypes", default)]
    pub media_types: MediaTypes,

    /// Publisher-supplied partner parameters.
    #[serde(default)]
    pub params: PartnerParams,
}

/// Supported format declarations. Both may be present on one request; the
/// request builder gives banner priority in that case.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MediaTypes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<BannerSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoSpec>,
}

/// Banner format declaration: accepted width/height pairs.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BannerSpec {
    #[serde(default)]
    pub sizes: Vec<(u32, u32)>,
}

/// Video format declaration. Only `mimes`, `w` and `h` are inspected by
/// validation; every field, known or not, passes through to the wire
/// verbatim when the impression carries a video object.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VideoSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<i64>,
    /// Streaming parameters forwarded untouched (minduration, maxduration,
    /// startdelay, protocols, ...). No allow-list.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Free-form key/value bag supplied by the publisher. The keys the adapter
/// reads are typed; everything else is retained in `extra`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartnerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidfloor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_mode: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssp_user_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
