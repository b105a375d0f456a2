use serde::{Deserialize, Serialize};

use crate::model::request::VideoSpec;

/// Outbound OpenRTB bid request. Field names are wire-exact; `regs` and
/// `user` are attached only when at least one consent signal was supplied,
/// so their mere presence is meaningful to the SSP.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BidRequest {
    /// Impressions, one per eligible demand request, order preserved.
    pub imp: Vec<Imp>,
    pub cur: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmax: Option<u64>,
    pub test: i64,
    pub ext: RequestExt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regs: Option<Regs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// One impression. Carries a `banner` or a `video` sub-object, never both.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Imp {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidfloor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
    /// Direct structural copy of the declared video spec, unknown fields
    /// included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoSpec>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Banner {
    pub format: Vec<Format>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub w: u32,
    pub h: u32,
}

/// Partner extension block. Always serialized; its fields individually
/// appear only when a matching demand request supplied them.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RequestExt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<i64>,
    #[serde(rename = "sspId", skip_serializing_if = "Option::is_none")]
    pub ssp_id: Option<String>,
    #[serde(rename = "siteId", skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Regs {
    pub ext: RegsExt,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RegsExt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gdpr: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_privacy: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct User {
    pub ext: UserExt,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UserExt {
    /// Raw GDPR consent string. Serialized even when empty: a GDPR signal
    /// with no string must still reach the SSP as present-but-empty.
    pub consent: String,
}
