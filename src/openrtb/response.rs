use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One raw bid record inside a seat group of the SSP reply. Every field is
/// optional on the wire; the interpreter copies whatever is present and
/// never substitutes defaults for prices or dimensions.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BidRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Id of the impression this record matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Creative markup (HTML or VAST).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adomain: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealid: Option<String>,
    /// Markup-type code: 1 banner, 2 video. Anything else is surfaced as a
    /// diagnostic and leaves the normalized media type unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtype: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
