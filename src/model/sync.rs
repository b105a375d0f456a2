// src/model/sync.rs

use serde::{Deserialize, Serialize};

/// Host-supplied switches describing which sync mechanisms the page allows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub struct SyncOptions {
    #[serde(default)]
    pub iframe_enabled: bool,
    #[serde(default)]
    pub pixel_enabled: bool,
}

/// Partner identification extracted from the first demand request of a
/// build call, threaded by the host into the sync builder. Returning this
/// explicitly (instead of parking it in process-wide state) is what keeps
/// concurrent auctions in one process from clobbering each other.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncParams {
    pub ssp_id: Option<String>,
    pub site_id: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyncType {
    Iframe,
    Image,
}

/// One user-sync callback the page should fire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserSync {
    #[serde(rename = "type")]
    pub sync_type: SyncType,
    pub url: String,
}
