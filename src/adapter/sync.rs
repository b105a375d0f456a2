// src/adapter/sync.rs

use crate::adapter::ServerResponse;
use crate::config;
use crate::model::context::{GdprConsent, GppConsent};
use crate::model::sync::{SyncOptions, SyncParams, SyncType, UserSync};

/// Builds the user-sync callbacks for the page: at most one descriptor,
/// iframe preferred over pixel, with consent and partner parameters
/// appended to the sync endpoint in a fixed order.
pub(crate) fn build_user_syncs(
    options: &SyncOptions,
    _responses: &[ServerResponse],
    gdpr_consent: Option<&GdprConsent>,
    usp_consent: Option<&str>,
    gpp_consent: Option<&GppConsent>,
    sync_params: Option<&SyncParams>,
) -> Vec<UserSync> {
    if !options.iframe_enabled && !options.pixel_enabled {
        return Vec::new();
    }

    let mut query: Vec<(&str, String)> = Vec::new();

    if let Some(gdpr) = gdpr_consent {
        query.push((
            "gdpr",
            i64::from(gdpr.gdpr_applies == Some(true)).to_string(),
        ));
        query.push((
            "gdpr_consent",
            encode(gdpr.consent_string.as_deref().unwrap_or("")),
        ));
    }

    if let Some(usp) = usp_consent.filter(|usp| !usp.is_empty()) {
        query.push(("us_privacy", encode(usp)));
    }

    // GPP is all-or-nothing: without both a string and at least one
    // applicable section, neither field is sent.
    if let Some(gpp) = gpp_consent {
        let gpp_string = gpp.gpp_string.as_deref().filter(|s| !s.is_empty());
        if let Some(gpp_string) = gpp_string {
            if !gpp.applicable_sections.is_empty() {
                let sections = gpp
                    .applicable_sections
                    .iter()
                    .map(|section| section.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                query.push(("gpp", encode(gpp_string)));
                query.push(("gpp_sid", encode(&sections)));
            }
        }
    }

    if let Some(params) = sync_params {
        if let Some(ssp_id) = params.ssp_id.as_deref() {
            query.push(("ssp_id", encode(ssp_id)));
        }
        if let Some(site_id) = params.site_id.as_deref() {
            query.push(("ssp_site_id", encode(site_id)));
        }
        if let Some(user_id) = params.user_id.as_deref() {
            query.push(("ssp_user_id", encode(user_id)));
        }
    }

    query.push(("iframe_enabled", options.iframe_enabled.to_string()));

    let query = query
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let sync_type = if options.iframe_enabled {
        SyncType::Iframe
    } else {
        SyncType::Image
    };

    vec![UserSync {
        sync_type,
        url: format!("{}?{}", config::SYNC_ENDPOINT, query),
    }]
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syncs(
        options: SyncOptions,
        gdpr: Option<&GdprConsent>,
        usp: Option<&str>,
        gpp: Option<&GppConsent>,
        params: Option<&SyncParams>,
    ) -> Vec<UserSync> {
        build_user_syncs(&options, &[], gdpr, usp, gpp, params)
    }

    fn iframe() -> SyncOptions {
        SyncOptions {
            iframe_enabled: true,
            pixel_enabled: false,
        }
    }

    #[test]
    fn disabled_syncs_yield_nothing() {
        assert!(syncs(SyncOptions::default(), None, None, None, None).is_empty());
    }

    #[test]
    fn iframe_wins_over_pixel() {
        let both = SyncOptions {
            iframe_enabled: true,
            pixel_enabled: true,
        };
        let result = syncs(both, None, None, None, None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].sync_type, SyncType::Iframe);
    }

    #[test]
    fn pixel_only_is_an_image_sync_with_false_flag() {
        let pixel = SyncOptions {
            iframe_enabled: false,
            pixel_enabled: true,
        };
        let result = syncs(pixel, None, None, None, None);
        assert_eq!(result[0].sync_type, SyncType::Image);
        assert_eq!(
            result[0].url,
            "https://ssp.rust-adx.com/openrtb/sync?iframe_enabled=false"
        );
    }

    #[test]
    fn usp_scenario() {
        let result = syncs(iframe(), None, Some("1YNN"), None, None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].sync_type, SyncType::Iframe);
        assert!(result[0].url.contains("us_privacy=1YNN"));
        assert!(result[0].url.ends_with("iframe_enabled=true"));
    }

    #[test]
    fn gdpr_consent_string_is_percent_encoded() {
        let gdpr = GdprConsent {
            gdpr_applies: Some(true),
            consent_string: Some("CPc/AB+x".into()),
        };
        let result = syncs(iframe(), Some(&gdpr), None, None, None);
        assert!(result[0].url.contains("gdpr=1&gdpr_consent=CPc%2FAB%2Bx&"));
    }

    #[test]
    fn gdpr_without_string_sends_empty_consent() {
        let gdpr = GdprConsent {
            gdpr_applies: None,
            consent_string: None,
        };
        let result = syncs(iframe(), Some(&gdpr), None, None, None);
        assert!(result[0].url.contains("gdpr=0&gdpr_consent=&"));
    }

    #[test]
    fn gpp_requires_both_string_and_sections() {
        let incomplete = GppConsent {
            gpp_string: Some("X".into()),
            applicable_sections: vec![],
        };
        let result = syncs(iframe(), None, None, Some(&incomplete), None);
        assert!(!result[0].url.contains("gpp="));
        assert!(!result[0].url.contains("gpp_sid="));

        let complete = GppConsent {
            gpp_string: Some("DBABMA~X".into()),
            applicable_sections: vec![7, 8],
        };
        let result = syncs(iframe(), None, None, Some(&complete), None);
        assert!(result[0].url.contains("gpp=DBABMA~X") || result[0].url.contains("gpp=DBABMA%7EX"));
        assert!(result[0].url.contains("gpp_sid=7%2C8"));
    }

    #[test]
    fn partner_params_appear_independently() {
        let params = SyncParams {
            ssp_id: Some("101".into()),
            site_id: None,
            user_id: Some("u-9".into()),
        };
        let result = syncs(iframe(), None, None, None, Some(&params));
        assert!(result[0].url.contains("ssp_id=101&ssp_user_id=u-9"));
        assert!(!result[0].url.contains("ssp_site_id"));
    }

    #[test]
    fn full_signal_set_keeps_fixed_parameter_order() {
        let gdpr = GdprConsent {
            gdpr_applies: Some(true),
            consent_string: Some("CONSENT".into()),
        };
        let gpp = GppConsent {
            gpp_string: Some("GPP".into()),
            applicable_sections: vec![6],
        };
        let params = SyncParams {
            ssp_id: Some("101".into()),
            site_id: Some("7".into()),
            user_id: Some("u".into()),
        };
        let result = syncs(iframe(), Some(&gdpr), Some("1YNN"), Some(&gpp), Some(&params));
        assert_eq!(
            result[0].url,
            "https://ssp.rust-adx.com/openrtb/sync?\
             gdpr=1&gdpr_consent=CONSENT&us_privacy=1YNN&gpp=GPP&gpp_sid=6\
             &ssp_id=101&ssp_site_id=7&ssp_user_id=u&iframe_enabled=true"
        );
    }

    #[test]
    fn no_signals_and_no_params_is_just_the_flag() {
        let result = syncs(iframe(), None, None, None, None);
        assert_eq!(
            result[0].url,
            "https://ssp.rust-adx.com/openrtb/sync?iframe_enabled=true"
        );
    }
}
