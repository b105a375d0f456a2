// src/adapter/request.rs

use crate::config;
use crate::model::context::AuctionContext;
use crate::model::request::DemandRequest;
use crate::model::sync::SyncParams;
use crate::openrtb::request::{
    Banner, BidRequest, Format, Imp, Regs, RequestExt, User, UserExt,
};

/// Builds the outbound bid request plus the sync parameters the host
/// carries forward into the sync-URL call.
pub(crate) fn build(
    requests: &[DemandRequest],
    context: &AuctionContext,
) -> (BidRequest, Option<SyncParams>) {
    let imp = requests.iter().map(build_imp).collect();

    let mut bid_request = BidRequest {
        imp,
        cur: vec![config::DEFAULT_CURRENCY.to_string()],
        tmax: context.timeout_ms,
        test: context.test.unwrap_or(0),
        ext: build_ext(requests),
        regs: None,
        user: None,
    };

    // A GDPR object being present forces both blocks onto the wire, even
    // when it carries neither applicability nor a consent string.
    if let Some(gdpr) = context.gdpr_consent.as_ref() {
        let regs = bid_request.regs.get_or_insert_with(Regs::default);
        regs.ext.gdpr = Some(i64::from(gdpr.gdpr_applies == Some(true)));
        bid_request.user = Some(User {
            ext: UserExt {
                consent: gdpr.consent_string.clone().unwrap_or_default(),
            },
        });
    }

    if let Some(usp) = context.usp_consent.as_deref().filter(|usp| !usp.is_empty()) {
        let regs = bid_request.regs.get_or_insert_with(Regs::default);
        regs.ext.us_privacy = Some(usp.to_string());
    }

    let sync_params = requests.first().map(|first| SyncParams {
        ssp_id: first.params.ssp_id.clone(),
        site_id: first.params.site_id.clone(),
        user_id: first
            .params
            .ssp_user_id
            .clone()
            .or_else(|| context.user_id.clone()),
    });

    (bid_request, sync_params)
}

/// One impression per demand request. A banner declaration wins over a
/// video declaration when the request carries both.
fn build_imp(request: &DemandRequest) -> Imp {
    let mut imp = Imp {
        id: request.id.clone(),
        bidfloor: request.params.bidfloor.filter(|floor| *floor != 0.0),
        banner: None,
        video: None,
    };

    if let Some(banner) = request.media_types.banner.as_ref() {
        imp.banner = Some(Banner {
            format: banner
                .sizes
                .iter()
                .map(|&(w, h)| Format { w, h })
                .collect(),
        });
    } else if let Some(video) = request.media_types.video.as_ref() {
        imp.video = Some(video.clone());
    }

    imp
}

/// The extension sub-fields each scan the whole batch independently,
/// first match wins. Deliberately broader than the sync-parameter
/// extraction, which only ever looks at the first request.
fn build_ext(requests: &[DemandRequest]) -> RequestExt {
    let non_empty = |value: &Option<String>| {
        value
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    RequestExt {
        test: requests
            .iter()
            .any(|request| request.params.test_mode == Some(1))
            .then_some(1),
        ssp_id: requests
            .iter()
            .find_map(|request| non_empty(&request.params.ssp_id)),
        site_id: requests
            .iter()
            .find_map(|request| non_empty(&request.params.site_id)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::context::GdprConsent;
    use crate::model::request::{BannerSpec, MediaTypes, PartnerParams, VideoSpec};

    fn banner_demand(id: &str) -> DemandRequest {
        DemandRequest {
            id: id.into(),
            media_types: MediaTypes {
                banner: Some(BannerSpec {
                    sizes: vec![(300, 250)],
                }),
                video: None,
            },
            ..DemandRequest::default()
        }
    }

    fn video_spec() -> VideoSpec {
        let mut extra = serde_json::Map::new();
        extra.insert("minduration".into(), json!(5));
        extra.insert("startdelay".into(), json!(0));
        VideoSpec {
            mimes: Some(vec!["video/mp4".into()]),
            w: Some(640),
            h: Some(480),
            extra,
        }
    }

    #[test]
    fn impressions_preserve_order_and_ids() {
        let requests = vec![banner_demand("a"), banner_demand("b"), banner_demand("c")];
        let (bid_request, _) = build(&requests, &AuctionContext::default());
        let ids: Vec<_> = bid_request.imp.iter().map(|imp| imp.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn banner_wins_over_video_on_the_same_request() {
        let mut request = banner_demand("a");
        request.media_types.video = Some(video_spec());
        let (bid_request, _) = build(&[request], &AuctionContext::default());

        let imp = &bid_request.imp[0];
        assert!(imp.banner.is_some());
        assert!(imp.video.is_none());
    }

    #[test]
    fn video_spec_passes_through_verbatim() {
        let request = DemandRequest {
            id: "v".into(),
            media_types: MediaTypes {
                banner: None,
                video: Some(video_spec()),
            },
            ..DemandRequest::default()
        };
        let (bid_request, _) = build(&[request], &AuctionContext::default());

        assert_eq!(
            serde_json::to_value(&bid_request.imp[0]).expect("serializes"),
            json!({
                "id": "v",
                "video": {
                    "mimes": ["video/mp4"],
                    "w": 640,
                    "h": 480,
                    "minduration": 5,
                    "startdelay": 0
                }
            })
        );
    }

    #[test]
    fn zero_bidfloor_is_dropped() {
        let mut request = banner_demand("a");
        request.params.bidfloor = Some(0.0);
        let (bid_request, _) = build(&[request], &AuctionContext::default());
        assert!(bid_request.imp[0].bidfloor.is_none());

        let mut request = banner_demand("a");
        request.params.bidfloor = Some(1.25);
        let (bid_request, _) = build(&[request], &AuctionContext::default());
        assert_eq!(bid_request.imp[0].bidfloor, Some(1.25));
    }

    #[test]
    fn no_consent_means_no_regs_and_no_user_keys() {
        let (bid_request, _) = build(&[banner_demand("a")], &AuctionContext::default());
        let value = serde_json::to_value(&bid_request).expect("serializes");
        let obj = value.as_object().expect("object");
        assert!(!obj.contains_key("regs"));
        assert!(!obj.contains_key("user"));
    }

    #[test]
    fn gdpr_object_without_consent_string_serializes_empty_consent() {
        let context = AuctionContext {
            gdpr_consent: Some(GdprConsent {
                gdpr_applies: Some(true),
                consent_string: None,
            }),
            ..AuctionContext::default()
        };
        let (bid_request, _) = build(&[banner_demand("a")], &context);
        let value = serde_json::to_value(&bid_request).expect("serializes");
        assert_eq!(value["regs"]["ext"]["gdpr"], json!(1));
        assert_eq!(value["user"]["ext"]["consent"], json!(""));
    }

    #[test]
    fn gdpr_not_applicable_serializes_zero() {
        let context = AuctionContext {
            gdpr_consent: Some(GdprConsent {
                gdpr_applies: Some(false),
                consent_string: Some("CPc".into()),
            }),
            ..AuctionContext::default()
        };
        let (bid_request, _) = build(&[], &context);
        let regs = bid_request.regs.expect("regs present");
        assert_eq!(regs.ext.gdpr, Some(0));
        assert_eq!(bid_request.user.expect("user present").ext.consent, "CPc");
    }

    #[test]
    fn usp_alone_creates_regs_block() {
        let context = AuctionContext {
            usp_consent: Some("1YNN".into()),
            ..AuctionContext::default()
        };
        let (bid_request, _) = build(&[], &context);
        let regs = bid_request.regs.expect("regs present");
        assert_eq!(regs.ext.us_privacy.as_deref(), Some("1YNN"));
        assert_eq!(regs.ext.gdpr, None);
        assert!(bid_request.user.is_none());
    }

    #[test]
    fn empty_usp_string_is_ignored() {
        let context = AuctionContext {
            usp_consent: Some(String::new()),
            ..AuctionContext::default()
        };
        let (bid_request, _) = build(&[], &context);
        assert!(bid_request.regs.is_none());
    }

    #[test]
    fn ext_scans_the_whole_batch_first_match_wins() {
        let mut first = banner_demand("a");
        first.params.site_id = Some("site-1".into());
        let mut second = banner_demand("b");
        second.params.ssp_id = Some(String::new()); // empty, skipped
        second.params.test_mode = Some(1);
        let mut third = banner_demand("c");
        third.params.ssp_id = Some("101".into());
        third.params.site_id = Some("site-2".into());

        let (bid_request, _) = build(&[first, second, third], &AuctionContext::default());
        assert_eq!(bid_request.ext.test, Some(1));
        assert_eq!(bid_request.ext.ssp_id.as_deref(), Some("101"));
        assert_eq!(bid_request.ext.site_id.as_deref(), Some("site-1"));
    }

    #[test]
    fn sync_params_come_from_the_first_request_only() {
        let mut first = banner_demand("a");
        first.params.ssp_id = Some("101".into());
        let mut second = banner_demand("b");
        second.params.ssp_id = Some("202".into());
        second.params.site_id = Some("site-2".into());
        second.params.ssp_user_id = Some("u2".into());

        let (_, sync_params) = build(&[first, second], &AuctionContext::default());
        let sync_params = sync_params.expect("params for non-empty batch");
        assert_eq!(sync_params.ssp_id.as_deref(), Some("101"));
        assert_eq!(sync_params.site_id, None);
        assert_eq!(sync_params.user_id, None);
    }

    #[test]
    fn partner_user_id_outranks_first_party_id() {
        let mut request = banner_demand("a");
        request.params.ssp_user_id = Some("A".into());
        let context = AuctionContext {
            user_id: Some("B".into()),
            ..AuctionContext::default()
        };
        let (_, sync_params) = build(&[request], &context);
        assert_eq!(sync_params.expect("params").user_id.as_deref(), Some("A"));

        let context = AuctionContext {
            user_id: Some("B".into()),
            ..AuctionContext::default()
        };
        let (_, sync_params) = build(&[banner_demand("a")], &context);
        assert_eq!(sync_params.expect("params").user_id.as_deref(), Some("B"));
    }

    #[test]
    fn empty_batch_yields_formed_request_and_no_sync_params() {
        let context = AuctionContext {
            timeout_ms: Some(750),
            test: Some(1),
            ..AuctionContext::default()
        };
        let (bid_request, sync_params) = build(&[], &context);
        assert!(bid_request.imp.is_empty());
        assert_eq!(bid_request.cur, vec!["USD".to_string()]);
        assert_eq!(bid_request.tmax, Some(750));
        assert_eq!(bid_request.test, 1);
        assert!(sync_params.is_none());
    }
}
