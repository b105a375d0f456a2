// src/adapter/response.rs

use serde_json::Value;

use crate::adapter::ServerResponse;
use crate::config;
use crate::logging::diagnostics::{Diagnostic, DiagnosticsSink};
use crate::model::bid::{BidMeta, MediaType, NormalizedBid};
use crate::openrtb::request::BidRequest;
use crate::openrtb::response::BidRecord;

/// Maps an SSP reply to normalized bids: one bid per seat group, taken
/// from the first record of that group's `bid` array. Any shape the SSP
/// should not have sent degrades to fewer bids, never to an error.
pub(crate) fn interpret(
    response: &ServerResponse,
    _original_request: &BidRequest,
    diagnostics: &dyn DiagnosticsSink,
) -> Vec<NormalizedBid> {
    let Some(body) = response.body.as_ref() else {
        diagnostics.report(Diagnostic::EmptyResponseBody);
        return Vec::new();
    };

    let Some(seatbid) = body.get("seatbid").and_then(Value::as_array) else {
        diagnostics.report(Diagnostic::MalformedSeatBid);
        return Vec::new();
    };

    let currency = body
        .get("cur")
        .and_then(Value::as_str)
        .unwrap_or(config::DEFAULT_CURRENCY);

    let mut bids = Vec::new();
    for (seat_index, seat) in seatbid.iter().enumerate() {
        // A seat group whose `bid` is missing, not an array, or empty
        // simply contributes nothing.
        let Some(first) = seat
            .get("bid")
            .and_then(Value::as_array)
            .and_then(|records| records.first())
        else {
            continue;
        };

        let record: BidRecord = match serde_json::from_value(first.clone()) {
            Ok(record) => record,
            Err(_) => {
                diagnostics.report(Diagnostic::MalformedBidRecord { seat_index });
                continue;
            }
        };

        bids.push(normalize(record, currency, diagnostics));
    }

    bids
}

fn normalize(
    record: BidRecord,
    currency: &str,
    diagnostics: &dyn DiagnosticsSink,
) -> NormalizedBid {
    let media_type = match record.mtype {
        Some(1) => Some(MediaType::Banner),
        Some(2) => Some(MediaType::Video),
        Some(mtype) => {
            diagnostics.report(Diagnostic::UnknownMarkupType {
                impid: record.impid.clone(),
                mtype,
            });
            None
        }
        None => {
            diagnostics.report(Diagnostic::MissingMarkupType {
                impid: record.impid.clone(),
            });
            Some(MediaType::Banner)
        }
    };

    let vast_xml = (media_type == Some(MediaType::Video))
        .then(|| record.adm.clone())
        .flatten();

    NormalizedBid {
        request_id: record.impid,
        cpm: record.price,
        currency: currency.to_string(),
        width: record.w,
        height: record.h,
        ad: record.adm,
        creative_id: record.crid,
        net_revenue: true,
        ttl: config::DEFAULT_TTL_SECS,
        deal_id: record.dealid,
        media_type,
        vast_xml,
        meta: BidMeta {
            advertiser_domains: record.adomain.unwrap_or_default(),
        },
    }
}
