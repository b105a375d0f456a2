// src/adapter/validate.rs

use crate::logging::diagnostics::{Diagnostic, DiagnosticsSink};
use crate::model::request::DemandRequest;

/// Decides whether a demand request is eligible for auction submission.
///
/// Only video declarations carry constraints: `mimes` must be a non-empty
/// list, and a dimension that is supplied must be positive. A null
/// dimension means "unspecified" and is fine. Banner-only requests, and
/// requests declaring no media types at all, are always eligible.
pub(crate) fn is_demand_valid(request: &DemandRequest, diagnostics: &dyn DiagnosticsSink) -> bool {
    let Some(video) = request.media_types.video.as_ref() else {
        return true;
    };

    let has_mimes = video.mimes.as_ref().is_some_and(|mimes| !mimes.is_empty());
    if !has_mimes {
        diagnostics.report(Diagnostic::MissingVideoMimes {
            request_id: request.id.clone(),
        });
        return false;
    }

    for (field, value) in [("w", video.w), ("h", video.h)] {
        if let Some(value) = value {
            if value <= 0 {
                diagnostics.report(Diagnostic::InvalidVideoDimension {
                    request_id: request.id.clone(),
                    field,
                    value,
                });
                return false;
            }
        }
    }

    true
}
