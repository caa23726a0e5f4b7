//! Maps remote status codes onto the crate error taxonomy.
//!
//! The mapping is a lookup table rather than inline branching so a new
//! remote error code is one table entry, and the table itself documents
//! the remote contract at a glance.

use forkful_core::error::ForkfulError;
use reqwest::StatusCode;
use serde::Deserialize;

/// Cold-load wait hint applied when the service omits `estimated_time`,
/// in seconds.
pub const DEFAULT_LOADING_WAIT_SECS: u64 = 20;

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    ServerError,
    Loading,
}

const STATUS_TABLE: &[(u16, StatusKind)] = &[
    (401, StatusKind::Unauthorized),
    (403, StatusKind::Forbidden),
    (404, StatusKind::NotFound),
    (429, StatusKind::RateLimited),
    (500, StatusKind::ServerError),
    (503, StatusKind::Loading),
];

/// Subset of the error body consulted for the 503 wait hint. Kept separate
/// from [`crate::api::ApiFailure`] so a body with only `estimated_time`
/// still parses.
#[derive(Debug, Deserialize)]
struct LoadingHint {
    estimated_time: Option<f64>,
}

/// Subset of the error body consulted for diagnostic detail.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    error: String,
}

/// Classify a non-success response into a [`ForkfulError`].
pub(crate) fn classify_status(status: StatusCode, body: &str, model_path: &str) -> ForkfulError {
    let kind = STATUS_TABLE
        .iter()
        .find(|(code, _)| *code == status.as_u16())
        .map(|(_, kind)| *kind);

    match kind {
        Some(StatusKind::Unauthorized) => ForkfulError::InvalidAccessToken,
        Some(StatusKind::Forbidden) => ForkfulError::AccessDenied,
        Some(StatusKind::NotFound) => ForkfulError::ModelNotFound {
            model: model_path.to_owned(),
        },
        Some(StatusKind::RateLimited) => ForkfulError::RateLimited,
        Some(StatusKind::ServerError) => ForkfulError::UpstreamServerError,
        Some(StatusKind::Loading) => {
            let estimated = serde_json::from_str::<LoadingHint>(body)
                .ok()
                .and_then(|hint| hint.estimated_time)
                .unwrap_or(DEFAULT_LOADING_WAIT_SECS as f64);
            ForkfulError::ModelLoading {
                estimated_wait_secs: estimated.max(0.0).ceil() as u64,
            }
        }
        None => {
            let detail = serde_json::from_str::<ErrorDetail>(body)
                .map(|detail| detail.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_owned()
                });
            ForkfulError::UnexpectedStatus {
                status: status.as_u16(),
                detail,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(status: u16, body: &str) -> ForkfulError {
        classify_status(
            StatusCode::from_u16(status).unwrap(),
            body,
            "mistralai/Mistral-7B-Instruct-v0.3",
        )
    }

    #[test]
    fn every_documented_code_maps_to_its_kind() {
        assert!(matches!(
            classify(401, ""),
            ForkfulError::InvalidAccessToken
        ));
        assert!(matches!(classify(403, ""), ForkfulError::AccessDenied));
        assert!(matches!(
            classify(404, ""),
            ForkfulError::ModelNotFound { model } if model.contains("Mistral-7B")
        ));
        assert!(matches!(classify(429, ""), ForkfulError::RateLimited));
        assert!(matches!(
            classify(500, ""),
            ForkfulError::UpstreamServerError
        ));
    }

    #[test]
    fn loading_responses_carry_the_reported_wait() {
        assert!(matches!(
            classify(503, r#"{"error": "Model is loading", "estimated_time": 35.0}"#),
            ForkfulError::ModelLoading {
                estimated_wait_secs: 35
            }
        ));
    }

    #[test]
    fn loading_responses_default_the_wait_when_absent() {
        assert!(matches!(
            classify(503, r#"{"error": "Model is loading"}"#),
            ForkfulError::ModelLoading {
                estimated_wait_secs: 20
            }
        ));
        assert!(matches!(
            classify(503, "not even json"),
            ForkfulError::ModelLoading {
                estimated_wait_secs: 20
            }
        ));
    }

    #[test]
    fn unknown_codes_become_unexpected_status_with_detail() {
        assert!(matches!(
            classify(418, r#"{"error": "teapot"}"#),
            ForkfulError::UnexpectedStatus { status: 418, detail } if detail == "teapot"
        ));
        assert!(matches!(
            classify(502, ""),
            ForkfulError::UnexpectedStatus { status: 502, detail } if detail == "Bad Gateway"
        ));
    }
}
