//! Minimal HTTP client for the Hugging Face Inference text-generation
//! endpoint.
//!
//! * Non-streaming only (one request ▶ one response).
//! * Shares a single `reqwest::Client`, so cloning `HfInferenceClient` is
//!   cheap and concurrent generations draw from one connection pool
//!   without serializing on each other.
//! * Every transport and status failure leaves this module already mapped
//!   into the crate error taxonomy.

use std::time::Duration;

use forkful_core::error::{ForkfulError, Result};
use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::{debug, warn};

use crate::{
    api::{InferencePayload, TextGenerationRequest},
    status::classify_status,
};

const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/hf-inference/models";

/// Wall-clock budget for one generation call, cold model loads included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Clone)]
pub struct HfInferenceClient {
    access_token: String,
    http: HttpClient,
    base: String,
}

impl HfInferenceClient {
    /// Convenience constructor building a default `reqwest` client:
    /// 120 s timeout, Rustls TLS.
    pub fn new(access_token: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("building reqwest client");

        Self::with_http(access_token, http, None)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, a different timeout, etc.
    pub fn with_http(
        access_token: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    /// Point the client at a different inference host, e.g. a self-hosted
    /// TGI deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base = base_url.into();
        self
    }

    /// Perform one text generation against `model_path`.
    ///
    /// Returns the raw generated text with the payload polymorphism already
    /// resolved; see [`InferencePayload`].
    pub async fn text_generation(
        &self,
        model_path: &str,
        request: &TextGenerationRequest,
    ) -> Result<String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.access_token))
                .map_err(|_| ForkfulError::InvalidAccessToken)?,
        );
        headers.insert("x-use-cache", HeaderValue::from_static("false"));

        let url = format!("{}/{}", self.base, model_path);
        debug!(%url, "dispatching text generation");

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %body, "generation request failed");
            return Err(classify_status(status, &body, model_path));
        }

        let bytes = resp.bytes().await.map_err(transport_error)?;
        let payload: InferencePayload = serde_json::from_slice(&bytes).map_err(|err| {
            warn!(error = %err, "unrecognised generation payload");
            ForkfulError::UnexpectedPayload
        })?;

        payload.into_text()
    }
}

/// Split transport failures into the two kinds callers treat differently:
/// a blown deadline versus a service that was never reached.
fn transport_error(err: reqwest::Error) -> ForkfulError {
    if err.is_timeout() {
        ForkfulError::Timeout
    } else {
        warn!(error = %err, "transport failure reaching the generation service");
        ForkfulError::NetworkUnreachable
    }
}
