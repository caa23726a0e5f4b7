//! Wire types for the Hugging Face Inference text-generation endpoint.
//!
//! The request side is a plain serde mirror of the endpoint's JSON body.
//! The response side is where the endpoint gets awkward: depending on model
//! and routing it answers with a *list* of generation objects, a *single*
//! generation object, a bare string, or an object carrying an `error`
//! field — sometimes under a 200 status. [`InferencePayload`] models that
//! polymorphism as one untagged enum so it is resolved exactly once, at the
//! client boundary; everything downstream sees a single text value.

use forkful_core::error::{ForkfulError, Result};
use forkful_core::provider::GenerationParameters;
use serde::{Deserialize, Serialize};

/// Body of one text-generation request.
#[derive(Debug, Serialize, Clone)]
pub struct TextGenerationRequest {
    pub inputs: String,
    pub parameters: SamplingParameters,
    pub options: RequestOptions,
}

impl From<&GenerationParameters> for TextGenerationRequest {
    fn from(params: &GenerationParameters) -> Self {
        Self {
            inputs: params.prompt.clone(),
            parameters: SamplingParameters {
                max_new_tokens: params.max_new_tokens,
                temperature: params.temperature,
                top_p: params.top_p,
                top_k: params.top_k,
                repetition_penalty: params.repetition_penalty,
                do_sample: params.do_sample,
                return_full_text: params.return_full_text,
            },
            options: RequestOptions::default(),
        }
    }
}

/// Sampling knobs forwarded verbatim to the endpoint.
#[derive(Debug, Serialize, Clone)]
pub struct SamplingParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub repetition_penalty: f64,
    pub do_sample: bool,
    pub return_full_text: bool,
}

/// Endpoint-level options.
#[derive(Debug, Serialize, Clone)]
pub struct RequestOptions {
    pub use_cache: bool,
    pub wait_for_model: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        // always a fresh generation; ride out cold model loads instead of
        // failing immediately
        Self {
            use_cache: false,
            wait_for_model: true,
        }
    }
}

/// One generation object as returned by the endpoint.
#[derive(Debug, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

/// An error object the endpoint may return in place of a generation.
#[derive(Debug, Deserialize)]
pub struct ApiFailure {
    pub error: String,
    pub estimated_time: Option<f64>,
}

/// Every payload shape the endpoint is known to produce on a 2xx status.
///
/// Variant order matters: serde tries them top to bottom, and an object
/// with both `generated_text` and extra fields must resolve as a
/// generation, not a failure.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InferencePayload {
    Sequence(Vec<GeneratedText>),
    Single(GeneratedText),
    Failure(ApiFailure),
    Raw(String),
}

impl InferencePayload {
    /// Resolve the polymorphism into the generated text.
    ///
    /// # Errors
    ///
    /// * [`ForkfulError::RemoteFailure`] for an `error`-carrying payload,
    ///   regardless of the transport status that delivered it.
    /// * [`ForkfulError::UnexpectedPayload`] when no text is present, e.g.
    ///   an empty sequence.
    pub fn into_text(self) -> Result<String> {
        match self {
            InferencePayload::Sequence(items) => items
                .into_iter()
                .next()
                .map(|generation| generation.generated_text)
                .ok_or(ForkfulError::UnexpectedPayload),
            InferencePayload::Single(generation) => Ok(generation.generated_text),
            InferencePayload::Failure(failure) => Err(ForkfulError::RemoteFailure(failure.error)),
            InferencePayload::Raw(text) => Ok(text),
        }
    }
}
