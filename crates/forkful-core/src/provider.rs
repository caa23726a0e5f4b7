//! The remote text-generation boundary.
//!
//! A **provider** turns a rendered prompt into a network call against a
//! concrete hosting service (Hugging Face Inference, a self-hosted TGI box,
//! …) and normalizes whatever comes back into a single raw-text value.
//!
//! The trait is intentionally minimal:
//!
//! * **One method** – `generate`, which performs a *single* non-streaming
//!   round-trip. No retries live here; retry policy is a caller decision.
//! * The method returns a [`Pin<Box<dyn Future>>`] so the trait stays
//!   object-safe without pulling in `async_trait`.

use std::{future::Future, pin::Pin};

use crate::{error::Result, model::Model};

/// Default maximum length of the generated text, in tokens.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 1000;
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// Default nucleus-sampling threshold.
pub const DEFAULT_TOP_P: f64 = 0.9;
/// Default top-k sampling cutoff.
pub const DEFAULT_TOP_K: u32 = 50;
/// Default repetition penalty.
pub const DEFAULT_REPETITION_PENALTY: f64 = 1.1;

/// A rendered prompt plus the sampling knobs for one generation call.
///
/// The defaults favour varied but coherent recipes: sampling enabled, a
/// mild repetition penalty, and no echo of the prompt in the output.
#[derive(Debug, Clone)]
pub struct GenerationParameters {
    pub prompt: String,
    pub model: Model,
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub repetition_penalty: f64,
    pub do_sample: bool,
    pub return_full_text: bool,
}

impl GenerationParameters {
    pub fn new(prompt: impl Into<String>, model: Model) -> Self {
        Self {
            prompt: prompt.into(),
            model,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
            repetition_penalty: DEFAULT_REPETITION_PENALTY,
            do_sample: true,
            return_full_text: false,
        }
    }

    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_repetition_penalty(mut self, repetition_penalty: f64) -> Self {
        self.repetition_penalty = repetition_penalty;
        self
    }
}

/// A back-end that executes one text generation per call.
///
/// Implementations must be safe to share across concurrent requests: each
/// call is independent and many may be in flight at once. The
/// implementation owns the wall-clock timeout on the remote call and maps
/// every transport or status failure into the crate error taxonomy, so
/// callers see one uniform contract.
pub trait TextGenerationProvider: Send + Sync {
    /// Execute the prompt and return the raw generated text.
    ///
    /// "Raw" means exactly what the remote service produced: model control
    /// tokens are still present and get stripped by the extraction stage,
    /// not here.
    fn generate<'p>(
        &'p self,
        params: GenerationParameters,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>>;
}
