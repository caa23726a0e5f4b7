use std::{env, sync::Arc};

use forkful_core::error::{ForkfulError, Result};

use crate::client::HfInferenceClient;

/// Environment variable holding the Hugging Face access token.
pub const ACCESS_TOKEN_ENV: &str = "HF_ACCESS_TOKEN";

/// Thin wrapper that wires the HTTP client [`HfInferenceClient`] into a
/// value implementing
/// [`forkful_core::provider::TextGenerationProvider`].
///
/// * stores the access token and optionally a custom base URL,
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * provides a fluent [`HuggingFaceAdapterBuilder`] so callers don't have
///   to juggle `Option<String>` manually.
///
/// The type itself purposefully exposes **no additional methods** — all
/// user-facing functionality sits on the service once the adapter is
/// plugged in.
pub struct HuggingFaceAdapter {
    pub(crate) client: Arc<HfInferenceClient>,
}

/// Builder for [`HuggingFaceAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use forkful_huggingface::HuggingFaceAdapterBuilder;
///
/// let backend = HuggingFaceAdapterBuilder::new_from_env()
///     .build()
///     .expect("HF_ACCESS_TOKEN must be set");
/// ```
///
/// The builder pattern keeps future options (proxy URL, organisation ID, …)
/// backwards compatible without breaking existing `build()` calls.
#[derive(Default)]
pub struct HuggingFaceAdapterBuilder {
    pub(crate) access_token: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl HuggingFaceAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an access token
    /// manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `HF_ACCESS_TOKEN`
    /// environment variable.
    ///
    /// Missing tokens only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            access_token: env::var(ACCESS_TOKEN_ENV).ok(),
            base_url: None,
        }
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Target a different inference host, e.g. a self-hosted deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`ForkfulError::MissingAccessToken`] — the fatal configuration
    ///   failure: without a credential no generation can ever succeed, so a
    ///   misconfigured deployment fails here, once, rather than per
    ///   request.
    pub fn build(self) -> Result<HuggingFaceAdapter> {
        let access_token = self.access_token.ok_or(ForkfulError::MissingAccessToken)?;

        let mut client = HfInferenceClient::new(access_token);
        if let Some(base_url) = self.base_url {
            client = client.with_base_url(base_url);
        }

        Ok(HuggingFaceAdapter {
            client: Arc::new(client),
        })
    }
}
