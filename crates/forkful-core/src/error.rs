//! Unified error type exposed by **`forkful-core`**.
//!
//! Every stage of the generation pipeline — input validation, the remote
//! text-generation call, response cleanup and persistence — converts its
//! failures into one of these variants before bubbling them up to the
//! caller. This keeps the public API small while still telling the caller
//! exactly what went wrong and whether resubmitting can help.
//!
//! The `Display` strings are the user-facing messages. Raw remote payloads
//! are never part of them; diagnostic detail goes to `tracing` output
//! instead.

use std::time::Duration;

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ForkfulError>;

#[derive(Debug, Error)]
pub enum ForkfulError {
    /// The ingredient list was missing, or empty after trimming blanks.
    /// Caller input problem; resubmit with at least one real ingredient.
    #[error("please provide at least one non-empty ingredient")]
    EmptyIngredients,

    /// A difficulty string did not name a known level.
    #[error("unknown difficulty `{0}`, expected one of: easy, medium, hard")]
    InvalidDifficulty(String),

    /// The generation access token is not configured. Fatal for the whole
    /// deployment until an operator fixes the environment.
    #[error("generation access token is not configured")]
    MissingAccessToken,

    /// The remote service does not know the requested model identifier.
    #[error("model not found, verify the model identifier `{model}`")]
    ModelNotFound { model: String },

    /// The remote service rejected the configured credential.
    #[error("the generation service rejected the access token")]
    InvalidAccessToken,

    /// The credential is valid but not allowed to use this model, e.g. a
    /// license gate that has not been accepted.
    #[error("access to the model is denied, its license terms may not have been accepted")]
    AccessDenied,

    /// The model is cold-loading on the remote side. Carries the service's
    /// estimated wait before a retry is worthwhile.
    #[error("the model is still loading, retry in about {estimated_wait_secs} seconds")]
    ModelLoading { estimated_wait_secs: u64 },

    /// Too many requests; back off before resubmitting.
    #[error("rate limit exceeded, wait before making another request")]
    RateLimited,

    /// The remote service reported an internal fault.
    #[error("the generation service reported an internal error, try again shortly")]
    UpstreamServerError,

    /// A status code outside the known taxonomy.
    #[error("unexpected status {status} from the generation service: {detail}")]
    UnexpectedStatus { status: u16, detail: String },

    /// The request never reached the remote service.
    #[error("unable to reach the generation service")]
    NetworkUnreachable,

    /// The remote call exceeded the wall-clock budget.
    #[error("the generation request timed out")]
    Timeout,

    /// A transport-success response whose payload carried an `error` field.
    #[error("the generation service reported a failure: {0}")]
    RemoteFailure(String),

    /// A transport-success response matching none of the known payload
    /// shapes.
    #[error("the generation service returned an unrecognised payload")]
    UnexpectedPayload,

    /// The generated text was empty once control tokens were stripped.
    #[error("the model returned an empty generation")]
    EmptyGeneration,

    #[error("recipe not found")]
    RecipeNotFound,

    /// The recipe exists but belongs to a different user.
    #[error("not authorized to access this recipe")]
    NotRecipeOwner,

    /// Failure while serialising or deserialising JSON payloads.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of a persistence-layer error that doesn't fit
    /// another category.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl ForkfulError {
    /// Whether resubmitting the same request later can reasonably succeed.
    ///
    /// Input, configuration and credential problems are not retryable
    /// without intervention; transient remote and transport faults are.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ModelLoading { .. }
                | Self::RateLimited
                | Self::UpstreamServerError
                | Self::UnexpectedStatus { .. }
                | Self::NetworkUnreachable
                | Self::Timeout
        )
    }

    /// Suggested pause before a retry, when the remote service provided one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::ModelLoading {
                estimated_wait_secs,
            } => Some(Duration::from_secs(*estimated_wait_secs)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_errors_carry_a_retry_hint() {
        let err = ForkfulError::ModelLoading {
            estimated_wait_secs: 35,
        };
        assert!(err.is_retryable());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(35)));
    }

    #[test]
    fn credential_errors_are_not_retryable() {
        assert!(!ForkfulError::InvalidAccessToken.is_retryable());
        assert!(!ForkfulError::MissingAccessToken.is_retryable());
        assert!(ForkfulError::MissingAccessToken.retry_after().is_none());
    }

    #[test]
    fn messages_stay_human_readable() {
        let err = ForkfulError::ModelLoading {
            estimated_wait_secs: 20,
        };
        assert_eq!(
            err.to_string(),
            "the model is still loading, retry in about 20 seconds"
        );
    }
}
