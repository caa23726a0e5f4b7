//! Model identifiers used throughout the **forkful** workspace.
//!
//! The enum hierarchy keeps the *public* API simple while letting the
//! provider crate map variants onto its own naming scheme. Application code
//! never types a literal string such as
//! `"mistralai/Mistral-7B-Instruct-v0.3"` — pick an enum variant and let the
//! adapter translate it.
//!
//! # Adding more models
//!
//! 1. Add the variant to the provider-specific sub-enum.
//! 2. Update the mapping function in the provider crate
//!    (`forkful-huggingface::model_map`).
//! 3. The compiler will point out every match statement that needs the new
//!    variant.

/// Universal identifier for a hosted text-generation model.
///
/// * `Mistral` – enumerated list of officially supported Mistral models.
/// * `Custom` – any model path not yet covered by a dedicated enum; use this
///   for a self-hosted or experimental deployment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in Mistral instruction-tuned models.
    Mistral(MistralModel),
    /// Fully qualified `owner/model-name` path forwarded verbatim.
    Custom(&'static str),
}

impl Default for Model {
    fn default() -> Self {
        Model::Mistral(MistralModel::Mistral7bInstructV03)
    }
}

/// Models **officially** supported by the Hugging Face back-end.
///
/// Keeping the list small avoids accidental typos while still allowing
/// arbitrary model paths through [`Model::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MistralModel {
    Mistral7bInstructV03,
}

impl From<MistralModel> for Model {
    fn from(val: MistralModel) -> Self {
        Model::Mistral(val)
    }
}
