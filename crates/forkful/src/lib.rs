//! # `forkful` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate                     | What it provides                                                              |
//! |---------------------------|-------------------------------------------------------------------------------|
//! | **`forkful-core`**        | Error taxonomy, domain model, provider + store traits, in-memory store        |
//! | **`forkful-prompt`**      | Fluent prompt builder, Mistral instruction conventions, the recipe prompt     |
//! | **`forkful-extract`**     | Control-token cleanup and heuristic title/time/servings extraction            |
//! | **`forkful-huggingface`** | HTTP adapter for the Hugging Face Inference API *(optional)*                  |
//!
//! On top of the re-exports it contributes the one piece that needs all of
//! them at once: [`RecipeService`], the orchestration pipeline.
//!
//! By default the `huggingface` feature is enabled so a single dependency
//! line is enough to access the whole stack; disable default features to
//! stay provider-agnostic and plug in your own
//! [`TextGenerationProvider`](provider::TextGenerationProvider).
//!
//! ## Design philosophy
//!
//! * **Opt-in provider** – disabling `huggingface` drops `reqwest`, TLS and
//!   friends from your binary.
//! * **No procedural macros** – everything is powered by ordinary traits
//!   and `impl`s so you can understand and extend the code without magic.
//! * **Total extraction** – generated text is untrusted; field extraction
//!   always produces a storable artifact, falling back to sentinels rather
//!   than failing a request over formatting.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use forkful::request::GenerationRequest;
//! use forkful::recipe::UserId;
//! use forkful::service::RecipeService;
//! use forkful::store::InMemoryRecipeStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = forkful::huggingface::HuggingFaceAdapterBuilder::new_from_env().build()?;
//!     let service = RecipeService::new(backend, InMemoryRecipeStore::new());
//!
//!     let recipe = service
//!         .generate(UserId::new(), GenerationRequest::new(["tomato", "egg"]))
//!         .await?;
//!     println!("{}: {}", recipe.title, recipe.cooking_time);
//!     Ok(())
//! }
//! ```

pub use forkful_core::*;
pub use forkful_extract as extract;
pub use forkful_prompt as prompt;

#[cfg(feature = "huggingface")]
pub use forkful_huggingface as huggingface;

pub mod service;

pub use service::{RecipeService, RegenerateOptions};
