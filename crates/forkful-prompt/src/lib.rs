//! Prompt construction for the **forkful** workspace: a fluent plain-text
//! builder plus the Mistral instruction conventions and the recipe prompt
//! itself.

pub mod builder;
pub mod mistral;

pub use builder::PromptBuilder;
pub use mistral::{CONTROL_TOKENS, RecipePrompt, wrap_instruction};
