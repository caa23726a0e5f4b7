//! Normalizes raw model output into plain prose.
//!
//! Instruction-tuned models regularly echo their delimiter tokens back into
//! the generated text. [`clean`] strips every occurrence of the four
//! control tokens and trims the result; a generation that is nothing *but*
//! tokens and whitespace is a terminal failure for the request — there is
//! no recipe to store.

use forkful_core::error::{ForkfulError, Result};
use forkful_prompt::mistral::CONTROL_TOKENS;

/// Strip control tokens and surrounding whitespace from `raw`.
///
/// # Errors
///
/// [`ForkfulError::EmptyGeneration`] when nothing readable remains.
pub fn clean(raw: &str) -> Result<String> {
    let mut text = raw.to_owned();
    for token in CONTROL_TOKENS {
        text = text.replace(token, "");
    }

    let text = text.trim();
    if text.is_empty() {
        return Err(ForkfulError::EmptyGeneration);
    }

    Ok(text.to_owned())
}
