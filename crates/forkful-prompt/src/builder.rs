//! Builder-style helper for constructing **plain-text prompts**.
//!
//! Writing multi-line instruction strings inline is tedious and error-prone.
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of the formatting. Every method returns `self`, enabling
//! call-chaining:
//!
//! ```rust
//! use forkful_prompt::builder::PromptBuilder;
//!
//! let text = PromptBuilder::new()
//!     .add_line("Please provide:")
//!     .add_numbered(1, "Recipe Title")
//!     .add_numbered(2, "Servings")
//!     .finalize();
//!
//! assert!(text.starts_with("Please provide:"));
//! ```
//!
//! The builder performs **no validation** besides `expect`ing that writing
//! to the internal `String` never fails (which it shouldn't). It also
//! refrains from smart-formatting to stay predictable — newlines and
//! whitespace are emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce prompt text.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you're done, call [`Self::finalize`] to obtain the assembled text.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a labeled value line: `Key: Value`.
    pub fn add_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "{key}: {value}").expect("failed to write buffer");
        self
    }

    /// Add a numbered list item: `1. Item`.
    pub fn add_numbered(mut self, index: usize, line: impl Display) -> Self {
        writeln!(self.buffer, "{index}. {line}").expect("failed to write buffer");
        self
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
