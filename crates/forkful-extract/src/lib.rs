//! Turns raw model output into clean prose and structured fields.
//!
//! Two stages, both operating on untrusted free text:
//!
//! * [`clean`] — strips model control tokens and rejects blank generations.
//! * [`parse`] — best-effort extraction of title, cooking time and servings
//!   with deterministic sentinel fallbacks; it never fails.

pub mod clean;
pub mod fields;
mod rules;

pub use clean::clean;
pub use fields::{ParsedFields, parse};
