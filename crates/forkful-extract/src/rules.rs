//! First-match-wins evaluation over an ordered regex table.
//!
//! Field extraction policy is kept as *data* — an ordered list of patterns
//! per field — rather than a chain of conditionals, so each rule can be
//! audited and tested on its own and reordering the policy is a one-line
//! change.

use regex::Regex;

/// Compile an ordered pattern table. Panics on an invalid pattern, which is
/// a programming error in this crate, not an input condition.
pub(crate) fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("invalid extraction pattern"))
        .collect()
}

/// Apply `rules` in order against `text`.
///
/// For each rule, only its first match is considered; the first capture
/// group is offered to `accept`. A rule that does not match — or whose
/// capture `accept` rejects — falls through to the next rule. Returns the
/// first accepted value, if any.
pub(crate) fn first_accepted<T>(
    rules: &[Regex],
    text: &str,
    accept: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    rules
        .iter()
        .filter_map(|rule| rule.captures(text))
        .filter_map(|captures| captures.get(1))
        .find_map(|capture| accept(capture.as_str()))
}
