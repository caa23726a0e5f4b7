//! Heuristic extraction of structured fields from generated prose.
//!
//! Model output format is not guaranteed, so every field is extracted by an
//! ordered table of patterns with first-match-wins semantics and degrades
//! to a safe sentinel default rather than failing the request. A malformed
//! generation still produces a usable, storable recipe with the full raw
//! text intact for human reading.
//!
//! [`parse`] is total and pure: any input — including the empty string —
//! yields a [`ParsedFields`] within its declared bounds, and identical
//! input always yields identical output.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::rules::{compile, first_accepted};

/// Sentinel title used when no pattern and no fallback line qualifies.
pub const DEFAULT_TITLE: &str = "AI Generated Recipe";
/// Sentinel cooking time used when no duration is found.
pub const DEFAULT_COOKING_TIME: &str = "Not specified";
/// Default number of servings.
pub const DEFAULT_SERVINGS: u32 = 2;
/// Upper bound on extracted title length, in characters.
pub const MAX_TITLE_CHARS: usize = 100;

/// The three fields derived from one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFields {
    /// Non-empty, at most [`MAX_TITLE_CHARS`] characters.
    pub title: String,
    /// Used verbatim as captured; free-form.
    pub cooking_time: String,
    /// Always within `1..=99`.
    pub servings: u32,
}

impl Default for ParsedFields {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            cooking_time: DEFAULT_COOKING_TIME.to_owned(),
            servings: DEFAULT_SERVINGS,
        }
    }
}

// Ordered by reliability: explicit labels first, loose phrasing last.
static TITLE_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)(?:recipe\s*title|title):\s*(.+)",
        r"(?m)^#+\s*(.+)",
        r"(?m)^\*\*(.+?)\*\*",
        r"(?im)^recipe:\s*(.+)",
        r"(?im)^(.+?)\s*recipe\s*$",
        r#"(?m)^"(.+?)""#,
        r"(?m)^[‘’'](.+?)[‘’']",
    ])
});

static TIME_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)(?:cooking\s*time|prep\s*time|total\s*time|time|duration):\s*(\d+\s*(?:minutes?|mins?|hours?|hrs?|h))",
        r"(?i)(\d+)\s*(?:minutes?|mins?)\s*(?:cooking|preparation|total)",
        r"(?i)(?:takes?|requires?)?\s*(?:about|approximately)?\s*(\d+)\s*(?:minutes?|mins?|hours?|hrs?)",
        r"(?i)(\d+[-–]\d+)\s*(?:minutes?|mins?)",
    ])
});

static SERVINGS_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)(?:servings?|serves?|portions?):\s*(\d+)",
        r"(?i)(?:makes?|yields?):\s*(\d+)\s*(?:servings?|portions?)",
        r"(?i)(\d+)\s*(?:people|persons?|servings?)",
        r"(?i)for\s*(\d+)\s*people",
    ])
});

static LEADING_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*#:\d.\-]+").expect("invalid extraction pattern"));

/// Extract title, cooking time and servings from cleaned prose.
pub fn parse(text: &str) -> ParsedFields {
    let title = first_accepted(TITLE_RULES.as_slice(), text, tidy_title)
        .or_else(|| fallback_title(text))
        .unwrap_or_else(|| DEFAULT_TITLE.to_owned());

    let cooking_time = first_accepted(TIME_RULES.as_slice(), text, |capture| {
        Some(capture.trim().to_owned())
    })
    .unwrap_or_else(|| DEFAULT_COOKING_TIME.to_owned());

    let servings = first_accepted(SERVINGS_RULES.as_slice(), text, in_serving_range)
        .unwrap_or(DEFAULT_SERVINGS);

    debug!(%title, %cooking_time, servings, "parsed recipe fields");

    ParsedFields {
        title,
        cooking_time,
        servings,
    }
}

/// Trim the capture, drop stray markdown/quote/label punctuation, and cap
/// the length. A capture that is nothing but punctuation is rejected so the
/// search continues — the title invariant is "non-empty".
fn tidy_title(capture: &str) -> Option<String> {
    let cleaned: String = capture
        .trim()
        .chars()
        .filter(|c| !matches!(c, '*' | '#' | ':' | '"' | '\''))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    Some(cleaned.chars().take(MAX_TITLE_CHARS).collect())
}

/// Use the first non-blank line as the title, but only when it looks like
/// one: between 5 and 100 characters once leading bullet/number markers are
/// stripped.
fn fallback_title(text: &str) -> Option<String> {
    let first_line = text.lines().map(str::trim).find(|line| !line.is_empty())?;
    let stripped = LEADING_MARKERS.replace(first_line, "");
    let stripped = stripped.trim();
    let len = stripped.chars().count();
    (len > 5 && len < 100).then(|| stripped.to_owned())
}

/// Accept a servings capture only when it parses into the sane range;
/// anything else falls through to the next rule.
fn in_serving_range(capture: &str) -> Option<u32> {
    capture
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| (1..100).contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_sections_parse_exactly() {
        let fields = parse("Recipe Title: Tomato Scramble\nCooking Time: 15 minutes\nServings: 2");
        assert_eq!(fields.title, "Tomato Scramble");
        assert_eq!(fields.cooking_time, "15 minutes");
        assert_eq!(fields.servings, 2);
    }

    #[test]
    fn totality_on_arbitrary_input() {
        for text in ["", "   \n\t", "no structure at all", "🍅🍳", "1234"] {
            let fields = parse(text);
            assert!(!fields.title.is_empty());
            assert!(fields.title.chars().count() <= MAX_TITLE_CHARS);
            assert!(!fields.cooking_time.is_empty());
            assert!((1..100).contains(&fields.servings));
        }
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "## Midnight Ramen\nTakes about 25 minutes. Serves: 3";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn empty_input_keeps_every_sentinel() {
        assert_eq!(parse(""), ParsedFields::default());
    }

    #[test]
    fn title_from_markdown_heading() {
        let fields = parse("# Spicy Lentil Stew\nA warming dish.");
        assert_eq!(fields.title, "Spicy Lentil Stew");
    }

    #[test]
    fn title_from_bold_line() {
        let fields = parse("**Garlic Butter Noodles**\nBoil the noodles.");
        assert_eq!(fields.title, "Garlic Butter Noodles");
    }

    #[test]
    fn title_from_recipe_label() {
        let fields = parse("Recipe: Coconut Curry\nSimmer gently.");
        assert_eq!(fields.title, "Coconut Curry");
    }

    #[test]
    fn title_from_line_ending_in_recipe() {
        let fields = parse("Grandma's Apple Pie Recipe\nRoll the dough.");
        // stray punctuation is stripped from the capture
        assert_eq!(fields.title, "Grandmas Apple Pie");
    }

    #[test]
    fn title_from_quoted_span() {
        let fields = parse("\"Midnight Ramen\"\nQuick weeknight dinner.");
        assert_eq!(fields.title, "Midnight Ramen");
    }

    #[test]
    fn long_titles_are_truncated() {
        let long = "x".repeat(300);
        let fields = parse(&format!("Title: {long}"));
        assert_eq!(fields.title.chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn fallback_uses_a_plausible_first_line() {
        let fields = parse("Hearty Bean Chili\nBrown the onions first.");
        assert_eq!(fields.title, "Hearty Bean Chili");
    }

    #[test]
    fn fallback_rejects_too_short_lines() {
        let fields = parse("Stew\nSome instructions follow here.");
        assert_eq!(fields.title, DEFAULT_TITLE);
    }

    #[test]
    fn fallback_strips_leading_list_markers() {
        let fields = parse("1. Creamy Mushroom Orzo\nThen the steps.");
        assert_eq!(fields.title, "Creamy Mushroom Orzo");
    }

    #[test]
    fn cooking_time_prefers_labeled_durations() {
        let fields = parse("Total Time: 45 minutes\nReady in 10 minutes if rushed.");
        assert_eq!(fields.cooking_time, "45 minutes");
    }

    #[test]
    fn cooking_time_from_qualified_duration() {
        let fields = parse("Allow 20 minutes cooking and you're done.");
        assert_eq!(fields.cooking_time, "20");
    }

    #[test]
    fn cooking_time_from_loose_phrasing() {
        let fields = parse("This dish takes about 25 minutes overall.");
        assert_eq!(fields.cooking_time, "25");
    }

    #[test]
    fn loose_duration_outranks_the_range_rule() {
        // ordered evaluation: the loose rule sees the tail of the range first
        let fields = parse("Bake for 30-40 minutes until golden.");
        assert_eq!(fields.cooking_time, "40");
    }

    #[test]
    fn missing_duration_keeps_the_sentinel() {
        let fields = parse("Combine everything and enjoy.");
        assert_eq!(fields.cooking_time, DEFAULT_COOKING_TIME);
    }

    #[test]
    fn servings_from_labels_and_phrases() {
        assert_eq!(parse("Servings: 4").servings, 4);
        assert_eq!(parse("Serves: 6").servings, 6);
        assert_eq!(parse("Yields: 8 servings").servings, 8);
        assert_eq!(parse("Enough for 3 people.").servings, 3);
    }

    #[test]
    fn out_of_range_servings_fall_through_to_later_rules() {
        let fields = parse("Servings: 0\nPerfect for 4 people.");
        assert_eq!(fields.servings, 4);
    }

    #[test]
    fn out_of_range_servings_without_backup_keep_the_default() {
        assert_eq!(parse("Servings: 150").servings, DEFAULT_SERVINGS);
        assert_eq!(parse("Servings: 0").servings, DEFAULT_SERVINGS);
    }
}
