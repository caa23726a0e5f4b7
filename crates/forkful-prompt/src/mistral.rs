//! Mistral instruction-delimiter conventions and the recipe prompt.
//!
//! Instruction-tuned Mistral models expect the user message wrapped in the
//! `<s>[INST] … [/INST]` marker convention. The same four tokens tend to
//! leak back into generated output, so they are exported as
//! [`CONTROL_TOKENS`] for the extraction stage to strip.
//!
//! [`RecipePrompt`] renders the single fixed instruction block the whole
//! pipeline is built around: the ingredient list, cuisine and difficulty,
//! and the five labeled sections the model is asked to produce. Rendering
//! is pure and deterministic — same inputs, same prompt, byte for byte.

use forkful_core::recipe::Difficulty;

use crate::builder::PromptBuilder;

/// Beginning-of-sequence marker.
pub const SEQUENCE_OPEN: &str = "<s>";
/// End-of-sequence marker.
pub const SEQUENCE_CLOSE: &str = "</s>";
/// Opening instruction marker.
pub const INSTRUCTION_OPEN: &str = "[INST]";
/// Closing instruction marker.
pub const INSTRUCTION_CLOSE: &str = "[/INST]";

/// Every control token that may appear in raw model output.
pub const CONTROL_TOKENS: [&str; 4] = [
    SEQUENCE_OPEN,
    SEQUENCE_CLOSE,
    INSTRUCTION_OPEN,
    INSTRUCTION_CLOSE,
];

/// Cuisine rendered when the caller did not name one.
pub const ANY_CUISINE: &str = "any";

/// Wrap a rendered user message in the instruction-delimiter convention.
pub fn wrap_instruction(message: &str) -> String {
    format!("{SEQUENCE_OPEN}{INSTRUCTION_OPEN} {message} {INSTRUCTION_CLOSE}")
}

/// The instruction block asking the model for one recipe.
#[derive(Debug, Clone)]
pub struct RecipePrompt<'a> {
    ingredients: &'a [String],
    cuisine: Option<&'a str>,
    difficulty: Difficulty,
}

impl<'a> RecipePrompt<'a> {
    /// Build a prompt over an already-normalized ingredient list.
    ///
    /// Empty lists are rejected upstream by the orchestrator; rendering one
    /// here simply produces a prompt with an empty ingredient clause.
    pub fn new(ingredients: &'a [String]) -> Self {
        Self {
            ingredients,
            cuisine: None,
            difficulty: Difficulty::default(),
        }
    }

    pub fn with_cuisine(mut self, cuisine: &'a str) -> Self {
        self.cuisine = Some(cuisine);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Render the full, delimiter-wrapped prompt string.
    pub fn render(&self) -> String {
        let message = PromptBuilder::new()
            .add_line(format!(
                "Generate a detailed recipe using these ingredients: {}.",
                self.ingredients.join(", ")
            ))
            .add_key_value("Cuisine", self.cuisine.unwrap_or(ANY_CUISINE))
            .add_key_value("Difficulty", self.difficulty)
            .add_blank_line()
            .add_line("Please provide:")
            .add_numbered(1, "Recipe Title")
            .add_numbered(2, "Cooking Time (in minutes)")
            .add_numbered(3, "Servings")
            .add_numbered(4, "Detailed Step-by-Step Instructions")
            .add_numbered(5, "Any additional ingredients needed")
            .add_blank_line()
            .add_line("Format the response clearly with labeled sections.")
            .finalize();

        wrap_instruction(message.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn prompt_contains_every_ingredient() {
        let list = ingredients(&["tomato", "egg", "smoked paprika"]);
        let prompt = RecipePrompt::new(&list).render();
        for ingredient in &list {
            assert!(prompt.contains(ingredient), "missing {ingredient}");
        }
    }

    #[test]
    fn cuisine_and_difficulty_default_when_absent() {
        let list = ingredients(&["rice"]);
        let prompt = RecipePrompt::new(&list).render();
        assert!(prompt.contains("Cuisine: any"));
        assert!(prompt.contains("Difficulty: medium"));
    }

    #[test]
    fn explicit_cuisine_and_difficulty_are_rendered() {
        let list = ingredients(&["rice"]);
        let prompt = RecipePrompt::new(&list)
            .with_cuisine("japanese")
            .with_difficulty(Difficulty::Hard)
            .render();
        assert!(prompt.contains("Cuisine: japanese"));
        assert!(prompt.contains("Difficulty: hard"));
    }

    #[test]
    fn prompt_is_wrapped_in_instruction_markers() {
        let list = ingredients(&["rice"]);
        let prompt = RecipePrompt::new(&list).render();
        assert!(prompt.starts_with("<s>[INST] "));
        assert!(prompt.ends_with(" [/INST]"));
        assert!(!prompt.contains(SEQUENCE_CLOSE));
    }

    #[test]
    fn rendering_is_deterministic() {
        let list = ingredients(&["tomato", "egg"]);
        let prompt = RecipePrompt::new(&list).with_cuisine("italian");
        assert_eq!(prompt.render(), prompt.render());
    }
}
