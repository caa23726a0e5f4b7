//! The caller-facing generation request.
//!
//! Validation is deliberately the *first* pipeline stage: a request that
//! fails here never reaches the prompt builder, so no remote call is made
//! for input the caller has to correct anyway.

use serde::Deserialize;

use crate::error::{ForkfulError, Result};
use crate::recipe::Difficulty;

/// One ingredients + cuisine + difficulty tuple submitted for generation.
///
/// `servings` is a caller override: when present it wins over whatever the
/// field parser extracts from the generated text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub servings: Option<u32>,
}

impl GenerationRequest {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            cuisine: None,
            difficulty: None,
            servings: None,
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Trim every ingredient, drop blanks, and reject the request when
    /// nothing survives.
    pub fn normalized(self) -> Result<Self> {
        let ingredients: Vec<String> = self
            .ingredients
            .iter()
            .map(|ingredient| ingredient.trim())
            .filter(|ingredient| !ingredient.is_empty())
            .map(str::to_owned)
            .collect();

        if ingredients.is_empty() {
            return Err(ForkfulError::EmptyIngredients);
        }

        Ok(Self {
            ingredients,
            ..self
        })
    }
}
