//! Domain model for the persisted recipe artifact.
//!
//! A [`Recipe`] is created once by the orchestrator after a successful
//! generation and then mutated in place: regeneration replaces the generated
//! text and its derived fields, favorite toggling flips one flag, and a
//! [`RecipePatch`] applies an owner-supplied edit. The owning [`UserId`] is
//! immutable after creation; ownership checks happen at the service
//! boundary, never inside the pipeline.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ForkfulError;

/// Cuisine stored when the caller did not name one.
pub const DEFAULT_CUISINE: &str = "General";

/// Identifier of a persisted recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(Uuid);

impl RecipeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity of the requesting user, resolved by the authentication layer
/// before the core is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Requested recipe difficulty.
///
/// The `Display` implementation renders the canonical lowercase name so it
/// can be fed directly into a prompt without extra mapping logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ForkfulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ForkfulError::InvalidDifficulty(other.to_owned())),
        }
    }
}

/// The persisted artifact of one successful generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    /// Owning user; set at creation and never changed afterwards.
    pub user: UserId,
    /// The normalized ingredient list the generation was requested with.
    pub ingredients: Vec<String>,
    /// The full cleaned prose the model produced, kept intact so a human can
    /// always read it even when field extraction fell back to defaults.
    pub generated_text: String,
    pub title: String,
    pub cuisine: String,
    pub difficulty: Difficulty,
    pub cooking_time: String,
    pub servings: u32,
    pub is_favorite: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Apply an owner-supplied edit, refreshing `updated_at`.
    pub fn apply(&mut self, patch: RecipePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(cuisine) = patch.cuisine {
            self.cuisine = cuisine;
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(cooking_time) = patch.cooking_time {
            self.cooking_time = cooking_time;
        }
        if let Some(servings) = patch.servings {
            self.servings = servings;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(is_favorite) = patch.is_favorite {
            self.is_favorite = is_favorite;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a recipe the caller already owns. Absent fields are
/// left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub cooking_time: Option<String>,
    pub servings: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub is_favorite: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(user: UserId) -> Recipe {
        let now = Utc::now();
        Recipe {
            id: RecipeId::new(),
            user,
            ingredients: vec!["tomato".into(), "egg".into()],
            generated_text: "Recipe Title: Tomato Scramble".into(),
            title: "Tomato Scramble".into(),
            cuisine: DEFAULT_CUISINE.into(),
            difficulty: Difficulty::Medium,
            cooking_time: "15 minutes".into(),
            servings: 2,
            is_favorite: false,
            tags: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn difficulty_round_trips_through_strings() {
        for (text, level) in [
            ("easy", Difficulty::Easy),
            ("medium", Difficulty::Medium),
            ("HARD", Difficulty::Hard),
        ] {
            assert_eq!(text.parse::<Difficulty>().unwrap(), level);
        }
        assert!("extreme".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Easy.to_string(), "easy");
    }

    #[test]
    fn patch_only_touches_supplied_fields() {
        let mut recipe = sample(UserId::new());
        let before = recipe.updated_at;
        recipe.apply(RecipePatch {
            cuisine: Some("italian".into()),
            is_favorite: Some(true),
            ..RecipePatch::default()
        });
        assert_eq!(recipe.cuisine, "italian");
        assert!(recipe.is_favorite);
        assert_eq!(recipe.title, "Tomato Scramble");
        assert_eq!(recipe.servings, 2);
        assert!(recipe.updated_at >= before);
    }
}
