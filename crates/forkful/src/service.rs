//! The orchestration pipeline: validate → prompt → generate → clean →
//! parse → persist.
//!
//! [`RecipeService`] is generic over the text-generation backend and the
//! store, so the compiler guarantees the pieces fit together and tests can
//! plug in scripted fakes without a transport layer. Control flow is
//! strictly linear per request; the generation call is the only suspension
//! point, and any stage failure aborts the request with no partial
//! persistence.
//!
//! Ownership of a recipe is enforced here, at the service boundary — the
//! pipeline stages themselves know nothing about users.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use forkful_core::error::{ForkfulError, Result};
use forkful_core::model::Model;
use forkful_core::provider::{GenerationParameters, TextGenerationProvider};
use forkful_core::recipe::{DEFAULT_CUISINE, Difficulty, Recipe, RecipeId, RecipePatch, UserId};
use forkful_core::request::GenerationRequest;
use forkful_core::store::{Page, RecipeQuery, RecipeStore};
use forkful_extract::{clean, parse};
use forkful_prompt::RecipePrompt;

/// Caller-overridable knobs for [`RecipeService::regenerate`].
#[derive(Debug, Clone, Default)]
pub struct RegenerateOptions {
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
}

/// A service bound to one provider and one store.
///
/// Clone-free sharing is the caller's choice: wrap the service in an `Arc`
/// to hand it to concurrent request handlers. Each call is independent —
/// the service holds no per-request state and takes no locks.
pub struct RecipeService<P, S> {
    provider: Arc<P>,
    store: Arc<S>,
    model: Model,
}

impl<P, S> RecipeService<P, S>
where
    P: TextGenerationProvider,
    S: RecipeStore,
{
    /// Create a service that generates with `provider` and persists into
    /// `store`, using the default model.
    pub fn new(provider: P, store: S) -> Self {
        Self {
            provider: Arc::new(provider),
            store: Arc::new(store),
            model: Model::default(),
        }
    }

    /// Target a different model for all subsequent generations.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Access the underlying store (e.g. for administrative tooling).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate a recipe from `request` and persist it for `user`.
    ///
    /// Caller-supplied cuisine, difficulty and servings override both the
    /// defaults and whatever the parser extracts.
    pub async fn generate(&self, user: UserId, request: GenerationRequest) -> Result<Recipe> {
        let request = request.normalized()?;
        info!(
            %user,
            ingredients = request.ingredients.len(),
            "starting recipe generation"
        );

        let text = self
            .run_pipeline(
                &request.ingredients,
                request.cuisine.as_deref(),
                request.difficulty,
            )
            .await?;
        let fields = parse(&text);

        let now = Utc::now();
        let recipe = Recipe {
            id: RecipeId::new(),
            user,
            title: fields.title,
            cuisine: request
                .cuisine
                .unwrap_or_else(|| DEFAULT_CUISINE.to_owned()),
            difficulty: request.difficulty.unwrap_or_default(),
            cooking_time: fields.cooking_time,
            servings: request.servings.unwrap_or(fields.servings),
            ingredients: request.ingredients,
            generated_text: text,
            is_favorite: false,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.store.insert(recipe.clone()).await?;
        info!(recipe = %recipe.id, title = %recipe.title, "recipe created");
        Ok(recipe)
    }

    /// Rerun the pipeline over a stored recipe's ingredients.
    ///
    /// Replaces the generated text, title and cooking time, plus cuisine
    /// and difficulty when explicitly supplied. Servings keeps its
    /// pre-call value: unlike the generation path it is never recomputed
    /// here. That asymmetry is intentional.
    pub async fn regenerate(
        &self,
        user: UserId,
        id: RecipeId,
        options: RegenerateOptions,
    ) -> Result<Recipe> {
        let mut recipe = self.find_owned(user, id).await?;
        info!(recipe = %id, "regenerating recipe");

        let cuisine = options
            .cuisine
            .clone()
            .unwrap_or_else(|| recipe.cuisine.clone());
        let difficulty = options.difficulty.unwrap_or(recipe.difficulty);

        let text = self
            .run_pipeline(&recipe.ingredients, Some(&cuisine), Some(difficulty))
            .await?;
        let fields = parse(&text);

        recipe.generated_text = text;
        recipe.title = fields.title;
        recipe.cooking_time = fields.cooking_time;
        if let Some(cuisine) = options.cuisine {
            recipe.cuisine = cuisine;
        }
        if let Some(difficulty) = options.difficulty {
            recipe.difficulty = difficulty;
        }
        recipe.updated_at = Utc::now();

        self.store.update(recipe.clone()).await?;
        Ok(recipe)
    }

    /// Recipes owned by `user`, filtered and paginated.
    pub async fn list(&self, user: UserId, query: RecipeQuery) -> Result<Page<Recipe>> {
        self.store.list(user, query).await
    }

    pub async fn get(&self, user: UserId, id: RecipeId) -> Result<Recipe> {
        self.find_owned(user, id).await
    }

    /// Apply an owner-supplied edit.
    pub async fn update(&self, user: UserId, id: RecipeId, patch: RecipePatch) -> Result<Recipe> {
        let mut recipe = self.find_owned(user, id).await?;
        recipe.apply(patch);
        self.store.update(recipe.clone()).await?;
        Ok(recipe)
    }

    pub async fn delete(&self, user: UserId, id: RecipeId) -> Result<()> {
        let recipe = self.find_owned(user, id).await?;
        self.store.delete(recipe.id).await
    }

    pub async fn toggle_favorite(&self, user: UserId, id: RecipeId) -> Result<Recipe> {
        let mut recipe = self.find_owned(user, id).await?;
        recipe.is_favorite = !recipe.is_favorite;
        recipe.updated_at = Utc::now();
        self.store.update(recipe.clone()).await?;
        Ok(recipe)
    }

    /// Prompt → generate → clean, shared by both generation paths.
    async fn run_pipeline(
        &self,
        ingredients: &[String],
        cuisine: Option<&str>,
        difficulty: Option<Difficulty>,
    ) -> Result<String> {
        let mut prompt = RecipePrompt::new(ingredients);
        if let Some(cuisine) = cuisine {
            prompt = prompt.with_cuisine(cuisine);
        }
        if let Some(difficulty) = difficulty {
            prompt = prompt.with_difficulty(difficulty);
        }

        let params = GenerationParameters::new(prompt.render(), self.model.clone());
        let raw = self.provider.generate(params).await?;
        clean(&raw)
    }

    /// Load a recipe and enforce ownership at this boundary.
    async fn find_owned(&self, user: UserId, id: RecipeId) -> Result<Recipe> {
        let recipe = self
            .store
            .find(id)
            .await?
            .ok_or(ForkfulError::RecipeNotFound)?;
        if recipe.user != user {
            return Err(ForkfulError::NotRecipeOwner);
        }
        Ok(recipe)
    }
}
