//! Persistence boundary for [`Recipe`] entities.
//!
//! The document store itself is an external collaborator; this module only
//! fixes the contract the orchestrator relies on, plus an in-memory
//! reference implementation used by tests and embedded callers. Per-entity
//! update semantics are the store's responsibility — the core holds no
//! shared mutable state and takes no locks across the generation call.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{ForkfulError, Result};
use crate::recipe::{Difficulty, Recipe, RecipeId, UserId};

/// Page size applied when a query does not name one.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Boxed future returned by every store operation.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Filtering and pagination for the list operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeQuery {
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub favorites_only: bool,
    /// Case-insensitive substring match over title and ingredients.
    pub search: Option<String>,
    /// 1-based page number; values below 1 are treated as 1.
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl RecipeQuery {
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn favorites_only(mut self) -> Self {
        self.favorites_only = true;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Whether `recipe` satisfies every filter in this query.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(cuisine) = &self.cuisine {
            if &recipe.cuisine != cuisine {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if recipe.difficulty != difficulty {
                return false;
            }
        }
        if self.favorites_only && !recipe.is_favorite {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_title = recipe.title.to_lowercase().contains(&needle);
            let in_ingredients = recipe
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&needle));
            if !in_title && !in_ingredients {
                return false;
            }
        }
        true
    }
}

/// One page of list results with pagination bookkeeping.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub pages: usize,
}

/// Create / find / update / delete / list over the recipe collection.
///
/// Implementations return [`ForkfulError::Storage`] for engine faults and
/// [`ForkfulError::RecipeNotFound`] when an update or delete targets a
/// missing document. Ownership is *not* checked here; the service does that
/// before calling in.
pub trait RecipeStore: Send + Sync {
    fn insert(&self, recipe: Recipe) -> StoreFuture<'_, ()>;

    fn find(&self, id: RecipeId) -> StoreFuture<'_, Option<Recipe>>;

    /// Replace the stored document with `recipe`, keyed by `recipe.id`.
    fn update(&self, recipe: Recipe) -> StoreFuture<'_, ()>;

    fn delete(&self, id: RecipeId) -> StoreFuture<'_, ()>;

    /// Recipes owned by `user`, newest first, filtered and paginated.
    fn list(&self, user: UserId, query: RecipeQuery) -> StoreFuture<'_, Page<Recipe>>;
}

/// `RwLock<HashMap>` store for tests and embedded use.
#[derive(Debug, Default)]
pub struct InMemoryRecipeStore {
    recipes: RwLock<HashMap<RecipeId, Recipe>>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> ForkfulError {
        ForkfulError::Storage("recipe store lock poisoned".into())
    }
}

impl RecipeStore for InMemoryRecipeStore {
    fn insert(&self, recipe: Recipe) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            let mut recipes = self.recipes.write().map_err(|_| Self::poisoned())?;
            recipes.insert(recipe.id, recipe);
            Ok(())
        })
    }

    fn find(&self, id: RecipeId) -> StoreFuture<'_, Option<Recipe>> {
        Box::pin(async move {
            let recipes = self.recipes.read().map_err(|_| Self::poisoned())?;
            Ok(recipes.get(&id).cloned())
        })
    }

    fn update(&self, recipe: Recipe) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            let mut recipes = self.recipes.write().map_err(|_| Self::poisoned())?;
            if !recipes.contains_key(&recipe.id) {
                return Err(ForkfulError::RecipeNotFound);
            }
            recipes.insert(recipe.id, recipe);
            Ok(())
        })
    }

    fn delete(&self, id: RecipeId) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            let mut recipes = self.recipes.write().map_err(|_| Self::poisoned())?;
            recipes
                .remove(&id)
                .map(|_| ())
                .ok_or(ForkfulError::RecipeNotFound)
        })
    }

    fn list(&self, user: UserId, query: RecipeQuery) -> StoreFuture<'_, Page<Recipe>> {
        Box::pin(async move {
            let recipes = self.recipes.read().map_err(|_| Self::poisoned())?;

            let mut matched: Vec<Recipe> = recipes
                .values()
                .filter(|recipe| recipe.user == user && query.matches(recipe))
                .cloned()
                .collect();
            matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));

            let page = query.page.unwrap_or(1).max(1);
            let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);
            let total = matched.len();
            let pages = total.div_ceil(limit as usize);

            let skip = (page as usize - 1) * limit as usize;
            let items: Vec<Recipe> = matched
                .into_iter()
                .skip(skip)
                .take(limit as usize)
                .collect();

            Ok(Page {
                items,
                page,
                limit,
                total,
                pages,
            })
        })
    }
}
