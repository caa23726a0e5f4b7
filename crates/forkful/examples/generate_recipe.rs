//! Generate one recipe from the command line.
//!
//! ```bash
//! HF_ACCESS_TOKEN=hf_... cargo run -p forkful --example generate_recipe -- tomato egg basil
//! ```

use forkful::huggingface::HuggingFaceAdapterBuilder;
use forkful::recipe::UserId;
use forkful::request::GenerationRequest;
use forkful::service::RecipeService;
use forkful::store::InMemoryRecipeStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut ingredients: Vec<String> = std::env::args().skip(1).collect();
    if ingredients.is_empty() {
        ingredients = vec!["tomato".into(), "egg".into()];
    }

    let backend = HuggingFaceAdapterBuilder::new_from_env().build()?;
    let service = RecipeService::new(backend, InMemoryRecipeStore::new());

    let recipe = service
        .generate(UserId::new(), GenerationRequest::new(ingredients))
        .await?;

    println!("{}", recipe.title);
    println!("Cooking time: {}", recipe.cooking_time);
    println!("Servings: {}", recipe.servings);
    println!();
    println!("{}", recipe.generated_text);

    Ok(())
}
