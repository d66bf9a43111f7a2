//! レシピカード

use leptos::prelude::*;
use recipe_book_common::{Recipe, UserRef};

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let created = recipe.created_at.format("%d/%m/%Y").to_string();
    let author = recipe
        .user
        .as_ref()
        .and_then(UserRef::display_name)
        .map(str::to_string);
    let image = recipe.image.clone().map(|src| {
        view! { <img class="recipe-image" src=src alt=recipe.title.clone() loading="lazy" /> }
    });

    view! {
        <article class="recipe-card" data-recipe-id=recipe.id.clone()>
            {image}
            <div class="recipe-body">
                <h3>{recipe.title.clone()}</h3>
                {recipe.is_generated_by_ai.then(|| view! { <span class="badge badge-ai">"Gerada por IA"</span> })}
                <p class="recipe-description">{recipe.description.clone()}</p>
                <ul class="recipe-meta">
                    <li>{format!("⏱ {} min", recipe.prep_time)}</li>
                    <li>{format!("🍽 {} porções", recipe.servings)}</li>
                    <li>{format!("Dificuldade: {}", recipe.difficulty)}</li>
                    <li>{format!("❤ {}", recipe.likes)}</li>
                </ul>
                <footer class="recipe-footer">
                    <span class="text-muted">{created}</span>
                    {author.map(|name| view! { <span class="recipe-author">{name}</span> })}
                </footer>
            </div>
        </article>
    }
}
