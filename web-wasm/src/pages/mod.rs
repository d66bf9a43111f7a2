//! ページコンポーネント

use crate::components::list_view::collection_view;
use leptos::prelude::*;
use recipe_book_common::{AllRecipes, Favorites, Route};

/// 全レシピ一覧
#[component]
pub fn RecipeList() -> impl IntoView {
    collection_view::<AllRecipes>()
}

/// お気に入り一覧
#[component]
pub fn FavoriteList() -> impl IntoView {
    collection_view::<Favorites>()
}

#[component]
pub fn AuthErrorPage() -> impl IntoView {
    view! {
        <section class="auth-error">
            <h2>"Acesso negado"</h2>
            <p>"Você precisa estar autenticado para acessar esta página."</p>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h2>"Página não encontrada"</h2>
            <a href=Route::Recipes.path()>"Voltar para as receitas"</a>
        </section>
    }
}
