//! ヘッダーコンポーネント

use leptos::prelude::*;
use recipe_book_common::Route;

#[component]
pub fn Header(current: Route) -> impl IntoView {
    let link = move |route: Route, label: &'static str| {
        view! {
            <a href=route.path() class="nav-link" class:active=move || current == route>
                {label}
            </a>
        }
    };

    view! {
        <header class="header">
            <h1>"Receitas"</h1>
            <nav class="nav">
                {link(Route::Recipes, "Todas as receitas")}
                {link(Route::Favorites, "Favoritas")}
            </nav>
        </header>
    }
}
