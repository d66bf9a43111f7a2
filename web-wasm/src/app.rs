//! メインアプリケーションコンポーネント

use crate::auth::AuthContext;
use crate::components::{auth_gate::AuthGate, header::Header};
use crate::config::WebConfig;
use crate::pages::{AuthErrorPage, FavoriteList, NotFoundPage, RecipeList};
use leptos::prelude::*;
use recipe_book_common::Route;

/// 現在のURLからルートを決める
fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::NotFound)
}

fn page(route: Route) -> AnyView {
    match route {
        Route::Recipes => view! { <RecipeList /> }.into_any(),
        Route::Favorites => view! { <FavoriteList /> }.into_any(),
        Route::AuthError => view! { <AuthErrorPage /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = WebConfig::from_env();
    provide_context(AuthContext::from_storage(&config));
    provide_context(config);

    let route = current_route();
    tracing::debug!(?route, "routing");

    let content = if route.is_protected() {
        view! { <AuthGate>{page(route)}</AuthGate> }.into_any()
    } else {
        page(route)
    };

    view! {
        <div class="container">
            <Header current=route />
            <main>{content}</main>
        </div>
    }
}
