//! ローディング表示

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(default = "Carregando...")] message: &'static str) -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <div class="spinner" />
            <p class="text-muted">{message}</p>
        </div>
    }
}
