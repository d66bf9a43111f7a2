//! 固定パスへの遷移

use leptos::prelude::*;

/// 現在の履歴を置き換えて移動（戻り先は保持しない）
pub fn navigate_replace(path: &str) {
    let Some(window) = web_sys::window() else {
        tracing::error!(path, "cannot redirect without a window");
        return;
    };
    if let Err(e) = window.location().replace(path) {
        tracing::error!(path, error = ?e, "redirect failed");
    }
}

#[component]
pub fn Redirect(path: &'static str) -> impl IntoView {
    Effect::new(move |_| navigate_replace(path));
}
