//! レシピ一覧ビュー（全レシピ/お気に入り共通）
//!
//! マウント時に一度だけ取得し、フィルタ → ソート → カード描画を行う。
//! 取得先は型パラメータだけで決まるので、propsを持たない関数にしている。

use crate::api::fetch_collection;
use crate::components::filter_navbar::RecipeFilterNavbar;
use crate::components::loading::Loading;
use crate::components::recipe_card::RecipeCard;
use crate::components::sort_navbar::RecipeSortNavbar;
use crate::config::WebConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_book_common::{Collection, FilterCriteria, ListState, Listed, Rendered, SortSpec};

pub fn collection_view<C: Collection>() -> impl IntoView {
    let config = expect_context::<WebConfig>();

    let (state, set_state) = signal(ListState::<C::Item>::Loading);
    let (criteria, set_criteria) = signal(FilterCriteria::default());
    let (sort, set_sort) = signal(SortSpec::default());

    spawn_local(async move {
        let result = fetch_collection::<C>(&config).await;
        // アンマウント後に届いた結果は捨てる
        let _ = set_state.try_set(ListState::settle(result, C::NAME));
    });

    let rendered = Memo::new(move |_| {
        let criteria = criteria.get();
        let spec = sort.get();
        state.with(|s| s.render(&criteria, spec))
    });

    let is_loading = move || state.with(ListState::is_loading);
    let is_empty = move || rendered.with(|r| matches!(r, Rendered::Empty));
    let cards = move || match rendered.get() {
        Rendered::Cards(items) => items,
        Rendered::Loading | Rendered::Empty => Vec::new(),
    };

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| view! { <Loading message=C::LOADING_MESSAGE /> }
        >
            <RecipeFilterNavbar on_filter=move |c| set_criteria.set(c) />
            <RecipeSortNavbar sort=sort on_sort=move |s| set_sort.set(s) />
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="text-center text-muted">{C::EMPTY_MESSAGE}</p> }
            >
                <div class="recipe-grid">
                    <For
                        each=cards
                        key=|item: &C::Item| item.key().to_string()
                        children=|item: C::Item| view! { <RecipeCard recipe=item.recipe().clone() /> }
                    />
                </div>
            </Show>
        </Show>
    }
}
