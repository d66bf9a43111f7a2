//! フィルタ入力バー
//!
//! 入力は送信時にまとめて `on_filter` へ渡す。

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use recipe_book_common::{FilterCriteria, FilterForm};

#[component]
pub fn RecipeFilterNavbar<F>(on_filter: F) -> impl IntoView
where
    F: Fn(FilterCriteria) + 'static + Clone + Send + Sync,
{
    let form = RwSignal::new(FilterForm::default());

    let on_submit = {
        let on_filter = on_filter.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            on_filter(form.get_untracked().to_criteria());
        }
    };

    let on_clear = move |_: MouseEvent| {
        form.set(FilterForm::default());
        on_filter(FilterCriteria::default());
    };

    view! {
        <form class="filter-navbar" on:submit=on_submit>
            <input
                type="search"
                placeholder="Buscar receitas..."
                prop:value=move || form.with(|f| f.search.clone())
                on:input=move |ev| form.update(|f| f.search = event_target_value(&ev))
            />
            <select
                prop:value=move || form.with(|f| f.difficulty.clone())
                on:change=move |ev| form.update(|f| f.difficulty = event_target_value(&ev))
            >
                <option value="">"Dificuldade"</option>
                <option value="1">"1"</option>
                <option value="2">"2"</option>
                <option value="3">"3"</option>
                <option value="4">"4"</option>
                <option value="5">"5"</option>
            </select>
            <input
                type="number"
                min="1"
                placeholder="Tempo máx. (min)"
                prop:value=move || form.with(|f| f.max_prep_time.clone())
                on:input=move |ev| form.update(|f| f.max_prep_time = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Ingrediente"
                prop:value=move || form.with(|f| f.ingredient.clone())
                on:input=move |ev| form.update(|f| f.ingredient = event_target_value(&ev))
            />
            <select
                prop:value=move || form.with(|f| f.generated_by_ai.clone())
                on:change=move |ev| form.update(|f| f.generated_by_ai = event_target_value(&ev))
            >
                <option value="">"Todas"</option>
                <option value="true">"Geradas por IA"</option>
                <option value="false">"Escritas por pessoas"</option>
            </select>
            <button type="submit" class="btn btn-primary btn-small">"Filtrar"</button>
            <button type="button" class="btn btn-tertiary btn-small" on:click=on_clear>
                "Limpar"
            </button>
        </form>
    }
}
