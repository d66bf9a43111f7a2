//! ソート選択バー

use leptos::ev::Event;
use leptos::prelude::*;
use recipe_book_common::{SortField, SortOrder, SortSpec};

#[component]
pub fn RecipeSortNavbar<F>(sort: ReadSignal<SortSpec>, on_sort: F) -> impl IntoView
where
    F: Fn(SortSpec) + 'static + Clone + Send + Sync,
{
    let on_field = {
        let on_sort = on_sort.clone();
        move |ev: Event| {
            if let Ok(field) = event_target_value(&ev).parse::<SortField>() {
                on_sort(SortSpec::new(field, sort.get_untracked().order));
            }
        }
    };

    let on_order = move |ev: Event| {
        if let Ok(order) = event_target_value(&ev).parse::<SortOrder>() {
            on_sort(SortSpec::new(sort.get_untracked().field, order));
        }
    };

    view! {
        <div class="sort-navbar">
            <label for="sort-field">"Ordenar por"</label>
            <select id="sort-field" on:change=on_field>
                {SortField::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <option value=field.as_str() selected=move || sort.get().field == field>
                                {field.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <select id="sort-order" on:change=on_order>
                {[SortOrder::Desc, SortOrder::Asc]
                    .into_iter()
                    .map(|order| {
                        view! {
                            <option value=order.as_str() selected=move || sort.get().order == order>
                                {order.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
