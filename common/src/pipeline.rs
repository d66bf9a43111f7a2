//! フィルタ → ソートのパイプライン
//!
//! レシピ一覧とお気に入り一覧で共通。要素からレシピを取り出す
//! `Listed` だけが両者の違いになる。

use crate::criteria::{FilterCriteria, SortField, SortOrder, SortSpec};
use crate::types::{Favorite, Recipe};
use std::cmp::Ordering;

/// 一覧に並ぶ要素
pub trait Listed {
    /// フィルタ・ソート対象のレシピ
    fn recipe(&self) -> &Recipe;

    /// 描画時のキー（レシピID）
    fn key(&self) -> &str {
        &self.recipe().id
    }
}

impl Listed for Recipe {
    fn recipe(&self) -> &Recipe {
        self
    }
}

impl Listed for Favorite {
    fn recipe(&self) -> &Recipe {
        &self.recipe
    }
}

/// 大文字小文字を区別しない部分一致
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// フィルタ条件に一致するか
///
/// 指定されたフィールドすべてを満たすレコードだけが残る。
/// 材料名のない材料は材料フィルタに一致しないだけで、エラーにはならない。
pub fn matches(recipe: &Recipe, criteria: &FilterCriteria) -> bool {
    let criteria = criteria.normalized();

    if let Some(search) = &criteria.search {
        let needle = search.to_lowercase();
        if !contains_ignore_case(&recipe.title, &needle)
            && !contains_ignore_case(&recipe.description, &needle)
        {
            return false;
        }
    }

    if let Some(difficulty) = criteria.difficulty {
        if recipe.difficulty != f64::from(difficulty) {
            return false;
        }
    }

    if let Some(max_prep_time) = criteria.max_prep_time {
        if recipe.prep_time > f64::from(max_prep_time) {
            return false;
        }
    }

    if let Some(ingredient) = &criteria.ingredient {
        let needle = ingredient.to_lowercase();
        let found = recipe.ingredients.iter().any(|ing| {
            ing.ingredient_name
                .as_deref()
                .is_some_and(|name| contains_ignore_case(name, &needle))
        });
        if !found {
            return false;
        }
    }

    if let Some(flag) = criteria.is_generated_by_ai {
        if recipe.is_generated_by_ai != flag {
            return false;
        }
    }

    true
}

/// ソート指定に従って比較
///
/// 等しいキーは `Ordering::Equal`。順序の保持は安定ソート側に任せる。
pub fn compare(a: &Recipe, b: &Recipe, spec: SortSpec) -> Ordering {
    let ordering = match spec.field {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Likes => a.likes.total_cmp(&b.likes),
        SortField::Difficulty => a.difficulty.total_cmp(&b.difficulty),
        SortField::PrepTime => a.prep_time.total_cmp(&b.prep_time),
    };

    match spec.order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// フィルタしてから安定ソートした新しい一覧を返す（元の一覧は変更しない）
pub fn filter_sort<T>(items: &[T], criteria: &FilterCriteria, spec: SortSpec) -> Vec<T>
where
    T: Listed + Clone,
{
    let mut visible: Vec<T> = items
        .iter()
        .filter(|item| matches(item.recipe(), criteria))
        .cloned()
        .collect();

    // sort_by は安定ソート
    visible.sort_by(|a, b| compare(a.recipe(), b.recipe(), spec));
    visible
}
