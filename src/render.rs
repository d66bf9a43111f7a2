//! 端末向けの表示

use indicatif::{ProgressBar, ProgressStyle};
use recipe_book_common::{Listed, Recipe, Rendered, UserRef};
use serde::Serialize;
use std::time::Duration;

use crate::error::Result;

/// 待機中のスピナー
pub fn spinner(message: &str) -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    progress.set_style(style);
    progress.set_message(message.to_string());
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

/// レシピ1件分のカード
pub fn card(recipe: &Recipe) -> String {
    let created = recipe
        .created_at
        .with_timezone(&chrono::Local)
        .format("%d/%m/%Y");

    let mut meta = vec![
        format!("⏱ {} min", recipe.prep_time),
        format!("🍽 {} porções", recipe.servings),
        format!("dificuldade {}", recipe.difficulty),
        format!("❤ {}", recipe.likes),
        created.to_string(),
    ];
    if let Some(author) = recipe.user.as_ref().and_then(UserRef::display_name) {
        meta.push(format!("por {}", author));
    }
    if recipe.is_generated_by_ai {
        meta.push("IA".to_string());
    }

    let mut lines = vec![
        format!("{}  [id: {}]", recipe.title, recipe.id),
        format!("  {}", meta.join(" · ")),
    ];
    if !recipe.description.is_empty() {
        lines.push(format!("  {}", recipe.description));
    }
    lines.join("\n")
}

/// 一覧の描画（空なら該当なしメッセージ）
pub fn text<T: Listed>(rendered: &Rendered<T>, empty_message: &str) -> String {
    match rendered {
        Rendered::Loading => String::new(),
        Rendered::Empty => empty_message.to_string(),
        Rendered::Cards(items) => items
            .iter()
            .map(|item| card(item.recipe()))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// 並び替え済みの一覧をJSONで出力
pub fn json<T: Serialize>(rendered: &Rendered<T>) -> Result<String> {
    let items: &[T] = match rendered {
        Rendered::Cards(items) => items,
        Rendered::Loading | Rendered::Empty => &[],
    };
    Ok(serde_json::to_string_pretty(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_book_common::parse_recipes;

    fn sample() -> Recipe {
        parse_recipes(
            r#"[{"id": 1, "title": "Pasta", "description": "Com molho", "prepTime": 30,
                 "servings": 2, "difficulty": 2, "likes": 5, "createdAt": "2024-01-15T12:00:00Z",
                 "isGeneratedByAI": true, "user": {"id": "u1", "name": "Ana"}}]"#,
        )
        .unwrap()
        .remove(0)
    }

    #[test]
    fn test_card_lists_fields() {
        let text = card(&sample());
        assert!(text.starts_with("Pasta  [id: 1]"));
        assert!(text.contains("⏱ 30 min"));
        assert!(text.contains("dificuldade 2"));
        assert!(text.contains("por Ana"));
        assert!(text.contains("IA"));
        assert!(text.contains("Com molho"));
    }

    #[test]
    fn test_empty_renders_message() {
        let rendered: Rendered<Recipe> = Rendered::Empty;
        assert_eq!(text(&rendered, "Nenhuma receita encontrada."), "Nenhuma receita encontrada.");
        assert_eq!(json(&rendered).unwrap(), "[]");
    }
}
