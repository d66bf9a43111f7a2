//! レシピ/お気に入りの型定義
//!
//! バックエンドのJSONはフィールドの有無や型が揺れるため、
//! 取得時に一度だけ `RawRecipe` → `Recipe` の変換で検証する。
//! 以降のフィルタ・ソートは検証済みの `Recipe` だけを扱う。

use crate::error::RecordError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 材料
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ingredient {
    /// 材料名（欠落していても障害ではない、材料フィルタには一致しない）
    pub ingredient_name: Option<String>,
    pub quantity: Option<String>,
}

/// 投稿ユーザー
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl UserRef {
    /// ID文字列/数値、またはオブジェクトから変換
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) | Value::Number(_) => Some(Self {
                id: id_text(value),
                name: None,
            }),
            Value::Object(map) => {
                let name = ["name", "username", "fullName"]
                    .iter()
                    .find_map(|key| map.get(*key).and_then(Value::as_str))
                    .map(str::to_string);
                Some(Self {
                    id: map.get("id").and_then(id_text),
                    name,
                })
            }
            _ => None,
        }
    }

    /// 表示名（名前がなければID）
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.id.as_deref())
    }
}

/// 検証済みレシピ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRecipe")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    /// 調理時間（分）。数値はAPIの値をそのまま保持する（丸めない）
    pub prep_time: f64,
    pub servings: f64,
    pub difficulty: f64,
    #[serde(rename = "isGeneratedByAI")]
    pub is_generated_by_ai: bool,
    pub created_at: DateTime<Utc>,
    pub likes: f64,
    pub ingredients: Vec<Ingredient>,
    pub user: Option<UserRef>,
}

/// お気に入り（レシピを1段ラップする）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFavorite")]
pub struct Favorite {
    /// 常に `recipe.id` と同じ
    pub id: String,
    pub recipe: Recipe,
}

impl From<Recipe> for Favorite {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            recipe,
        }
    }
}

/// APIから受け取る未検証のレシピ
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecipe {
    pub id: Option<Value>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub prep_time: Option<Value>,
    pub servings: Option<Value>,
    pub difficulty: Option<Value>,
    #[serde(rename = "isGeneratedByAI")]
    pub is_generated_by_ai: Option<bool>,
    pub created_at: Option<Value>,
    pub likes: Option<Value>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub user: Option<Value>,
}

/// APIから受け取る未検証のお気に入り
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFavorite {
    pub id: Option<Value>,
    pub recipe: Option<RawRecipe>,
}

impl TryFrom<RawRecipe> for Recipe {
    type Error = RecordError;

    fn try_from(raw: RawRecipe) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .as_ref()
            .and_then(id_text)
            .ok_or(RecordError::MissingField("id"))?;
        let title = raw.title.ok_or(RecordError::MissingField("title"))?;
        let created_at = raw
            .created_at
            .as_ref()
            .ok_or(RecordError::MissingField("createdAt"))
            .and_then(coerce_timestamp)?;

        Ok(Self {
            id,
            title,
            description: raw.description.unwrap_or_default(),
            image: raw.image.filter(|s| !s.is_empty()),
            prep_time: coerce_number("prepTime", raw.prep_time.as_ref())?,
            servings: coerce_number("servings", raw.servings.as_ref())?,
            difficulty: coerce_number("difficulty", raw.difficulty.as_ref())?,
            is_generated_by_ai: raw.is_generated_by_ai.unwrap_or(false),
            created_at,
            likes: coerce_number("likes", raw.likes.as_ref())?,
            ingredients: raw.ingredients.unwrap_or_default(),
            user: raw.user.as_ref().and_then(UserRef::from_value),
        })
    }
}

impl TryFrom<RawFavorite> for Favorite {
    type Error = RecordError;

    fn try_from(raw: RawFavorite) -> Result<Self, Self::Error> {
        let recipe = raw.recipe.ok_or(RecordError::MissingField("recipe"))?;
        Ok(Recipe::try_from(recipe)?.into())
    }
}

/// IDは文字列でも数値でも受け付ける
fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 数値または数値文字列を数値へ（欠落・空文字は0、小数・負数もそのまま）
fn coerce_number(field: &'static str, value: Option<&Value>) -> Result<f64, RecordError> {
    let number = match value {
        None | Some(Value::Null) => return Ok(0.0),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(0.0),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(RecordError::InvalidNumber {
            field,
            value: value.map(Value::to_string).unwrap_or_default(),
        }),
    }
}

fn coerce_timestamp(value: &Value) -> Result<DateTime<Utc>, RecordError> {
    let parsed = match value {
        Value::String(s) => parse_timestamp(s),
        // 数値はエポックミリ秒
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    };
    parsed.ok_or_else(|| RecordError::InvalidTimestamp(value.to_string()))
}

/// 比較可能な時刻へ変換
///
/// 受け付ける形式:
/// - RFC 3339 (`2024-06-01T12:00:00Z`, `2024-06-01T12:00:00-03:00`)
/// - `2024-06-01 12:00:00.123+00` (Postgres 風)
/// - `2024-06-01T12:00:00` (タイムゾーンなしはUTC扱い)
/// - `2024-06-01` (UTCの0時)
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecipe {
        serde_json::from_value(value).expect("RawRecipe")
    }

    #[test]
    fn test_recipe_full_record() {
        let recipe = Recipe::try_from(raw(json!({
            "id": 7,
            "title": "Pasta",
            "description": "Massa fresca",
            "image": "https://cdn.example/pasta.jpg",
            "prepTime": 30,
            "servings": "4",
            "difficulty": 2,
            "isGeneratedByAI": true,
            "createdAt": "2024-06-01T12:00:00Z",
            "likes": "12",
            "ingredients": [{"ingredientName": "Sal"}, {"quantity": "1 xícara"}],
            "user": {"id": "u1", "username": "ana"}
        })))
        .expect("valid recipe");

        assert_eq!(recipe.id, "7");
        assert_eq!(recipe.servings, 4.0);
        assert_eq!(recipe.likes, 12.0);
        assert!(recipe.is_generated_by_ai);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].ingredient_name, None);
        assert_eq!(recipe.user.as_ref().and_then(UserRef::display_name), Some("ana"));
    }

    #[test]
    fn test_recipe_optional_fields_default() {
        let recipe = Recipe::try_from(raw(json!({
            "id": "r1",
            "title": "Bolo",
            "createdAt": "2024-01-01"
        })))
        .expect("valid recipe");

        assert_eq!(recipe.description, "");
        assert_eq!(recipe.prep_time, 0.0);
        assert!(recipe.ingredients.is_empty());
        assert!(!recipe.is_generated_by_ai);
        assert!(recipe.user.is_none());
    }

    #[test]
    fn test_recipe_missing_required_fields() {
        let err = Recipe::try_from(raw(json!({"title": "x", "createdAt": "2024-01-01"})))
            .unwrap_err();
        assert_eq!(err, RecordError::MissingField("id"));

        let err = Recipe::try_from(raw(json!({"id": 1, "title": "x"}))).unwrap_err();
        assert_eq!(err, RecordError::MissingField("createdAt"));
    }

    #[test]
    fn test_recipe_rejects_bad_numbers() {
        let err = Recipe::try_from(raw(json!({
            "id": 1, "title": "x", "createdAt": "2024-01-01", "prepTime": "meia hora"
        })))
        .unwrap_err();
        assert!(matches!(err, RecordError::InvalidNumber { field: "prepTime", .. }));

        let err = Recipe::try_from(raw(json!({
            "id": 1, "title": "x", "createdAt": "2024-01-01", "difficulty": [2]
        })))
        .unwrap_err();
        assert!(matches!(err, RecordError::InvalidNumber { field: "difficulty", .. }));
    }

    #[test]
    fn test_recipe_keeps_fractional_and_negative_numbers() {
        let recipe = Recipe::try_from(raw(json!({
            "id": 1, "title": "x", "createdAt": "2024-01-01",
            "prepTime": 10.4, "likes": "2.4", "difficulty": 2.5, "servings": -1
        })))
        .expect("valid recipe");

        assert_eq!(recipe.prep_time, 10.4);
        assert_eq!(recipe.likes, 2.4);
        assert_eq!(recipe.difficulty, 2.5);
        assert_eq!(recipe.servings, -1.0);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let midnight = parse_timestamp("2024-06-01").unwrap();
        assert_eq!(midnight.to_rfc3339(), "2024-06-01T00:00:00+00:00");

        let offset = parse_timestamp("2024-06-01T09:00:00-03:00").unwrap();
        assert_eq!(offset.to_rfc3339(), "2024-06-01T12:00:00+00:00");

        let postgres = parse_timestamp("2024-06-01 12:00:00.5+00").unwrap();
        assert_eq!(postgres.timestamp(), offset.timestamp());

        let naive = parse_timestamp("2024-06-01T12:00:00").unwrap();
        assert_eq!(naive, offset);

        assert!(parse_timestamp("ontem").is_none());
    }

    #[test]
    fn test_timestamp_from_epoch_millis() {
        let recipe = Recipe::try_from(raw(json!({
            "id": 1, "title": "x", "createdAt": 1_717_243_200_000_i64
        })))
        .expect("valid recipe");
        assert_eq!(recipe.created_at.to_rfc3339(), "2024-06-01T12:00:00+00:00");
    }

    #[test]
    fn test_favorite_takes_recipe_id() {
        let favorite: Favorite = serde_json::from_value(json!({
            "id": "fav-99",
            "recipe": {"id": "r5", "title": "Cake", "createdAt": "2024-01-01"}
        }))
        .expect("valid favorite");
        assert_eq!(favorite.id, "r5");
        assert_eq!(favorite.recipe.title, "Cake");
    }

    #[test]
    fn test_favorite_without_recipe_is_rejected() {
        let result = serde_json::from_value::<Favorite>(json!({"id": "fav-1"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_recipe_serialize_uses_wire_names() {
        let recipe = Recipe::try_from(raw(json!({
            "id": 1, "title": "x", "createdAt": "2024-01-01", "isGeneratedByAI": true
        })))
        .unwrap();
        let json = serde_json::to_string(&recipe).expect("serialize");
        assert!(json.contains("\"isGeneratedByAI\":true"));
        assert!(json.contains("\"prepTime\":0"));

        let restored: Recipe = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, recipe);
    }
}
