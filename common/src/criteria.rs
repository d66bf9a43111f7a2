//! フィルタ条件とソート指定
//!
//! フィルタ/ソートのUIコントロールから `onFilter` / `onSort` で渡される値。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// フィルタ条件（すべて任意、指定されたものをANDで適用）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// タイトルまたは説明の部分一致（大文字小文字を区別しない）
    pub search: Option<String>,
    /// 難易度の完全一致
    pub difficulty: Option<u8>,
    /// 調理時間の上限（この値を含む）
    pub max_prep_time: Option<u32>,
    /// 材料名の部分一致
    pub ingredient: Option<String>,
    #[serde(rename = "isGeneratedByAI")]
    pub is_generated_by_ai: Option<bool>,
}

impl FilterCriteria {
    /// 空文字・0 を「指定なし」に揃える
    ///
    /// フォームから来る空欄や 0 は制約として扱わない。空白だけの文字列は
    /// 空ではないのでそのまま部分一致に使う。
    pub fn normalized(&self) -> Self {
        Self {
            search: non_empty(&self.search),
            difficulty: self.difficulty.filter(|d| *d != 0),
            max_prep_time: self.max_prep_time.filter(|t| *t != 0),
            ingredient: non_empty(&self.ingredient),
            is_generated_by_ai: self.is_generated_by_ai,
        }
    }

    /// 制約が一つもないか
    pub fn is_empty(&self) -> bool {
        self.normalized() == Self::default()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|s| !s.is_empty())
}

/// フィルタフォームの入力値（すべて文字列のまま保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub search: String,
    pub difficulty: String,
    pub max_prep_time: String,
    pub ingredient: String,
    /// "" / "true" / "false"
    pub generated_by_ai: String,
}

impl FilterForm {
    /// 入力値をフィルタ条件へ（解釈できない数値は指定なし扱い）
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: Some(self.search.clone()),
            difficulty: self.difficulty.trim().parse().ok(),
            max_prep_time: self.max_prep_time.trim().parse().ok(),
            ingredient: Some(self.ingredient.clone()),
            is_generated_by_ai: match self.generated_by_ai.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
        }
        .normalized()
    }
}

/// ソート対象フィールド
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    CreatedAt,
    Likes,
    Difficulty,
    PrepTime,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::CreatedAt,
        SortField::Likes,
        SortField::Difficulty,
        SortField::PrepTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::Likes => "likes",
            SortField::Difficulty => "difficulty",
            SortField::PrepTime => "prepTime",
        }
    }

    /// 画面表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "Data de criação",
            SortField::Likes => "Curtidas",
            SortField::Difficulty => "Dificuldade",
            SortField::PrepTime => "Tempo de preparo",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "createdat" | "created_at" | "created" | "date" => Ok(SortField::CreatedAt),
            "likes" => Ok(SortField::Likes),
            "difficulty" => Ok(SortField::Difficulty),
            "preptime" | "prep_time" | "prep" => Ok(SortField::PrepTime),
            _ => Err(format!(
                "Unknown sort field: {}. Use createdAt, likes, difficulty, or prepTime",
                s
            )),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ソート方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Crescente",
            SortOrder::Desc => "Decrescente",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(format!("Unknown sort order: {}. Use asc or desc", s)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ソート指定（初期値: 作成日時の降順）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec_default_is_newest_first() {
        let spec = SortSpec::default();
        assert_eq!(spec.field, SortField::CreatedAt);
        assert_eq!(spec.order, SortOrder::Desc);
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("prepTime".parse::<SortField>(), Ok(SortField::PrepTime));
        assert_eq!("CREATEDAT".parse::<SortField>(), Ok(SortField::CreatedAt));
        assert_eq!("likes".parse::<SortField>(), Ok(SortField::Likes));
        assert!("title".parse::<SortField>().is_err());
    }

    #[test]
    fn test_sort_order_roundtrip_display() {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            assert_eq!(order.to_string().parse::<SortOrder>(), Ok(order));
        }
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_sort_spec_wire_format() {
        let spec: SortSpec =
            serde_json::from_str(r#"{"field":"prepTime","order":"asc"}"#).expect("SortSpec");
        assert_eq!(spec, SortSpec::new(SortField::PrepTime, SortOrder::Asc));
    }

    #[test]
    fn test_criteria_wire_format() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"maxPrepTime":20,"isGeneratedByAI":false}"#)
                .expect("FilterCriteria");
        assert_eq!(criteria.max_prep_time, Some(20));
        assert_eq!(criteria.is_generated_by_ai, Some(false));
        assert_eq!(criteria.search, None);
    }

    #[test]
    fn test_criteria_normalized_drops_blank_and_zero() {
        let criteria = FilterCriteria {
            search: Some(String::new()),
            difficulty: Some(0),
            max_prep_time: Some(0),
            ingredient: Some(" sal ".into()),
            is_generated_by_ai: Some(false),
        };
        let normalized = criteria.normalized();
        assert_eq!(normalized.search, None);
        assert_eq!(normalized.difficulty, None);
        assert_eq!(normalized.max_prep_time, None);
        assert_eq!(normalized.ingredient.as_deref(), Some(" sal "));
        assert_eq!(normalized.is_generated_by_ai, Some(false));
    }

    #[test]
    fn test_criteria_whitespace_is_a_constraint() {
        let criteria = FilterCriteria {
            search: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(criteria.normalized().search.as_deref(), Some("   "));
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_criteria_is_empty() {
        assert!(FilterCriteria::default().is_empty());
        assert!(FilterCriteria {
            search: Some(String::new()),
            ..Default::default()
        }
        .is_empty());
        assert!(!FilterCriteria {
            is_generated_by_ai: Some(false),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_filter_form_to_criteria() {
        let form = FilterForm {
            search: "bolo".into(),
            difficulty: "2".into(),
            max_prep_time: "abc".into(),
            ingredient: String::new(),
            generated_by_ai: "false".into(),
        };
        let criteria = form.to_criteria();
        assert_eq!(criteria.search.as_deref(), Some("bolo"));
        assert_eq!(criteria.difficulty, Some(2));
        assert_eq!(criteria.max_prep_time, None);
        assert_eq!(criteria.ingredient, None);
        assert_eq!(criteria.is_generated_by_ai, Some(false));

        assert!(FilterForm::default().to_criteria().is_empty());
    }
}
