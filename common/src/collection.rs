//! データソースごとのアダプタ
//!
//! 全レシピ一覧 / お気に入り一覧の違い（エンドポイント、要素の型、
//! 表示メッセージ）だけをここに置き、一覧の処理自体は共通にする。

use crate::error::FetchError;
use crate::pipeline::Listed;
use crate::types::{Favorite, Recipe};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// 一覧として取得できるデータソース
pub trait Collection: 'static {
    type Item: Listed
        + Serialize
        + DeserializeOwned
        + Clone
        + PartialEq
        + Send
        + Sync
        + 'static;

    /// ログ用の名前
    const NAME: &'static str;
    /// APIベースURLからの相対パス
    const ENDPOINT: &'static str;
    const LOADING_MESSAGE: &'static str;
    const EMPTY_MESSAGE: &'static str;

    /// アクセストークンが必要か
    fn requires_auth() -> bool {
        true
    }

    /// レスポンス本文を検証済みの一覧へ変換
    fn parse(body: &str) -> Result<Vec<Self::Item>, FetchError> {
        parse_list::<Self::Item>(body, Self::NAME)
    }
}

/// 全レシピ
#[derive(Debug, Clone, Copy, Default)]
pub struct AllRecipes;

impl Collection for AllRecipes {
    type Item = Recipe;

    const NAME: &'static str = "recipes";
    const ENDPOINT: &'static str = "/recipes";
    const LOADING_MESSAGE: &'static str = "Carregando receitas...";
    const EMPTY_MESSAGE: &'static str = "Nenhuma receita encontrada.";
}

/// ログインユーザーのお気に入り
#[derive(Debug, Clone, Copy, Default)]
pub struct Favorites;

impl Collection for Favorites {
    type Item = Favorite;

    const NAME: &'static str = "favorites";
    const ENDPOINT: &'static str = "/favorites";
    const LOADING_MESSAGE: &'static str = "Carregando favoritos...";
    const EMPTY_MESSAGE: &'static str = "Nenhuma receita favorita encontrada.";
}

/// JSON配列をレコードごとに検証して変換
///
/// 不正なレコードは警告を出して読み飛ばす。配列でない本文はエラー。
pub fn parse_list<T: DeserializeOwned>(body: &str, name: &str) -> Result<Vec<T>, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(FetchError::Decode(format!(
                "expected a JSON array of {}, got {}",
                name,
                kind_of(&other)
            )))
        }
    };

    let total = elements.len();
    let items: Vec<T> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value::<T>(element) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(collection = name, index, error = %e, "skipping invalid record");
                None
            }
        })
        .collect();

    tracing::debug!(collection = name, total, valid = items.len(), "parsed collection");
    Ok(items)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// 全レシピを本文から変換
pub fn parse_recipes(body: &str) -> Result<Vec<Recipe>, FetchError> {
    AllRecipes::parse(body)
}

/// お気に入りを本文から変換
pub fn parse_favorites(body: &str) -> Result<Vec<Favorite>, FetchError> {
    Favorites::parse(body)
}
