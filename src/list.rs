//! 一覧コマンド（recipes / favorites）
//!
//! 認証ゲート → 取得（またはファイル読み込み）→ フィルタ → ソート → 表示

use crate::cli::ListArgs;
use crate::client::ApiClient;
use crate::config::Config;
use crate::error::{RecipeBookError, Result};
use crate::gate;
use crate::render::{self, spinner};
use recipe_book_common::{Collection, FetchError, ListState};
use std::path::Path;

/// 保存済みのレスポンス本文から読み込む
pub fn load_file<C: Collection>(
    path: &Path,
) -> Result<std::result::Result<Vec<C::Item>, FetchError>> {
    if !path.exists() {
        return Err(RecipeBookError::FileNotFound(path.display().to_string()));
    }
    let body = std::fs::read_to_string(path)?;
    Ok(C::parse(&body))
}

/// 取得結果を描画済みの文字列にする
pub fn output<C: Collection>(
    state: &ListState<C::Item>,
    args: &ListArgs,
    config: &Config,
) -> Result<String> {
    let criteria = args.criteria();
    tracing::debug!(
        collection = C::NAME,
        total = state.items().map_or(0, <[_]>::len),
        filtered = !criteria.is_empty(),
        "rendering collection"
    );
    let rendered = state.render(&criteria, args.sort_spec(config.default_sort));
    if args.json {
        render::json(&rendered)
    } else {
        Ok(render::text(&rendered, C::EMPTY_MESSAGE))
    }
}

pub async fn run<C: Collection>(config: &Config, args: &ListArgs) -> Result<String> {
    let result = match &args.input {
        Some(path) => load_file::<C>(path)?,
        None => {
            let client = ApiClient::new(config)?;
            if C::requires_auth() {
                gate::authorize(&client, config.is_authenticated()).await?;
            }

            let progress = spinner(C::LOADING_MESSAGE);
            let result = client.fetch_collection::<C>().await;
            progress.finish_and_clear();
            result
        }
    };

    let state = ListState::settle(result, C::NAME);
    output::<C>(&state, args, config)
}
