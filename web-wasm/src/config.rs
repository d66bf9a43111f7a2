//! Web側の設定（ビルド時の環境変数から決定）

/// APIベースURLの既定値（同一オリジンの /api にプロキシする想定）
pub const DEFAULT_API_BASE_URL: &str = "/api";
/// アクセストークンを保存する localStorage のキー
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "recipe-book.access-token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub api_base_url: String,
    pub token_storage_key: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

impl WebConfig {
    /// `RECIPE_BOOK_API_URL` / `RECIPE_BOOK_TOKEN_KEY` をビルド時に読む
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("RECIPE_BOOK_API_URL")
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url)
                .trim_end_matches('/')
                .to_string(),
            token_storage_key: option_env!("RECIPE_BOOK_TOKEN_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.token_storage_key),
        }
    }

    /// エンドポイントの絶対URL
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }
}
