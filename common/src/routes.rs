//! ルート定義

/// 認証エラー時の固定リダイレクト先
pub const AUTH_ERROR_PATH: &str = "/home/auth-error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Recipes,
    Favorites,
    AuthError,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" | "/home" | "/home/recipes" => Route::Recipes,
            "/home/favorites" => Route::Favorites,
            AUTH_ERROR_PATH => Route::AuthError,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Recipes => "/home/recipes",
            Route::Favorites => "/home/favorites",
            Route::AuthError => AUTH_ERROR_PATH,
            Route::NotFound => "/",
        }
    }

    /// 認証ゲートを通す必要があるか
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Recipes | Route::Favorites)
    }
}
