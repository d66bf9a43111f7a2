//! 認証コンテキスト
//!
//! `is_authenticated` が認可の唯一の判定材料。セッション確認
//! (`api::get_session_validity`) の結果はこのフラグを変えない。

use crate::config::WebConfig;
use gloo::storage::{LocalStorage, Storage};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub is_authenticated: RwSignal<bool>,
}

impl AuthContext {
    /// 保存済みトークンの有無からフラグを作る
    pub fn from_storage(config: &WebConfig) -> Self {
        let authenticated = access_token(config).is_some();
        tracing::debug!(authenticated, "auth context initialised");
        Self {
            is_authenticated: RwSignal::new(authenticated),
        }
    }
}

/// 保存済みのアクセストークン
pub fn access_token(config: &WebConfig) -> Option<String> {
    match LocalStorage::raw().get_item(&config.token_storage_key) {
        Ok(token) => token.filter(|t| !t.trim().is_empty()),
        Err(e) => {
            tracing::warn!(error = ?e, "localStorage unavailable");
            None
        }
    }
}

/// 周囲のコンテキストから認証状態を取得
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
