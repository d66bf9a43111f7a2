//! バックエンドAPIクライアント
//!
//! - fetch_collection: 一覧取得（レシピ/お気に入り）
//! - get_session_validity: セッション確認（参考情報）

use crate::config::Config;
use crate::error::{RecipeBookError, Result};
use recipe_book_common::{Collection, FetchError, SessionCheckError, SessionValidity};
use std::time::Duration;

const SESSION_ENDPOINT: &str = "/auth/session";

/// HTTP層の失敗
enum HttpFailure {
    Network(String),
    Status(u16),
}

impl From<HttpFailure> for FetchError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Network(msg) => FetchError::Network(msg),
            HttpFailure::Status(status) => FetchError::Status(status),
        }
    }
}

impl From<HttpFailure> for SessionCheckError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Network(msg) => SessionCheckError::Network(msg),
            HttpFailure::Status(status) => SessionCheckError::Status(status),
        }
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| RecipeBookError::Config(format!("Cliente HTTP inválido: {}", e)))?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// GETリクエスト（共通処理）
    async fn get(
        &self,
        endpoint: &str,
        with_token: bool,
    ) -> std::result::Result<reqwest::Response, HttpFailure> {
        let url = self.config.endpoint_url(endpoint);
        tracing::debug!(%url, "GET");

        let mut request = self.http.get(&url).header("Accept", "application/json");
        if with_token {
            if let Some(token) = &self.config.access_token {
                request = request.bearer_auth(token);
            }
        }

        let resp = request
            .send()
            .await
            .map_err(|e| HttpFailure::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(HttpFailure::Status(resp.status().as_u16()));
        }
        Ok(resp)
    }

    /// 一覧を取得して検証済みレコードへ変換
    pub async fn fetch_collection<C: Collection>(
        &self,
    ) -> std::result::Result<Vec<C::Item>, FetchError> {
        let resp = self.get(C::ENDPOINT, C::requires_auth()).await?;
        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        C::parse(&body)
    }

    /// セッションの有効性を確認
    pub async fn get_session_validity(
        &self,
    ) -> std::result::Result<SessionValidity, SessionCheckError> {
        let resp = self.get(SESSION_ENDPOINT, true).await?;
        resp.json::<SessionValidity>()
            .await
            .map_err(|e| SessionCheckError::Decode(e.to_string()))
    }
}
