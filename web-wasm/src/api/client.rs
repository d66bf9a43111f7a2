//! fetch API によるバックエンド呼び出し
//!
//! - fetch_collection: 一覧取得（レシピ/お気に入り）
//! - get_session_validity: セッション確認（参考情報）

use crate::auth::access_token;
use crate::config::WebConfig;
use recipe_book_common::{Collection, FetchError, SessionCheckError, SessionValidity};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

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

fn js_error(e: JsValue) -> HttpFailure {
    HttpFailure::Network(format!("{:?}", e))
}

/// GETリクエスト（共通処理）
async fn get(url: &str, token: Option<&str>) -> Result<Response, HttpFailure> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(js_error)?;
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(js_error)?;
    }

    let window =
        web_sys::window().ok_or_else(|| HttpFailure::Network("no window available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(HttpFailure::Status(resp.status()));
    }
    Ok(resp)
}

/// 一覧を取得して検証済みレコードへ変換
pub async fn fetch_collection<C: Collection>(
    config: &WebConfig,
) -> Result<Vec<C::Item>, FetchError> {
    let token = if C::requires_auth() {
        access_token(config)
    } else {
        None
    };

    let url = config.url(C::ENDPOINT);
    tracing::debug!(collection = C::NAME, %url, "fetching collection");

    let resp = get(&url, token.as_deref()).await?;
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| FetchError::Decode("response body is not text".into()))?;

    C::parse(&body)
}

/// セッションの有効性を確認
pub async fn get_session_validity(
    config: &WebConfig,
) -> Result<SessionValidity, SessionCheckError> {
    let token = access_token(config);
    let resp = get(&config.url(SESSION_ENDPOINT), token.as_deref()).await?;

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| SessionCheckError::Decode(e.to_string()))
}
