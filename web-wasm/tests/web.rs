//! ブラウザ上で動かす設定・ログのテスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行

use recipe_book_web::config::{WebConfig, DEFAULT_API_BASE_URL};
use recipe_book_web::logging;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn config_builds_endpoint_urls() {
    let config = WebConfig::default();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.url("/favorites"), "/api/favorites");
}

#[wasm_bindgen_test]
fn config_from_env_has_no_trailing_slash() {
    let config = WebConfig::from_env();
    assert!(!config.api_base_url.ends_with('/'));
}

#[wasm_bindgen_test]
fn logging_init_is_repeatable() {
    logging::init();
    logging::init();
    tracing::warn!("console writer smoke test");
}
