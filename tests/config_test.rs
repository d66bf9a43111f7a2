//! 設定ファイルのテスト

use recipe_book::config::Config;
use recipe_book_common::{SortField, SortOrder};
use tempfile::tempdir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
    assert!(!config.is_authenticated());
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.access_token = Some("abc".into());
    config.default_sort.field = SortField::PrepTime;
    config.default_sort.order = SortOrder::Asc;
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.is_authenticated());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api_base_url": "https://api.example/"}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api_base_url, "https://api.example/");
    assert_eq!(config.timeout_seconds, 30);
    assert_eq!(config.endpoint_url("/recipes"), "https://api.example/recipes");
}

#[test]
fn test_invalid_file_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_overrides_ignore_blank_values() {
    let mut config = Config::default();
    config.apply_overrides(Some("  ".into()), Some("token".into()));
    assert_eq!(config.api_base_url, Config::default().api_base_url);
    assert_eq!(config.access_token.as_deref(), Some("token"));

    config.apply_overrides(Some("https://other".into()), Some(String::new()));
    assert_eq!(config.api_base_url, "https://other");
    assert_eq!(config.access_token.as_deref(), Some("token"));
}

#[test]
fn test_blank_token_is_not_authenticated() {
    let config = Config {
        access_token: Some("   ".into()),
        ..Default::default()
    };
    assert!(!config.is_authenticated());
}
