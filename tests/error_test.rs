//! エラーメッセージのテスト

use recipe_book::error::RecipeBookError;
use recipe_book_common::{SessionCheckError, AUTH_ERROR_PATH};

#[test]
fn test_not_authenticated_names_error_route() {
    let display = RecipeBookError::NotAuthenticated.to_string();
    assert!(display.contains(AUTH_ERROR_PATH));
    assert!(display.contains("recipe-book config"));
}

#[test]
fn test_session_check_error_is_transparent() {
    let err: RecipeBookError = SessionCheckError::Network("timeout".into()).into();
    assert!(err.to_string().contains("timeout"));
}

#[test]
fn test_error_display_not_empty() {
    let errors = vec![
        RecipeBookError::Config("x".into()),
        RecipeBookError::FileNotFound("a.json".into()),
        RecipeBookError::NotAuthenticated,
    ];
    for err in errors {
        assert!(!err.to_string().is_empty(), "エラーメッセージが空: {:?}", err);
    }
}
