use recipe_book_common::{SessionCheckError, AUTH_ERROR_PATH};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeBookError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Sessão não autenticada (redirecionado para {path}). Configure um token com `recipe-book config --set-token SEU_TOKEN`", path = AUTH_ERROR_PATH)]
    NotAuthenticated,

    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error(transparent)]
    SessionCheck(#[from] SessionCheckError),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecipeBookError>;
