//! エラー型定義
//!
//! - FetchError: 一覧取得の失敗（ネットワーク/サーバ/レスポンス不正）
//! - SessionCheckError: セッション確認の失敗（参考情報のみ、認可判定には使わない）
//! - RecordError: 取得時の境界バリデーションで弾かれたレコード

use thiserror::Error;

/// 一覧取得エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),
}

/// セッション確認エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionCheckError {
    #[error("session check network error: {0}")]
    Network(String),

    #[error("session check responded with status {0}")]
    Status(u16),

    #[error("malformed session response: {0}")]
    Decode(String),
}

/// レコード検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` is not a number: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("field `createdAt` is not a timestamp: {0}")]
    InvalidTimestamp(String),
}
