//! バックエンドAPI呼び出し

mod client;

pub use client::{fetch_collection, get_session_validity};
