//! recipe-book: レシピ共有アプリのCLIクライアント

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod list;
pub mod logging;
pub mod render;
