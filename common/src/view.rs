//! 一覧ビューの状態
//!
//! `Loading` → `Ready` の一方向だけ。取得失敗は空の `Ready` になり、
//! 利用者には「該当なし」として見える。

use crate::criteria::{FilterCriteria, SortSpec};
use crate::error::FetchError;
use crate::pipeline::{filter_sort, Listed};

/// 一覧の読み込み状態
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Ready(Vec<T>),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Loading
    }
}

/// 描画内容
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered<T> {
    Loading,
    /// 該当なしメッセージを出す
    Empty,
    Cards(Vec<T>),
}

impl<T> ListState<T> {
    /// 取得結果で `Ready` へ遷移（失敗はログを出して空一覧）
    pub fn settle(result: Result<Vec<T>, FetchError>, collection: &str) -> Self {
        match result {
            Ok(items) => {
                tracing::debug!(collection, count = items.len(), "collection loaded");
                ListState::Ready(items)
            }
            Err(e) => {
                tracing::error!(collection, error = %e, "failed to load collection");
                ListState::Ready(Vec::new())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    /// 取得済みの元一覧
    pub fn items(&self) -> Option<&[T]> {
        match self {
            ListState::Loading => None,
            ListState::Ready(items) => Some(items),
        }
    }
}

impl<T: Listed + Clone> ListState<T> {
    /// フィルタ → ソートして描画内容を決める
    pub fn render(&self, criteria: &FilterCriteria, spec: SortSpec) -> Rendered<T> {
        match self {
            ListState::Loading => Rendered::Loading,
            ListState::Ready(items) => {
                let visible = filter_sort(items, criteria, spec);
                if visible.is_empty() {
                    Rendered::Empty
                } else {
                    Rendered::Cards(visible)
                }
            }
        }
    }
}
