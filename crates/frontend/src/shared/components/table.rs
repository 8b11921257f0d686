//! List table states shared by every record page.

use crate::shared::api::ApiError;
use leptos::prelude::*;

pub const LOADING_TEXT: &str = "加载中...";
pub const EMPTY_TEXT: &str = "暂无数据";
pub const FAILED_TEXT: &str = "加载失败";

#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Loading
    }
}

impl<T> ListState<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => ListState::Loaded(items),
            Err(e) => ListState::Failed(e.to_string()),
        }
    }

    /// Text for the single placeholder row, `None` when rows are shown
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ListState::Loading => Some(LOADING_TEXT),
            ListState::Loaded(items) if items.is_empty() => Some(EMPTY_TEXT),
            ListState::Loaded(_) => None,
            ListState::Failed(_) => Some(FAILED_TEXT),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            ListState::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// Full-width row for the loading / empty / failed states
pub fn placeholder_row(colspan: u32, text: &'static str) -> AnyView {
    view! {
        <tr class="table__row table__row--placeholder">
            <td class="table__cell table__cell--placeholder" colspan=colspan>{text}</td>
        </tr>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_follows_state() {
        assert_eq!(ListState::<u8>::Loading.placeholder(), Some(LOADING_TEXT));
        assert_eq!(ListState::<u8>::Loaded(vec![]).placeholder(), Some(EMPTY_TEXT));
        assert_eq!(ListState::Loaded(vec![1u8]).placeholder(), None);

        let failed = ListState::<u8>::from_result(Err(ApiError::Transport("down".into())));
        assert_eq!(failed.placeholder(), Some(FAILED_TEXT));
        assert!(failed.items().is_empty());
    }
}
