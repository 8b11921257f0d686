//! Blocking browser dialogs (`window.confirm` / `alert` / `prompt`).

use web_sys::window;

/// `false` when the user cancels or no window is available
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// `None` when the user cancels
pub fn prompt(message: &str) -> Option<String> {
    window()?.prompt_with_message(message).ok()?
}

/// Ask for a strictly positive integer; `Err` carries the notice to show.
///
/// `Ok(None)` means the user cancelled.
pub fn prompt_positive_quantity(message: &str) -> Result<Option<i64>, String> {
    match prompt(message) {
        None => Ok(None),
        Some(raw) => parse_positive_quantity(&raw).map(Some),
    }
}

pub(crate) fn parse_positive_quantity(raw: &str) -> Result<i64, String> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("请输入有效的数量".to_string()),
    }
}
