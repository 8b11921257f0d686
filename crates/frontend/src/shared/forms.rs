//! Helpers for binding text inputs to DTO fields.

/// Empty or blank input becomes `None` (sent as JSON `null`)
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Lenient numeric input: unparsable text keeps the default
pub fn parse_or<T: std::str::FromStr>(value: &str, default: T) -> T {
    value.trim().parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_none() {
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" -20°C "), Some("-20°C".to_string()));
    }

    #[test]
    fn parse_or_falls_back() {
        assert_eq!(parse_or("15", 0i64), 15);
        assert_eq!(parse_or("abc", 0i64), 0);
        assert_eq!(parse_or("12.5", 0.0f64), 12.5);
    }
}
