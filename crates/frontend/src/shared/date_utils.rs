/// Utilities for date formatting
///
/// Backend timestamps are ISO strings ("2024-03-15T14:02:26.123000");
/// the console shows them as "2024/3/15".

/// Format ISO date string to YYYY/M/D format
/// Example: "2024-03-05" or "2024-03-05T14:02:26Z" -> "2024/3/5"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let mut parts = date_part.splitn(3, '-');
    if let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) {
        if let (Ok(y), Ok(m), Ok(d)) =
            (year.parse::<u32>(), month.parse::<u32>(), day.parse::<u32>())
        {
            return format!("{}/{}/{}", y, m, d);
        }
    }
    date_str.to_string()
}

/// `-` for a missing date
pub fn format_date_opt(date_str: Option<&str>) -> String {
    match date_str {
        Some(s) if !s.trim().is_empty() => format_date(s),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05"), "2024/3/5");
        assert_eq!(format_date("2024-12-31T23:59:59.123000"), "2024/12/31");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_date_opt(None), "-");
        assert_eq!(format_date_opt(Some("")), "-");
        assert_eq!(format_date_opt(Some("2025-01-09T08:00:00")), "2025/1/9");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }
}
