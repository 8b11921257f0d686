//! Утилиты форматирования чисел

/// Форматирует число с разделителем тысяч (запятая) и указанным количеством знаков после точки
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежная сумма: "¥1,234.50"
pub fn format_money(value: f64) -> String {
    format!("¥{}", format_number_with_decimals(value, 2))
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "¥1,234.50");
        assert_eq!(format_money(1234567.891), "¥1,234,567.89");
        assert_eq!(format_money(0.0), "¥0.00");
        assert_eq!(format_money(-1234.56), "¥-1,234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(999.0, 2), "999.00");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(100000.0), "100,000");
        assert_eq!(format_number_int(-1234.0), "-1,234");
    }
}
