//! Утилиты форматирования чисел для карточек и таблиц.
//!
//! The calculator returns raw `f64`s; everything user-facing goes through
//! these helpers. Non-finite values (the "no denominator" sentinel) render as
//! [`PLACEHOLDER`].

/// Rendered in place of a non-finite value.
pub const PLACEHOLDER: &str = "-";

/// Currency symbol used for every money figure.
pub const CURRENCY_SYMBOL: &str = "$";

/// Fraction as a percentage with one decimal: `0.015` → `"1.5%"`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.1}%", value * 100.0)
}

/// Count with thousands grouping and at most two fraction digits.
///
/// ```
/// use contracts::shared::number_format::format_count;
/// assert_eq!(format_count(1234.5), "1,234.5");
/// assert_eq!(format_count(49.0), "49");
/// ```
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    let formatted = format!("{:.2}", rounded);
    let (integer, fraction) = formatted.split_once('.').unwrap_or((&formatted, ""));
    let fraction = fraction.trim_end_matches('0');

    let (negative, digits) = split_sign(integer);
    let mut result = group_thousands(digits);
    if !fraction.is_empty() {
        result.push('.');
        result.push_str(fraction);
    }
    with_sign(negative && !is_zero(&result), result)
}

/// Money without fraction digits: `343000.0` → `"$343,000"`.
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let formatted = format!("{:.0}", value.round());
    let (negative, digits) = split_sign(&formatted);
    let grouped = group_thousands(digits);
    let negative = negative && !is_zero(&grouped);
    with_sign(negative, format!("{}{}", CURRENCY_SYMBOL, grouped))
}

/// Ratio such as ROAS: `34.3` → `"34.3x"`.
pub fn format_multiple(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{}x", format_count(value))
}

/// Coerce raw text from a numeric input to a number.
///
/// Empty, malformed or non-finite text becomes `0.0`, so the calculator never
/// sees invalid input.
pub fn parse_number_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    }
}

fn with_sign(negative: bool, s: String) -> String {
    if negative {
        format!("-{}", s)
    } else {
        s
    }
}

fn is_zero(s: &str) -> bool {
    s.chars().filter(|c| c.is_ascii_digit()).all(|c| c == '0')
}

// Вставляем запятые каждые 3 цифры с конца
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.015), "1.5%");
        assert_eq!(format_percent(0.35), "35.0%");
        assert_eq!(format_percent(-0.25), "-25.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(4000.0), "4,000");
        assert_eq!(format_count(1234567.891), "1,234,567.89");
        assert_eq!(format_count(266666.6666), "266,666.67");
        assert_eq!(format_count(20.58), "20.58");
        assert_eq!(format_count(0.5), "0.5");
        assert_eq!(format_count(-1234.25), "-1,234.25");
        assert_eq!(format_count(-0.001), "0");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(343000.0), "$343,000");
        assert_eq!(format_money(204.08), "$204");
        assert_eq!(format_money(1234567.7), "$1,234,568");
        assert_eq!(format_money(-1500.0), "-$1,500");
        assert_eq!(format_money(-0.2), "$0");
    }

    #[test]
    fn test_format_multiple() {
        assert_eq!(format_multiple(34.3), "34.3x");
        assert_eq!(format_multiple(0.0), "0x");
    }

    #[test]
    fn test_non_finite_renders_placeholder() {
        assert_eq!(format_count(f64::INFINITY), PLACEHOLDER);
        assert_eq!(format_money(f64::INFINITY), PLACEHOLDER);
        assert_eq!(format_multiple(f64::NAN), PLACEHOLDER);
        assert_eq!(format_percent(f64::NAN), PLACEHOLDER);
    }

    #[test]
    fn test_parse_number_or_zero() {
        assert_eq!(parse_number_or_zero("2.5"), 2.5);
        assert_eq!(parse_number_or_zero(" 10000 "), 10000.0);
        assert_eq!(parse_number_or_zero(""), 0.0);
        assert_eq!(parse_number_or_zero("abc"), 0.0);
        assert_eq!(parse_number_or_zero("inf"), 0.0);
        assert_eq!(parse_number_or_zero("NaN"), 0.0);
        assert_eq!(parse_number_or_zero("-3"), -3.0);
    }
}
