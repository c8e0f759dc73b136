use serde::{Deserializer, de};
use std::fmt;

/// Groups an amount with `.` thousands separators: `12500` -> `"12.500"`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Strips `.` grouping and parses the remaining digits.
pub fn parse_currency(value: &str) -> Option<i64> {
    let stripped: String = value.chars().filter(|c| *c != '.').collect();

    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    stripped.parse::<i64>().ok()
}

/// Accepts an amount either as a JSON number or as a grouped display
/// string (`"12.500"`), the form field format.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct AmountVisitor;

    impl de::Visitor<'_> for AmountVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("an integer amount or a grouped amount string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v).map_err(|_| E::custom("amount out of range"))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            parse_currency(v).ok_or_else(|| E::custom(format!("'{v}' is not a valid amount")))
        }
    }

    deserializer.deserialize_any(AmountVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(0), "0");
        assert_eq!(format_currency(999), "999");
        assert_eq!(format_currency(12500), "12.500");
        assert_eq!(format_currency(1_250_000), "1.250.000");
    }

    #[test]
    fn parses_grouped_input() {
        assert_eq!(parse_currency("12.500"), Some(12500));
        assert_eq!(parse_currency("999"), Some(999));
        assert_eq!(parse_currency("1.250.000"), Some(1250000));
    }

    #[test]
    fn rejects_non_digit_input() {
        assert_eq!(parse_currency(""), None);
        assert_eq!(parse_currency("12,500"), None);
        assert_eq!(parse_currency("abc"), None);
        assert_eq!(parse_currency("-100"), None);
    }
}
