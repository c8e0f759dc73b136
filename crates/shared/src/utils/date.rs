use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Deserializer, de};
use std::sync::LazyLock;

/// Wire format for calendar dates: `DD.MM.YYYY`, day 01-31, month 01-12.
static DISPLAY_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[0-2])\.(\d{4})$").unwrap()
});

/// Parses a `DD.MM.YYYY` string into a calendar date.
///
/// Both format and calendar validity are checked, so `31.02.2024`
/// fails even though it matches the digit ranges.
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    let captures = DISPLAY_DATE_RE.captures(value)?;

    let day: u32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let year: i32 = captures[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn deserialize_display_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    parse_display_date(&raw).ok_or_else(|| {
        de::Error::custom(format!("'{raw}' is not a valid DD.MM.YYYY date"))
    })
}
