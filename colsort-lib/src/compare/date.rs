//! Date patterns for the `date` comparator.

use chrono::{NaiveDate, NaiveDateTime};

/// Pattern used when a `date` spec has no argument.
pub const DEFAULT_DATE_PATTERN: &str = "yyyy-mm-dd";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

const TOKENS: [(&str, Field); 6] = [
    ("yyyy", Field::Year),
    ("mm", Field::Month),
    ("dd", Field::Day),
    ("hh", Field::Hour),
    ("ii", Field::Minute),
    ("ss", Field::Second),
];

/// A compiled date pattern.
///
/// Each token (`yyyy`, `mm`, `dd`, `hh`, `ii`, `ss`) is located by its first
/// occurrence in the pattern; the field is read from the same character offset
/// of the cell text. Everything else in the pattern is ignored, so separators
/// only need to have the right width.
///
/// ```
/// use colsort_lib::compare::DatePattern;
///
/// let pattern = DatePattern::new("dd/mm/yyyy hh:ii");
/// let instant = pattern.parse("26/07/1990 07:24").unwrap();
/// assert_eq!(instant.to_string(), "1990-07-26 07:24:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    fields: Vec<(Field, usize, usize)>,
}

impl DatePattern {
    /// Compile `pattern`.
    pub fn new(pattern: &str) -> Self {
        let fields = TOKENS
            .iter()
            .filter_map(|&(token, field)| {
                let byte_offset = pattern.find(token)?;
                let offset = pattern[..byte_offset].chars().count();
                Some((field, offset, token.len()))
            })
            .collect();
        Self { fields }
    }

    /// Compile the pattern from a comparator's arguments (first argument, or
    /// [`DEFAULT_DATE_PATTERN`]).
    pub fn from_args(args: &[String]) -> Self {
        match args.first() {
            Some(pattern) if !pattern.is_empty() => Self::new(pattern),
            _ => Self::new(DEFAULT_DATE_PATTERN),
        }
    }

    /// Parse `text` into an instant.
    ///
    /// Fields the pattern does not mention default to year 0, January, day 1,
    /// midnight; so do fields whose slice falls past the end of the text. A
    /// slice that is not all digits, or a result that is not a real calendar
    /// instant (including a `00` day or month), gives `None`.
    pub fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        let chars: Vec<char> = text.trim().chars().collect();

        let mut year = 0i32;
        let (mut month, mut day) = (1u32, 1u32);
        let (mut hour, mut minute, mut second) = (0u32, 0u32, 0u32);

        for &(field, offset, len) in &self.fields {
            let start = offset.min(chars.len());
            let end = (offset + len).min(chars.len());
            let slice: String = chars[start..end].iter().collect();
            if slice.is_empty() {
                continue;
            }
            if !slice.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let value: u32 = slice.parse().ok()?;
            match field {
                Field::Year => year = i32::try_from(value).ok()?,
                Field::Month => month = value,
                Field::Day => day = value,
                Field::Hour => hour = value,
                Field::Minute => minute = value,
                Field::Second => second = value,
            }
        }

        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_default_pattern() {
        let pattern = DatePattern::default();
        assert_eq!(pattern.parse("2020-01-05"), Some(ymd(2020, 1, 5)));
        assert_eq!(pattern.parse(" 2019-12-31 "), Some(ymd(2019, 12, 31)));
    }

    #[test]
    fn test_missing_fields_default() {
        let pattern = DatePattern::new("yyyy");
        assert_eq!(pattern.parse("1999"), Some(ymd(1999, 1, 1)));

        let pattern = DatePattern::new("hh:ii:ss");
        let instant = pattern.parse("07:24:09").unwrap();
        assert_eq!(instant.to_string(), "0000-01-01 07:24:09");
    }

    #[test]
    fn test_short_text_uses_defaults() {
        let pattern = DatePattern::new("yyyy-mm-dd");
        assert_eq!(pattern.parse("2020"), Some(ymd(2020, 1, 1)));
    }

    #[test]
    fn test_invalid_content() {
        let pattern = DatePattern::default();
        assert_eq!(pattern.parse("not a date"), None);
        assert_eq!(pattern.parse("2020-13-01"), None);
        assert_eq!(pattern.parse("2021-02-29"), None);
    }

    #[test]
    fn test_zero_day_or_month_is_invalid() {
        let pattern = DatePattern::default();
        assert_eq!(pattern.parse("2020-01-00"), None);
        assert_eq!(pattern.parse("2020-00-15"), None);
        // A missing field still defaults; only an explicit zero is rejected.
        assert_eq!(pattern.parse("2020-01"), Some(ymd(2020, 1, 1)));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let pattern = DatePattern::new("mm/dd/yyyy (mm)");
        assert_eq!(pattern.parse("07/26/1990 (xx)"), Some(ymd(1990, 7, 26)));
    }

    #[test]
    fn test_from_args() {
        assert_eq!(DatePattern::from_args(&[]), DatePattern::default());
        let pattern = DatePattern::from_args(&["dd.mm.yyyy".to_string()]);
        assert_eq!(pattern.parse("05.01.2020"), Some(ymd(2020, 1, 5)));
    }
}
