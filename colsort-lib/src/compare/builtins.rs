//! Built-in comparators.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::model::Cell;

use super::date::DatePattern;
use super::extract::{attribute_number, directional_text, parse_int};
use super::registry::{Comparator, ComparatorRegistry};

/// Codes for [`compare_alpha`].
pub const ALPHA_CODES: [&str; 2] = ["a", "alpha"];
/// Codes for [`compare_date`].
pub const DATE_CODES: [&str; 2] = ["d", "date"];
/// Codes for [`compare_int`].
pub const INT_CODES: [&str; 2] = ["i", "int"];
/// Codes for [`compare_value`].
pub const VALUE_CODES: [&str; 2] = ["v", "value"];

pub(crate) fn register_builtins(registry: &mut ComparatorRegistry) {
    registry.register(ALPHA_CODES, compare_alpha);
    registry.register_prepared(DATE_CODES, |args: &[String]| -> Comparator {
        let pattern = DatePattern::from_args(args);
        Arc::new(move |a: &dyn Cell, b: &dyn Cell, _: &[String]| {
            compare_date_with(&pattern, a, b)
        })
    });
    registry.register(INT_CODES, compare_int);
    registry.register(VALUE_CODES, compare_value);
}

/// Compare trimmed cell text in locale order.
///
/// Right-to-left cells are reversed before comparing.
pub fn compare_alpha(a: &dyn Cell, b: &dyn Cell, _args: &[String]) -> Ordering {
    locale_cmp(&directional_text(a), &directional_text(b))
}

/// Compare cell text as dates using the pattern in the first argument.
///
/// Text that is not a valid date sorts after every valid date.
///
/// The pattern is compiled on every call; sessions go through the registry,
/// which compiles it once per column and uses [`compare_date_with`].
pub fn compare_date(a: &dyn Cell, b: &dyn Cell, args: &[String]) -> Ordering {
    compare_date_with(&DatePattern::from_args(args), a, b)
}

/// Compare cell text as dates using an already compiled pattern.
pub fn compare_date_with(pattern: &DatePattern, a: &dyn Cell, b: &dyn Cell) -> Ordering {
    missing_last(
        pattern.parse(&a.text()),
        pattern.parse(&b.text()),
        |a, b| a.cmp(&b),
    )
}

/// Compare cell text as base-10 integers.
///
/// Non-numeric text sorts after numbers; two non-numeric cells are equal.
pub fn compare_int(a: &dyn Cell, b: &dyn Cell, _args: &[String]) -> Ordering {
    missing_last(parse_int(&a.text()), parse_int(&b.text()), |a, b| a.cmp(&b))
}

/// Compare the numeric `data-val` attribute, then `data-total`.
///
/// A missing or non-numeric `data-val` sorts last; a missing `data-total`
/// counts as zero.
///
/// Ascending, not largest-first, like every other built-in. Tables
/// that want largest-first click the header once more or use the `vr` spec.
pub fn compare_value(a: &dyn Cell, b: &dyn Cell, _args: &[String]) -> Ordering {
    missing_last(
        attribute_number(a, "data-val"),
        attribute_number(b, "data-val"),
        |a, b| a.total_cmp(&b),
    )
    .then_with(|| {
        let total_a = attribute_number(a, "data-total").unwrap_or(0.0);
        let total_b = attribute_number(b, "data-total").unwrap_or(0.0);
        total_a.total_cmp(&total_b)
    })
}

/// Locale-style string ordering.
///
/// Letters compare case-insensitively first, then lowercase sorts before
/// uppercase, then by code point. `"Apple" < "banana"` and `"a" < "A"`.
///
/// Each stage compares a key derived from one string alone, so the result is
/// a total order for any input.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    cmp_case_insensitive(a, b).then_with(|| {
        a.chars()
            .map(case_key)
            .cmp(b.chars().map(case_key))
    })
}

fn missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    if a.is_ascii() && b.is_ascii() {
        return a
            .bytes()
            .map(|c| c.to_ascii_uppercase())
            .cmp(b.bytes().map(|c| c.to_ascii_uppercase()));
    }

    // Uppercase folding so that e.g. ß matches SS.
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
}

/// Lowercase before uppercase; titlecase and uncased characters after both.
fn case_key(c: char) -> (u8, char) {
    let rank = if c.is_lowercase() {
        0
    } else if c.is_uppercase() {
        1
    } else {
        2
    };
    (rank, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextCell;

    fn sorted_by(
        mut cells: Vec<TextCell>,
        compare: fn(&dyn Cell, &dyn Cell, &[String]) -> Ordering,
        args: &[String],
    ) -> Vec<String> {
        cells.sort_by(|a, b| compare(a, b, args));
        cells.iter().map(|c| c.as_str().to_string()).collect()
    }

    fn cells(texts: &[&str]) -> Vec<TextCell> {
        texts.iter().map(|t| TextCell::new(*t)).collect()
    }

    #[test]
    fn test_alpha_locale_order() {
        assert_eq!(
            sorted_by(cells(&["banana", "Apple", "cherry"]), compare_alpha, &[]),
            vec!["Apple", "banana", "cherry"]
        );
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Straße", "STRASSE"), Ordering::Less);
        assert_eq!(locale_cmp("abc", "abc"), Ordering::Equal);
        assert_eq!(locale_cmp("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn test_locale_order_is_total_on_mixed_case() {
        // Titlecase, long s and sharp s share uppercase forms with other
        // letters; the order must still be consistent.
        assert_eq!(locale_cmp("\u{1C5}", "\u{1C6}"), Ordering::Greater);
        assert_eq!(locale_cmp("\u{1C6}", "\u{1C4}"), Ordering::Less);
        assert_eq!(locale_cmp("\u{1C5}", "\u{1C4}"), Ordering::Greater);

        let alphabet: Vec<char> = "sS\u{DF}\u{17F}aA\u{1C5}\u{1C4}\u{1C6}\u{1E9E}".chars().collect();
        let mut words = vec![String::new()];
        for len in 1..=3 {
            let mut next = Vec::new();
            for word in words.iter().filter(|w| w.chars().count() == len - 1) {
                for &c in &alphabet {
                    let mut longer = word.clone();
                    longer.push(c);
                    next.push(longer);
                }
            }
            words.extend(next);
        }

        for a in &words {
            for b in &words {
                assert_eq!(
                    locale_cmp(a, b),
                    locale_cmp(b, a).reverse(),
                    "asymmetric: {a:?} {b:?}"
                );
            }
        }

        let mut sorted = words.clone();
        sorted.sort_by(|a, b| locale_cmp(a, b));
        for (i, a) in sorted.iter().enumerate() {
            for b in &sorted[i + 1..] {
                assert_ne!(locale_cmp(a, b), Ordering::Greater, "{a:?} after {b:?}");
            }
        }
    }

    #[test]
    fn test_alpha_trims_and_reverses_rtl() {
        let a = TextCell::new("  zyx ").rtl();
        let b = TextCell::new("b");
        // "zyx" reversed is "xyz", which still sorts after "b".
        assert_eq!(compare_alpha(&a, &b, &[]), Ordering::Greater);

        let a = TextCell::new("za").rtl();
        assert_eq!(compare_alpha(&a, &b, &[]), Ordering::Less);
    }

    #[test]
    fn test_int_order() {
        assert_eq!(
            sorted_by(cells(&["10", "2", "abc"]), compare_int, &[]),
            vec!["2", "10", "abc"]
        );
        assert_eq!(
            compare_int(&TextCell::new("x"), &TextCell::new("y"), &[]),
            Ordering::Equal
        );
        assert_eq!(
            compare_int(&TextCell::new("-3"), &TextCell::new("1"), &[]),
            Ordering::Less
        );
    }

    #[test]
    fn test_date_order() {
        let args = vec!["yyyy-mm-dd".to_string()];
        assert_eq!(
            sorted_by(cells(&["2020-01-05", "2019-12-31"]), compare_date, &args),
            vec!["2019-12-31", "2020-01-05"]
        );
    }

    #[test]
    fn test_date_invalid_sorts_last() {
        assert_eq!(
            sorted_by(cells(&["soon", "2020-01-05", "1999-01-01"]), compare_date, &[]),
            vec!["1999-01-01", "2020-01-05", "soon"]
        );
    }

    #[test]
    fn test_date_custom_pattern() {
        let args = vec!["dd/mm/yyyy".to_string()];
        assert_eq!(
            sorted_by(cells(&["01/02/2020", "31/01/2020"]), compare_date, &args),
            vec!["31/01/2020", "01/02/2020"]
        );
    }

    #[test]
    fn test_value_order() {
        let rows = vec![
            TextCell::new("b").with_attribute("data-val", "2"),
            TextCell::new("none"),
            TextCell::new("a")
                .with_attribute("data-val", "1")
                .with_attribute("data-total", "9"),
            TextCell::new("c").with_attribute("data-val", "1"),
        ];
        assert_eq!(sorted_by(rows, compare_value, &[]), vec!["c", "a", "b", "none"]);
    }
}
