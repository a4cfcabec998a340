//! Value extraction from cells.

use crate::model::Cell;

/// Trimmed text of a cell, reversed character-wise for right-to-left cells.
///
/// The reversal is a literal reversal of the character sequence so that RTL
/// text compares from its visual start; it is not bidi reordering.
pub fn directional_text(cell: &dyn Cell) -> String {
    let text = cell.text();
    let trimmed = text.trim();
    if cell.is_rtl() {
        trimmed.chars().rev().collect()
    } else {
        trimmed.to_string()
    }
}

/// Lenient base-10 integer parse.
///
/// Skips leading whitespace, accepts one optional sign, then reads leading
/// digits and ignores whatever follows (`"12px"` is `12`). Returns `None` when
/// no digit is found. Values outside `i64` saturate.
pub fn parse_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let magnitude = digits.as_bytes()[..len].iter().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Numeric value of a named cell attribute.
///
/// Missing attributes and values that are not finite numbers yield `None`.
pub fn attribute_number(cell: &dyn Cell, name: &str) -> Option<f64> {
    let value = cell.attribute(name)?;
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}
