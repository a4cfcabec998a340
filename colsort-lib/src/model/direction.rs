//! Sort direction.

use serde::{Deserialize, Serialize};

/// Direction of the active sort column.
///
/// A column that is not driving the table order has no direction at all;
/// sessions model that as `None` in an `Option<Direction>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Value of the header's `aria-sort` attribute.
    pub fn aria_sort(self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }

    /// Parse the `A`/`D` suffix of an initial-sort value.
    ///
    /// Only the uppercase letters count; any other character is not a suffix.
    pub fn from_suffix(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Asc),
            'D' => Some(Self::Desc),
            _ => None,
        }
    }

    /// The `A`/`D` suffix for this direction.
    pub fn suffix(self) -> char {
        match self {
            Self::Asc => 'A',
            Self::Desc => 'D',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "ASC"),
            Self::Desc => write!(f, "DESC"),
        }
    }
}
