//! Initial sort selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compare::ColumnSpec;
use crate::error::{ConfigError, DiagnosticSink};
use crate::model::Direction;

/// Which column (if any) a session sorts by before the first click.
///
/// Accepted forms, typed or as text:
///
/// | Value            | Meaning |
/// |------------------|---------|
/// | `false`          | no initial sort |
/// | `-1`             | first column with a spec, ascending |
/// | `2`              | column 2, ascending |
/// | `"2A"` / `"2D"`  | column 2, ascending / descending |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawInitialSort", into = "RawInitialSort")]
pub enum InitialSort {
    /// Skip the initial sort.
    Disabled,
    /// Sort by the leftmost column that has a spec.
    #[default]
    Auto,
    /// Sort by a fixed column.
    Column {
        /// Header column index.
        index: usize,
        /// Forced direction; ascending when `None`.
        direction: Option<Direction>,
    },
}

impl InitialSort {
    /// Sort by `index` ascending.
    pub fn column(index: usize) -> Self {
        Self::Column {
            index,
            direction: None,
        }
    }

    /// Sort by `index` in a forced direction.
    pub fn column_with(index: usize, direction: Direction) -> Self {
        Self::Column {
            index,
            direction: Some(direction),
        }
    }

    /// Pick the starting `(column, direction)`.
    ///
    /// `specs` is index-aligned with the header columns. A fixed column with no
    /// spec is still returned: sorting it is a no-op. A fixed column past the
    /// end of the header is reported and skipped.
    pub fn resolve(
        &self,
        specs: &[Option<ColumnSpec>],
        column_count: usize,
        sink: &dyn DiagnosticSink,
    ) -> Option<(usize, Direction)> {
        match *self {
            Self::Disabled => None,
            Self::Auto => specs
                .iter()
                .take(column_count)
                .position(Option::is_some)
                .map(|column| (column, Direction::Asc)),
            Self::Column { index, direction } => {
                if index >= column_count {
                    sink.report(&ConfigError::ColumnOutOfRange {
                        column: index,
                        columns: column_count,
                    });
                    return None;
                }
                Some((index, direction.unwrap_or(Direction::Asc)))
            }
        }
    }
}

impl FromStr for InitialSort {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("false") {
            return Ok(Self::Disabled);
        }
        if value.eq_ignore_ascii_case("true") || value == "-1" {
            return Ok(Self::Auto);
        }

        let invalid = || ConfigError::InvalidInitialSort(s.to_string());
        let len = value.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return Err(invalid());
        }
        let index = value[..len].parse::<usize>().map_err(|_| invalid())?;

        // Leading digits pick the column; only a trailing `A` or `D` forces
        // the direction and anything else after the digits is ignored.
        let direction = value.chars().last().and_then(Direction::from_suffix);
        if direction.is_none() && len < value.len() {
            log::debug!("ignoring \"{}\" after initial sort column", &value[len..]);
        }

        Ok(Self::Column { index, direction })
    }
}

impl fmt::Display for InitialSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "false"),
            Self::Auto => write!(f, "-1"),
            Self::Column {
                index,
                direction: None,
            } => write!(f, "{}", index),
            Self::Column {
                index,
                direction: Some(direction),
            } => write!(f, "{}{}", index, direction.suffix()),
        }
    }
}

/// Wire form of [`InitialSort`]: a flag, an index, or text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawInitialSort {
    Flag(bool),
    Index(i64),
    Text(String),
}

impl TryFrom<RawInitialSort> for InitialSort {
    type Error = ConfigError;

    fn try_from(raw: RawInitialSort) -> Result<Self, Self::Error> {
        match raw {
            RawInitialSort::Flag(false) => Ok(Self::Disabled),
            RawInitialSort::Flag(true) => Ok(Self::Auto),
            RawInitialSort::Index(-1) => Ok(Self::Auto),
            RawInitialSort::Index(index) => usize::try_from(index)
                .map(Self::column)
                .map_err(|_| ConfigError::InvalidInitialSort(index.to_string())),
            RawInitialSort::Text(text) => text.parse(),
        }
    }
}

impl From<InitialSort> for RawInitialSort {
    fn from(initial: InitialSort) -> Self {
        match initial {
            InitialSort::Disabled => Self::Flag(false),
            InitialSort::Auto => Self::Index(-1),
            InitialSort::Column {
                index,
                direction: None,
            } => i64::try_from(index)
                .map(Self::Index)
                .unwrap_or_else(|_| Self::Text(index.to_string())),
            column @ InitialSort::Column { .. } => Self::Text(column.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::split_specs;
    use crate::error::CollectSink;

    #[test]
    fn test_parse_forms() {
        assert_eq!("false".parse::<InitialSort>(), Ok(InitialSort::Disabled));
        assert_eq!("-1".parse::<InitialSort>(), Ok(InitialSort::Auto));
        assert_eq!("3".parse::<InitialSort>(), Ok(InitialSort::column(3)));
        assert_eq!(
            "2D".parse::<InitialSort>(),
            Ok(InitialSort::column_with(2, Direction::Desc))
        );
        assert_eq!(
            " 0A ".parse::<InitialSort>(),
            Ok(InitialSort::column_with(0, Direction::Asc))
        );
        assert_eq!(
            "x".parse::<InitialSort>(),
            Err(ConfigError::InvalidInitialSort("x".into()))
        );
        assert!("D".parse::<InitialSort>().is_err());
        assert!("-2".parse::<InitialSort>().is_err());
    }

    #[test]
    fn test_lowercase_suffix_is_not_a_direction() {
        assert_eq!("2d".parse::<InitialSort>(), Ok(InitialSort::column(2)));
        assert_eq!("1a".parse::<InitialSort>(), Ok(InitialSort::column(1)));
        assert_eq!(
            "3px".parse::<InitialSort>(),
            Ok(InitialSort::column(3))
        );
        assert_eq!(
            "12D".parse::<InitialSort>(),
            Ok(InitialSort::column_with(12, Direction::Desc))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for value in ["false", "-1", "4", "4D", "0A"] {
            let parsed: InitialSort = value.parse().unwrap();
            assert_eq!(parsed.to_string(), value);
        }
    }

    #[test]
    fn test_auto_picks_first_sortable() {
        let sink = CollectSink::new();
        let specs = split_specs("|alpha|int");
        assert_eq!(
            InitialSort::Auto.resolve(&specs, 3, &sink),
            Some((1, Direction::Asc))
        );
        assert_eq!(InitialSort::Auto.resolve(&split_specs("||"), 3, &sink), None);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_fixed_column() {
        let sink = CollectSink::new();
        let specs = split_specs("a|i");
        assert_eq!(
            InitialSort::column_with(1, Direction::Desc).resolve(&specs, 2, &sink),
            Some((1, Direction::Desc))
        );
        assert_eq!(InitialSort::Disabled.resolve(&specs, 2, &sink), None);
    }

    #[test]
    fn test_fixed_column_out_of_range() {
        let sink = CollectSink::new();
        assert_eq!(
            InitialSort::column(5).resolve(&split_specs("a|i"), 2, &sink),
            None
        );
        assert_eq!(
            sink.errors(),
            vec![ConfigError::ColumnOutOfRange {
                column: 5,
                columns: 2
            }]
        );
    }
}
