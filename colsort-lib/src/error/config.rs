//! Configuration error types

/// Non-fatal configuration problems found while setting up a session.
///
/// These never abort a sort. They are handed to a
/// [`DiagnosticSink`](super::DiagnosticSink) and the session carries on in a
/// degraded form (excess specs dropped, unknown opcodes sorting as a no-op).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// More column specs were given than the header has columns.
    #[error("too many sort columns specified: {specs} specs for {columns} columns")]
    TooManySpecs {
        /// Number of specs supplied.
        specs: usize,
        /// Number of header columns.
        columns: usize,
    },

    /// A column spec names an opcode with no registered comparator.
    #[error("comparison function not found for rule \"{opcode}\" (column {column})")]
    UnknownComparator {
        /// Column the spec belongs to.
        column: usize,
        /// The opcode as written in the spec.
        opcode: String,
    },

    /// The initial-sort option could not be understood.
    #[error("invalid initial sort \"{0}\"")]
    InvalidInitialSort(String),

    /// The initial-sort option points past the last header column.
    #[error("initial sort column {column} is out of range ({columns} columns)")]
    ColumnOutOfRange {
        /// Requested column.
        column: usize,
        /// Number of header columns.
        columns: usize,
    },

    /// A declarative option had a value that could not be applied.
    #[error("invalid value \"{value}\" for option \"{key}\"")]
    InvalidOption {
        /// Normalised option key.
        key: String,
        /// Raw attribute value.
        value: String,
    },
}

impl ConfigError {
    /// Creates an unknown comparator error.
    pub fn unknown_comparator(column: usize, opcode: impl Into<String>) -> Self {
        Self::UnknownComparator {
            column,
            opcode: opcode.into(),
        }
    }

    /// Creates an invalid option error.
    pub fn invalid_option(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the column this error is attached to, if any.
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::UnknownComparator { column, .. } | Self::ColumnOutOfRange { column, .. } => {
                Some(*column)
            }
            _ => None,
        }
    }
}
