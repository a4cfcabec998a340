//! Column sort specifications.
//!
//! A spec has the form `<opcode>[r][:<arg1>[,<arg2>...]]`, e.g. `a`, `ir` or
//! `d:dd/mm/yyyy hh:ii`. A table carries one spec per header column, joined
//! by [`SPEC_SEPARATOR`]; an empty segment marks a column as not sortable.

use std::fmt;

/// Separator between per-column specs in a table-level spec string.
pub const SPEC_SEPARATOR: char = '|';

/// Parsed column sort specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    head: String,
    args: Vec<String>,
}

impl ColumnSpec {
    /// Parse a single column spec.
    ///
    /// Returns `None` for an empty (or all-whitespace) spec, which means the
    /// column is not sortable. Only the first `:` separates the head from the
    /// arguments, so arguments may themselves contain `:`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let (head, rest) = match raw.split_once(':') {
            Some((head, rest)) => (head, Some(rest)),
            None => (raw, None),
        };

        let args = match rest {
            Some(rest) if !rest.is_empty() => rest.split(',').map(str::to_string).collect(),
            _ => Vec::new(),
        };

        Some(Self {
            head: head.trim().to_string(),
            args,
        })
    }

    /// The opcode part as written, including any reversal flag.
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Comparator arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether the head carries the reversal flag (`r` as second character).
    pub fn has_reverse_flag(&self) -> bool {
        self.head.chars().nth(1) == Some('r')
    }

    /// The head with the reversal flag removed, if it has one.
    pub fn unflagged_head(&self) -> Option<String> {
        if !self.has_reverse_flag() {
            return None;
        }
        let mut chars = self.head.chars();
        let first = chars.next()?;
        chars.next();
        Some(std::iter::once(first).chain(chars).collect())
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        if !self.args.is_empty() {
            write!(f, ":{}", self.args.join(","))?;
        }
        Ok(())
    }
}

/// Split a table-level spec string into per-column specs.
///
/// ```
/// use colsort_lib::compare::split_specs;
///
/// let specs = split_specs("a||d:dd/mm/yyyy");
/// assert_eq!(specs.len(), 3);
/// assert!(specs[1].is_none());
/// assert_eq!(specs[2].as_ref().unwrap().args(), ["dd/mm/yyyy"]);
/// ```
pub fn split_specs(raw: &str) -> Vec<Option<ColumnSpec>> {
    raw.split(SPEC_SEPARATOR).map(ColumnSpec::parse).collect()
}
