//! Per-column comparator factory.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{ConfigError, DiagnosticSink, ShapeError};
use crate::model::{Cell, Row};

use super::registry::{Comparator, ComparatorRegistry, neutral};
use super::spec::ColumnSpec;

/// Row comparator for one column, built once from the column's spec.
///
/// Rules registered with
/// [`register_prepared`](super::ComparatorRegistry::register_prepared) are
/// prepared here, once, with the spec's arguments.
///
/// Resolution of the spec's head:
/// 1. the head itself, if registered (not reversed);
/// 2. otherwise, if the second character is the `r` flag, the head without
///    it (reversed);
/// 3. otherwise the rule is unknown: the comparator is neutral and the
///    problem is reported once to the diagnostic sink.
#[derive(Clone)]
pub struct ColumnComparator {
    column: usize,
    spec: Option<ColumnSpec>,
    opcode: Option<String>,
    reversed: bool,
    compare: Comparator,
}

impl ColumnComparator {
    /// Build the comparator for `column` from its spec.
    pub fn build(
        column: usize,
        spec: ColumnSpec,
        registry: &ComparatorRegistry,
        sink: &dyn DiagnosticSink,
    ) -> Self {
        let resolved = match registry.prepare(spec.head(), spec.args()) {
            Some(compare) => Some((spec.head().to_string(), false, compare)),
            None => spec.unflagged_head().and_then(|code| {
                let compare = registry.prepare(&code, spec.args())?;
                Some((code, true, compare))
            }),
        };

        match resolved {
            Some((opcode, reversed, compare)) => {
                log::debug!(
                    "column {} sorts with \"{}\"{}",
                    column,
                    opcode,
                    if reversed { " (reversed)" } else { "" }
                );
                Self {
                    column,
                    spec: Some(spec),
                    opcode: Some(opcode),
                    reversed,
                    compare,
                }
            }
            None => {
                sink.report(&ConfigError::unknown_comparator(column, spec.head()));
                Self {
                    column,
                    spec: Some(spec),
                    opcode: None,
                    reversed: false,
                    compare: neutral(),
                }
            }
        }
    }

    /// Comparator for a column without a spec: every row compares equal.
    pub fn unsortable(column: usize) -> Self {
        Self {
            column,
            spec: None,
            opcode: None,
            reversed: false,
            compare: neutral(),
        }
    }

    /// The column this comparator reads.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The column's spec, if it has one.
    pub fn spec(&self) -> Option<&ColumnSpec> {
        self.spec.as_ref()
    }

    /// Whether the column has a spec (and so a sort control).
    pub fn is_sortable(&self) -> bool {
        self.spec.is_some()
    }

    /// The resolved registry code, `None` for neutral comparators.
    pub fn opcode(&self) -> Option<&str> {
        self.opcode.as_deref()
    }

    /// Whether the spec's reversal flag is in effect.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Compare two cells of this column.
    pub fn compare_cells(&self, a: &dyn Cell, b: &dyn Cell) -> Ordering {
        let args = self.spec.as_ref().map(ColumnSpec::args).unwrap_or_default();
        let order = (self.compare)(a, b, args);
        if self.reversed { order.reverse() } else { order }
    }

    /// Compare two rows by this column.
    ///
    /// Rows are expected to have been checked with
    /// [`check_shape`](Self::check_shape); a row without the cell compares
    /// equal.
    pub fn compare_rows<R: Row + ?Sized>(&self, a: &R, b: &R) -> Ordering {
        match (a.cell(self.column), b.cell(self.column)) {
            (Some(a), Some(b)) => self.compare_cells(a, b),
            _ => Ordering::Equal,
        }
    }

    /// Check that every row has a cell for this column.
    pub fn check_shape<R: Row>(&self, rows: &[R]) -> Result<(), ShapeError> {
        match rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.cell_count() <= self.column)
        {
            Some((index, row)) => Err(ShapeError::MissingCell {
                row: index,
                column: self.column,
                cells: row.cell_count(),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for ColumnComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnComparator")
            .field("column", &self.column)
            .field("spec", &self.spec)
            .field("opcode", &self.opcode)
            .field("reversed", &self.reversed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectSink;

    fn build(column: usize, spec: &str, sink: &CollectSink) -> ColumnComparator {
        let registry = ComparatorRegistry::new();
        ColumnComparator::build(column, ColumnSpec::parse(spec).unwrap(), &registry, sink)
    }

    #[test]
    fn test_direct_opcode() {
        let sink = CollectSink::new();
        let compare = build(1, "int", &sink);
        assert_eq!(compare.opcode(), Some("int"));
        assert!(!compare.is_reversed());
        assert_eq!(
            compare.compare_rows(&vec!["x", "2"], &vec!["y", "10"]),
            Ordering::Less
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_reverse_flag() {
        let sink = CollectSink::new();
        let compare = build(0, "ir", &sink);
        assert_eq!(compare.opcode(), Some("i"));
        assert!(compare.is_reversed());
        assert_eq!(
            compare.compare_rows(&vec!["2"], &vec!["10"]),
            Ordering::Greater
        );
    }

    #[test]
    fn test_registered_head_is_not_reversed() {
        let mut registry = ComparatorRegistry::new();
        registry.register("ar", |_, _, _| Ordering::Less);
        let sink = CollectSink::new();
        let compare =
            ColumnComparator::build(0, ColumnSpec::parse("ar").unwrap(), &registry, &sink);
        assert_eq!(compare.opcode(), Some("ar"));
        assert!(!compare.is_reversed());
    }

    #[test]
    fn test_args_reach_comparator() {
        let sink = CollectSink::new();
        let compare = build(0, "dr:dd/mm/yyyy", &sink);
        assert_eq!(
            compare.compare_rows(&vec!["01/02/2020"], &vec!["31/01/2020"]),
            Ordering::Less
        );
    }

    #[test]
    fn test_rule_is_prepared_once_per_column() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

        let prepared = Arc::new(AtomicUsize::new(0));
        let mut registry = ComparatorRegistry::new();
        let counter = Arc::clone(&prepared);
        registry.register_prepared("counted", move |args: &[String]| -> Comparator {
            counter.fetch_add(1, AtomicOrdering::SeqCst);
            let inner = registry_int();
            let args = args.to_vec();
            Arc::new(move |a: &dyn Cell, b: &dyn Cell, _: &[String]| inner(a, b, &args))
        });

        let sink = CollectSink::new();
        let compare =
            ColumnComparator::build(0, ColumnSpec::parse("counted").unwrap(), &registry, &sink);
        let mut rows: Vec<Vec<String>> = (0..200).rev().map(|n| vec![n.to_string()]).collect();
        rows.sort_by(|a, b| compare.compare_rows(a, b));

        assert_eq!(rows[0], vec!["0".to_string()]);
        assert_eq!(prepared.load(AtomicOrdering::SeqCst), 1);
    }

    #[test]
    fn test_date_pattern_comes_from_spec_args() {
        let sink = CollectSink::new();
        let compare = build(0, "d:mm/dd/yyyy", &sink);
        assert_eq!(
            compare.compare_rows(&vec!["12/31/2019"], &vec!["01/05/2020"]),
            Ordering::Less
        );
        assert!(sink.is_empty());
    }

    fn registry_int() -> Comparator {
        ComparatorRegistry::new().prepare("int", &[]).unwrap()
    }

    #[test]
    fn test_unknown_opcode_reports_once() {
        let sink = CollectSink::new();
        let compare = build(2, "zzz", &sink);
        assert_eq!(compare.opcode(), None);
        assert!(compare.is_sortable());
        assert_eq!(
            compare.compare_rows(&vec!["a", "b", "c"], &vec!["a", "b", "a"]),
            Ordering::Equal
        );
        assert_eq!(sink.errors(), vec![ConfigError::unknown_comparator(2, "zzz")]);
    }

    #[test]
    fn test_check_shape() {
        let compare = ColumnComparator::unsortable(1);
        assert!(!compare.is_sortable());
        assert!(compare.check_shape(&[vec!["a", "b"]]).is_ok());
        assert_eq!(
            compare.check_shape(&[vec!["a", "b"], vec!["a"]]),
            Err(ShapeError::MissingCell {
                row: 1,
                column: 1,
                cells: 1
            })
        );
    }
}
