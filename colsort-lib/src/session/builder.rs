//! Session construction.

use std::fmt;
use std::sync::Arc;

use crate::compare::{ColumnComparator, ComparatorRegistry};
use crate::error::{DiagnosticSink, LogSink, ShapeError};
use crate::model::Row;
use crate::options::{self, DeclarativeAttributes, SessionOptions};

use super::{Listener, SortEvent, SortSession};

/// Builder for [`SortSession`].
///
/// Building resolves options (defaults < programmatic < declarative), builds
/// and caches one comparator per header column, reports configuration errors
/// to the diagnostic sink and runs the initial sort.
///
/// # Example
///
/// ```
/// use colsort_lib::error::CollectSink;
/// use colsort_lib::model::Direction;
/// use colsort_lib::options::DeclarativeAttributes;
/// use colsort_lib::session::SessionBuilder;
/// use std::sync::Arc;
///
/// let sink = Arc::new(CollectSink::new());
/// let attrs = DeclarativeAttributes::new()
///     .with("data-colsort", "|a|i")
///     .with("data-colsort-initialsort", "2D");
///
/// let session = SessionBuilder::new(3, vec![vec!["x", "b", "1"], vec!["y", "a", "3"]])
///     .attributes(attrs)
///     .diagnostics(sink.clone())
///     .build()
///     .unwrap();
///
/// assert_eq!(session.state().active(), Some((2, Direction::Desc)));
/// assert_eq!(session.rows()[0][2], "3");
/// assert!(sink.is_empty());
/// ```
pub struct SessionBuilder<R: Row> {
    column_count: usize,
    rows: Vec<R>,
    options: Option<SessionOptions>,
    attributes: DeclarativeAttributes,
    registry: Option<Arc<ComparatorRegistry>>,
    sink: Option<Arc<dyn DiagnosticSink>>,
    listeners: Vec<Listener<R>>,
}

impl<R: Row> SessionBuilder<R> {
    /// Start a session for a table with `column_count` header columns and
    /// the given body rows (in document order).
    pub fn new(column_count: usize, rows: Vec<R>) -> Self {
        Self {
            column_count,
            rows,
            options: None,
            attributes: DeclarativeAttributes::default(),
            registry: None,
            sink: None,
            listeners: Vec::new(),
        }
    }

    /// Programmatic options.
    pub fn options(mut self, options: SessionOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Declarative attributes of the table element.
    pub fn attributes(mut self, attributes: DeclarativeAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Comparator registry shared with other sessions.
    ///
    /// Defaults to a fresh registry with the built-in comparators.
    pub fn registry(mut self, registry: Arc<ComparatorRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Where configuration errors go. Defaults to [`LogSink`].
    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Listener for every completed sort, including the initial one.
    pub fn on_sorted(mut self, listener: impl FnMut(&SortEvent<'_, R>) + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Build the session and run the initial sort.
    ///
    /// Configuration problems never fail the build; they go to the sink. The
    /// only error is a body row too short for the initial sort column.
    pub fn build(self) -> Result<SortSession<R>, ShapeError> {
        let sink: Arc<dyn DiagnosticSink> = self.sink.unwrap_or_else(|| Arc::new(LogSink));
        let registry = self
            .registry
            .unwrap_or_else(|| Arc::new(ComparatorRegistry::new()));

        let options = options::resolve(self.options, &self.attributes, sink.as_ref());
        let specs = options::fit_specs(
            options.column_specs(&self.attributes),
            self.column_count,
            sink.as_ref(),
        );

        let comparators = specs
            .iter()
            .enumerate()
            .map(|(column, spec)| match spec {
                Some(spec) => {
                    ColumnComparator::build(column, spec.clone(), &registry, sink.as_ref())
                }
                None => ColumnComparator::unsortable(column),
            })
            .collect();

        let initial = options
            .initial_sort
            .resolve(&specs, self.column_count, sink.as_ref());

        log::debug!(
            "session built: {} columns, {} rows, initial sort {:?}",
            self.column_count,
            self.rows.len(),
            initial
        );

        let mut session = SortSession::new(options, comparators, self.rows, self.listeners);
        if let Some((column, direction)) = initial {
            session.sort(column, Some(direction))?;
        }
        Ok(session)
    }
}

impl<R: Row> fmt::Debug for SessionBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionBuilder")
            .field("column_count", &self.column_count)
            .field("rows", &self.rows.len())
            .field("options", &self.options)
            .field("attributes", &self.attributes)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
