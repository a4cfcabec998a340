//! Table sessions.
//!
//! A [`SortSession`] is one sortable table: it owns the body rows, one
//! comparator per header column and the single active sort state. Hosts build
//! one with [`SessionBuilder`], forward header clicks to
//! [`SortSession::click`], and re-render from the [`SortEvent`] passed to
//! their listeners.

mod builder;
mod event;
mod state;

pub use builder::SessionBuilder;
pub use event::{HeaderView, SortEvent, TABLE_ARIA};
pub use state::SortState;

use std::fmt;

use crate::compare::ColumnComparator;
use crate::error::ShapeError;
use crate::model::{Direction, Row};
use crate::options::{Markers, SessionOptions};
use crate::reorder;

type Listener<R> = Box<dyn FnMut(&SortEvent<'_, R>)>;

/// Per-column state, addressed by header index.
#[derive(Debug, Clone)]
struct ColumnState {
    comparator: ColumnComparator,
    direction: Option<Direction>,
}

/// A sortable table instance.
pub struct SortSession<R: Row> {
    options: SessionOptions,
    columns: Vec<ColumnState>,
    state: SortState,
    rows: Vec<R>,
    listeners: Vec<Listener<R>>,
}

impl<R: Row> SortSession<R> {
    pub(crate) fn new(
        options: SessionOptions,
        comparators: Vec<ColumnComparator>,
        rows: Vec<R>,
        listeners: Vec<Listener<R>>,
    ) -> Self {
        let columns = comparators
            .into_iter()
            .map(|comparator| ColumnState {
                comparator,
                direction: None,
            })
            .collect();
        Self {
            options,
            columns,
            state: SortState::Idle,
            rows,
            listeners,
        }
    }

    /// Handle a click on a header: toggle if the column is already
    /// ascending, otherwise sort it ascending.
    pub fn click(&mut self, column: usize) -> Result<SortState, ShapeError> {
        self.sort(column, None)
    }

    /// Sort by `column`.
    ///
    /// With `Some(direction)` the column is sorted in that direction no matter
    /// its current state; with `None` this behaves like a click.
    pub fn sort(
        &mut self,
        column: usize,
        direction: Option<Direction>,
    ) -> Result<SortState, ShapeError> {
        let Some(target) = self.columns.get(column) else {
            return Err(ShapeError::ColumnOutOfRange {
                column,
                columns: self.columns.len(),
            });
        };
        target.comparator.check_shape(&self.rows)?;
        if !target.comparator.is_sortable() {
            log::debug!("column {} has no sort spec, order is kept", column);
        }

        let previous = self.state.column();
        let next = self.state.next(column, direction);
        let Some((column, direction)) = next.active() else {
            return Ok(self.state);
        };

        for (index, state) in self.columns.iter_mut().enumerate() {
            state.direction = (index == column).then_some(direction);
        }

        let comparator = &self.columns[column].comparator;
        let rows = std::mem::take(&mut self.rows);
        log::trace!("reordering {} rows by column {}", rows.len(), column);
        let mut rows = reorder(rows, |a, b| comparator.compare_rows(a, b));
        if direction == Direction::Desc {
            rows.reverse();
        }
        self.rows = rows;
        self.state = next;

        log::debug!(
            "sorted column {} {} (previous: {:?})",
            column,
            direction,
            previous
        );

        self.notify(column, direction, previous);
        Ok(self.state)
    }

    /// Sort again by the active column in its current direction.
    ///
    /// Use after [`replace_rows`](Self::replace_rows). Does nothing while idle.
    pub fn resort(&mut self) -> Result<SortState, ShapeError> {
        match self.state.active() {
            Some((column, direction)) => self.sort(column, Some(direction)),
            None => Ok(self.state),
        }
    }

    /// Register a listener called after every completed sort.
    pub fn on_sorted(&mut self, listener: impl FnMut(&SortEvent<'_, R>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current sort state.
    pub fn state(&self) -> SortState {
        self.state
    }

    /// Direction of `column`; `None` when it is not the active column.
    pub fn direction(&self, column: usize) -> Option<Direction> {
        self.columns.get(column).and_then(|c| c.direction)
    }

    /// Body rows in current order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Replace the body rows (e.g. after the host re-read the table).
    ///
    /// The new rows are taken as-is; call [`resort`](Self::resort) to apply
    /// the active sort to them.
    pub fn replace_rows(&mut self, rows: Vec<R>) -> Vec<R> {
        std::mem::replace(&mut self.rows, rows)
    }

    /// Consume the session, returning the rows in current order.
    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }

    /// Number of header columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The cached comparator for `column`.
    pub fn comparator(&self, column: usize) -> Option<&ColumnComparator> {
        self.columns.get(column).map(|c| &c.comparator)
    }

    /// Resolved options.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Resolved header markers.
    pub fn markers(&self) -> &Markers {
        &self.options.markers
    }

    /// Render state of one header column.
    pub fn header(&self, column: usize) -> Option<HeaderView<'_>> {
        let state = self.columns.get(column)?;
        let sortable = state.comparator.is_sortable();
        Some(HeaderView {
            column,
            sortable,
            direction: state.direction,
            marker: sortable.then(|| self.options.markers.for_direction(state.direction)),
        })
    }

    /// Render state of every header column.
    pub fn headers(&self) -> Vec<HeaderView<'_>> {
        (0..self.columns.len())
            .filter_map(|column| self.header(column))
            .collect()
    }

    fn notify(&mut self, column: usize, direction: Direction, previous: Option<usize>) {
        if self.listeners.is_empty() {
            return;
        }

        let mut listeners = std::mem::take(&mut self.listeners);
        {
            let event = SortEvent {
                column,
                direction,
                previous,
                rows: &self.rows,
                headers: self.headers(),
            };
            for listener in &mut listeners {
                listener(&event);
            }
        }
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }
}

impl<R: Row> fmt::Debug for SortSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortSession")
            .field("options", &self.options)
            .field("columns", &self.columns)
            .field("state", &self.state)
            .field("rows", &self.rows.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
