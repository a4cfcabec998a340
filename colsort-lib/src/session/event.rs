//! What the host sees after a sort.

use crate::model::{Direction, Row};

/// Table-level ARIA attributes a host should set once on the table element
/// so screen readers announce the re-ordered body.
pub const TABLE_ARIA: [(&str, &str); 3] = [
    ("aria-atomic", "true"),
    ("aria-live", "polite"),
    ("aria-relevant", "all"),
];

/// Render state of one header column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderView<'a> {
    /// Header column index.
    pub column: usize,
    /// Whether the column has a sort control.
    pub sortable: bool,
    /// Direction if this is the active column.
    pub direction: Option<Direction>,
    /// Marker to render; `None` for columns without a sort control.
    pub marker: Option<&'a str>,
}

impl HeaderView<'_> {
    /// Value for the header's `aria-sort` attribute; `None` means remove it.
    pub fn aria_sort(&self) -> Option<&'static str> {
        self.direction.map(Direction::aria_sort)
    }
}

/// Notification sent to listeners after every completed sort.
#[derive(Debug)]
pub struct SortEvent<'a, R: Row> {
    /// The column that was sorted.
    pub column: usize,
    /// Its new direction.
    pub direction: Direction,
    /// The column that was active before this sort.
    pub previous: Option<usize>,
    /// Body rows in their new order.
    pub rows: &'a [R],
    /// One view per header column.
    pub headers: Vec<HeaderView<'a>>,
}

impl<R: Row> SortEvent<'_, R> {
    /// The previously active column, if it is now reset to unsorted.
    pub fn reset_column(&self) -> Option<usize> {
        self.previous.filter(|&previous| previous != self.column)
    }
}
