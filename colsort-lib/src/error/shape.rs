//! Row shape errors

/// A sort request that does not match the table's shape.
///
/// Rows must expose a cell for every column that can be sorted; the session
/// checks this before touching the row order rather than sorting on garbage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// A body row is shorter than the sorted column requires.
    #[error("row {row} has {cells} cells, column {column} requested")]
    MissingCell {
        /// Position of the row in the current order.
        row: usize,
        /// The sorted column.
        column: usize,
        /// Number of cells the row has.
        cells: usize,
    },

    /// The requested column does not exist in the header.
    #[error("column {column} is out of range ({columns} columns)")]
    ColumnOutOfRange {
        /// Requested column.
        column: usize,
        /// Number of header columns.
        columns: usize,
    },
}
