//! Row handles.

use super::Cell;

/// A body row: an ordered sequence of cells addressed by column index.
///
/// The engine only ever moves rows around; it never looks at a row's identity
/// or changes its content.
pub trait Row {
    /// The cell at `column`, or `None` if the row is too short.
    fn cell(&self, column: usize) -> Option<&dyn Cell>;

    /// Number of cells in the row.
    fn cell_count(&self) -> usize;
}

impl<C: Cell> Row for Vec<C> {
    fn cell(&self, column: usize) -> Option<&dyn Cell> {
        self.get(column).map(|c| c as &dyn Cell)
    }

    fn cell_count(&self) -> usize {
        self.len()
    }
}

impl<C: Cell, const N: usize> Row for [C; N] {
    fn cell(&self, column: usize) -> Option<&dyn Cell> {
        self.get(column).map(|c| c as &dyn Cell)
    }

    fn cell_count(&self) -> usize {
        N
    }
}

impl<R: Row + ?Sized> Row for Box<R> {
    fn cell(&self, column: usize) -> Option<&dyn Cell> {
        (**self).cell(column)
    }

    fn cell_count(&self) -> usize {
        (**self).cell_count()
    }
}
