//! Sort-state machine.

use crate::model::Direction;

/// Which column drives the table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    /// Nothing sorted yet.
    #[default]
    Idle,
    /// Sorted by `column` in `direction`.
    Active {
        /// Active header column.
        column: usize,
        /// Current direction of that column.
        direction: Direction,
    },
}

impl SortState {
    /// State after a sort request on `column`.
    ///
    /// With an explicit `requested` direction the toggle is bypassed.
    /// Otherwise a request on the column that is already ascending flips it
    /// to descending, and every other request starts ascending.
    pub fn next(self, column: usize, requested: Option<Direction>) -> Self {
        let direction = match (requested, self) {
            (Some(direction), _) => direction,
            (
                None,
                Self::Active {
                    column: active,
                    direction: Direction::Asc,
                },
            ) if active == column => Direction::Desc,
            (None, _) => Direction::Asc,
        };
        Self::Active { column, direction }
    }

    /// The active column, if any.
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Active { column, .. } => Some(*column),
        }
    }

    /// Direction of `column`: `None` unless it is the active column.
    pub fn direction_of(&self, column: usize) -> Option<Direction> {
        match *self {
            Self::Active {
                column: active,
                direction,
            } if active == column => Some(direction),
            _ => None,
        }
    }

    /// `(column, direction)` of the active column.
    pub fn active(&self) -> Option<(usize, Direction)> {
        match *self {
            Self::Idle => None,
            Self::Active { column, direction } => Some((column, direction)),
        }
    }
}
