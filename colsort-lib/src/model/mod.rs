//! Table model: cells, rows and sort direction.

mod cell;
mod direction;
mod row;

pub use cell::{Cell, TextCell};
pub use direction::Direction;
pub use row::Row;
