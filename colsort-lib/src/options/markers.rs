//! Header markers.

use serde::{Deserialize, Serialize};

use crate::model::Direction;

/// Indicators the host renders next to a sortable header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Shown on the active column when sorted ascending.
    pub asc: String,
    /// Shown on the active column when sorted descending.
    pub desc: String,
    /// Shown on every other sortable column.
    pub unsorted: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            asc: "\u{2193}".to_string(),
            desc: "\u{2191}".to_string(),
            unsorted: "\u{2195}".to_string(),
        }
    }
}

impl Markers {
    /// Creates markers with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ascending marker.
    pub fn with_asc(mut self, marker: impl Into<String>) -> Self {
        self.asc = marker.into();
        self
    }

    /// Sets the descending marker.
    pub fn with_desc(mut self, marker: impl Into<String>) -> Self {
        self.desc = marker.into();
        self
    }

    /// Sets the unsorted marker.
    pub fn with_unsorted(mut self, marker: impl Into<String>) -> Self {
        self.unsorted = marker.into();
        self
    }

    /// The marker for a column in the given state.
    pub fn for_direction(&self, direction: Option<Direction>) -> &str {
        match direction {
            Some(Direction::Asc) => &self.asc,
            Some(Direction::Desc) => &self.desc,
            None => &self.unsorted,
        }
    }
}
