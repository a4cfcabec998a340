//! Session options.
//!
//! Options are resolved once, when a session is built, from three layers:
//! built-in defaults, then the host's programmatic [`SessionOptions`], then
//! the table's [`DeclarativeAttributes`]. Later layers win.

mod attributes;
mod initial;
mod markers;

pub use attributes::{DeclarativeAttributes, NAMESPACE};
pub use initial::InitialSort;
pub use markers::Markers;

use serde::{Deserialize, Serialize};

use crate::compare::{ColumnSpec, SPEC_SEPARATOR};
use crate::error::{ConfigError, DiagnosticSink};

/// Typed session configuration.
///
/// # Example
///
/// ```
/// use colsort_lib::options::{InitialSort, Markers, SessionOptions};
///
/// let options = SessionOptions::default()
///     .with_initial_sort(InitialSort::Disabled)
///     .with_markers(Markers::default().with_unsorted("-"))
///     .with_sort(["alpha", "", "d:dd/mm/yyyy"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Column to sort by before any interaction.
    #[serde(rename = "initialsort", alias = "initialSort", alias = "initial_sort")]
    pub initial_sort: InitialSort,

    /// Header indicators.
    pub markers: Markers,

    /// Per-column specs, index-aligned with the header. When `None` the
    /// table-level spec attribute is used instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<String>>,
}

impl SessionOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial sort.
    pub fn with_initial_sort(mut self, initial_sort: InitialSort) -> Self {
        self.initial_sort = initial_sort;
        self
    }

    /// Sets the markers.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Sets the per-column specs.
    pub fn with_sort<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort = Some(specs.into_iter().map(Into::into).collect());
        self
    }

    /// Apply declarative overrides on top of these options.
    ///
    /// Values that cannot be applied are reported and the previous value is
    /// kept. Unknown keys are ignored.
    pub fn merge_declarative(
        mut self,
        attributes: &DeclarativeAttributes,
        sink: &dyn DiagnosticSink,
    ) -> Self {
        for (key, value) in attributes.options() {
            match key.as_str() {
                "initialsort" => match value.parse() {
                    Ok(initial_sort) => self.initial_sort = initial_sort,
                    Err(error) => sink.report(&error),
                },
                "sort" if value.trim().is_empty() => {
                    sink.report(&ConfigError::invalid_option(key.as_str(), value));
                }
                "sort" => {
                    self.sort = Some(value.split(SPEC_SEPARATOR).map(str::to_string).collect());
                }
                "markersasc" => self.markers.asc = value.to_string(),
                "markersdesc" => self.markers.desc = value.to_string(),
                "markersunsorted" => self.markers.unsorted = value.to_string(),
                _ => log::debug!("ignoring unknown option \"{}\"", key),
            }
        }
        self
    }

    /// Resolve the column specs: the `sort` option, else the table-level
    /// attribute, else nothing.
    pub fn column_specs(&self, attributes: &DeclarativeAttributes) -> Vec<Option<ColumnSpec>> {
        match (&self.sort, attributes.table_spec()) {
            (Some(specs), _) => specs.iter().map(|s| ColumnSpec::parse(s)).collect(),
            (None, Some(raw)) => crate::compare::split_specs(raw),
            (None, None) => Vec::new(),
        }
    }
}

/// Merge the option layers: defaults < `programmatic` < `attributes`.
pub fn resolve(
    programmatic: Option<SessionOptions>,
    attributes: &DeclarativeAttributes,
    sink: &dyn DiagnosticSink,
) -> SessionOptions {
    programmatic
        .unwrap_or_default()
        .merge_declarative(attributes, sink)
}

/// Check that a spec list fits the header, reporting and dropping extras.
pub(crate) fn fit_specs(
    mut specs: Vec<Option<ColumnSpec>>,
    column_count: usize,
    sink: &dyn DiagnosticSink,
) -> Vec<Option<ColumnSpec>> {
    if specs.len() > column_count {
        sink.report(&ConfigError::TooManySpecs {
            specs: specs.len(),
            columns: column_count,
        });
        specs.truncate(column_count);
    }
    specs.resize(column_count, None);
    specs
}
