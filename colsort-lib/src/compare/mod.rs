//! Comparators: column specs, the registry, built-ins and per-column factory.

mod builtins;
mod date;
mod extract;
mod factory;
mod registry;
mod spec;

pub use builtins::{
    ALPHA_CODES, DATE_CODES, INT_CODES, VALUE_CODES, compare_alpha, compare_date,
    compare_date_with, compare_int, compare_value, locale_cmp,
};
pub use date::{DEFAULT_DATE_PATTERN, DatePattern};
pub use extract::{attribute_number, directional_text, parse_int};
pub use factory::ColumnComparator;
pub use registry::{Comparator, ComparatorRegistry, IntoCodes, Prepare, neutral};
pub use spec::{ColumnSpec, SPEC_SEPARATOR, split_specs};
