//! Sort-state and comparison engine for click-to-sort tables.
//!
//! A host (DOM layer, TUI, CLI) hands a [`session::SortSession`] its body rows
//! and per-column sort specifications; the session reorders the rows whenever a
//! header is clicked or a sort is requested programmatically, and tells the host
//! which header is active so it can update markers and `aria-sort`.
//!
//! # Example
//!
//! ```
//! use colsort_lib::options::SessionOptions;
//! use colsort_lib::session::SessionBuilder;
//!
//! let rows = vec![vec!["pear", "10"], vec!["apple", "2"], vec!["fig", "abc"]];
//! let options = SessionOptions::default().with_sort(["alpha", "int"]);
//!
//! let mut session = SessionBuilder::new(2, rows).options(options).build().unwrap();
//! assert_eq!(session.rows()[0][0], "apple");
//!
//! session.click(1).unwrap();
//! let ages: Vec<_> = session.rows().iter().map(|r| r[1]).collect();
//! assert_eq!(ages, ["2", "10", "abc"]);
//! ```

pub mod compare;
pub mod error;
pub mod model;
pub mod options;
pub mod session;

mod reorder;

pub use reorder::reorder;
