//! Error types

mod config;
mod shape;
mod sink;

pub use config::*;
pub use shape::*;
pub use sink::*;
