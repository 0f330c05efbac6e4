//! Declarative field patterns for every series and entity kind.
//!
//! A [`PatternSet`] says *what* to extract from one table row; the generic
//! matcher in [`crate::extract`] says *how*. Adding a field or a series only
//! means registering patterns here.

mod config;
mod set;
mod table;

pub use config::create_standard_patterns;
pub use set::{FieldPattern, PatternSet, ValueFormat};
pub use table::PatternTable;
