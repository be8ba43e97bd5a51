//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! types and functions with a single `use fuzzy_highlight::prelude::*;` statement.

pub use crate::fuzzy_matcher::RunMatcher;
pub use crate::options::{MatchOptions, MatchOptionsBuilder};
pub use crate::*;
