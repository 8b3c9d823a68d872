//! Error types for read and validation failures.
//!
//! This module provides [`ReadError`] for a single problem, [`ReadErrors`]
//! for a non-empty set of problems found at one location, and
//! [`ErrorBuilders`], the injection point callers use to customize the errors
//! the engine creates on its own.

mod builders;
mod read_error;

pub use builders::ErrorBuilders;
pub use read_error::{ReadError, ReadErrors};
