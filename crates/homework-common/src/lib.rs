//! # Homework Common
//!
//! Shared error taxonomy, types, and logging for the homework status bot.
//!
//! This crate provides the foundational types used across all other crates
//! in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{HomeworkError, Result};
pub use logging::{init_logging, LoggingConfig};
pub use types::*;
