//! # Homework Config
//!
//! Configuration for the homework status bot.
//!
//! Configuration is read once from the environment (with `.env` support),
//! validated, and passed explicitly to the components that need it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
