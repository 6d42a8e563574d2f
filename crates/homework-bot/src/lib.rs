//! # Homework Bot
//!
//! Telegram bot that reports Practicum homework review status changes.
//!
//! This is the main binary crate. It wires the homework API client and the
//! Telegram sink into the polling loop and runs it forever.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod notifier;
pub mod poller;

pub use bot::*;
pub use error::*;
pub use notifier::*;
pub use poller::*;
