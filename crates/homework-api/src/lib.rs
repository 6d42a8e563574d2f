//! # Homework API
//!
//! Access to the Practicum homework statuses API.
//!
//! This crate fetches the raw answer, validates its shape into typed
//! submission records, and renders the status-change message for a record.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod response;
pub mod status;

pub use client::*;
pub use response::*;
pub use status::*;
