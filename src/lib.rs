//! Paid Throne break-time earnings engine
//!
//! This crate works out how many minutes a worker spends on break per day,
//! month and year, how much of their wage corresponds to that time, and
//! folds many submissions into kingdom-wide statistics and top-five
//! rankings. The [`calculation`] functions are pure; the [`api`] and
//! [`store`] modules wrap them in an HTTP service with background
//! persistence.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;
