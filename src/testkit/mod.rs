//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`icon`] — [`IconSource`](crate::port::IconSource) fakes and a PNG builder.
//! - [`market`] — [`MarketSource`](crate::port::MarketSource) fakes.
//! - [`domain`] — Snapshot builders.
//! - [`config`] — Configurations rooted in a scratch directory.

pub mod config;
pub mod domain;
pub mod icon;
pub mod market;
