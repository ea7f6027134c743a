//! poewise - static Path of Exile 2 currency exchange dashboard.
//!
//! Fetches the poe.ninja currency overview, enriches each currency with a
//! localized name, a locally cached icon and decorative trend fields, and
//! renders everything into one static HTML page with a client-side
//! Chaos/Divine calculator.
//!
//! # Modules
//!
//! - [`domain`] - Snapshot, anchor prices, naming, synthetic trend, insight text
//! - [`port`] - `MarketSource` and `IconSource` traits
//! - [`adapter`] - poe.ninja HTTP implementations of the ports
//! - [`application`] - Icon cache, page renderer, site builder
//! - [`infrastructure`] - Configuration loading and logging setup
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use poewise::cli::build::wire;
//! use poewise::infrastructure::config::settings::Config;
//!
//! # async fn run() -> poewise::error::Result<()> {
//! let builder = wire(&Config::default())?;
//! let report = builder.build().await?;
//! println!("{} rows", report.rows_rendered);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
