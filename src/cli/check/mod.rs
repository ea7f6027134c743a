//! Configuration validation commands.

pub mod config;

pub use config::execute_config;
