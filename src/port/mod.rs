//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the build pipeline and the outside world.
//! Adapters implement them for the poe.ninja HTTP API; the testkit
//! implements them with canned data.
//!
//! ```text
//!            ┌──────────────────────────┐
//!            │       Application        │
//!            │  SiteBuilder, IconCache  │
//!            └────────────┬─────────────┘
//!                         │
//!         ┌───────────────┴───────────────┐
//!         ▼                               ▼
//!   ┌─────────────┐                 ┌────────────┐
//!   │MarketSource │                 │ IconSource │
//!   └─────────────┘                 └────────────┘
//! ```

pub mod outbound;

pub use outbound::icon::IconSource;
pub use outbound::market::MarketSource;
