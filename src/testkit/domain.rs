//! Builders for snapshots used across tests.

use crate::domain::{CurrencyLine, MarketSnapshot};

/// Snapshot from `(name, chaos_equivalent)` pairs, each with an icon URL
/// derived from the name.
pub fn snapshot(lines: &[(&str, f64)]) -> MarketSnapshot {
    MarketSnapshot::new(
        lines
            .iter()
            .map(|(name, price)| {
                CurrencyLine::new(*name, *price)
                    .with_icon(format!("https://cdn.test/{}.png", name.replace(' ', "-")))
            })
            .collect(),
    )
}

/// Divine 180, Chaos 1, Mirror 28000, in that API order.
pub fn reference_snapshot() -> MarketSnapshot {
    snapshot(&[
        ("Divine Orb", 180.0),
        ("Chaos Orb", 1.0),
        ("Mirror of Kalandra", 28_000.0),
    ])
}
