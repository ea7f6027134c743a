//! Currency-overview response types.
//!
//! Example payload (trimmed):
//! ```json
//! {"lines":[{"currencyTypeName":"Divine Orb","chaosEquivalent":180.5,"detailsId":"divine-orb"}],
//!  "currencyDetails":[{"name":"Divine Orb","icon":"https://web.poecdn.com/.../CurrencyModValues.png"}]}
//! ```

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::domain::{CurrencyLine, MarketSnapshot};
use crate::error::{Error, Result};

/// Body of `GET /api/data/currencyoverview`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyOverviewResponse {
    #[serde(default)]
    pub lines: Vec<NinjaCurrencyLine>,
    #[serde(default)]
    pub currency_details: Vec<NinjaCurrencyDetail>,
}

/// One priced currency.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NinjaCurrencyLine {
    pub currency_type_name: Option<String>,
    pub chaos_equivalent: Option<f64>,
    pub icon: Option<String>,
    pub details_id: Option<String>,
}

/// Static metadata for a currency, including its icon.
#[derive(Debug, Clone, Deserialize)]
pub struct NinjaCurrencyDetail {
    pub name: String,
    pub icon: Option<String>,
}

/// Snapshot converted from a response, plus how many lines were unusable.
#[derive(Debug)]
pub struct Conversion {
    pub snapshot: MarketSnapshot,
    pub dropped: usize,
}

impl CurrencyOverviewResponse {
    /// Convert to a domain snapshot.
    ///
    /// Lines without a name are dropped. A missing price counts as `0`.
    /// Lines without an inline icon borrow the one listed in
    /// `currencyDetails` under the same name.
    #[must_use]
    pub fn into_snapshot(self) -> Conversion {
        let icons: HashMap<String, String> = self
            .currency_details
            .into_iter()
            .filter_map(|detail| detail.icon.map(|icon| (detail.name, icon)))
            .collect();

        let total = self.lines.len();
        let lines: Vec<CurrencyLine> = self
            .lines
            .into_iter()
            .filter_map(|line| {
                let name = line.currency_type_name.filter(|n| !n.is_empty())?;
                let icon = line
                    .icon
                    .filter(|icon| !icon.is_empty())
                    .or_else(|| icons.get(&name).cloned());
                Some(CurrencyLine {
                    chaos_equivalent: line.chaos_equivalent.unwrap_or(0.0),
                    icon_url: icon,
                    name,
                })
            })
            .collect();

        Conversion {
            dropped: total - lines.len(),
            snapshot: MarketSnapshot::new(lines),
        }
    }
}

impl Conversion {
    /// Snapshot to build from, rejecting an overview with no usable lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] when every line was dropped or none were sent.
    pub fn into_usable(self) -> Result<MarketSnapshot> {
        if self.dropped > 0 {
            warn!(
                dropped = self.dropped,
                "Skipped overview lines without a currency name"
            );
        }
        if self.snapshot.is_empty() {
            return Err(Error::Fetch("currency overview has no usable lines".into()));
        }
        Ok(self.snapshot)
    }
}
