//! Market snapshot and the per-row view of a currency on the board.

use super::name::localized_name;
use super::trend::SyntheticTrend;

/// Canonical name of the currency that prices the calculator.
pub const PRIMARY_ANCHOR: &str = "Divine Orb";

/// Canonical name of the premium reference currency quoted in the insight.
pub const REFERENCE_ANCHOR: &str = "Mirror of Kalandra";

/// A single currency quote from the market API.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyLine {
    /// Canonical English name.
    pub name: String,
    /// Price in Chaos Orbs.
    pub chaos_equivalent: f64,
    /// Remote icon URL, when the API supplied one.
    pub icon_url: Option<String>,
}

impl CurrencyLine {
    pub fn new(name: impl Into<String>, chaos_equivalent: f64) -> Self {
        Self {
            name: name.into(),
            chaos_equivalent,
            icon_url: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }
}

/// One fetched market payload. Consumed once per build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketSnapshot {
    lines: Vec<CurrencyLine>,
}

impl MarketSnapshot {
    pub fn new(lines: Vec<CurrencyLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[CurrencyLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Price of the first line with the given canonical name.
    #[must_use]
    pub fn price_of(&self, name: &str) -> Option<f64> {
        self.lines
            .iter()
            .find(|line| line.name == name)
            .map(|line| line.chaos_equivalent)
    }

    /// Consume the snapshot, returning lines ordered by descending price.
    ///
    /// The sort is stable, so equal prices keep their API order.
    #[must_use]
    pub fn into_sorted(self) -> Vec<CurrencyLine> {
        let mut lines = self.lines;
        lines.sort_by(|a, b| b.chaos_equivalent.total_cmp(&a.chaos_equivalent));
        lines
    }
}

/// The two anchor prices that drive the calculator and the insight text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPrices {
    /// Divine Orb price in Chaos. Always positive and finite.
    pub primary: f64,
    /// Mirror of Kalandra price in Chaos.
    pub reference: f64,
}

impl AnchorPrices {
    pub const DEFAULT_PRIMARY: f64 = 1.0;
    pub const DEFAULT_REFERENCE: f64 = 0.0;

    /// Look up both anchors, falling back to the defaults when absent.
    ///
    /// The primary anchor is used as a divisor, so a zero, negative or
    /// non-finite quote is replaced by the default as well.
    #[must_use]
    pub fn from_snapshot(snapshot: &MarketSnapshot) -> Self {
        let primary = snapshot
            .price_of(PRIMARY_ANCHOR)
            .filter(|p| p.is_finite() && *p > 0.0)
            .unwrap_or(Self::DEFAULT_PRIMARY);
        let reference = snapshot
            .price_of(REFERENCE_ANCHOR)
            .filter(|p| p.is_finite())
            .unwrap_or(Self::DEFAULT_REFERENCE);
        Self { primary, reference }
    }
}

impl Default for AnchorPrices {
    fn default() -> Self {
        Self {
            primary: Self::DEFAULT_PRIMARY,
            reference: Self::DEFAULT_REFERENCE,
        }
    }
}

/// A currency as it appears on the rendered board.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyRow {
    pub canonical_name: String,
    pub localized_name: String,
    pub price: f64,
    /// Local icon path relative to the page, or a remote URL.
    pub icon_location: String,
    pub trend: SyntheticTrend,
}

impl CurrencyRow {
    pub fn new(line: CurrencyLine, icon_location: impl Into<String>, trend: SyntheticTrend) -> Self {
        Self {
            localized_name: localized_name(&line.name).to_string(),
            canonical_name: line.name,
            price: line.chaos_equivalent,
            icon_location: icon_location.into(),
            trend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(lines: &[(&str, f64)]) -> MarketSnapshot {
        MarketSnapshot::new(
            lines
                .iter()
                .map(|(name, price)| CurrencyLine::new(*name, *price))
                .collect(),
        )
    }

    #[test]
    fn anchors_read_from_snapshot() {
        let snap = snapshot(&[
            ("Chaos Orb", 1.0),
            ("Divine Orb", 180.0),
            ("Mirror of Kalandra", 28_000.0),
        ]);
        let anchors = AnchorPrices::from_snapshot(&snap);
        assert_eq!(anchors.primary, 180.0);
        assert_eq!(anchors.reference, 28_000.0);
    }

    #[test]
    fn anchors_default_when_absent() {
        let snap = snapshot(&[("Chaos Orb", 1.0)]);
        assert_eq!(AnchorPrices::from_snapshot(&snap), AnchorPrices::default());
        assert_eq!(AnchorPrices::default().primary, 1.0);
        assert_eq!(AnchorPrices::default().reference, 0.0);
    }

    #[test]
    fn zero_primary_anchor_falls_back_to_default() {
        let snap = snapshot(&[("Divine Orb", 0.0)]);
        assert_eq!(AnchorPrices::from_snapshot(&snap).primary, 1.0);
    }

    #[test]
    fn first_matching_line_wins() {
        let snap = snapshot(&[("Divine Orb", 150.0), ("Divine Orb", 999.0)]);
        assert_eq!(snap.price_of("Divine Orb"), Some(150.0));
    }

    #[test]
    fn into_sorted_orders_by_descending_price() {
        let snap = snapshot(&[
            ("Divine Orb", 180.0),
            ("Chaos Orb", 1.0),
            ("Mirror of Kalandra", 28_000.0),
        ]);
        let names: Vec<_> = snap.into_sorted().into_iter().map(|l| l.name).collect();
        assert_eq!(names, ["Mirror of Kalandra", "Divine Orb", "Chaos Orb"]);
    }

    #[test]
    fn into_sorted_keeps_api_order_for_ties() {
        let snap = snapshot(&[("A", 2.0), ("B", 5.0), ("C", 2.0)]);
        let names: Vec<_> = snap.into_sorted().into_iter().map(|l| l.name).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn row_uses_localized_name() {
        let row = CurrencyRow::new(
            CurrencyLine::new("Chaos Orb", 1.0),
            "icons/Chaos_Orb.png",
            SyntheticTrend::from_percent(0.5),
        );
        assert_eq!(row.localized_name, "混沌石");
        assert_eq!(row.canonical_name, "Chaos Orb");
        assert_eq!(row.icon_location, "icons/Chaos_Orb.png");
    }
}
