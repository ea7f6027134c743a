//! Decorative market commentary for the page footer.

use rand::seq::SliceRandom;
use rand::Rng;

use super::format::group_thousands;

const OPENINGS: &[&str] = &[
    "Market analysis suggests",
    "Current economic telemetry shows",
    "Latest trade data indicates",
];

const FORECASTS: &[&str] = &[
    "Order books near the top of the board look balanced.",
    "Listing volume has held steady across recent snapshots.",
    "High-tier supply remains thin compared to demand.",
];

const ADVISORIES: &[&str] = &[
    "Watch for liquidity shifts.",
    "Consider long-term asset holding.",
    "Market volatility is low.",
];

/// Trailer appended to every insight paragraph.
pub const KEYWORDS_TRAILER: &str =
    "<br><br><strong>Keywords:</strong> PoE 2 Trade, Divine Price, Mirror Rate, Economy Analysis.";

/// Build the insight paragraph as an HTML fragment.
///
/// `primary_price` is the Divine Orb price and `reference_price` the Mirror
/// of Kalandra price, both in Chaos.
pub fn generate_insight<R: Rng + ?Sized>(
    primary_price: f64,
    reference_price: f64,
    rng: &mut R,
) -> String {
    let opening = pick(OPENINGS, rng);
    let advisory = pick(ADVISORIES, rng);

    let mut paragraph = format!(
        "{opening} Divine Orbs are trading at {} Chaos, while Mirror of Kalandra holds premium value at {} Chaos.",
        group_thousands(primary_price, 1),
        group_thousands(reference_price, 0),
    );
    if rng.gen_bool(0.5) {
        paragraph.push(' ');
        paragraph.push_str(pick(FORECASTS, rng));
    }
    paragraph.push(' ');
    paragraph.push_str(advisory);
    paragraph.push_str(KEYWORDS_TRAILER);
    paragraph
}

fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}
