//! Market-agnostic domain logic: snapshot handling, naming, synthetic
//! trend fields and insight text.

mod currency;
mod format;
mod insight;
mod name;
mod trend;

pub use currency::{
    AnchorPrices, CurrencyLine, CurrencyRow, MarketSnapshot, PRIMARY_ANCHOR, REFERENCE_ANCHOR,
};
pub use format::group_thousands;
pub use insight::{generate_insight, KEYWORDS_TRAILER};
pub use name::{localized_name, sanitize_key, CacheKey};
pub use trend::{Advice, Direction, SyntheticTrend, BUY_THRESHOLD, TREND_MAX, TREND_MIN};
