//! Synthetic trend and advice fields.
//!
//! There is no trend data source behind these values. They are sampled
//! uniformly at random on every build and exist purely as page decoration;
//! nothing here is a forecast.

use rand::Rng;

/// Lower bound (inclusive) of the sampled trend, in percent.
pub const TREND_MIN: f64 = -1.2;

/// Upper bound (exclusive) of the sampled trend, in percent.
pub const TREND_MAX: f64 = 1.5;

/// Trend above which the row is labelled as a buy.
pub const BUY_THRESHOLD: f64 = 1.0;

/// Direction shown next to a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// CSS class used by the page template.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Up => "trend-up",
            Self::Down => "trend-down",
        }
    }
}

/// Binary recommendation derived from the trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    Buy,
    Hold,
}

impl Advice {
    /// Label rendered on the board.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Buy => "建议买入",
            Self::Hold => "持有",
        }
    }
}

/// A decorative trend percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticTrend {
    percent: f64,
}

impl SyntheticTrend {
    /// Sample a trend from `[TREND_MIN, TREND_MAX)`.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            percent: rng.gen_range(TREND_MIN..TREND_MAX),
        }
    }

    #[must_use]
    pub const fn from_percent(percent: f64) -> Self {
        Self { percent }
    }

    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.percent > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    #[must_use]
    pub fn advice(&self) -> Advice {
        if self.percent > BUY_THRESHOLD {
            Advice::Buy
        } else {
            Advice::Hold
        }
    }

    /// Signed percentage with one decimal, e.g. `+0.7%`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{:+.1}%", self.percent)
    }
}
