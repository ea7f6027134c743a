//! Page rendering.
//!
//! The dashboard is a single minijinja template embedded at compile time.
//! The template name ends in `.html`, so every interpolated value is
//! HTML-escaped except the insight fragment, which is passed through `safe`.
//! Only `& < > " '` are escaped; icon paths and URLs keep their slashes.

use std::fmt::Write;

use minijinja::value::Value;
use minijinja::{escape_formatter, AutoEscape, Environment, ErrorKind, Output, State};
use serde::Serialize;

use crate::domain::{group_thousands, AnchorPrices, CurrencyRow};
use crate::error::Result;

const TEMPLATE_NAME: &str = "index.html";
const TEMPLATE: &str = include_str!("../../templates/index.html");

/// One board row as the template sees it.
#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub localized_name: String,
    pub canonical_name: String,
    pub icon: String,
    pub price: String,
    pub trend: String,
    pub trend_class: &'static str,
    pub advice: &'static str,
    /// Emit the in-list promo block right after this row.
    pub promo_after: bool,
}

/// Everything the page template needs.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub league: String,
    pub updated_at: String,
    /// Divine Orb price baked into the client-side calculator.
    pub calculator_rate: String,
    pub rows: Vec<RowView>,
    /// Pre-rendered HTML fragment.
    pub insight: String,
}

impl PageView {
    /// Assemble the view, flagging the row after which the promo block goes.
    ///
    /// `promo_after` counts rendered rows; `0` disables the block, and so
    /// does a board shorter than `promo_after`.
    pub fn new(
        league: impl Into<String>,
        updated_at: impl Into<String>,
        anchors: AnchorPrices,
        rows: &[CurrencyRow],
        promo_after: usize,
        insight: impl Into<String>,
    ) -> Self {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| RowView {
                localized_name: row.localized_name.clone(),
                canonical_name: row.canonical_name.clone(),
                icon: row.icon_location.clone(),
                price: group_thousands(row.price, 1),
                trend: row.trend.display(),
                trend_class: row.trend.direction().css_class(),
                advice: row.trend.advice().label(),
                promo_after: promo_after > 0 && i + 1 == promo_after,
            })
            .collect();

        Self {
            league: league.into(),
            updated_at: updated_at.into(),
            calculator_rate: anchors.primary.to_string(),
            rows,
            insight: insight.into(),
        }
    }
}

/// Renders [`PageView`]s into the dashboard document.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Create a renderer with the embedded template loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to parse.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_formatter(html_formatter);
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the full HTML document.
    ///
    /// # Errors
    ///
    /// Returns an error if template evaluation fails.
    pub fn render(&self, page: &PageView) -> Result<String> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        Ok(template.render(page)?)
    }
}

/// Writes strings with the five HTML-significant characters escaped and
/// defers everything else to minijinja's own formatter.
fn html_formatter(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> std::result::Result<(), minijinja::Error> {
    match value.as_str() {
        Some(text) if matches!(state.auto_escape(), AutoEscape::Html) && !value.is_safe() => {
            out.write_str(&escape_html(text))
                .map_err(|_| minijinja::Error::new(ErrorKind::WriteFailure, "page output failed"))
        }
        _ => escape_formatter(out, state, value),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurrencyLine, SyntheticTrend};

    fn row(name: &str, price: f64, trend: f64) -> CurrencyRow {
        CurrencyRow::new(
            CurrencyLine::new(name, price),
            format!("icons/{name}.png"),
            SyntheticTrend::from_percent(trend),
        )
    }

    fn anchors() -> AnchorPrices {
        AnchorPrices {
            primary: 180.0,
            reference: 28_000.0,
        }
    }

    #[test]
    fn renders_rows_and_calculator_constant() {
        let rows = vec![row("Mirror of Kalandra", 28_000.0, 1.3), row("Chaos Orb", 1.0, -0.4)];
        let page = PageView::new("Standard", "2026-01-01 00:00", anchors(), &rows, 5, "Insight.");
        let html = PageRenderer::new().unwrap().render(&page).unwrap();

        assert!(html.contains("const DIV = 180;"));
        assert!(html.contains("卡兰德的魔镜"));
        assert!(html.contains("28,000.0"));
        assert!(html.contains("+1.3%"));
        assert!(html.contains("建议买入"));
        assert!(html.contains("trend-down"));
        assert!(html.contains("更新: 2026-01-01 00:00"));
        assert!(html.contains("Insight."));
    }

    #[test]
    fn promo_block_follows_configured_row() {
        let rows: Vec<_> = (0..7)
            .map(|i| row(&format!("Orb {i}"), 100.0 - f64::from(i), 0.1))
            .collect();
        let page = PageView::new("Standard", "now", anchors(), &rows, 5, "");
        assert_eq!(page.rows.iter().filter(|r| r.promo_after).count(), 1);
        assert!(page.rows[4].promo_after);

        let html = PageRenderer::new().unwrap().render(&page).unwrap();
        let promo = html.find("in-list-promo").unwrap();
        assert!(html.find("Orb 4").unwrap() < promo);
        assert!(promo < html.find("Orb 5").unwrap());
    }

    #[test]
    fn promo_block_skipped_on_short_board_or_when_disabled() {
        let rows = vec![row("Chaos Orb", 1.0, 0.0)];
        let short = PageView::new("Standard", "now", anchors(), &rows, 5, "");
        assert!(short.rows.iter().all(|r| !r.promo_after));

        let many: Vec<_> = (0..9).map(|i| row(&format!("Orb {i}"), 9.0, 0.0)).collect();
        let disabled = PageView::new("Standard", "now", anchors(), &many, 0, "");
        assert!(disabled.rows.iter().all(|r| !r.promo_after));
    }

    #[test]
    fn names_are_escaped_but_insight_is_not() {
        let rows = vec![row("<script>alert(1)</script>", 5.0, 0.0)];
        let page = PageView::new("Standard", "now", anchors(), &rows, 5, "<strong>ok</strong>");
        let html = PageRenderer::new().unwrap().render(&page).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<strong>ok</strong>"));
    }

    #[test]
    fn icon_references_keep_their_slashes() {
        let rows = vec![
            CurrencyRow::new(
                CurrencyLine::new("Chaos Orb", 1.0),
                "icons/Chaos_Orb.png".to_string(),
                SyntheticTrend::from_percent(0.2),
            ),
            CurrencyRow::new(
                CurrencyLine::new("Vaal Orb", 0.9),
                "https://web.poecdn.com/gen/image/CurrencyDuplicate.png".to_string(),
                SyntheticTrend::from_percent(0.2),
            ),
        ];
        let page = PageView::new("Standard", "now", anchors(), &rows, 5, "");
        let html = PageRenderer::new().unwrap().render(&page).unwrap();

        assert!(html.contains(r#"src="icons/Chaos_Orb.png""#));
        assert!(html.contains(r#"src="https://web.poecdn.com/gen/image/CurrencyDuplicate.png""#));
        assert!(!html.contains("&#x2f;"));
    }

    #[test]
    fn attribute_breaking_characters_are_escaped() {
        let rows = vec![row(r#"Tom's "Orb" & Co"#, 2.0, 0.0)];
        let page = PageView::new("Standard", "now", anchors(), &rows, 5, "");
        let html = PageRenderer::new().unwrap().render(&page).unwrap();

        assert!(html.contains("Tom&#x27;s &quot;Orb&quot; &amp; Co"));
        assert!(!html.contains(r#""Orb""#));
    }
}
