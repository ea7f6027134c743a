//! Site builder: one fetch, one render, one file.
//!
//! The build is a single linear pass. A failed market fetch aborts before
//! anything is written, so a stale page from an earlier run stays in place.
//! Icon failures are absorbed by the [`IconCache`] and only show up in the
//! [`BuildReport`].

use std::path::{Path, PathBuf};

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::icon::{IconCache, IconResolution};
use super::persist::write_atomic;
use super::render::{PageRenderer, PageView};
use crate::domain::{
    generate_insight, AnchorPrices, CurrencyRow, SyntheticTrend, PRIMARY_ANCHOR, REFERENCE_ANCHOR,
};
use crate::error::Result;
use crate::infrastructure::config::site::SiteConfig;
use crate::port::MarketSource;

/// Timestamp format shown in the board header.
pub const UPDATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Page-level settings the builder needs.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub league: String,
    pub output: PathBuf,
    pub min_price: f64,
    pub promo_after: usize,
}

impl SiteSettings {
    pub fn from_config(league: impl Into<String>, site: &SiteConfig) -> Self {
        Self {
            league: league.into(),
            output: site.output.clone(),
            min_price: site.min_price,
            promo_after: site.promo_after,
        }
    }
}

/// Summary of a completed build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub output: PathBuf,
    pub anchors: AnchorPrices,
    pub rows_rendered: usize,
    pub rows_filtered: usize,
    pub icons_cached: usize,
    pub icons_downloaded: usize,
    pub icons_fallback: usize,
}

impl BuildReport {
    fn new(output: PathBuf, anchors: AnchorPrices) -> Self {
        Self {
            output,
            anchors,
            rows_rendered: 0,
            rows_filtered: 0,
            icons_cached: 0,
            icons_downloaded: 0,
            icons_fallback: 0,
        }
    }

    fn record_icon(&mut self, resolution: &IconResolution) {
        match resolution {
            IconResolution::Cached(_) => self.icons_cached += 1,
            IconResolution::Downloaded(_) => self.icons_downloaded += 1,
            IconResolution::Fallback { .. } => self.icons_fallback += 1,
        }
    }
}

/// Orchestrates fetch, enrichment, rendering and the final write.
pub struct SiteBuilder {
    market: Box<dyn MarketSource>,
    icons: IconCache,
    renderer: PageRenderer,
    settings: SiteSettings,
}

impl SiteBuilder {
    /// # Errors
    ///
    /// Returns an error if the page template fails to load.
    pub fn new(
        market: Box<dyn MarketSource>,
        icons: IconCache,
        settings: SiteSettings,
    ) -> Result<Self> {
        Ok(Self {
            market,
            icons,
            renderer: PageRenderer::new()?,
            settings,
        })
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Run one build with an entropy-seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the market fetch, rendering or the final write
    /// fails. Icon failures never surface here.
    pub async fn build(&self) -> Result<BuildReport> {
        let mut rng = StdRng::from_entropy();
        self.build_with_rng(&mut rng).await
    }

    /// Run one build drawing trend and insight randomness from `rng`.
    ///
    /// # Errors
    ///
    /// See [`SiteBuilder::build`].
    pub async fn build_with_rng<R: Rng + Send + ?Sized>(&self, rng: &mut R) -> Result<BuildReport> {
        let snapshot = self.market.fetch_snapshot().await?;
        info!(
            source = self.market.source_name(),
            lines = snapshot.len(),
            "Fetched market snapshot"
        );

        let anchors = AnchorPrices::from_snapshot(&snapshot);
        if snapshot.price_of(PRIMARY_ANCHOR).is_none() {
            warn!(currency = PRIMARY_ANCHOR, default = anchors.primary, "Anchor missing from snapshot");
        }
        if snapshot.price_of(REFERENCE_ANCHOR).is_none() {
            warn!(currency = REFERENCE_ANCHOR, default = anchors.reference, "Anchor missing from snapshot");
        }

        let page_dir = page_dir(&self.settings.output);
        let mut report = BuildReport::new(self.settings.output.clone(), anchors);
        let mut rows = Vec::new();

        for line in snapshot.into_sorted() {
            if line.chaos_equivalent < self.settings.min_price {
                debug!(currency = %line.name, price = line.chaos_equivalent, "Below minimum price, skipped");
                report.rows_filtered += 1;
                continue;
            }

            let icon = self.icons.resolve(&line.name, line.icon_url.as_deref()).await;
            report.record_icon(&icon);

            let trend = SyntheticTrend::sample(rng);
            rows.push(CurrencyRow::new(line, icon.href(page_dir), trend));
        }
        report.rows_rendered = rows.len();

        let insight = generate_insight(anchors.primary, anchors.reference, rng);
        let updated_at = Local::now().format(UPDATED_AT_FORMAT).to_string();
        let page = PageView::new(
            self.settings.league.as_str(),
            updated_at,
            anchors,
            &rows,
            self.settings.promo_after,
            insight,
        );
        let html = self.renderer.render(&page)?;

        write_page(&self.settings.output, &html).await?;

        info!(
            output = %report.output.display(),
            rows = report.rows_rendered,
            filtered = report.rows_filtered,
            icons_cached = report.icons_cached,
            icons_downloaded = report.icons_downloaded,
            icons_fallback = report.icons_fallback,
            divine = anchors.primary,
            "Site built"
        );

        Ok(report)
    }
}

fn page_dir(output: &Path) -> &Path {
    output.parent().unwrap_or_else(|| Path::new(""))
}

/// Write `html` to `output` via a sibling temporary file and a rename.
async fn write_page(output: &Path, html: &str) -> Result<()> {
    let dir = page_dir(output);
    if !dir.as_os_str().is_empty() {
        tokio::fs::create_dir_all(dir).await?;
    }

    write_atomic(output, html).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_dir_of_bare_file_is_empty() {
        assert_eq!(page_dir(Path::new("index.html")), Path::new(""));
        assert_eq!(page_dir(Path::new("public/index.html")), Path::new("public"));
    }

    #[tokio::test]
    async fn write_page_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("public").join("index.html");

        write_page(&output, "first").await.unwrap();
        write_page(&output, "second").await.unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "second");
        assert!(!dir.path().join("public").join("index.html.tmp").exists());
    }
}
