#![allow(dead_code)]

pub mod page;

use std::path::Path;

use poewise::application::{IconCache, SiteBuilder};
use poewise::infrastructure::config::icons::PLACEHOLDER_ICON_URL;
use poewise::port::{IconSource, MarketSource};
use poewise::testkit::config::settings_in;

/// Site builder writing `index.html` and `icons/` under `root`.
pub fn builder_in(
    root: &Path,
    market: impl MarketSource + 'static,
    icons: impl IconSource + 'static,
) -> SiteBuilder {
    let cache = IconCache::new(Box::new(icons), root.join("icons"), PLACEHOLDER_ICON_URL);
    SiteBuilder::new(Box::new(market), cache, settings_in(root)).expect("template loads")
}
