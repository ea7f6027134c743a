//! Application services: the icon cache, page rendering and the site
//! builder that ties them together.

pub mod icon;
mod persist;
pub mod render;
pub mod site;

pub use icon::{IconCache, IconResolution, ICON_SIZE};
pub use render::{PageRenderer, PageView, RowView};
pub use site::{BuildReport, SiteBuilder, SiteSettings};
