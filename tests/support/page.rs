//! Helpers for inspecting rendered pages.

/// Prices shown on the board, in page order.
pub fn board_prices(html: &str) -> Vec<f64> {
    html.split("<span class=\"wise-value\">")
        .skip(1)
        .map(|chunk| {
            let raw = chunk.split('<').next().unwrap_or_default();
            raw.replace(',', "").parse().expect("numeric price")
        })
        .collect()
}

/// `src` attribute of every board icon, in page order.
pub fn icon_sources(html: &str) -> Vec<String> {
    html.split("<img src=\"")
        .skip(1)
        .map(|chunk| chunk.split('"').next().unwrap_or_default().to_string())
        .collect()
}

/// Byte offset of the first occurrence of `needle`, panicking if absent.
pub fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in page"))
}
