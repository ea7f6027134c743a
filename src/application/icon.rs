//! Local icon cache.
//!
//! Icons are stored as `<dir>/<key>.png`, where the key is the sanitized
//! canonical currency name. A present file is always a hit: there is no TTL
//! and no freshness check. Misses download the remote image, resize it to
//! 64×64 and store it as a compressed PNG, staged under `<key>.png.tmp` and
//! renamed into place so a hit is always a complete file. Any failure along the way falls
//! back to a placeholder URL so the page build is never blocked.

use std::io::Cursor;
use std::path::{Component, Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use tracing::{debug, info, warn};

use super::persist::write_atomic;
use crate::domain::CacheKey;
use crate::error::IconError;
use crate::port::IconSource;

/// Edge length of every cached icon, in pixels.
pub const ICON_SIZE: u32 = 64;

/// Outcome of resolving one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconResolution {
    /// The icon was already on disk.
    Cached(PathBuf),
    /// The icon was fetched and written during this call.
    Downloaded(PathBuf),
    /// The icon could not be cached; `url` is the placeholder to show.
    Fallback { url: String, reason: String },
}

impl IconResolution {
    /// Local path of the icon, if one exists.
    #[must_use]
    pub fn local_path(&self) -> Option<&Path> {
        match self {
            Self::Cached(path) | Self::Downloaded(path) => Some(path.as_path()),
            Self::Fallback { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Reference for an `<img src>` in a page stored under `page_dir`.
    ///
    /// Local paths below `page_dir` become relative with `/` separators;
    /// other local paths are used as-is.
    #[must_use]
    pub fn href(&self, page_dir: &Path) -> String {
        match self {
            Self::Cached(path) | Self::Downloaded(path) => {
                let relative = path.strip_prefix(page_dir).unwrap_or(path);
                relative
                    .components()
                    .filter_map(|c| match c {
                        Component::CurDir => None,
                        Component::RootDir => Some(String::new()),
                        other => Some(other.as_os_str().to_string_lossy().into_owned()),
                    })
                    .collect::<Vec<_>>()
                    .join("/")
            }
            Self::Fallback { url, .. } => url.clone(),
        }
    }
}

/// Memoize-to-disk icon store backed by an [`IconSource`].
pub struct IconCache {
    source: Box<dyn IconSource>,
    dir: PathBuf,
    placeholder_url: String,
}

impl IconCache {
    pub fn new(
        source: Box<dyn IconSource>,
        dir: impl Into<PathBuf>,
        placeholder_url: impl Into<String>,
    ) -> Self {
        Self {
            source,
            dir: dir.into(),
            placeholder_url: placeholder_url.into(),
        }
    }

    /// Cache location for a canonical currency name.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(CacheKey::from_name(name).file_name())
    }

    /// Ensure an icon for `name` is cached, downloading from `remote_url` on
    /// a miss. Never fails; see [`IconResolution::Fallback`].
    pub async fn resolve(&self, name: &str, remote_url: Option<&str>) -> IconResolution {
        let path = self.path_for(name);

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            debug!(currency = name, path = %path.display(), "Icon cache hit");
            return IconResolution::Cached(path);
        }

        match self.download(&path, remote_url).await {
            Ok(()) => {
                info!(currency = name, path = %path.display(), "Cached icon");
                IconResolution::Downloaded(path)
            }
            Err(err) => {
                warn!(currency = name, error = %err, "Icon unavailable, using placeholder");
                IconResolution::Fallback {
                    url: self.placeholder_url.clone(),
                    reason: err.to_string(),
                }
            }
        }
    }

    async fn download(&self, path: &Path, remote_url: Option<&str>) -> Result<(), IconError> {
        let url = remote_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(IconError::MissingUrl)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(IconError::Write)?;

        let bytes = self.source.fetch(url).await?;
        let png = transcode(&bytes)?;
        write_atomic(path, png).await.map_err(IconError::Write)
    }
}

/// Decode any supported image, resize to [`ICON_SIZE`] square with Lanczos3
/// and encode as a best-compression PNG.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image or encoding fails.
pub fn transcode(bytes: &[u8]) -> Result<Vec<u8>, IconError> {
    let decoded = image::load_from_memory(bytes).map_err(IconError::Decode)?;
    let resized = decoded.resize_exact(ICON_SIZE, ICON_SIZE, FilterType::Lanczos3);

    let mut out = Cursor::new(Vec::new());
    let encoder = PngEncoder::new_with_quality(&mut out, CompressionType::Best, PngFilter::Adaptive);
    resized
        .write_with_encoder(encoder)
        .map_err(IconError::Encode)?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::persist::staging_path;
    use crate::testkit::icon::{failing_icon_source, png_bytes, StaticIconSource};

    #[test]
    fn transcode_produces_64px_png() {
        let png = transcode(&png_bytes(13, 7)).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (ICON_SIZE, ICON_SIZE));
        assert_eq!(
            image::guess_format(&png).unwrap(),
            image::ImageFormat::Png
        );
    }

    #[test]
    fn transcode_rejects_garbage() {
        assert!(matches!(
            transcode(b"definitely not an image"),
            Err(IconError::Decode(_))
        ));
    }

    #[test]
    fn href_is_relative_to_page_dir() {
        let resolution = IconResolution::Cached(PathBuf::from("site/icons/Divine_Orb.png"));
        assert_eq!(resolution.href(Path::new("site")), "icons/Divine_Orb.png");
        assert_eq!(resolution.href(Path::new("")), "site/icons/Divine_Orb.png");

        let fallback = IconResolution::Fallback {
            url: "https://example.invalid/p.png".into(),
            reason: "boom".into(),
        };
        assert_eq!(fallback.href(Path::new("site")), "https://example.invalid/p.png");
        assert!(fallback.local_path().is_none());
    }

    #[tokio::test]
    async fn miss_downloads_then_hits() {
        let dir = tempfile::tempdir().unwrap();
        let source = StaticIconSource::new(png_bytes(32, 32));
        let calls = source.calls();
        let cache = IconCache::new(Box::new(source), dir.path().join("icons"), "placeholder");

        let first = cache.resolve("Divine Orb", Some("https://cdn/divine.png")).await;
        let second = cache.resolve("Divine Orb", Some("https://cdn/divine.png")).await;

        let expected = dir.path().join("icons").join("Divine_Orb.png");
        assert_eq!(first, IconResolution::Downloaded(expected.clone()));
        assert_eq!(second, IconResolution::Cached(expected));
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_url_falls_back_without_fetching() {
        let dir = tempfile::tempdir().unwrap();
        let source = StaticIconSource::new(png_bytes(8, 8));
        let calls = source.calls();
        let cache = IconCache::new(Box::new(source), dir.path(), "placeholder");

        let resolution = cache.resolve("Chaos Orb", None).await;

        assert!(resolution.is_fallback());
        assert_eq!(resolution.href(dir.path()), "placeholder");
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fetch_failure_falls_back_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cache = IconCache::new(Box::new(failing_icon_source()), dir.path(), "placeholder");

        let resolution = cache.resolve("Vaal Orb", Some("https://cdn/vaal.png")).await;

        match &resolution {
            IconResolution::Fallback { reason, .. } => {
                assert_eq!(reason, "icon host returned status 503");
            }
            other => panic!("expected fallback, got {other:?}"),
        }
        assert!(!cache.path_for("Vaal Orb").exists());
    }

    #[tokio::test]
    async fn undecodable_body_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let source = StaticIconSource::new(b"<html>not found</html>".to_vec());
        let cache = IconCache::new(Box::new(source), dir.path(), "placeholder");

        let resolution = cache.resolve("Orb of Alchemy", Some("https://cdn/alch.png")).await;

        match resolution {
            IconResolution::Fallback { url, reason } => {
                assert_eq!(url, "placeholder");
                assert!(reason.contains("decode"), "unexpected reason: {reason}");
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn leftover_staging_file_is_not_a_hit() {
        let dir = tempfile::tempdir().unwrap();
        let source = StaticIconSource::new(png_bytes(16, 16));
        let calls = source.calls();
        let cache = IconCache::new(Box::new(source), dir.path(), "placeholder");
        let path = cache.path_for("Exalted Orb");
        std::fs::write(staging_path(&path), b"\x89PNG truncated").unwrap();

        let resolution = cache.resolve("Exalted Orb", Some("https://cdn/exalt.png")).await;

        assert_eq!(resolution, IconResolution::Downloaded(path.clone()));
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert!(!staging_path(&path).exists());
        let stored = image::load_from_memory(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(stored.width(), ICON_SIZE);
    }
}
