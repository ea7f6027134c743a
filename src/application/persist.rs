//! Whole-file writes that never leave a truncated target behind.

use std::io;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

/// Sibling path the contents are staged in before the rename.
pub(crate) fn staging_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    target.with_file_name(name)
}

/// Write `contents` to `target` via [`staging_path`] and a rename.
///
/// The staged file is synced before the rename. The parent directory must
/// already exist. Any failure removes the staged file.
pub(crate) async fn write_atomic(target: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    let staged = staging_path(target);
    let result = stage_and_rename(&staged, target, contents.as_ref()).await;
    if result.is_err() {
        let _ = tokio::fs::remove_file(&staged).await;
    }
    result
}

async fn stage_and_rename(staged: &Path, target: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = tokio::fs::File::create(staged).await?;
    file.write_all(contents).await?;
    file.sync_all().await?;
    drop(file);
    tokio::fs::rename(staged, target).await
}
