use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use tracing::debug;

/// Reads the file named by the decoded path bytes, relative to the
/// process's working directory.
///
/// Any failure (missing file, permission denied, not a regular file)
/// collapses to `None`; callers cannot distinguish the cause.
pub async fn read_file(path: &[u8]) -> Option<Vec<u8>> {
    let path = Path::new(OsStr::from_bytes(path));

    match tokio::fs::read(path).await {
        Ok(content) => Some(content),
        Err(e) => {
            debug!("File lookup failed for {}: {}", path.display(), e);
            None
        }
    }
}

/// Scans `dir` and returns the first entry whose name matches `name`
/// ignoring ASCII case.
///
/// Standalone capability: the request path resolves names exact-case only
/// and does not call this.
pub async fn find_entry_ignore_case(dir: impl AsRef<Path>, name: &[u8]) -> Option<OsString> {
    let mut entries = tokio::fs::read_dir(dir).await.ok()?;

    while let Ok(Some(entry)) = entries.next_entry().await {
        let entry_name = entry.file_name();
        if entry_name.as_bytes().eq_ignore_ascii_case(name) {
            return Some(entry_name);
        }
    }

    None
}
