use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::error::ScanError;
use super::types::{FileEntry, LYRICS_EXTENSION};

/// Sidecars travel with (or next to) sound files but are never sound files.
const SIDECAR_EXTENSIONS: &[&str] = &[LYRICS_EXTENSION, "m3u"];

/// Collect every candidate sound file under `root`, sorted by path.
///
/// The full list is built before anything moves, so relocation never
/// disturbs the walk. Unreadable entries below the root are logged and skipped.
pub fn scan_sound_files(root: &Path) -> Result<Vec<FileEntry>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut out = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(ScanError::Walk {
                    path: root.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        if is_sidecar(&path) {
            debug!(path = %path.display(), "skipping sidecar");
            continue;
        }

        out.push(FileEntry::new(path));
    }

    Ok(out)
}

/// `.lrc` and `.m3u`, any case.
pub fn is_sidecar(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()).is_some_and(|ext| {
        SIDECAR_EXTENSIONS
            .iter()
            .any(|s| ext.eq_ignore_ascii_case(s))
    })
}
