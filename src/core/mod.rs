//! core/mod.rs
//!
//! The brain of the tool:
//! - Discover candidate sound files (filesystem walk)
//! - Read tags (metadata IO)
//! - Turn tags into a target path and move the file (plus its lyrics) there
//!
//! The pipeline is explicit and staged:
//!   (A) discover paths -> Vec<FileEntry>
//!   (B) per file: read tags -> compute target -> move
//!
//! Nothing below (A) aborts the run: every file ends up in the `Report`.

pub mod error;
pub mod library;
pub mod naming;
pub mod relocate;
pub mod tags;
pub mod types;

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument, warn};

use error::ScanError;
use types::{FileEntry, FileReport, Outcome, Report, TagSet, lyrics_path_for};

/// Inputs of a single run.
#[derive(Debug, Clone)]
pub struct OrganizeOptions {
    /// Library root; every target lives below it.
    pub root: PathBuf,

    /// Compute targets and report them without touching the filesystem.
    pub dry_run: bool,
}

impl OrganizeOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }
}

/// Walk `options.root` and move every tagged sound file to its normalized location.
pub fn organize(options: &OrganizeOptions) -> Result<Report, ScanError> {
    let entries = library::scan_sound_files(&options.root)?;
    info!(root = %options.root.display(), files = entries.len(), "scanned library");

    let files = entries
        .into_iter()
        .map(|entry| organize_file(options, entry))
        .collect();

    Ok(Report { files })
}

/// Process one discovered sound file.
#[instrument(skip_all, fields(path = %entry.sound.display()))]
pub fn organize_file(options: &OrganizeOptions, entry: FileEntry) -> FileReport {
    let outcome = match tags::read_tag_set(&entry.sound) {
        Ok(tags) => place(options, &entry, &tags),
        Err(err) => {
            if err.is_unsupported() {
                info!("found unsupported file");
            } else {
                error!(error = %err, "failed to read tags");
            }
            Outcome::Skipped(err)
        }
    };

    FileReport {
        path: entry.sound,
        outcome,
    }
}

fn place(options: &OrganizeOptions, entry: &FileEntry, tags: &TagSet) -> Outcome {
    let root = options.root.as_path();
    let target = naming::target_path(root, tags, entry.extension());
    debug!(target = %target.display(), "computed target");

    if target == entry.sound {
        debug!("nothing to do");
        return Outcome::Unchanged;
    }

    // Re-checked here: an earlier move may have taken a shared lyrics file.
    let lyrics = entry.lyrics.as_deref().filter(|p| p.is_file());
    let lyrics_target = lyrics_path_for(&target);

    if options.dry_run {
        info!(target = %target.display(), "would rename");
        return Outcome::Planned {
            target,
            lyrics: lyrics.map(|_| lyrics_target),
        };
    }

    info!(target = %target.display(), "renaming");
    if let Err(err) = relocate::move_within(root, &entry.sound, &target) {
        error!(error = %err, "failed to rename");
        return Outcome::Failed(err);
    }

    let lyrics = lyrics.and_then(|from| move_lyrics(root, from, &lyrics_target));
    Outcome::Moved { target, lyrics }
}

fn move_lyrics(root: &Path, from: &Path, to: &Path) -> Option<PathBuf> {
    info!(lyrics = %from.display(), target = %to.display(), "renaming lyrics");
    match relocate::move_within(root, from, to) {
        Ok(()) => Some(to.to_path_buf()),
        Err(err) => {
            warn!(error = %err, "failed to rename lyrics");
            None
        }
    }
}
