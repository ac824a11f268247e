//! Core data types shared between the pipeline stages and the CLI.
//!
//! Rule of thumb:
//! - These structs should be “boring bags of data”
//! - No tag parsing code
//! - The only filesystem access is the lyrics sibling check in `FileEntry`
//!
//! 'TagSet' represents the tags of ONE audio file that decide where it lives.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::error::{MoveError, TagError};

/// Extension of the lyrics sidecar moved in lockstep with a sound file.
pub const LYRICS_EXTENSION: &str = "lrc";

/// Normalized tags of a single sound file.
///
/// Missing fields are never an error:
/// - strings default to `""`
/// - the track number defaults to `0`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TagSet {
    pub artist: String,
    pub album: String,
    pub track: u32,
    pub title: String,
}

/// A sound file discovered under the library root, plus its lyrics sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path of the sound file.
    pub sound: PathBuf,

    /// `<same base name>.lrc` next to the sound file, if it existed at scan time.
    pub lyrics: Option<PathBuf>,
}

impl FileEntry {
    pub fn new(sound: PathBuf) -> Self {
        let candidate = lyrics_path_for(&sound);
        let lyrics = candidate.is_file().then_some(candidate);
        Self { sound, lyrics }
    }

    /// Original extension, kept verbatim for the target name.
    pub fn extension(&self) -> Option<&OsStr> {
        self.sound.extension()
    }
}

/// `dir/song.flac` -> `dir/song.lrc`
pub fn lyrics_path_for(path: &Path) -> PathBuf {
    path.with_extension(LYRICS_EXTENSION)
}

/// Result of processing one sound file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
}

#[derive(Debug)]
pub enum Outcome {
    /// File (and lyrics, when present and moved) now live at the target.
    Moved {
        target: PathBuf,
        lyrics: Option<PathBuf>,
    },

    /// Dry run: this is where the file would have gone.
    Planned {
        target: PathBuf,
        lyrics: Option<PathBuf>,
    },

    /// Already at its computed target.
    Unchanged,

    /// No tags could be obtained.
    Skipped(TagError),

    /// Tags were read but the move failed.
    Failed(MoveError),
}

/// Everything `organize` did, one entry per sound file in walk order.
#[derive(Debug, Default)]
pub struct Report {
    pub files: Vec<FileReport>,
}

impl Report {
    pub fn moved(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Moved { .. }))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Planned { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Unchanged))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    /// Look up the report for one source path.
    pub fn get(&self, path: &Path) -> Option<&Outcome> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| &f.outcome)
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}
