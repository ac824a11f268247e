//! core/error.rs
//! Error types for the organize pipeline.
//!
//! - `TagError`: a file produced no `TagSet` (skipped, walk continues)
//! - `MoveError`: a planned move could not be carried out (walk continues)
//! - `ScanError`: the root itself could not be walked (the only hard failure)

use std::path::PathBuf;

use symphonia::core::errors::Error as SymphoniaError;
use thiserror::Error;

/// Why a file yielded no tags.
#[derive(Debug, Error)]
pub enum TagError {
    /// Container is not ID3, Vorbis-comment or MP4 tagged.
    #[error("unsupported file: {}", path.display())]
    Unsupported { path: PathBuf },

    /// File could not be opened or its header read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// ID3 block is present but corrupt.
    #[error("failed to parse ID3 tag of {}: {source}", path.display())]
    Id3 {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },

    /// Symphonia could not probe the container.
    #[error("failed to probe {}: {source}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: SymphoniaError,
    },
}

impl TagError {
    /// Unsupported files are expected in a music folder (covers, booklets...).
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Why a file could not be relocated.
#[derive(Debug, Error)]
pub enum MoveError {
    /// Another file already sits at the target; it is never overwritten.
    #[error("target already exists: {}", path.display())]
    TargetExists { path: PathBuf },

    #[error("failed to move {} to {}: {source}", from.display(), to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The library root could not be walked.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("library root is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
