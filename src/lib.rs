//! tagsort
//!
//! Reads artist/album/track/title from music files (ID3, Vorbis comments,
//! MP4 atoms) and moves each file to `<root>/<artist>/<album>/<NN>_<title>.<ext>`,
//! taking a same-named `.lrc` lyrics file along.
//!
//! - [`core`] holds the pipeline: scan, tag reading, naming, relocation.
//! - [`config`] holds the command-line surface.

pub mod config;
pub mod core;
