//! core/naming.rs
//! `TagSet` -> filesystem-safe relative path.
//!
//! Layout: `<artist>/<album>/<NN>_<title>`
//! - artist/album/title are sanitized
//! - NN is the track number, zero-padded to two digits

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use deunicode::deunicode_with_tofu;

use super::types::TagSet;

/// Characters that never make it into a path component.
pub const FORBIDDEN: &[char] = &[
    ' ', '\\', '/', ':', '*', '?', '"', '<', '>', '|', '~', '&', '{', '}', '%', '#', '.',
];

const REPLACEMENT: char = '_';

/// Transliterate to ASCII, then replace every forbidden character with `_`.
pub fn sanitize(s: &str) -> String {
    deunicode_with_tofu(s, "_")
        .chars()
        .map(|c| {
            if FORBIDDEN.contains(&c) {
                REPLACEMENT
            } else {
                c
            }
        })
        .collect()
}

/// Sanitized `[artist, album, NN_title]`, shared by both path forms.
fn components(tags: &TagSet) -> [String; 3] {
    [
        sanitize(&tags.artist),
        sanitize(&tags.album),
        format!("{:02}_{}", tags.track, sanitize(&tags.title)),
    ]
}

/// Relative location as a string: `/<artist>/<album>/<NN>_<title>`.
pub fn tags_to_path(tags: &TagSet) -> String {
    let [artist, album, stem] = components(tags);
    format!("/{artist}/{album}/{stem}")
}

/// Absolute target of a sound file with the given tags.
///
/// Empty artist/album components collapse instead of producing `//`.
/// The original extension is appended verbatim (case included).
pub fn target_path(root: &Path, tags: &TagSet, extension: Option<&OsStr>) -> PathBuf {
    let [artist, album, stem] = components(tags);
    let mut target = root.to_path_buf();

    for dir in [artist, album] {
        if !dir.is_empty() {
            target.push(dir);
        }
    }

    let mut name = OsString::from(stem);
    if let Some(ext) = extension {
        name.push(".");
        name.push(ext);
    }
    target.push(name);
    target
}
