//! core/tags/frames.rs
//! ID3 frames -> `TagSet`.
//!
//! ID3v2 wins; a file with only an ID3v1 trailer is read through the v1 tag,
//! which `id3` maps onto the same frame ids.
//!
//! Frame ids used:
//! - TPE1 artist
//! - TALB album
//! - TRCK track ("n" or "n/total")
//! - TIT2 title

use std::path::Path;

use id3::frame::Content;
use id3::{ErrorKind, Tag, TagLike, v1v2};
use tracing::{debug, warn};

use super::super::error::TagError;
use super::super::types::TagSet;
use super::util::{first_value, parse_track_number};

/// Load the ID3v2 block of `path`, or its ID3v1 trailer when there is no v2 block.
///
/// - No tag at all => empty tag (every field defaults)
/// - Corrupt tag with a partially decoded prefix => use what was decoded
pub(super) fn load(path: &Path) -> Result<Tag, TagError> {
    match v1v2::read_from_path(path) {
        Ok(tag) => Ok(tag),
        Err(err) if matches!(err.kind, ErrorKind::NoTag) => {
            debug!(path = %path.display(), "no ID3 tag, using defaults");
            Ok(Tag::new())
        }
        Err(mut err) => match err.partial_tag.take() {
            Some(tag) => {
                warn!(path = %path.display(), error = %err, "ID3 tag only partially readable");
                Ok(tag)
            }
            None => Err(TagError::Id3 {
                path: path.to_path_buf(),
                source: err,
            }),
        },
    }
}

pub(super) fn extract(tag: &Tag) -> TagSet {
    TagSet {
        artist: text_frame(tag, "TPE1").unwrap_or_default(),
        album: text_frame(tag, "TALB").unwrap_or_default(),
        track: text_frame(tag, "TRCK")
            .and_then(|s| parse_track_number(&s))
            .unwrap_or_default(),
        title: text_frame(tag, "TIT2").unwrap_or_default(),
    }
}

/// First value of a text frame; `None` when the frame is missing or empty.
fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => first_value(s).map(str::to_owned),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_core_frames() {
        let mut tag = Tag::new();
        tag.set_artist("Sigur Rós");
        tag.set_album("Ágætis byrjun");
        tag.set_text("TRCK", "05/12");
        tag.set_title("Starálfur");

        assert_eq!(
            extract(&tag),
            TagSet {
                artist: "Sigur Rós".into(),
                album: "Ágætis byrjun".into(),
                track: 5,
                title: "Starálfur".into(),
            }
        );
    }

    #[test]
    fn missing_frames_default() {
        let mut tag = Tag::new();
        tag.set_title("Untitled");

        assert_eq!(
            extract(&tag),
            TagSet {
                title: "Untitled".into(),
                ..TagSet::default()
            }
        );
        assert_eq!(extract(&Tag::new()), TagSet::default());
    }

    #[test]
    fn non_numeric_track_defaults_to_zero() {
        let mut tag = Tag::new();
        tag.set_text("TRCK", "side A");
        assert_eq!(extract(&tag).track, 0);
    }

    #[test]
    fn multi_valued_artist_uses_first_value() {
        let mut tag = Tag::new();
        tag.set_text("TPE1", "Massive Attack\0Elizabeth Fraser");
        assert_eq!(extract(&tag).artist, "Massive Attack");
    }

    #[test]
    fn load_without_tag_yields_empty_tag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bare.mp3");
        std::fs::write(&path, [0xFF, 0xFB, 0x90, 0x00, 0, 0, 0, 0]).unwrap();

        let tag = load(&path).unwrap();
        assert_eq!(extract(&tag), TagSet::default());
    }

    /// 128-byte ID3v1.1 trailer: "TAG", title, artist, album, year, comment, 0, track, genre.
    fn id3v1_trailer(title: &str, artist: &str, album: &str, track: u8) -> Vec<u8> {
        fn field(s: &str, len: usize) -> Vec<u8> {
            let mut out = s.as_bytes().to_vec();
            out.resize(len, 0);
            out
        }

        let mut out = b"TAG".to_vec();
        out.extend(field(title, 30));
        out.extend(field(artist, 30));
        out.extend(field(album, 30));
        out.extend(field("1999", 4));
        out.extend(field("", 28));
        out.extend([0, track, 255]);
        out
    }

    #[test]
    fn id3v1_trailer_is_read_when_there_is_no_v2_block() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.mp3");
        let mut bytes = vec![0xFF, 0xFB, 0x90, 0x00, 0, 0, 0, 0];
        bytes.extend(id3v1_trailer("Song", "Artist", "Album", 7));
        std::fs::write(&path, bytes).unwrap();

        let tag = load(&path).unwrap();
        assert_eq!(
            extract(&tag),
            TagSet {
                artist: "Artist".into(),
                album: "Album".into(),
                track: 7,
                title: "Song".into(),
            }
        );
    }

    #[test]
    fn id3v2_wins_over_id3v1() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("both.mp3");
        let mut bytes = vec![0xFF, 0xFB, 0x90, 0x00, 0, 0, 0, 0];
        bytes.extend(id3v1_trailer("Old", "Old", "Old", 1));
        std::fs::write(&path, bytes).unwrap();

        let mut v2 = Tag::new();
        v2.set_title("New");
        v2.write_to_path(&path, id3::Version::Id3v24).unwrap();

        let tags = extract(&load(&path).unwrap());
        assert_eq!(tags.title, "New");
        assert_eq!(tags.artist, "");
    }
}
