//! core/tags/read.rs
//! Path -> container detection -> raw tags -> `TagSet`.
//!
//! - Detection and loading can fail (unsupported / unreadable file).
//! - Extraction never fails: a missing field becomes its default.

use std::path::Path;

use symphonia::core::meta::Tag as MetaTag;
use tracing::{debug, instrument};

use super::super::error::TagError;
use super::super::types::TagSet;
use super::container::ContainerKind;
use super::{frames, probe};

/// Raw tags as loaded from one of the supported containers.
#[derive(Debug)]
pub enum ContainerTags {
    Id3(id3::Tag),
    Vorbis(Vec<MetaTag>),
    Mp4(Vec<MetaTag>),
}

impl ContainerTags {
    /// Detect the container of `path` and load its tag block.
    pub fn load(path: &Path) -> Result<Self, TagError> {
        let kind = ContainerKind::detect(path).map_err(|source| TagError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), container = kind.name(), "detected container");

        match kind {
            ContainerKind::Id3 => frames::load(path).map(Self::Id3),
            ContainerKind::Vorbis => probe::load(path).map(Self::Vorbis),
            ContainerKind::Mp4 => probe::load(path).map(Self::Mp4),
            ContainerKind::Unsupported => Err(TagError::Unsupported {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn to_tag_set(&self) -> TagSet {
        match self {
            Self::Id3(tag) => frames::extract(tag),
            Self::Vorbis(tags) => probe::extract(tags, &probe::VORBIS),
            Self::Mp4(tags) => probe::extract(tags, &probe::MP4),
        }
    }
}

/// Read the `TagSet` of a single sound file.
#[instrument(level = "trace")]
pub fn read_tag_set(path: &Path) -> Result<TagSet, TagError> {
    let tags = ContainerTags::load(path)?.to_tag_set();
    debug!(
        artist = %tags.artist,
        album = %tags.album,
        track = tags.track,
        title = %tags.title,
        "loaded tags"
    );
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use id3::{TagLike, Version};

    fn write_id3(path: &Path, artist: &str, track: &str, title: &str) {
        std::fs::write(path, [0xFF, 0xFB, 0x90, 0x00, 0, 0, 0, 0]).unwrap();
        let mut tag = id3::Tag::new();
        tag.set_artist(artist);
        tag.set_text("TRCK", track);
        tag.set_title(title);
        tag.write_to_path(path, Version::Id3v24).unwrap();
    }

    #[test]
    fn reads_id3_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.mp3");
        write_id3(&path, "Sigur Rós", "3/8", "Njósnavélin");

        let tags = read_tag_set(&path).unwrap();
        assert_eq!(
            tags,
            TagSet {
                artist: "Sigur Rós".into(),
                album: String::new(),
                track: 3,
                title: "Njósnavélin".into(),
            }
        );
    }

    #[test]
    fn id3_variant_is_chosen_by_content_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("misnamed.ogg");
        write_id3(&path, "Artist", "1", "Title");

        let loaded = ContainerTags::load(&path).unwrap();
        assert!(matches!(loaded, ContainerTags::Id3(_)));
    }

    #[test]
    fn unsupported_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]).unwrap();

        // JPEG SOI starts with 0xFF but 0xD8 is no MPEG audio sync.
        let err = read_tag_set(&path).unwrap_err();
        assert!(err.is_unsupported(), "{err}");
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_tag_set(&dir.path().join("gone.mp3")).unwrap_err();
        assert!(matches!(err, TagError::Io { .. }));
    }

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn reads_flac_vorbis_comments() {
        let path = fixture("hoppipolla.flac");

        let loaded = ContainerTags::load(&path).unwrap();
        assert!(matches!(loaded, ContainerTags::Vorbis(_)), "{loaded:?}");
        assert_eq!(
            loaded.to_tag_set(),
            TagSet {
                artist: "Sigur Rós".into(),
                album: "Takk...".into(),
                track: 3,
                title: "Hoppípolla".into(),
            }
        );
    }

    #[test]
    fn reads_ogg_vorbis_comments() {
        let path = fixture("half_noise.ogg");

        let loaded = ContainerTags::load(&path).unwrap();
        assert!(matches!(loaded, ContainerTags::Vorbis(_)), "{loaded:?}");
        assert_eq!(
            read_tag_set(&path).unwrap(),
            TagSet {
                artist: "Múm".into(),
                album: "Finally We Are No One".into(),
                track: 7,
                title: "K/Half Noise".into(),
            }
        );
    }

    #[test]
    fn reads_mp4_ilst_atoms() {
        let path = fixture("joga.m4a");

        let loaded = ContainerTags::load(&path).unwrap();
        assert!(matches!(loaded, ContainerTags::Mp4(_)), "{loaded:?}");
        assert_eq!(
            loaded.to_tag_set(),
            TagSet {
                artist: "Björk".into(),
                album: "Homogenic".into(),
                track: 4,
                title: "Jóga".into(),
            }
        );
    }

    #[test]
    fn adts_stream_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stream.aac");
        std::fs::write(&path, [0xFF, 0xF1, 0x50, 0x80, 0x02, 0x1F, 0xFC, 0, 0, 0]).unwrap();

        let err = read_tag_set(&path).unwrap_err();
        assert!(err.is_unsupported(), "{err}");
    }

    #[test]
    fn garbage_flac_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.flac");
        std::fs::write(&path, b"fLaC\xff\xff\xff\xff").unwrap();

        let err = read_tag_set(&path).unwrap_err();
        assert!(!err.is_unsupported(), "{err}");
    }
}
