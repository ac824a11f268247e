//! core/tags/probe.rs
//! Symphonia-backed reading of Vorbis comments and MP4 `ilst` atoms.
//!
//! Symphonia exposes both families as a flat list of `meta::Tag`:
//! - `std_key` is set when symphonia recognizes the field
//! - `key` is the raw field/atom name (may be empty for MP4)
//! So each field is looked up by standard key first, raw name second.

use std::fs::File;
use std::path::Path;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::{MetadataOptions, StandardTagKey, Tag, Value};
use symphonia::core::probe::Hint;

use super::super::error::TagError;
use super::super::types::TagSet;
use super::util::{first_value, parse_trkn_payload, parse_track_number};

/// Where one `TagSet` field lives in a given tag family.
struct Field {
    std_key: StandardTagKey,
    raw: &'static str,
}

/// Field names of one tag family, in `TagSet` order.
pub(super) struct Layout {
    artist: Field,
    album: Field,
    track: Field,
    title: Field,
}

pub(super) const VORBIS: Layout = Layout {
    artist: Field {
        std_key: StandardTagKey::Artist,
        raw: "artist",
    },
    album: Field {
        std_key: StandardTagKey::Album,
        raw: "album",
    },
    track: Field {
        std_key: StandardTagKey::TrackNumber,
        raw: "tracknumber",
    },
    title: Field {
        std_key: StandardTagKey::TrackTitle,
        raw: "title",
    },
};

pub(super) const MP4: Layout = Layout {
    artist: Field {
        std_key: StandardTagKey::Artist,
        raw: "©ART",
    },
    album: Field {
        std_key: StandardTagKey::Album,
        raw: "©alb",
    },
    track: Field {
        std_key: StandardTagKey::TrackNumber,
        raw: "trkn",
    },
    title: Field {
        std_key: StandardTagKey::TrackTitle,
        raw: "©nam",
    },
};

/// Probe `path` and collect the latest metadata revision.
///
/// Container-level metadata wins; metadata found while probing (e.g. an
/// ID3v2 block in front of a FLAC stream) is the fallback.
pub(super) fn load(path: &Path) -> Result<Vec<Tag>, TagError> {
    let file = File::open(path).map_err(|source| TagError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let mut probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|source| TagError::Probe {
            path: path.to_path_buf(),
            source,
        })?;

    let mut tags: Vec<Tag> = Vec::new();

    let mut container = probed.format.metadata();
    if let Some(rev) = container.skip_to_latest() {
        tags.extend(rev.tags().iter().cloned());
    }

    if tags.is_empty() {
        if let Some(mut side) = probed.metadata.get() {
            if let Some(rev) = side.skip_to_latest() {
                tags.extend(rev.tags().iter().cloned());
            }
        }
    }

    Ok(tags)
}

pub(super) fn extract(tags: &[Tag], layout: &Layout) -> TagSet {
    TagSet {
        artist: text_field(tags, &layout.artist).unwrap_or_default(),
        album: text_field(tags, &layout.album).unwrap_or_default(),
        track: track_field(tags, &layout.track).unwrap_or_default(),
        title: text_field(tags, &layout.title).unwrap_or_default(),
    }
}

fn find<'a>(tags: &'a [Tag], field: &Field) -> Option<&'a Tag> {
    tags.iter()
        .find(|t| t.std_key == Some(field.std_key))
        .or_else(|| tags.iter().find(|t| t.key.eq_ignore_ascii_case(field.raw)))
}

fn text_field(tags: &[Tag], field: &Field) -> Option<String> {
    match &find(tags, field)?.value {
        Value::String(s) => first_value(s).map(str::to_owned),
        Value::Binary(_) | Value::Flag => None,
        other => Some(other.to_string()),
    }
}

fn track_field(tags: &[Tag], field: &Field) -> Option<u32> {
    match &find(tags, field)?.value {
        Value::UnsignedInt(n) => u32::try_from(*n).ok(),
        Value::SignedInt(n) => u32::try_from(*n).ok(),
        Value::String(s) => parse_track_number(s),
        Value::Binary(bytes) => parse_trkn_payload(bytes),
        _ => None,
    }
}
