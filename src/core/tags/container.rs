//! core/tags/container.rs
//! Decide which tag family a file carries from the stream markers symphonia's
//! format readers register.
//!
//! Extensions lie (and are missing on some rips), so the header decides.
//! The extension only serves as a probe hint later on.
//!
//! Markers are matched at a fixed position instead of scanned for, so a stray
//! sync word deep inside a JPEG or an ADTS stream never passes as MPEG audio.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use symphonia::core::probe::{Descriptor, QueryDescriptor};
use symphonia::default::formats::{FlacReader, IsoMp4Reader, MpaReader, OggReader};
use tracing::trace;

/// Bytes needed to recognize every supported container.
const SNIFF_LEN: u64 = 16;

const ID3V2_FOOTER_LEN: u64 = 10;

/// Readers whose markers select a tag family, with the offset the marker sits at.
const FAMILIES: [(ContainerKind, fn() -> &'static [Descriptor], usize); 4] = [
    (ContainerKind::Id3, MpaReader::query, 0),
    (ContainerKind::Vorbis, FlacReader::query, 0),
    (ContainerKind::Vorbis, OggReader::query, 0),
    // box size comes first, then the `ftyp` type
    (ContainerKind::Mp4, IsoMp4Reader::query, 4),
];

/// Closed set of containers the tag reader knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// MPEG audio (layers 1-3) with or without ID3 tags.
    Id3,
    /// FLAC / Ogg (Vorbis, Opus) carrying Vorbis comments.
    Vorbis,
    /// ISO base media (m4a, mp4, alac) carrying `ilst` atoms.
    Mp4,
    Unsupported,
}

impl ContainerKind {
    /// Read the head of `path` and classify it.
    pub fn detect(path: &Path) -> io::Result<Self> {
        let mut file = BufReader::new(File::open(path)?);

        if !skip_id3v2(&mut file)? {
            return Ok(Self::from_magic(&read_head(&mut file)?));
        }

        // An ID3v2 block may be glued in front of a FLAC stream as well.
        let payload = read_head(&mut file)?;
        trace!(path = %path.display(), "leading ID3v2 block skipped");
        Ok(Self::after_id3(&payload))
    }

    /// Classify from the first bytes of a stream.
    pub fn from_magic(head: &[u8]) -> Self {
        FAMILIES
            .iter()
            .find(|(_, query, at)| {
                let Some(window) = head.get(*at..) else {
                    return false;
                };
                query()
                    .iter()
                    .flat_map(|descriptor| descriptor.markers)
                    .any(|marker| window.starts_with(marker))
            })
            .map_or(Self::Unsupported, |(kind, ..)| *kind)
    }

    /// Classify the bytes that follow a leading ID3v2 block.
    ///
    /// A tag-only file (nothing after the block) still reads as ID3.
    pub fn after_id3(payload: &[u8]) -> Self {
        if payload.is_empty() {
            Self::Id3
        } else {
            Self::from_magic(payload)
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Id3 => "ID3",
            Self::Vorbis => "Vorbis comment",
            Self::Mp4 => "MP4",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Skip an ID3v2 block (footer and zero padding included) at the start of `reader`.
///
/// The reader is rewound to the start when there is no usable block.
fn skip_id3v2<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    match id3::Tag::skip(&mut *reader) {
        Ok(true) => {
            let mut footer = [0u8; 3];
            let at = reader.stream_position()?;
            let found_footer = reader.read(&mut footer)? == footer.len() && footer == *b"3DI";
            let resume = if found_footer {
                at + ID3V2_FOOTER_LEN
            } else {
                at
            };
            reader.seek(SeekFrom::Start(resume))?;
            Ok(true)
        }
        Ok(false) => {
            reader.seek(SeekFrom::Start(0))?;
            Ok(false)
        }
        Err(err) => {
            // A header too broken to size is no anchor.
            trace!(error = %err, "unreadable ID3v2 header");
            reader.seek(SeekFrom::Start(0))?;
            Ok(false)
        }
    }
}

fn read_head<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut head = Vec::with_capacity(SNIFF_LEN as usize);
    reader.take(SNIFF_LEN).read_to_end(&mut head)?;
    Ok(head)
}
