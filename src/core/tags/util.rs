//! core/tags/util.rs
//! Small parsing helpers shared by the per-container extractors.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)]
static TRACK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)(?:/\d+)?").unwrap());

/// Parse the leading track number of strings like:
/// - "3" -> Some(3)
/// - "3/12" -> Some(3)
/// - "03/12" -> Some(3)
/// - "A3" -> None
pub(crate) fn parse_track_number(s: &str) -> Option<u32> {
    let caps = TRACK_RE.captures(s.trim())?;
    caps.get(1)?.as_str().parse::<u32>().ok()
}

/// Multi-valued text (ID3v2.4 frames, joined Vorbis values) is NUL separated.
/// Returns the first value, or `None` when it is empty.
pub(crate) fn first_value(s: &str) -> Option<&str> {
    s.split('\0').next().filter(|v| !v.is_empty())
}

/// MP4 `trkn` raw payload: [0, 0, number_hi, number_lo, total_hi, total_lo, ...]
pub(crate) fn parse_trkn_payload(bytes: &[u8]) -> Option<u32> {
    let number = bytes.get(2..4)?;
    Some(u32::from(u16::from_be_bytes([number[0], number[1]])))
}
