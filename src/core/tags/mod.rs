//! core/tags/mod.rs
//!
//! Tag reading for the three supported containers.
//! Public API:
//! - [`read_tag_set`] reads a sound file into a [`TagSet`](super::types::TagSet).
//! - [`ContainerKind`] / [`ContainerTags`] expose the format dispatch itself.

mod container;
mod frames;
mod probe;
mod read;
mod util;

pub use container::ContainerKind;
pub use read::{ContainerTags, read_tag_set};
