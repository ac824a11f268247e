//! tagsort CLI
//!
//! # What this program is
//! A small command-line tool that walks a music folder, reads the tags of every
//! sound file (MP3/ID3, FLAC and Ogg/Vorbis comments, M4A/MP4 atoms) and moves
//! each file to `<root>/<artist>/<album>/<NN>_<title>.<ext>`.
//!
//! # Behavior
//! - `.lrc` and `.m3u` files are never treated as sound files.
//! - A `.lrc` file sharing the sound file's base name moves along with it.
//! - Directories emptied by a move are removed (the root is kept).
//! - Unsupported or unreadable files are logged and left in place.
//! - An existing file at the target is never overwritten.
//!
//! # Logging
//! `RUST_LOG` wins when set; otherwise `--log-level` (default `info`) applies.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use tagsort::config::Config;
use tagsort::core::organize;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(config.log_level.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    let options = config.organize_options();
    let report = organize(&options)
        .with_context(|| format!("failed to scan {}", options.root.display()))?;

    info!(
        moved = report.moved(),
        planned = report.planned(),
        unchanged = report.unchanged(),
        skipped = report.skipped(),
        failed = report.failed(),
        "finished"
    );

    Ok(())
}
