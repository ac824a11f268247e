//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::core::OrganizeOptions;

/// Rename music files into `<artist>/<album>/<NN>_<title>` from their tags.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Library root to reorganize in place
    pub root: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(short, long, default_value_t = LevelFilter::INFO)]
    pub log_level: LevelFilter,

    /// Only report where files would go
    #[arg(long)]
    pub dry_run: bool,
}

impl Config {
    pub fn organize_options(&self) -> OrganizeOptions {
        OrganizeOptions {
            root: self.root.clone(),
            dry_run: self.dry_run,
        }
    }
}
