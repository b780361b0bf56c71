use std::path::PathBuf;

use clap::Parser;

use themepak_install::{LocationOptions, Scope};

/// Install theme packages into the desktop's theme directories.
#[derive(Debug, Parser)]
#[command(name = "themepak", version, about)]
pub struct Cli {
    /// Install system-wide instead of per-user.
    #[arg(long)]
    pub global: bool,

    /// Install icon and cursor themes into the legacy ~/.icons directory.
    #[arg(long = "old-cursor", alias = "oldcursor")]
    pub old_cursor: bool,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Path to the theme package archive.
    pub package: PathBuf,
}

impl Cli {
    pub fn scope(&self) -> Scope {
        if self.global { Scope::Global } else { Scope::Local }
    }

    pub fn location_options(&self) -> LocationOptions {
        LocationOptions {
            legacy_cursor_dirs: self.old_cursor,
        }
    }
}
