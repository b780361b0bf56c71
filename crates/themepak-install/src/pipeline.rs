//! The staged install run: open, screen, classify, describe, confirm,
//! extract.

use std::path::Path;

use tracing::{debug, info};

use themepak_archive::{ThemeArchive, screen};

use crate::descriptor::{self, ThemePackage};
use crate::error::Result;
use crate::extract;
use crate::locations::Locations;
use crate::report::InstallReport;
use crate::reporter::Reporter;

/// What a completed (non-error) run amounted to.
#[derive(Clone, Debug, PartialEq)]
pub enum PipelineOutcome {
    /// Nothing recognizable to install; clean no-op.
    NoThemes,
    /// The confirmation gate declined.
    Declined(ThemePackage),
    /// Extraction ran to completion.
    Installed(ThemePackage, InstallReport),
}

pub struct InstallPipeline<'a> {
    locations: Locations,
    reporter: &'a dyn Reporter,
}

impl<'a> InstallPipeline<'a> {
    pub fn new(locations: Locations, reporter: &'a dyn Reporter) -> Self {
        Self {
            locations,
            reporter,
        }
    }

    pub fn run(&self, package_path: &Path) -> Result<PipelineOutcome> {
        let archive = ThemeArchive::open(package_path)?;
        let members = archive.members()?;
        debug!(count = members.len(), "listed archive members");

        // Every member is gated before anything touches disk, whether
        // or not it classifies into a category.
        screen(&members)?;

        let themes = extract::find_themes(&members, &self.locations);
        if themes.is_empty() {
            info!(package = %package_path.display(), "no installable components");
            return Ok(PipelineOutcome::NoThemes);
        }
        self.reporter.found(themes.len());

        let package = descriptor::load_descriptor(&archive, &members)?;
        self.reporter.package(&package);

        if !self.reporter.confirm(&package) {
            return Ok(PipelineOutcome::Declined(package));
        }

        let report = extract::install(&archive, &themes, &self.locations, self.reporter)?;
        self.reporter.summary(&report);
        Ok(PipelineOutcome::Installed(package, report))
    }
}
