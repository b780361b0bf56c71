use std::path::Path;

use crate::descriptor::ThemePackage;
use crate::locations::Category;
use crate::report::{InstallReport, Outcome};

/// Receiver for the discrete status events the pipeline emits.
///
/// Rendering lives entirely behind this trait; the pipeline never
/// writes to the terminal itself.
pub trait Reporter {
    /// Number of recognized categories found in the archive.
    fn found(&self, _count: usize) {}

    /// Package identity, once the descriptor has loaded.
    fn package(&self, _package: &ThemePackage) {}

    /// Gate before any extraction. Returning `false` aborts cleanly.
    fn confirm(&self, _package: &ThemePackage) -> bool {
        true
    }

    /// About to extract one category.
    fn progress(&self, _index: usize, _total: usize, _category: Category, _dest: &Path) {}

    /// One category finished.
    fn outcome(&self, _category: Category, _outcome: Outcome) {}

    /// Terminal summary for the run.
    fn summary(&self, _report: &InstallReport) {}
}

/// Reporter that swallows every event and confirms everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}
