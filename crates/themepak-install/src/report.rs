/// Bookkeeping for one install run. `total` counts every attempted
/// category; `total == succeeded + skipped` holds whenever the run
/// completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub total: usize,
    pub succeeded: usize,
    pub skipped: usize,
}

/// Outcome of one category extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    /// The destination was not writable by the current user; the
    /// category was passed over and the run went on.
    SkippedPermission,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_starts_empty() {
        let report = InstallReport::default();
        assert_eq!(report.total, 0);
        assert_eq!(report.succeeded, 0);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn counters_balance() {
        let report = InstallReport {
            total: 3,
            succeeded: 2,
            skipped: 1,
        };
        assert_eq!(report.total, report.succeeded + report.skipped);
    }
}
