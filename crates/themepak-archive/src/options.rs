use std::path::PathBuf;

/// Options for one batch extraction pass.
#[derive(Clone, Debug, Default)]
pub struct ExtractOptions {
    /// Only members strictly inside this archive-relative subtree are
    /// extracted; the prefix member itself is not.
    pub prefix: Option<PathBuf>,
    /// Leading path components removed from every extracted member. A
    /// member whose path empties is dropped, not written.
    pub strip_components: usize,
}

impl ExtractOptions {
    pub fn prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn strip_components(mut self, n: usize) -> Self {
        self.strip_components = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults() {
        let options = ExtractOptions::default();
        assert!(options.prefix.is_none());
        assert_eq!(options.strip_components, 0);
    }

    #[test]
    fn builder() {
        let options = ExtractOptions::default()
            .prefix("pkg/icon themes")
            .strip_components(2);
        assert_eq!(options.prefix.as_deref(), Some(Path::new("pkg/icon themes")));
        assert_eq!(options.strip_components, 2);
    }
}
