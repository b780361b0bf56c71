use std::path::PathBuf;

/// One entry recorded in the archive listing.
///
/// Listing records are never mutated; path rewriting goes through
/// [`Member::with_path`], which returns a new record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub path: PathBuf,
    pub size: u64,
    pub mode: Option<u32>,
    pub kind: MemberKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberKind {
    File,
    Directory,
    Symlink { target: PathBuf },
    Hardlink { target: PathBuf },
    /// Character/block devices, fifos and sockets. Never extracted.
    Special,
}

impl Member {
    pub fn new(path: PathBuf, size: u64, mode: Option<u32>, kind: MemberKind) -> Self {
        Self {
            path,
            size,
            mode,
            kind,
        }
    }

    /// A copy of this record under a rewritten path.
    pub fn with_path(&self, path: PathBuf) -> Self {
        Self {
            path,
            ..self.clone()
        }
    }

    /// Final path component, as used for category classification and
    /// metadata lookup.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, MemberKind::File)
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, MemberKind::Directory)
    }

    pub fn is_link(&self) -> bool {
        matches!(
            self.kind,
            MemberKind::Symlink { .. } | MemberKind::Hardlink { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn member_fields() {
        let member = Member::new(
            PathBuf::from("pkg/icon themes/Foo/index.theme"),
            1024,
            Some(0o644),
            MemberKind::File,
        );
        assert_eq!(member.size, 1024);
        assert!(member.is_file());
        assert!(!member.is_directory());
        assert!(!member.is_link());
    }

    #[test]
    fn file_name_is_final_component() {
        let member = Member::new(
            PathBuf::from("pkg/icon themes"),
            0,
            None,
            MemberKind::Directory,
        );
        assert_eq!(member.file_name(), Some("icon themes"));
    }

    #[test]
    fn with_path_leaves_original_untouched() {
        let member = Member::new(
            PathBuf::from("pkg/icon themes/Foo/cursor.png"),
            42,
            Some(0o644),
            MemberKind::File,
        );
        let rewritten = member.with_path(PathBuf::from("Foo/cursor.png"));
        assert_eq!(rewritten.path, Path::new("Foo/cursor.png"));
        assert_eq!(rewritten.size, 42);
        assert_eq!(member.path, Path::new("pkg/icon themes/Foo/cursor.png"));
    }

    #[test]
    fn link_kinds() {
        let symlink = Member::new(
            PathBuf::from("pkg/a"),
            0,
            None,
            MemberKind::Symlink {
                target: PathBuf::from("b"),
            },
        );
        let hardlink = Member::new(
            PathBuf::from("pkg/c"),
            0,
            None,
            MemberKind::Hardlink {
                target: PathBuf::from("pkg/a"),
            },
        );
        assert!(symlink.is_link());
        assert!(hardlink.is_link());
    }
}
