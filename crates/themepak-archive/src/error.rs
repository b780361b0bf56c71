use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("archive not found: {path}")]
    NotFound { path: PathBuf },

    #[error("unrecognized or unsupported archive format")]
    UnsupportedFormat,

    #[error("archive is corrupted")]
    Corrupted,

    #[error("entry path is not valid")]
    InvalidPath,

    #[error("member '{entry}' uses an absolute path")]
    AbsolutePath { entry: PathBuf },

    #[error("member '{entry}' escapes the destination directory")]
    PathEscape { entry: PathBuf },

    #[error("member '{entry}' is a special file (device, fifo or socket)")]
    SpecialFile { entry: PathBuf },

    #[error("link '{link}' targets the absolute path '{target}'")]
    AbsoluteLinkTarget { link: PathBuf, target: PathBuf },

    #[error("link '{link}' resolves outside the destination: '{target}'")]
    LinkEscape { link: PathBuf, target: PathBuf },

    #[error("member '{entry}' is not a regular file")]
    NotAFile { entry: PathBuf },

    #[error("member '{entry}' is missing from the archive")]
    MissingMember { entry: PathBuf },

    #[error("failed to extract '{path}': {source}")]
    ExtractionFailed { path: PathBuf, source: io::Error },

    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error("failed to create symlink '{link}': {source}")]
    SymlinkCreationFailed { link: PathBuf, source: io::Error },

    #[error("failed to create hardlink '{link}': {source}")]
    HardlinkCreationFailed { link: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// The single recoverable condition in the pipeline: a destination
    /// the current user cannot write to.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::ExtractionFailed { source, .. }
            | Self::DirectoryCreationFailed { source, .. }
            | Self::SymlinkCreationFailed { source, .. }
            | Self::HardlinkCreationFailed { source, .. } => {
                source.kind() == io::ErrorKind::PermissionDenied
            }
            Self::Io(source) => source.kind() == io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn denied() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn permission_denied_on_extraction_failure() {
        let err = Error::ExtractionFailed {
            path: PathBuf::from("/usr/share/sddm/themes/x"),
            source: denied(),
        };
        assert!(err.is_permission_denied());
    }

    #[test]
    fn permission_denied_on_directory_creation() {
        let err = Error::DirectoryCreationFailed {
            path: PathBuf::from("/usr/share/sddm/themes"),
            source: denied(),
        };
        assert!(err.is_permission_denied());
    }

    #[test]
    fn other_io_kinds_are_not_permission_denied() {
        let err = Error::ExtractionFailed {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn safety_rejections_are_never_permission_denied() {
        let err = Error::PathEscape {
            entry: PathBuf::from("../../etc/passwd"),
        };
        assert!(!err.is_permission_denied());
    }
}
