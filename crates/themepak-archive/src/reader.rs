use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::format::{self, Compression, Decoder};
use crate::member::{Member, MemberKind};
use crate::options::ExtractOptions;
use crate::sanitize;

/// An opened theme package.
///
/// The stream cannot seek once a decoder is wrapped around it, so every
/// pass (listing, single reads, extraction) re-opens the file and walks
/// it front to back. Each pass holds the file handle only for its own
/// scope.
pub struct ThemeArchive {
    path: PathBuf,
    compression: Compression,
}

impl ThemeArchive {
    /// Open an archive, detecting the compression codec from content.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;

        let compression =
            format::detect_from_reader(&mut file)?.ok_or(Error::UnsupportedFormat)?;
        debug!(path = %path.display(), ?compression, "opened theme package");

        Ok(Self {
            path: path.to_path_buf(),
            compression,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    fn stream(&self) -> Result<tar::Archive<Decoder<File>>> {
        let file = File::open(&self.path)?;
        let decoder = self.compression.decoder(file)?;
        Ok(tar::Archive::new(decoder))
    }

    /// List every member in archive order. Restartable: each call walks
    /// a fresh pass over the stream.
    pub fn members(&self) -> Result<Vec<Member>> {
        let mut archive = self.stream()?;
        let mut members = Vec::new();
        for entry in archive.entries().map_err(|_| Error::Corrupted)? {
            let entry = entry.map_err(|_| Error::Corrupted)?;
            members.push(member_record(&entry)?);
        }
        Ok(members)
    }

    /// Materialize the bytes of one regular-file member.
    pub fn read_member(&self, member_path: &Path) -> Result<Vec<u8>> {
        let mut archive = self.stream()?;
        for entry in archive.entries().map_err(|_| Error::Corrupted)? {
            let mut entry = entry.map_err(|_| Error::Corrupted)?;
            let path = entry.path().map_err(|_| Error::InvalidPath)?.into_owned();
            if path != member_path {
                continue;
            }
            if !entry.header().entry_type().is_file() {
                return Err(Error::NotAFile {
                    entry: member_path.to_path_buf(),
                });
            }
            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data)?;
            return Ok(data);
        }
        Err(Error::MissingMember {
            entry: member_path.to_path_buf(),
        })
    }

    /// Extract members into `dest` in one batch pass.
    ///
    /// Members outside `options.prefix` are passed over; the rest have
    /// `options.strip_components` leading components removed, pass the
    /// sanitizer against `dest`, and are written out. A member whose
    /// path empties after stripping carries nothing to place and is
    /// dropped. Returns the number of members written.
    pub fn extract(&self, dest: &Path, options: &ExtractOptions) -> Result<usize> {
        ensure_dir(dest)?;

        let mut archive = self.stream()?;
        let mut written = 0usize;
        for entry in archive.entries().map_err(|_| Error::Corrupted)? {
            let mut entry = entry.map_err(|_| Error::Corrupted)?;
            let member = member_record(&entry)?;

            if let Some(prefix) = &options.prefix {
                if member.path == *prefix || !member.path.starts_with(prefix) {
                    continue;
                }
            }

            // Gate again at the write boundary; callers screen the whole
            // listing first, but extraction must hold on its own.
            sanitize::screen_member(&member)?;

            let Some(stripped) = sanitize::strip_components(&member.path, options.strip_components)
            else {
                continue;
            };
            let rewritten = member.with_path(stripped);
            let target = sanitize::sanitize_member_path(&rewritten.path, dest)?;

            write_member(
                &mut entry,
                &rewritten,
                &target.resolved,
                dest,
                options.strip_components,
            )?;
            written += 1;
        }
        Ok(written)
    }
}

fn member_record<R: Read>(entry: &tar::Entry<'_, R>) -> Result<Member> {
    let path = entry.path().map_err(|_| Error::InvalidPath)?.into_owned();
    let header = entry.header();
    let size = header.size().unwrap_or(0);
    let mode = header.mode().ok();
    let entry_type = header.entry_type();

    let kind = if entry_type.is_dir() {
        MemberKind::Directory
    } else if entry_type.is_symlink() {
        let target = entry
            .link_name()
            .map_err(|_| Error::InvalidPath)?
            .ok_or(Error::InvalidPath)?
            .into_owned();
        MemberKind::Symlink { target }
    } else if entry_type.is_hard_link() {
        let target = entry
            .link_name()
            .map_err(|_| Error::InvalidPath)?
            .ok_or(Error::InvalidPath)?
            .into_owned();
        MemberKind::Hardlink { target }
    } else if entry_type.is_file() {
        MemberKind::File
    } else {
        MemberKind::Special
    };

    Ok(Member::new(path, size, mode, kind))
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_member<R: Read>(
    entry: &mut tar::Entry<'_, R>,
    member: &Member,
    resolved: &Path,
    dest: &Path,
    strip_components: usize,
) -> Result<()> {
    match &member.kind {
        MemberKind::Directory => ensure_dir(resolved),
        MemberKind::File => {
            if let Some(parent) = resolved.parent() {
                ensure_dir(parent)?;
            }
            let mut out = File::create(resolved).map_err(|e| Error::ExtractionFailed {
                path: resolved.to_path_buf(),
                source: e,
            })?;
            io::copy(entry, &mut out).map_err(|e| Error::ExtractionFailed {
                path: resolved.to_path_buf(),
                source: e,
            })?;

            #[cfg(unix)]
            {
                if let Some(mode) = member.mode {
                    use std::os::unix::fs::PermissionsExt;
                    fs::set_permissions(resolved, fs::Permissions::from_mode(mode & 0o777))
                        .map_err(|e| Error::ExtractionFailed {
                            path: resolved.to_path_buf(),
                            source: e,
                        })?;
                }
            }
            Ok(())
        }
        MemberKind::Symlink { target } => {
            let link_target = sanitize::sanitize_symlink_target(target, &member.path, dest)?;
            if let Some(parent) = resolved.parent() {
                ensure_dir(parent)?;
            }
            create_symlink(&link_target, resolved)
        }
        MemberKind::Hardlink { target } => {
            // The linked-to file's recorded path was shortened by the
            // same strip rule; a target that empties cannot exist under
            // the destination.
            let stripped = sanitize::strip_components(target, strip_components).ok_or_else(|| {
                Error::LinkEscape {
                    link: member.path.clone(),
                    target: target.clone(),
                }
            })?;
            let link_target = sanitize::sanitize_hardlink_target(&stripped, &member.path, dest)?;
            if let Some(parent) = resolved.parent() {
                ensure_dir(parent)?;
            }
            fs::hard_link(&link_target, resolved).map_err(|e| Error::HardlinkCreationFailed {
                link: resolved.to_path_buf(),
                source: e,
            })
        }
        // Screened out before we get here.
        MemberKind::Special => Err(Error::SpecialFile {
            entry: member.path.clone(),
        }),
    }
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link).map_err(|e| Error::SymlinkCreationFailed {
        link: link.to_path_buf(),
        source: e,
    })
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    let result = if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    };
    result.map_err(|e| Error::SymlinkCreationFailed {
        link: link.to_path_buf(),
        source: e,
    })
}
