//! Theme-package archive intake: compression detection, member listing,
//! path sanitization and batch extraction.
//!
//! # Architecture
//!
//! - `format.rs` - compression detection and streaming decoders
//! - `member.rs` - archive member records
//! - `sanitize.rs` - path safety gate (zip-slip prevention)
//! - `reader.rs` - `ThemeArchive` open/list/read/extract
//! - `options.rs` - extraction options

pub use error::{Error, Result};
pub use member::{Member, MemberKind};
pub use options::ExtractOptions;
pub use reader::ThemeArchive;
pub use sanitize::{SanitizedPath, screen, screen_member};

pub mod format;
mod error;
mod member;
pub mod options;
mod reader;
pub mod sanitize;
