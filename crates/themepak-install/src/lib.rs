//! Category routing, package descriptors and the install pipeline.
//!
//! # Architecture
//!
//! - `locations.rs` - scope and category -> destination tables
//! - `descriptor.rs` - package identity metadata
//! - `extract.rs` - per-category extraction loop
//! - `pipeline.rs` - staged run orchestration
//! - `reporter.rs` - status-event boundary

pub use descriptor::{DESCRIPTION_FILES, PACKAGE_MARKER, ThemePackage, load_descriptor, parse_description};
pub use error::{Error, Result};
pub use extract::{STRIP_COMPONENTS, find_themes, install};
pub use locations::{Category, LocationOptions, Locations, Scope};
pub use pipeline::{InstallPipeline, PipelineOutcome};
pub use report::{InstallReport, Outcome};
pub use reporter::{NullReporter, Reporter};

mod descriptor;
mod error;
mod extract;
mod locations;
mod pipeline;
mod report;
mod reporter;
