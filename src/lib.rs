#![forbid(unsafe_code)]

//! @acp:module "Redux Scaffold Library"
//! @acp:summary "Generate a conventional Redux Toolkit wiring into a project"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # redux-scaffold
//!
//! Writes a fixed set of directories and static source files under
//! `src/redux`: a store, a persisted reducer, an auth slice, an API layer
//! and a provider component.
//!
//! ## Example
//!
//! ```rust,no_run
//! use redux_scaffold::{ConsoleReporter, ScaffoldConfig, Scaffolder};
//!
//! fn main() -> anyhow::Result<()> {
//!     let scaffolder = Scaffolder::new(ScaffoldConfig::for_root("/path/to/app"));
//!     let report = scaffolder.run(&mut ConsoleReporter::stdout())?;
//!
//!     for file in report.files_written() {
//!         println!("{}", file.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod manifest;
pub mod scaffold;

// Re-exports
pub use config::ScaffoldConfig;
pub use error::{FsAction, Result, ScaffoldError};
pub use manifest::{content_for, ManifestGroup, TemplateFile, MANIFEST, ROOT_FILES};
pub use scaffold::{
    ConsoleReporter, RecordingReporter, ReportEvent, Reporter, ScaffoldAction, ScaffoldReport,
    Scaffolder,
};
