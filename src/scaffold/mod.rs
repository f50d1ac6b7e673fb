//! @acp:module "Scaffolder"
//! @acp:summary "Materialize the redux manifest on disk"
//! @acp:domain cli
//! @acp:layer service
//!
//! Directory creation is skipped when the directory already exists. File
//! writes are not: every run overwrites all files with their templates.
//! Progress is reported as each step completes, so a failure part way
//! through leaves earlier files and progress lines in place.

pub mod reporter;

use std::path::{Path, PathBuf};

pub use reporter::{ConsoleReporter, RecordingReporter, ReportEvent, Reporter};

use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::manifest::{self, ManifestGroup, MANIFEST, ROOT_FILES};

/// Walks the manifest and performs the filesystem writes
pub struct Scaffolder {
    config: ScaffoldConfig,
}

impl Scaffolder {
    pub fn new(config: ScaffoldConfig) -> Self {
        Self { config }
    }

    /// Generate the full redux tree under the configured root
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<ScaffoldReport> {
        let redux_path = self.config.redux_path();
        let mut report = ScaffoldReport {
            redux_path: redux_path.clone(),
            actions: Vec::new(),
        };

        if ensure_dir(&redux_path)? {
            reporter.created_root(&redux_path);
            report.actions.push(ScaffoldAction::CreatedRoot(redux_path.clone()));
        }

        for group in MANIFEST {
            self.write_group(&redux_path, group, reporter, &mut report)?;
        }

        for template in ROOT_FILES {
            let file_path = redux_path.join(template.file_name());
            write_file(&file_path, template.content())?;
            reporter.wrote_file(&file_path);
            report.actions.push(ScaffoldAction::WroteFile(file_path));
        }

        tracing::debug!(
            "Scaffolded {} files under {}",
            report.files_written().count(),
            redux_path.display()
        );
        reporter.finished();

        Ok(report)
    }

    fn write_group(
        &self,
        redux_path: &Path,
        group: &ManifestGroup,
        reporter: &mut dyn Reporter,
        report: &mut ScaffoldReport,
    ) -> Result<()> {
        let dir_path = group_path(redux_path, group);

        if ensure_dir(&dir_path)? {
            reporter.created_dir(&dir_path);
            report.actions.push(ScaffoldAction::CreatedDir(dir_path.clone()));
        }

        for name in group.files {
            let file_path = dir_path.join(name);
            let content = manifest::content_for(name);
            write_file(&file_path, &content)?;
            reporter.wrote_file(&file_path);
            report.actions.push(ScaffoldAction::WroteFile(file_path));
        }

        Ok(())
    }
}

/// Result of a completed run
#[derive(Debug)]
pub struct ScaffoldReport {
    pub redux_path: PathBuf,
    pub actions: Vec<ScaffoldAction>,
}

impl ScaffoldReport {
    /// Files written, in write order
    pub fn files_written(&self) -> impl Iterator<Item = &Path> {
        self.actions.iter().filter_map(|action| match action {
            ScaffoldAction::WroteFile(path) => Some(path.as_path()),
            _ => None,
        })
    }

    /// Directories created by this run, including the redux root
    pub fn dirs_created(&self) -> impl Iterator<Item = &Path> {
        self.actions.iter().filter_map(|action| match action {
            ScaffoldAction::CreatedRoot(path) | ScaffoldAction::CreatedDir(path) => {
                Some(path.as_path())
            }
            ScaffoldAction::WroteFile(_) => None,
        })
    }
}

/// Filesystem step performed during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldAction {
    /// The redux root was created
    CreatedRoot(PathBuf),
    /// A group directory was created
    CreatedDir(PathBuf),
    /// A file was written
    WroteFile(PathBuf),
}

fn group_path(redux_path: &Path, group: &ManifestGroup) -> PathBuf {
    group
        .directory
        .split('/')
        .fold(redux_path.to_path_buf(), |path, segment| path.join(segment))
}

/// Create `path` and its parents unless it exists. Returns whether it was created.
fn ensure_dir(path: &Path) -> Result<bool> {
    if path.exists() {
        tracing::trace!("Directory exists: {}", path.display());
        return Ok(false);
    }

    std::fs::create_dir_all(path).map_err(|e| ScaffoldError::create_dir(path, e))?;
    tracing::debug!("Created directory {}", path.display());
    Ok(true)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| ScaffoldError::write_file(path, e))?;
    tracing::debug!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}
