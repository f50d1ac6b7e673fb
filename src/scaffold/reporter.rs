//! @acp:module "Progress Reporter"
//! @acp:summary "Progress output for each filesystem step"
//! @acp:domain cli
//! @acp:layer service

use std::fmt;
use std::io::{Stdout, Write};
use std::path::{Path, PathBuf};

use console::style;

/// Receives one callback per completed filesystem step
pub trait Reporter {
    /// The redux root did not exist and was created
    fn created_root(&mut self, path: &Path);

    /// A group directory did not exist and was created
    fn created_dir(&mut self, path: &Path);

    /// A file was written (new or overwritten)
    fn wrote_file(&mut self, path: &Path);

    /// All groups and root files are in place
    fn finished(&mut self);
}

/// Writes styled progress lines, to stdout unless given another writer
#[derive(Debug)]
pub struct ConsoleReporter<W: Write = Stdout> {
    out: W,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl Default for ConsoleReporter<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Write errors are ignored, as with a closed stdout
    fn line(&mut self, args: fmt::Arguments<'_>) {
        let _ = writeln!(self.out, "{} {}", style("✓").green(), args);
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn created_root(&mut self, _path: &Path) {
        self.line(format_args!("Created 'redux' folder in 'src'"));
    }

    fn created_dir(&mut self, path: &Path) {
        self.line(format_args!("Created folder: {}", path.display()));
    }

    fn wrote_file(&mut self, path: &Path) {
        self.line(format_args!("File created: {}", path.display()));
    }

    fn finished(&mut self) {
        let _ = writeln!(self.out, "{}", style("Redux setup complete.").bold());
        let _ = self.out.flush();
    }
}

/// Event captured by [`RecordingReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    CreatedRoot(PathBuf),
    CreatedDir(PathBuf),
    WroteFile(PathBuf),
    Finished,
}

/// Keeps events in memory instead of printing them
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<ReportEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for RecordingReporter {
    fn created_root(&mut self, path: &Path) {
        self.events.push(ReportEvent::CreatedRoot(path.to_path_buf()));
    }

    fn created_dir(&mut self, path: &Path) {
        self.events.push(ReportEvent::CreatedDir(path.to_path_buf()));
    }

    fn wrote_file(&mut self, path: &Path) {
        self.events.push(ReportEvent::WroteFile(path.to_path_buf()));
    }

    fn finished(&mut self) {
        self.events.push(ReportEvent::Finished);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_reporter_lines() {
        console::set_colors_enabled(false);
        let redux = Path::new("/proj/src/redux");

        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.created_root(redux);
        reporter.created_dir(&redux.join("lib"));
        reporter.wrote_file(&redux.join("lib").join("ReduxProvider.tsx"));
        reporter.finished();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let expected = format!(
            "✓ Created 'redux' folder in 'src'\n\
             ✓ Created folder: {}\n\
             ✓ File created: {}\n\
             Redux setup complete.\n",
            redux.join("lib").display(),
            redux.join("lib").join("ReduxProvider.tsx").display()
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_recording_reporter_keeps_order() {
        let mut reporter = RecordingReporter::new();
        reporter.wrote_file(Path::new("a.ts"));
        reporter.finished();

        assert_eq!(
            reporter.events,
            vec![ReportEvent::WroteFile(PathBuf::from("a.ts")), ReportEvent::Finished]
        );
    }
}
