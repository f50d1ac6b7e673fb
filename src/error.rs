//! @acp:module "Errors"
//! @acp:summary "Error types for scaffolding operations"
//! @acp:domain cli
//! @acp:layer model

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Filesystem step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsAction {
    CreateDir,
    WriteFile,
}

impl std::fmt::Display for FsAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsAction::CreateDir => write!(f, "create directory"),
            FsAction::WriteFile => write!(f, "write file"),
        }
    }
}

/// Errors raised while materializing the manifest
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Any failing directory creation or file write. Never recovered.
    #[error("failed to {action} {}", path.display())]
    Filesystem {
        action: FsAction,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot resolve current directory")]
    CurrentDir(#[source] std::io::Error),
}

impl ScaffoldError {
    pub(crate) fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Filesystem {
            action: FsAction::CreateDir,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Filesystem {
            action: FsAction::WriteFile,
            path: path.into(),
            source,
        }
    }

    /// Path involved in the failure, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ScaffoldError::Filesystem { path, .. } => Some(path),
            ScaffoldError::CurrentDir(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_error_message() {
        let err = ScaffoldError::write_file(
            "/proj/src/redux/store.ts",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "failed to write file /proj/src/redux/store.ts"
        );
        assert_eq!(
            err.path(),
            Some(std::path::Path::new("/proj/src/redux/store.ts"))
        );
    }

    #[test]
    fn test_io_cause_reported_once() {
        let err = ScaffoldError::create_dir(
            "/proj/src/redux",
            std::io::Error::new(std::io::ErrorKind::Other, "Not a directory"),
        );
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "Not a directory");
        assert!(!err.to_string().contains("Not a directory"));

        let chain = format!("{:?}", anyhow::Error::from(err));
        assert_eq!(chain.matches("Not a directory").count(), 1);
    }
}
