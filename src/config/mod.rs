//! @acp:module "Configuration"
//! @acp:summary "Target resolution for the scaffolder"
//! @acp:domain cli
//! @acp:layer config
//!
//! Nothing is read from disk or flags: the target is always the working
//! directory plus the fixed `src/redux` location.

use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// @acp:summary "Where the redux tree is generated"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Project root directory
    pub root: PathBuf,

    /// Redux root, relative to `root`
    pub redux_dir: PathBuf,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            redux_dir: default_redux_dir(),
        }
    }
}

impl ScaffoldConfig {
    /// Config targeting an explicit project root
    pub fn for_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            redux_dir: default_redux_dir(),
        }
    }

    /// @acp:summary "Config targeting the process working directory"
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(ScaffoldError::CurrentDir)?;
        Ok(Self::for_root(cwd))
    }

    /// Absolute-or-relative path of the redux root
    pub fn redux_path(&self) -> PathBuf {
        self.root.join(&self.redux_dir)
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_redux_dir() -> PathBuf {
    Path::new("src").join("redux")
}
