//! @acp:module "Setup Redux Command"
//! @acp:summary "Generate the redux folder structure and files"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `redux-scaffold setup-redux`.

use anyhow::Result;

use crate::config::ScaffoldConfig;
use crate::scaffold::{ConsoleReporter, Scaffolder};

/// Options for the setup-redux command
#[derive(Debug, Clone, Default)]
pub struct SetupReduxOptions {
    /// Project root; the working directory when unset
    pub root: Option<std::path::PathBuf>,
}

/// Execute the setup-redux command
pub fn execute_setup_redux(options: SetupReduxOptions) -> Result<()> {
    let config = match options.root {
        Some(root) => ScaffoldConfig::for_root(root),
        None => ScaffoldConfig::from_current_dir()?,
    };
    tracing::debug!("Generating redux tree at {}", config.redux_path().display());

    let scaffolder = Scaffolder::new(config);
    let mut reporter = ConsoleReporter::stdout();
    scaffolder.run(&mut reporter)?;

    Ok(())
}
