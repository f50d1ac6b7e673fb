#![forbid(unsafe_code)]
//! redux-scaffold Command Line Interface

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use redux_scaffold::commands::{execute_setup_redux, SetupReduxOptions};

#[derive(Parser)]
#[command(name = "redux-scaffold")]
#[command(about = "Scaffold Redux Toolkit boilerplate into a project")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Redux folder structure and files
    SetupRedux,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout only carries progress lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::SetupRedux => {
            execute_setup_redux(SetupReduxOptions::default())?;
        }
    }

    Ok(())
}
