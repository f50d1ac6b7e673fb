//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler

pub mod setup_redux;

pub use setup_redux::{execute_setup_redux, SetupReduxOptions};
