//! Pocket calculator CLI library
//!
//! Command-line and terminal front ends over the `pocket-calc` engine.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod session;
pub mod tui;

pub use commands::{Cli, ColorArg, Commands, ConfigArgs, EvalArgs, KeysArgs, ReplArgs};
pub use config::{
    load_calculator_config, parse_calculator_config, CliConfig, ColorChoice, Verbosity,
};
pub use error::{CliError, CliResult};
pub use logging::{init_logging, LogTarget};
pub use output::{Outcome, Printer, Step, Transcript};
pub use session::{eval_scripts, press_keys, Repl};
