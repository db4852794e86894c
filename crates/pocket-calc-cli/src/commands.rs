//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pocket calculator: keypad calculator for the terminal and for scripts
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// YAML file with calculator limits
    #[arg(long, global = true, env = "POCKET_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply token strings and print the display
    Eval(EvalArgs),

    /// Apply keyboard key values and print the display
    Keys(KeysArgs),

    /// Read token strings from stdin, one per line
    Repl(ReplArgs),

    /// Interactive terminal calculator
    Tui,

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Token strings such as "12+3=" (applied in order, after any options)
    #[arg(required = true, allow_hyphen_values = true)]
    pub input: Vec<String>,

    /// Print each token and the display after it
    #[arg(long)]
    pub trace: bool,

    /// Print a JSON transcript
    #[arg(long, conflicts_with = "trace")]
    pub json: bool,
}

/// Arguments for the keys command
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Key values such as 7, +, Enter, Escape, Backspace (after any options)
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print each key and the display after it
    #[arg(long)]
    pub trace: bool,

    /// Print a JSON transcript
    #[arg(long, conflicts_with = "trace")]
    pub json: bool,
}

/// Arguments for the repl command
#[derive(Parser, Debug)]
pub struct ReplArgs {
    /// Do not print the prompt
    #[arg(long)]
    pub no_prompt: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Print as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Color argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
