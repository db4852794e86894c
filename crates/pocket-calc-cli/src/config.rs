//! CLI configuration

use std::path::{Path, PathBuf};

use pocket_calc::core::CalculatorConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - per-token logging
    Verbose,
    /// Debug - everything, including ignored tokens
    Debug,
}

impl Verbosity {
    /// Derives the level from `-q` and the number of `-v` flags
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default log filter directive when `RUST_LOG` is unset
    #[must_use]
    pub const fn log_filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().features().colors_supported(),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Log destination; stderr when unset
    pub log_file: Option<PathBuf>,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Calculator limits
    pub calculator: CalculatorConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Set JSON log output
    #[must_use]
    pub const fn with_log_json(mut self, json: bool) -> Self {
        self.log_json = json;
        self
    }

    /// Set calculator limits
    #[must_use]
    pub const fn with_calculator(mut self, calculator: CalculatorConfig) -> Self {
        self.calculator = calculator;
        self
    }

    /// Renders the configuration as YAML
    pub fn to_yaml(&self) -> CliResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

/// Parses calculator limits from YAML text
///
/// Missing keys keep their defaults; an empty document is all defaults.
pub fn parse_calculator_config(yaml: &str) -> CliResult<CalculatorConfig> {
    let config = if yaml.trim().is_empty() {
        CalculatorConfig::default()
    } else {
        serde_yaml_ng::from_str::<CalculatorConfig>(yaml)?
    };
    config
        .validate()
        .map_err(|e| CliError::config(e.to_string()))?;
    Ok(config)
}

/// Loads calculator limits from a YAML file
pub fn load_calculator_config(path: &Path) -> CliResult<CalculatorConfig> {
    let yaml = std::fs::read_to_string(path)?;
    let config = parse_calculator_config(&yaml).map_err(|e| match e {
        CliError::Config { message } => CliError::config(format!("{}: {message}", path.display())),
        other => other,
    })?;
    tracing::debug!(path = %path.display(), ?config, "loaded calculator config");
    Ok(config)
}
