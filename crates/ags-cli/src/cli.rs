//! CLI argument definitions for the AGS4 validator.

use std::path::PathBuf;

use ags_model::RuleId;
use ags_standards::DictionaryVersion;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ags",
    version,
    about = "AGS4 validator - Check geotechnical data files against the AGS4 rules",
    long_about = "Check AGS4 geotechnical data transfer files.\n\n\
                  Runs the raw-text, parsed-data and dictionary rules against a\n\
                  pinned AGS4 standard dictionary (4.0.3, 4.0.4, 4.1 or 4.1.1)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an AGS4 file and report every issue found.
    Validate(ValidateArgs),

    /// Parse an AGS4 file and write it back in canonical form.
    Format(FormatArgs),

    /// List the bundled standard dictionaries.
    Dictionaries,

    /// List the rules that can be named in `--disable`, `--enable` and config files.
    Rules,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// AGS4 file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Standard dictionary version (v4_0_3, v4_0_4, v4_1, v4_1_1 or 4.1.1 style).
    #[arg(long = "dictionary", value_name = "VERSION")]
    pub dictionary: Option<DictionaryVersion>,

    /// TOML settings file with `dictionary` and `[rules]` entries.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip a rule ("2a", "19a", "Rule 11"). Repeatable.
    #[arg(long = "disable", value_name = "RULE")]
    pub disable: Vec<RuleId>,

    /// Run a rule even if the config file disables it. Repeatable.
    #[arg(long = "enable", value_name = "RULE")]
    pub enable: Vec<RuleId>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct FormatArgs {
    /// AGS4 file to rewrite.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output path (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
