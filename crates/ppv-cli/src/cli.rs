//! CLI argument definitions for the loan compliance validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "loan-ppv",
    version,
    about = "Loan program & product compliance validator",
    long_about = "Evaluate a loan file against configured program and product\n\
                  compliance rules: LTV/DTI limits, occupancy, seasoning,\n\
                  fraud-report and homebuyer-education checks, and more."
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
    /// Evaluate a loan document against the configured rule set.
    Validate(ValidateArgs),

    /// List the configured rules and their triggers.
    Rules(ConfigArgs),

    /// Check a rule-set config for load-time problems.
    CheckConfig(ConfigArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Combined loan JSON document, or a directory of per-section
    /// <section>.json files.
    #[arg(value_name = "LOAN_DOC")]
    pub loan_doc: PathBuf,

    /// Rule-set config file.
    #[arg(long = "config", value_name = "PATH", default_value = "config/ppv.yaml")]
    pub config: PathBuf,

    /// Write the disclosure report JSON into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print verdicts as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Rule-set config file.
    #[arg(long = "config", value_name = "PATH", default_value = "config/ppv.yaml")]
    pub config: PathBuf,
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
