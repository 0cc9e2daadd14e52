//! CLI argument definitions for the ID card validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "idcard",
    version,
    about = "Resident ID card validator - check numbers and extract fields",
    long_about = "Validate 18-character resident ID card numbers.\n\n\
                  Checks structure, region code, birth date, and the MOD 11-2\n\
                  check character, and extracts region, birth date, age, and sex."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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
    /// Validate ID numbers and print a summary.
    Validate(ValidateArgs),

    /// Compute the check character for a 17-digit prefix.
    Gen(GenArgs),

    /// List the known province-level region codes.
    Regions,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// ID numbers to validate (one per argument).
    #[arg(value_name = "ID")]
    pub ids: Vec<String>,

    /// Read ID numbers from a file, one per line.
    #[arg(long = "file", value_name = "PATH", conflicts_with = "ids")]
    pub file: Option<PathBuf>,

    /// Emit the batch summary as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct GenArgs {
    /// The first 17 digits of an ID number.
    #[arg(value_name = "PREFIX17")]
    pub prefix: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
