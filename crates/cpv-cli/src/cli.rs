//! CLI argument definitions for the CPV mapping generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cpv-mapping",
    version,
    about = "Generate the CPV code to obligation module mapping",
    long_about = "Generate the CPV code to obligation module mapping.\n\n\
                  Reads the Energy Label, Ecodesign, Services, Tyres, Buildings and GPP\n\
                  reference sheets under data/sources/ and writes one JSON lookup table.\n\
                  Running without a subcommand is the same as `generate`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for progress, -vv for debug, -q for errors only).
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
    /// Build the mapping from the source sheets and write the JSON file.
    Generate(GenerateArgs),

    /// List the obligation modules in canonical order.
    Modules,

    /// Build the mapping in memory and print the modules for CPV codes.
    Lookup(LookupArgs),
}

#[derive(Args, Default)]
pub struct SourceArgs {
    /// Project root containing data/sources/ (default: $CPV_MAPPING_ROOT or the current directory).
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Also fold the retired English GPP sheet (data/sources/cpv-gpp-mapping.csv).
    #[arg(long = "legacy-gpp")]
    pub legacy_gpp: bool,
}

#[derive(Args, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output file (default: <ROOT>/src/data/cpv-mapping-from-csv.json).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Build and report without writing the output file.
    #[arg(long = "dry-run", conflicts_with = "check")]
    pub dry_run: bool,

    /// Fail when the output file differs from what would be generated.
    #[arg(long = "check")]
    pub check: bool,
}

#[derive(Args)]
pub struct LookupArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// CPV codes to look up (e.g. 09310000-5).
    #[arg(value_name = "CPV", required = true)]
    pub codes: Vec<String>,
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
