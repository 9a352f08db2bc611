//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "plotsense",
    version,
    about = "PlotSense - chart suggestions for tabular data",
    long_about = "Inspect a tabular dataset and propose a ranked set of chart\n\
                  specifications appropriate to its shape, optionally biased toward\n\
                  a chart style detected from a reference image.\n\n\
                  Render specs are emitted as Vega-Lite v5 JSON."
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
    /// Generate ranked chart suggestions for a dataset.
    Suggest(SuggestArgs),

    /// Classify the columns of a dataset without suggesting charts.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Tabular data file (.csv, .tsv, or .json array of objects). May be
    /// omitted when --image is given; the detector's sample data is
    /// analyzed instead.
    #[arg(value_name = "DATA")]
    pub data: Option<PathBuf>,

    /// Reference chart image; its detected style biases the ordering.
    #[arg(long = "image", value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Explicit preferred chart style (e.g. "Bar Chart"); wins over --image.
    #[arg(long = "style", value_name = "LABEL")]
    pub style: Option<String>,

    /// Print at most this many suggestions.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Emit the full suggestion list as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Write each render spec to <DIR>/<id>.vl.json.
    #[arg(long = "specs-dir", value_name = "DIR")]
    pub specs_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Tabular data file (.csv, .tsv, or .json array of objects).
    #[arg(value_name = "DATA")]
    pub data: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
