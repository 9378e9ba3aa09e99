use crate::io::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

pub mod setup;

#[derive(Parser, Debug)]
#[command(name = "dupexports")]
#[command(about = "Find exported symbols declared by more than one module", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory (or single file) to analyze
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Exported name allowed to appear in several modules (repeatable, comma-separated)
    #[arg(short = 'w', long = "whitelist", value_delimiter = ',')]
    pub whitelist: Vec<String>,

    /// Glob of files to skip, relative to PATH (repeatable)
    #[arg(short = 'i', long = "ignore-path")]
    pub ignore_path: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to the nearest .dupexports.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Parse files sequentially
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Number of parser threads (0 = available parallelism)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    pub jobs: usize,

    /// Plain output: no colors, no emoji
    #[arg(long)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
