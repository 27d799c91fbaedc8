use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  Analyze a single file:
    css-color-analyzer -i style.css

  Analyze a directory:
    css-color-analyzer -d src/styles

  Watch a directory for changes:
    css-color-analyzer -d src/styles --watch

  Save the analysis to a file:
    css-color-analyzer -d src/styles -o colors.json

  Format the output in a readable way:
    css-color-analyzer -d src/styles --pretty";

#[derive(Parser, Debug)]
#[command(name = "css-color-analyzer")]
#[command(about = "Extract and analyze colors from CSS and TSX files")]
#[command(after_help = EXAMPLES)]
#[command(version)]
pub struct Cli {
    /// Input file to analyze
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory to analyze recursively
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output file to save the analysis (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Format the JSON output to be more readable
    #[arg(long)]
    pub pretty: bool,

    /// Watch files for changes and update analysis
    #[arg(long)]
    pub watch: bool,

    /// Config file (default: ./.color-analyzer.toml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write a commented .color-analyzer.toml to the current directory
    #[arg(long)]
    pub init_config: bool,

    /// Number of threads used to scan files
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<NonZeroUsize>,

    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn has_inputs(&self) -> bool {
        self.input.is_some() || self.dir.is_some()
    }
}
