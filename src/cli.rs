use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Compute distance, speed and calories from running, walking and swimming sensor packages"
)]
pub struct Cli {
    /// JSON file with an array of `{"code": "RUN", "values": [15000, 1, 75]}` packages.
    ///
    /// Codes: SWM (action, duration, weight, pool length, laps), RUN (action, duration,
    /// weight), WLK (action, duration, weight, height). Without it a built-in sample runs.
    #[arg(value_name = "PACKAGES")]
    pub packages: Option<PathBuf>,

    /// Output format for the summaries
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Abort on the first invalid package instead of skipping it
    #[arg(long)]
    pub fail_fast: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Five-line text block per workout
    Text,
    /// One JSON array of summaries
    Json,
}
