use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "ecolar",
    version,
    about = "Daily water, energy, and gas tracker with a sustainability score"
)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG is honored otherwise)
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a single day of consumption
    Score(ScoreArgs),
    /// Edit readings line by line and rescore after every change
    Watch(OutputArgs),
    /// Print saving tips
    Tips,
    /// Write a default ecolar.toml in the current directory
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ScoreArgs {
    /// Water in liters per day
    #[arg(long, allow_hyphen_values = true)]
    pub water: Option<String>,
    /// Energy in kWh per day
    #[arg(long, allow_hyphen_values = true)]
    pub energy: Option<String>,
    /// Gas in m³ per day
    #[arg(long, allow_hyphen_values = true)]
    pub gas: Option<String>,
    /// Append saving tips to the report
    #[arg(long)]
    pub tips: bool,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
