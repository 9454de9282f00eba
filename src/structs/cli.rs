use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "sdg-classifier")]
#[clap(about = "Classify report lines against the Sustainable Development Goals", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/sdg-classifier/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
