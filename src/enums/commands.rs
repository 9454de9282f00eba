use clap::Subcommand;
use crate::enums::output_format::OutputFormat;
use crate::structs::upload::Upload;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// List the SDG taxonomy and dimension groups
    Categories,
    /// Classify a single line and print every prediction
    Classify {
        #[clap(short, long)]
        text: String,
    },
    /// Upload one or more yearly reports and view one of them
    Report {
        /// YEAR=PATH, repeatable; later uploads for a year replace earlier ones
        #[clap(short, long = "upload", required = true)]
        uploads: Vec<Upload>,
        /// Year to view (defaults to the earliest uploaded year)
        #[clap(long)]
        view: Option<i32>,
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Interactive session: upload and view reports from stdin
    Session,
}
