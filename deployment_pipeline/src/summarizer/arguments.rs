//!
//! The summarizer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The summarizer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The project workspace root.
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// The network whose interaction report is summarized.
    #[arg(long, default_value = deployment_pipeline::DEFAULT_NETWORK)]
    pub network: String,

    /// The CSV output path. Defaults to `reports/interaction-summary.csv` in the workspace.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppresses the status output.
    #[arg(short, long)]
    pub quiet: bool,
}
