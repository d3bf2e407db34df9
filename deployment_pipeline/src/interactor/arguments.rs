//!
//! The interactor arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The interactor arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The project workspace root.
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// The target network. Falls back to `HARDHAT_NETWORK`, then to `localhost`.
    /// The network name decides which operations run.
    #[arg(long)]
    pub network: Option<String>,

    /// Suppresses the status output.
    #[arg(short, long)]
    pub quiet: bool,
}
