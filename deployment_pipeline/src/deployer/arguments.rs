//!
//! The deployer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The deployer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The project workspace root.
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// The target network. Falls back to `HARDHAT_NETWORK`, then to `localhost`.
    #[arg(long)]
    pub network: Option<String>,

    /// The contract to deploy.
    #[arg(long, default_value = deployment_pipeline::Deployer::DEFAULT_CONTRACT)]
    pub contract: String,

    /// The source file the contract is declared in, relative to `artifacts/contracts`.
    #[arg(long, default_value = deployment_pipeline::Deployer::DEFAULT_SOURCE_FILE)]
    pub source: String,

    /// Suppresses the status output.
    #[arg(short, long)]
    pub quiet: bool,
}
