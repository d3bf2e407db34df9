//!
//! The network checker arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The network checker arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The project workspace root.
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// The network to check. Falls back to `HARDHAT_NETWORK`, then to `localhost`.
    #[arg(long)]
    pub network: Option<String>,

    /// The ERC-20 token to report the signer balance of.
    /// Defaults to the Chainlink LINK token on `sepolia`.
    #[arg(long)]
    pub token: Option<String>,
}

impl Arguments {
    /// The Chainlink LINK token on Sepolia.
    pub const LINK_TOKEN_SEPOLIA: &'static str = "0x779877A7B0D9E8603169DdbD7836e478b4624789";

    ///
    /// Returns the token to check on the network, if any.
    ///
    pub fn token(&self, network: &str) -> Option<String> {
        self.token.clone().or_else(|| {
            (network == "sepolia").then(|| Self::LINK_TOKEN_SEPOLIA.to_owned())
        })
    }
}
