//!
//! The pipeline configuration.
//!

pub mod network;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use self::network::Network;

///
/// The pipeline configuration.
///
/// Read from the optional `networks.json` of the workspace. Networks missing from the file
/// fall back to the built-in defaults.
///
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The network endpoints by name.
    #[serde(default)]
    pub networks: BTreeMap<String, Network>,
    /// The number of block confirmations to wait for after each transaction.
    #[serde(default = "Config::default_confirmations")]
    pub confirmations: usize,
    /// The gas limit of the deployment transaction.
    #[serde(default = "Config::default_gas_limit")]
    pub gas_limit: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            networks: BTreeMap::new(),
            confirmations: Self::default_confirmations(),
            gas_limit: Self::default_gas_limit(),
        }
    }
}

impl Config {
    /// The local development node endpoint.
    pub const LOCAL_NODE_URL: &'static str = "http://127.0.0.1:8545";

    /// The public Sepolia endpoint.
    pub const SEPOLIA_PUBLIC_URL: &'static str = "https://ethereum-sepolia-rpc.publicnode.com";

    /// The Sepolia chain identifier.
    pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

    ///
    /// Loads the configuration file, or the defaults if the file does not exist.
    ///
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let file = std::fs::File::open(path)
            .map_err(|error| anyhow::anyhow!("Network config {path:?} opening error: {error}"))?;
        let reader = std::io::BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)
            .map_err(|error| anyhow::anyhow!("Network config {path:?} parsing error: {error}"))?;
        Ok(config)
    }

    ///
    /// Returns the endpoint configuration of the network.
    ///
    pub fn network(&self, name: &str) -> anyhow::Result<Network> {
        if let Some(network) = self.networks.get(name) {
            return Ok(network.clone());
        }

        match name {
            "localhost" | "hardhat" => Ok(Network::local(Self::LOCAL_NODE_URL)),
            "sepolia" => Ok(Network {
                url: Self::SEPOLIA_PUBLIC_URL.to_owned(),
                url_env: Some("SEPOLIA_RPC_URL".to_owned()),
                chain_id: Some(Self::SEPOLIA_CHAIN_ID),
                private_key_env: Some("PRIVATE_KEY".to_owned()),
                confirmations: None,
            }),
            name => anyhow::bail!(
                "Network `{name}` is not configured. Known networks: {}",
                self.known_networks().join(", ")
            ),
        }
    }

    ///
    /// Returns the number of confirmations to wait for on the network.
    ///
    pub fn confirmations(&self, network: &Network) -> usize {
        network.confirmations.unwrap_or(self.confirmations)
    }

    ///
    /// Returns the names of all configured and built-in networks.
    ///
    pub fn known_networks(&self) -> Vec<String> {
        let mut names: Vec<String> = ["hardhat", "localhost", "sepolia"]
            .into_iter()
            .map(str::to_owned)
            .chain(self.networks.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    fn default_confirmations() -> usize {
        1
    }

    fn default_gas_limit() -> u64 {
        3_000_000
    }
}
