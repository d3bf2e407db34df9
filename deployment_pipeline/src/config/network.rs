//!
//! The network endpoint configuration.
//!

use serde::Deserialize;

///
/// The network endpoint configuration.
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Network {
    /// The JSON-RPC endpoint URL.
    pub url: String,
    /// The environment variable overriding the endpoint URL when set and non-empty.
    #[serde(default)]
    pub url_env: Option<String>,
    /// The expected chain identifier, used for transaction signing.
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// The environment variable holding the hex-encoded signing key.
    /// Without it, transactions are sent from the node's unlocked accounts.
    #[serde(default)]
    pub private_key_env: Option<String>,
    /// The number of block confirmations, overriding the global setting.
    #[serde(default)]
    pub confirmations: Option<usize>,
}

impl Network {
    ///
    /// A local development node without signing keys.
    ///
    /// Local nodes mine a block per transaction, so the receipt is read without waiting for
    /// further blocks.
    ///
    pub fn local(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            url_env: None,
            chain_id: None,
            private_key_env: None,
            confirmations: Some(0),
        }
    }

    ///
    /// Resolves the endpoint URL against the process environment.
    ///
    pub fn resolve_url(&self) -> String {
        self.url_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.url.clone())
    }

    ///
    /// Resolves the signing key against the process environment.
    ///
    /// Returns `None` if no key variable is configured or it is unset or empty.
    ///
    pub fn resolve_private_key(&self) -> Option<String> {
        self.private_key_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
    }
}
