//!
//! The transaction signer.
//!

use web3::signing::Key;
use web3::signing::SecretKey;
use web3::signing::SecretKeyRef;
use web3::types::Address;

///
/// The transaction signer.
///
pub enum Signer {
    /// Transactions are sent from the accounts the node keeps unlocked.
    Node,
    /// Transactions are signed locally with the key.
    Key(SecretKey),
}

impl Signer {
    ///
    /// Parses a hex-encoded secret key, with or without the `0x` prefix.
    ///
    pub fn from_hex(key: &str) -> anyhow::Result<Self> {
        let key = key.trim();
        let bytes = hex::decode(key.strip_prefix("0x").unwrap_or(key))
            .map_err(|error| anyhow::anyhow!("Private key decoding: {error}"))?;
        let key = SecretKey::from_slice(bytes.as_slice())
            .map_err(|error| anyhow::anyhow!("Private key is invalid: {error}"))?;
        Ok(Self::Key(key))
    }

    ///
    /// Returns the address of the local key, if any.
    ///
    pub fn address(&self) -> Option<Address> {
        match self {
            Self::Node => None,
            Self::Key(key) => Some(SecretKeyRef::new(key).address()),
        }
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node => write!(f, "Node"),
            Self::Key(_) => write!(f, "Key({:?})", self.address()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Signer;

    #[test]
    fn key_address() {
        // The first well-known development account.
        let signer = Signer::from_hex(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        )
        .expect("Always valid");

        let address = signer.address().expect("Key signer");
        assert_eq!(
            crate::chain::address::to_checksum(&address),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }

    #[test]
    fn node_has_no_local_address() {
        assert_eq!(Signer::Node.address(), None);
    }

    #[test]
    fn rejects_malformed_key() {
        assert!(Signer::from_hex("0x1234").is_err());
        assert!(Signer::from_hex("not a key").is_err());
    }
}
