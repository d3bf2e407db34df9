//!
//! The network risk classification.
//!

pub mod action;
pub mod mode;

use self::mode::Mode;

///
/// The network risk category.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A local development node.
    Local,
    /// A public test network.
    Testnet,
    /// A production chain. Any network not explicitly known as local or test falls here.
    Mainnet,
}

impl Category {
    /// The local development networks.
    pub const LOCAL_NETWORKS: [&'static str; 2] = ["localhost", "hardhat"];

    /// The public test networks.
    pub const TEST_NETWORKS: [&'static str; 4] =
        ["sepolia", "goerli", "mumbai", "polygonZkEVMTestnet"];

    ///
    /// Classifies the network by its name.
    ///
    pub fn classify(network: &str) -> Self {
        if Self::LOCAL_NETWORKS.contains(&network) {
            Self::Local
        } else if Self::TEST_NETWORKS.contains(&network) {
            Self::Testnet
        } else {
            Self::Mainnet
        }
    }

    ///
    /// Returns the interaction mode allowed on networks of this category.
    ///
    pub fn mode(self) -> Mode {
        match self {
            Self::Local => Mode::Full,
            Self::Testnet => Mode::Safe,
            Self::Mainnet => Mode::Restricted,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "LOCAL"),
            Self::Testnet => write!(f, "TESTNET"),
            Self::Mainnet => write!(f, "MAINNET"),
        }
    }
}

///
/// Selects the network named by the argument, then by the environment, then the default.
///
pub fn selected(argument: Option<String>) -> String {
    argument
        .or_else(|| {
            std::env::var(crate::NETWORK_ENVIRONMENT_VARIABLE)
                .ok()
                .filter(|name| !name.trim().is_empty())
        })
        .unwrap_or_else(|| crate::DEFAULT_NETWORK.to_owned())
}

#[cfg(test)]
mod tests {
    use super::mode::Mode;
    use super::Category;

    #[test]
    fn local_networks_are_full() {
        for network in ["localhost", "hardhat"] {
            assert_eq!(Category::classify(network), Category::Local);
            assert_eq!(Category::classify(network).mode(), Mode::Full);
        }
    }

    #[test]
    fn test_networks_are_safe() {
        for network in ["sepolia", "goerli", "mumbai", "polygonZkEVMTestnet"] {
            assert_eq!(Category::classify(network), Category::Testnet);
            assert_eq!(Category::classify(network).mode(), Mode::Safe);
        }
    }

    #[test]
    fn anything_else_is_restricted() {
        for network in ["mainnet", "ethereum", "polygon", "", "Localhost", "SEPOLIA", " hardhat"] {
            assert_eq!(Category::classify(network), Category::Mainnet);
            assert_eq!(Category::classify(network).mode(), Mode::Restricted);
        }
    }

    #[test]
    fn explicit_network_wins() {
        assert_eq!(super::selected(Some("sepolia".to_owned())), "sepolia");
        assert_eq!(super::selected(Some(String::new())), "");
    }
}
