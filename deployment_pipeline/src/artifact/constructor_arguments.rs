//!
//! The contract constructor arguments.
//!

use web3::types::Address;

///
/// The contract constructor arguments.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorArguments {
    /// The constructor takes no arguments.
    None,
    /// The constructor takes the initial owner address.
    InitialOwner(Address),
}

impl std::fmt::Display for ConstructorArguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "()"),
            Self::InitialOwner(owner) => {
                write!(f, "(initialOwner: {})", crate::chain::address::to_checksum(owner))
            }
        }
    }
}
