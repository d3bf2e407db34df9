//!
//! The chain access seam.
//!

pub mod address;
pub mod client;
pub mod signer;
pub mod token;
pub mod units;

use web3::types::Address;
use web3::types::U256;

use crate::artifact::constructor_arguments::ConstructorArguments;
use crate::artifact::Artifact;

///
/// Creates contract instances on a network.
///
pub trait ContractFactory {
    ///
    /// Returns the account that sends the deployment transaction.
    ///
    fn deployer(&self) -> anyhow::Result<Address>;

    ///
    /// Deploys the artifact and returns the address of the new instance.
    ///
    fn deploy(&self, artifact: &Artifact, arguments: ConstructorArguments)
        -> anyhow::Result<Address>;
}

///
/// An ownable, mintable ERC-20 token instance.
///
/// The transactions are sent by the token owner and return the gas used.
///
pub trait Token {
    /// The token name.
    fn name(&self) -> anyhow::Result<String>;

    /// The token symbol.
    fn symbol(&self) -> anyhow::Result<String>;

    /// The number of decimals of the token amounts.
    fn decimals(&self) -> anyhow::Result<u32>;

    /// The total supply in base units.
    fn total_supply(&self) -> anyhow::Result<U256>;

    /// The balance of the holder in base units.
    fn balance_of(&self, holder: Address) -> anyhow::Result<U256>;

    /// Transfers tokens from the owner.
    fn transfer(&self, to: Address, amount: U256) -> anyhow::Result<u64>;

    /// Mints new tokens. Only the owner may do it.
    fn mint(&self, to: Address, amount: U256) -> anyhow::Result<u64>;

    /// Hands the ownership over.
    fn transfer_ownership(&self, new_owner: Address) -> anyhow::Result<u64>;
}
