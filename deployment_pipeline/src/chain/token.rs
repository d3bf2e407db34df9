//!
//! The token bound to a deployed contract over JSON-RPC.
//!

use web3::contract::Contract;
use web3::transports::Http;
use web3::types::Address;
use web3::types::U256;

use crate::chain::client::Client;
use crate::chain::Token;

///
/// The read-only ERC-20 interface, for tokens without a deployment record.
///
pub const ERC20_VIEW_ABI: &str = r#"[
  {"type":"function","name":"name","inputs":[],"outputs":[{"name":"","type":"string"}],"stateMutability":"view"},
  {"type":"function","name":"symbol","inputs":[],"outputs":[{"name":"","type":"string"}],"stateMutability":"view"},
  {"type":"function","name":"decimals","inputs":[],"outputs":[{"name":"","type":"uint8"}],"stateMutability":"view"},
  {"type":"function","name":"totalSupply","inputs":[],"outputs":[{"name":"","type":"uint256"}],"stateMutability":"view"},
  {"type":"function","name":"balanceOf","inputs":[{"name":"account","type":"address"}],"outputs":[{"name":"","type":"uint256"}],"stateMutability":"view"}
]"#;

///
/// The token bound to a deployed contract over JSON-RPC.
///
pub struct Web3Token {
    /// The client the calls are sent through.
    client: Client,
    /// The contract binding.
    contract: Contract<Http>,
}

impl Web3Token {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(client: Client, contract: Contract<Http>) -> Self {
        Self { client, contract }
    }

    ///
    /// Returns the client the calls are sent through.
    ///
    pub fn client(&self) -> &Client {
        &self.client
    }

    ///
    /// Returns the token contract address.
    ///
    pub fn address(&self) -> Address {
        self.contract.address()
    }
}

impl Token for Web3Token {
    fn name(&self) -> anyhow::Result<String> {
        self.client.query(&self.contract, "name", ())
    }

    fn symbol(&self) -> anyhow::Result<String> {
        self.client.query(&self.contract, "symbol", ())
    }

    fn decimals(&self) -> anyhow::Result<u32> {
        let decimals: U256 = self.client.query(&self.contract, "decimals", ())?;
        Ok(decimals.low_u32())
    }

    fn total_supply(&self) -> anyhow::Result<U256> {
        self.client.query(&self.contract, "totalSupply", ())
    }

    fn balance_of(&self, holder: Address) -> anyhow::Result<U256> {
        self.client.query(&self.contract, "balanceOf", (holder,))
    }

    fn transfer(&self, to: Address, amount: U256) -> anyhow::Result<u64> {
        self.client.transact(&self.contract, "transfer", (to, amount))
    }

    fn mint(&self, to: Address, amount: U256) -> anyhow::Result<u64> {
        self.client.transact(&self.contract, "mint", (to, amount))
    }

    fn transfer_ownership(&self, new_owner: Address) -> anyhow::Result<u64> {
        self.client.transact(&self.contract, "transferOwnership", (new_owner,))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::deployment::abi::Item as AbiItem;

    #[test]
    fn view_abi_is_read_only() {
        let items: Vec<AbiItem> =
            serde_json::from_str(super::ERC20_VIEW_ABI).expect("Always valid");

        assert_eq!(items.len(), 5);
        assert!(items.iter().all(AbiItem::is_read_only));
    }
}
