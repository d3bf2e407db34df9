//!
//! The JSON-RPC chain client.
//!

use web3::contract::tokens::Tokenize;
use web3::contract::Contract;
use web3::contract::Options;
use web3::signing::SecretKeyRef;
use web3::transports::Http;
use web3::types::Address;
use web3::types::TransactionReceipt;
use web3::types::U256;
use web3::types::U64;
use web3::Web3;

use crate::artifact::constructor_arguments::ConstructorArguments;
use crate::artifact::Artifact;
use crate::chain::signer::Signer;
use crate::chain::token::Web3Token;
use crate::chain::ContractFactory;
use crate::config::network::Network as NetworkConfig;
use crate::config::Config;

///
/// The JSON-RPC chain client.
///
/// Every request is driven to completion on a private current-thread runtime, so the client
/// exposes a blocking interface.
///
pub struct Client {
    /// The runtime the requests are executed on.
    runtime: tokio::runtime::Runtime,
    /// The web3 handle.
    web3: Web3<Http>,
    /// The transaction signer.
    signer: Signer,
    /// The account transactions are sent from.
    account: Address,
    /// The chain identifier reported by the node.
    chain_id: u64,
    /// The number of block confirmations to wait for.
    confirmations: usize,
    /// The deployment gas limit.
    gas_limit: u64,
}

impl Client {
    ///
    /// Connects to the network endpoint and resolves the sending account.
    ///
    pub fn connect(network: &NetworkConfig, config: &Config) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| anyhow::anyhow!("Async runtime initialization: {error}"))?;

        let url = network.resolve_url();
        let transport = Http::new(url.as_str())
            .map_err(|error| anyhow::anyhow!("RPC endpoint `{url}`: {error}"))?;
        let web3 = Web3::new(transport);

        let signer = match network.resolve_private_key() {
            Some(key) => Signer::from_hex(key.as_str())?,
            None => Signer::Node,
        };

        let chain_id = runtime
            .block_on(web3.eth().chain_id())
            .map_err(|error| anyhow::anyhow!("Connection to `{url}`: {error}"))?
            .low_u64();
        if let Some(expected) = network.chain_id {
            if expected != chain_id {
                anyhow::bail!(
                    "Chain ID mismatch at `{url}`: expected {expected}, found {chain_id}"
                );
            }
        }

        let account = match signer.address() {
            Some(address) => address,
            None => runtime
                .block_on(web3.eth().accounts())
                .map_err(|error| anyhow::anyhow!("Accounts request: {error}"))?
                .first()
                .copied()
                .ok_or_else(|| anyhow::anyhow!("The node at `{url}` has no unlocked accounts"))?,
        };

        Ok(Self {
            runtime,
            web3,
            signer,
            account,
            chain_id,
            confirmations: config.confirmations(network),
            gas_limit: config.gas_limit,
        })
    }

    ///
    /// Returns the accounts available for sending transactions, the sending account first.
    ///
    pub fn signers(&self) -> anyhow::Result<Vec<Address>> {
        match self.signer {
            Signer::Key(_) => Ok(vec![self.account]),
            Signer::Node => self
                .runtime
                .block_on(self.web3.eth().accounts())
                .map_err(|error| anyhow::anyhow!("Accounts request: {error}")),
        }
    }

    ///
    /// Returns the account transactions are sent from.
    ///
    pub fn account(&self) -> Address {
        self.account
    }

    ///
    /// Returns the chain identifier.
    ///
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    ///
    /// Returns the native currency balance of the account.
    ///
    pub fn balance(&self, account: Address) -> anyhow::Result<U256> {
        self.runtime
            .block_on(self.web3.eth().balance(account, None))
            .map_err(|error| anyhow::anyhow!("Balance request: {error}"))
    }

    ///
    /// Binds a token instance at the address, handing the client over to it.
    ///
    pub fn token(self, address: Address, abi_json: &[u8]) -> anyhow::Result<Web3Token> {
        let contract = Contract::from_json(self.web3.eth(), address, abi_json)
            .map_err(|error| anyhow::anyhow!("Contract ABI parsing: {error}"))?;
        Ok(Web3Token::new(self, contract))
    }

    ///
    /// Calls a read-only contract function.
    ///
    pub(crate) fn query<R, P>(
        &self,
        contract: &Contract<Http>,
        function: &str,
        parameters: P,
    ) -> anyhow::Result<R>
    where
        R: web3::contract::tokens::Detokenize,
        P: Tokenize,
    {
        self.runtime
            .block_on(contract.query(function, parameters, None, Options::default(), None))
            .map_err(|error| anyhow::anyhow!("Call to `{function}`: {error}"))
    }

    ///
    /// Sends a contract transaction and returns the gas used.
    ///
    pub(crate) fn transact<P>(
        &self,
        contract: &Contract<Http>,
        function: &str,
        parameters: P,
    ) -> anyhow::Result<u64>
    where
        P: Tokenize,
    {
        let receipt = match self.signer {
            Signer::Node => self.runtime.block_on(contract.call_with_confirmations(
                function,
                parameters,
                self.account,
                Options::default(),
                self.confirmations,
            )),
            Signer::Key(ref key) => {
                self.runtime
                    .block_on(contract.signed_call_with_confirmations(
                        function,
                        parameters,
                        Options::default(),
                        self.confirmations,
                        SecretKeyRef::new(key),
                    ))
            }
        }
        .map_err(|error| anyhow::anyhow!("Transaction `{function}`: {error}"))?;

        Self::gas_used(function, &receipt)
    }

    ///
    /// Checks the receipt status and extracts the gas used.
    ///
    fn gas_used(function: &str, receipt: &TransactionReceipt) -> anyhow::Result<u64> {
        if receipt.status == Some(U64::zero()) {
            anyhow::bail!(
                "Transaction `{function}` {:?} reverted",
                receipt.transaction_hash
            );
        }
        receipt
            .gas_used
            .map(|gas| gas.low_u64())
            .ok_or_else(|| anyhow::anyhow!("Transaction `{function}` receipt has no gas used"))
    }
}

impl ContractFactory for Client {
    fn deployer(&self) -> anyhow::Result<Address> {
        Ok(self.account)
    }

    fn deploy(
        &self,
        artifact: &Artifact,
        arguments: ConstructorArguments,
    ) -> anyhow::Result<Address> {
        let abi_json = artifact.abi_json();
        let bytecode = artifact.bytecode_hex()?;
        let gas_limit = self.gas_limit;
        let builder = Contract::deploy(self.web3.eth(), abi_json.as_slice())
            .map_err(|error| anyhow::anyhow!("Contract ABI parsing: {error}"))?
            .confirmations(self.confirmations)
            .options(Options::with(|options| {
                options.gas = Some(U256::from(gas_limit));
            }));

        let contract = match (&self.signer, arguments) {
            (Signer::Node, ConstructorArguments::None) => self
                .runtime
                .block_on(builder.execute(bytecode, (), self.account)),
            (Signer::Node, ConstructorArguments::InitialOwner(owner)) => self
                .runtime
                .block_on(builder.execute(bytecode, (owner,), self.account)),
            (Signer::Key(key), ConstructorArguments::None) => {
                self.runtime.block_on(builder.sign_with_key_and_execute(
                    bytecode,
                    (),
                    SecretKeyRef::new(key),
                    Some(self.chain_id),
                ))
            }
            (Signer::Key(key), ConstructorArguments::InitialOwner(owner)) => {
                self.runtime.block_on(builder.sign_with_key_and_execute(
                    bytecode,
                    (owner,),
                    SecretKeyRef::new(key),
                    Some(self.chain_id),
                ))
            }
        }
        .map_err(|error| anyhow::anyhow!("Contract `{}` deployment: {error}", artifact.contract_name))?;

        Ok(contract.address())
    }
}
