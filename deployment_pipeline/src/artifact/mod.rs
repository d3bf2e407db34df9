//!
//! The compiler build artifact.
//!

pub mod constructor_arguments;


use std::path::Path;

use serde::Deserialize;
use web3::types::Address;

use crate::model::deployment::abi::Item as AbiItem;

use self::constructor_arguments::ConstructorArguments;

///
/// The compiler build artifact of a single contract.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// The contract name.
    pub contract_name: String,
    /// The source file the contract is declared in.
    pub source_name: String,
    /// The contract interface.
    pub abi: Vec<AbiItem>,
    /// The `0x`-prefixed deploy bytecode.
    pub bytecode: String,
}

impl TryFrom<&Path> for Artifact {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| {
            anyhow::anyhow!("Artifact {path:?} reading: {error}. Is the contract compiled?")
        })?;
        let artifact: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Artifact {path:?} parsing: {error}"))?;
        Ok(artifact)
    }
}

impl Artifact {
    ///
    /// Serializes the contract interface to the compiler JSON form.
    ///
    pub fn abi_json(&self) -> Vec<u8> {
        serde_json::to_vec(&self.abi).expect("Always valid")
    }

    ///
    /// Returns the deploy bytecode without the `0x` prefix.
    ///
    pub fn bytecode_hex(&self) -> anyhow::Result<String> {
        let bytecode = self.bytecode.trim();
        let bytecode = bytecode.strip_prefix("0x").unwrap_or(bytecode);
        if bytecode.is_empty() {
            anyhow::bail!(
                "Contract `{}` has no bytecode. Abstract contracts and interfaces cannot be deployed",
                self.contract_name
            );
        }
        if bytecode.len() % 2 != 0
            || !bytecode
                .chars()
                .all(|character| character.is_ascii_hexdigit())
        {
            anyhow::bail!(
                "Contract `{}` bytecode is not valid hex. Unlinked libraries are not supported",
                self.contract_name
            );
        }
        Ok(bytecode.to_owned())
    }

    ///
    /// Returns the constructor entry of the interface, if declared.
    ///
    pub fn constructor(&self) -> Option<&AbiItem> {
        self.abi.iter().find(|item| item.is_constructor())
    }

    ///
    /// Chooses the constructor arguments for a deployment sent by `deployer`.
    ///
    /// A single `address` parameter receives the deployer as the initial owner.
    ///
    pub fn constructor_arguments(
        &self,
        deployer: Address,
    ) -> anyhow::Result<ConstructorArguments> {
        let inputs = match self.constructor() {
            Some(constructor) => constructor.inputs(),
            None => return Ok(ConstructorArguments::None),
        };

        match inputs {
            [] => Ok(ConstructorArguments::None),
            [input] if input.kind == "address" => Ok(ConstructorArguments::InitialOwner(deployer)),
            inputs => anyhow::bail!(
                "Contract `{}` constructor ({}) is not supported. Expected no parameters or a single owner address",
                self.contract_name,
                inputs
                    .iter()
                    .map(|input| input.kind.as_str())
                    .collect::<Vec<&str>>()
                    .join(", ")
            ),
        }
    }
}
