//!
//! The deployment record.
//!

pub mod abi;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use self::abi::Item as AbiItem;

///
/// The deployment record, appended once per deployment to the per-network deployment log.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The deployed artifact name.
    pub contract: String,
    /// The deployed instance address.
    pub address: String,
    /// The logical network name.
    pub network: String,
    /// The creation time.
    #[serde(with = "crate::model::timestamp")]
    pub timestamp: DateTime<Utc>,
    /// The initiating account address.
    pub deployer: String,
    /// The contract interface.
    pub abi: Vec<AbiItem>,
}

impl Record {
    ///
    /// Returns the callable functions of the contract interface.
    ///
    pub fn functions(&self) -> impl Iterator<Item = &AbiItem> {
        self.abi.iter().filter(|item| item.is_function())
    }

    ///
    /// Returns the function with the given name or `name(type1,type2)` signature.
    ///
    pub fn function(&self, selector: &str) -> Option<&AbiItem> {
        self.functions().find(|item| {
            item.signature() == selector || item.name.as_deref() == Some(selector)
        })
    }

    ///
    /// Serializes the contract interface to the compiler JSON form.
    ///
    pub fn abi_json(&self) -> Vec<u8> {
        serde_json::to_vec(&self.abi).expect("Always valid")
    }
}
