//!
//! The contract ABI description as emitted by the Solidity compiler.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A function, event, error or special entry of the contract ABI.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// The entry kind: `function`, `event`, `constructor`, `error`, `fallback`, or `receive`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The entry name. Absent for constructors and special functions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The input parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<Parameter>>,
    /// The output parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Parameter>>,
    /// The state mutability tag: `pure`, `view`, `nonpayable`, or `payable`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
    /// Whether the event is anonymous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<bool>,
}

impl Item {
    /// The function entry kind.
    pub const KIND_FUNCTION: &'static str = "function";

    /// The constructor entry kind.
    pub const KIND_CONSTRUCTOR: &'static str = "constructor";

    ///
    /// Whether the entry is a callable function.
    ///
    pub fn is_function(&self) -> bool {
        self.kind == Self::KIND_FUNCTION
    }

    ///
    /// Whether the entry is the constructor.
    ///
    pub fn is_constructor(&self) -> bool {
        self.kind == Self::KIND_CONSTRUCTOR
    }

    ///
    /// Whether calling the function does not modify the state.
    ///
    pub fn is_read_only(&self) -> bool {
        matches!(self.state_mutability.as_deref(), Some("view") | Some("pure"))
    }

    ///
    /// Returns the input parameters, empty if none are declared.
    ///
    pub fn inputs(&self) -> &[Parameter] {
        self.inputs.as_deref().unwrap_or_default()
    }

    ///
    /// Returns the signature in the `name(type1,type2)` form.
    ///
    pub fn signature(&self) -> String {
        format!(
            "{}({})",
            self.name.as_deref().unwrap_or_default(),
            self.inputs()
                .iter()
                .map(|input| input.kind.as_str())
                .collect::<Vec<&str>>()
                .join(",")
        )
    }
}

///
/// A parameter of an ABI entry.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// The parameter name, possibly empty.
    #[serde(default)]
    pub name: String,
    /// The canonical ABI type, e.g. `uint256` or `address`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The Solidity type as written in the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
    /// Whether the event parameter is indexed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    /// The tuple components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Parameter>>,
}

impl Parameter {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: &str, kind: &str) -> Self {
        Self {
            name: name.to_owned(),
            kind: kind.to_owned(),
            internal_type: None,
            indexed: None,
            components: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Item;

    const TRANSFER: &str = r#"{
        "inputs": [
            { "internalType": "address", "name": "to", "type": "address" },
            { "internalType": "uint256", "name": "value", "type": "uint256" }
        ],
        "name": "transfer",
        "outputs": [ { "internalType": "bool", "name": "", "type": "bool" } ],
        "stateMutability": "nonpayable",
        "type": "function"
    }"#;

    #[test]
    fn signature() {
        let item: Item = serde_json::from_str(TRANSFER).expect("Always valid");

        assert!(item.is_function());
        assert!(!item.is_read_only());
        assert_eq!(item.signature(), "transfer(address,uint256)");
    }

    #[test]
    fn keeps_compiler_fields() {
        let item: Item = serde_json::from_str(TRANSFER).expect("Always valid");

        let original: serde_json::Value = serde_json::from_str(TRANSFER).expect("Always valid");
        let reserialized = serde_json::to_value(&item).expect("Always valid");
        assert_eq!(original, reserialized);
    }

    #[test]
    fn special_entries_without_inputs() {
        let item: Item =
            serde_json::from_str(r#"{ "stateMutability": "payable", "type": "receive" }"#)
                .expect("Always valid");

        assert!(!item.is_function());
        assert!(item.inputs().is_empty());
        assert_eq!(item.signature(), "()");
    }
}
