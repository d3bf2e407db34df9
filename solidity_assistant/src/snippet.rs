//!
//! The Hardhat call snippet generator.
//!

use deployment_pipeline::AbiItem;
use deployment_pipeline::DeploymentRecord;

///
/// A Hardhat script fragment calling a function of the deployed contract.
///
#[derive(Debug, Clone)]
pub struct Snippet<'a> {
    /// The deployed contract name.
    contract: &'a str,
    /// The deployed contract address.
    address: &'a str,
    /// The called function.
    function: &'a AbiItem,
}

impl<'a> Snippet<'a> {
    ///
    /// Selects the function by name or `name(type1,type2)` signature.
    ///
    pub fn new(record: &'a DeploymentRecord, selector: &str) -> anyhow::Result<Self> {
        let function = record.function(selector).ok_or_else(|| {
            anyhow::anyhow!(
                "Function `{selector}` not found in the `{}` ABI. Available: {}",
                record.contract,
                signatures(record).join(", ")
            )
        })?;
        Ok(Self {
            contract: record.contract.as_str(),
            address: record.address.as_str(),
            function,
        })
    }

    ///
    /// Returns the call arguments.
    ///
    pub fn arguments(&self) -> String {
        self.function
            .inputs()
            .iter()
            .enumerate()
            .map(|(index, input)| placeholder(input.kind.as_str(), index))
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl std::fmt::Display for Snippet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.function.name.as_deref().unwrap_or_default();
        let arguments = self.arguments();
        let form = if self.function.is_read_only() {
            "read-only"
        } else {
            "transaction"
        };

        writeln!(f, "    // Hardhat snippet for {name} ({form})")?;
        writeln!(
            f,
            "    const [signer, addr1, addr2] = await ethers.getSigners();"
        )?;
        writeln!(
            f,
            "    const contract = await ethers.getContractAt(\"{}\", \"{}\");",
            self.contract, self.address
        )?;
        if self.function.is_read_only() {
            writeln!(f, "    console.log(await contract.{name}({arguments}));")
        } else {
            writeln!(f, "    const tx = await contract.{name}({arguments});")?;
            writeln!(f, "    await tx.wait();")?;
            writeln!(f, "    console.log(\"{name} executed\");")
        }
    }
}

///
/// Returns the `name(type1,type2)` signatures of the contract functions.
///
pub fn signatures(record: &DeploymentRecord) -> Vec<String> {
    record.functions().map(AbiItem::signature).collect()
}

///
/// Returns the demo value of an argument of the ABI type.
///
pub fn placeholder(kind: &str, index: usize) -> String {
    if kind.starts_with("address") {
        "addr1.address".to_owned()
    } else if kind.starts_with("uint") {
        "ethers.parseEther(\"1\")".to_owned()
    } else if kind.starts_with("string") {
        "\"example\"".to_owned()
    } else if kind.starts_with("bool") {
        "true".to_owned()
    } else {
        format!("/* {kind} arg{index} */")
    }
}
