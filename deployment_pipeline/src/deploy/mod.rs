//!
//! The contract deployer.
//!


use colored::Colorize;

use crate::artifact::Artifact;
use crate::chain::address;
use crate::chain::ContractFactory;
use crate::model::deployment::Record as DeploymentRecord;
use crate::model::timestamp;
use crate::workspace::Workspace;

///
/// The contract deployer.
///
/// Deploys a compiled contract and appends the resulting record to the deployment log of the
/// network.
///
#[derive(Debug)]
pub struct Deployer<'a> {
    /// The project workspace.
    workspace: &'a Workspace,
    /// The logical network name.
    network: &'a str,
    /// The contract name.
    contract: &'a str,
    /// The source file the contract is declared in.
    source_file: &'a str,
    /// Whether to suppress the status output.
    quiet: bool,
}

impl<'a> Deployer<'a> {
    /// The default contract name.
    pub const DEFAULT_CONTRACT: &'static str = "MyToken";

    /// The default source file name.
    pub const DEFAULT_SOURCE_FILE: &'static str = "ERC20.sol";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        workspace: &'a Workspace,
        network: &'a str,
        contract: &'a str,
        source_file: &'a str,
        quiet: bool,
    ) -> Self {
        Self {
            workspace,
            network,
            contract,
            source_file,
            quiet,
        }
    }

    ///
    /// Deploys the contract and appends the record to the deployment log.
    ///
    /// Nothing is rolled back if appending fails after the deployment transaction.
    ///
    pub fn run<F>(&self, factory: &F) -> anyhow::Result<DeploymentRecord>
    where
        F: ContractFactory,
    {
        let artifact_path = self
            .workspace
            .artifact_path(self.source_file, self.contract);
        let artifact = Artifact::try_from(artifact_path.as_path())?;

        let deployer = factory.deployer()?;
        let arguments = artifact.constructor_arguments(deployer)?;
        if !self.quiet {
            println!(
                "   {} {}{} from {} on `{}`",
                "Deploying".bright_green().bold(),
                artifact.contract_name,
                arguments,
                address::to_checksum(&deployer),
                self.network,
            );
        }

        let instance = factory.deploy(&artifact, arguments)?;
        let record = DeploymentRecord {
            contract: self.contract.to_owned(),
            address: address::to_checksum(&instance),
            network: self.network.to_owned(),
            timestamp: timestamp::now(),
            deployer: address::to_checksum(&deployer),
            abi: artifact.abi,
        };
        if !self.quiet {
            println!(
                "    {} {} at {}",
                "Deployed".bright_green().bold(),
                record.contract,
                record.address,
            );
        }

        let log = self.workspace.deployment_log(self.network);
        let count = log.append(record.clone())?;
        if !self.quiet {
            println!(
                "       {} deployment #{count} to {:?}",
                "Saved".bright_green().bold(),
                log.path(),
            );
        }

        Ok(record)
    }
}
