//!
//! The latest deployment overview.
//!

use deployment_pipeline::DeploymentRecord;
use deployment_pipeline::Workspace;

///
/// The latest deployment of a network.
///
#[derive(Debug, Clone)]
pub struct DeploymentInfo {
    /// The network the deployment log belongs to.
    pub network: String,
    /// The latest record of the log.
    pub record: DeploymentRecord,
}

impl DeploymentInfo {
    ///
    /// Returns the networks that have a deployment log.
    ///
    pub fn networks(workspace: &Workspace) -> anyhow::Result<Vec<String>> {
        let networks = workspace.deployed_networks()?;
        if networks.is_empty() {
            anyhow::bail!("No deployment metadata found. Deploy a contract first");
        }
        Ok(networks)
    }

    ///
    /// Loads the latest deployment of the network.
    ///
    pub fn latest(workspace: &Workspace, network: &str) -> anyhow::Result<Self> {
        let log = workspace.deployment_log(network);
        if !log.exists() {
            anyhow::bail!("No deployment file found for network: {network}");
        }
        let record = log
            .latest()?
            .ok_or_else(|| anyhow::anyhow!("Deployment log {:?} has no records", log.path()))?;
        Ok(Self {
            network: network.to_owned(),
            record,
        })
    }
}

impl std::fmt::Display for DeploymentInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Latest Deployment Info ({}) ===", self.network)?;
        writeln!(f, "Contract: {}", self.record.contract)?;
        writeln!(f, "Address:  {}", self.record.address)?;
        writeln!(f, "Network:  {}", self.record.network)?;
        writeln!(
            f,
            "Deployed: {}",
            self.record
                .timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        )?;
        write!(f, "ABI Functions: {}", self.record.abi.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use deployment_pipeline::AbiItem;
    use deployment_pipeline::DeploymentRecord;
    use deployment_pipeline::Workspace;

    use super::DeploymentInfo;

    fn record(network: &str, contract: &str) -> DeploymentRecord {
        DeploymentRecord {
            contract: contract.to_owned(),
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_owned(),
            network: network.to_owned(),
            timestamp: chrono::Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .expect("Always valid"),
            deployer: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_owned(),
            abi: vec![
                serde_json::from_str::<AbiItem>(
                    r#"{ "type": "function", "name": "owner", "inputs": [], "outputs": [], "stateMutability": "view" }"#,
                )
                .expect("Always valid"),
                serde_json::from_str::<AbiItem>(r#"{ "type": "event", "name": "Transfer" }"#)
                    .expect("Always valid"),
            ],
        }
    }

    #[test]
    fn lists_networks_with_logs() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let workspace = Workspace::open(directory.path().to_path_buf()).expect("Workspace");
        assert!(DeploymentInfo::networks(&workspace).is_err());

        for network in ["sepolia", "localhost"] {
            workspace
                .deployment_log(network)
                .append(record(network, "MyToken"))
                .expect("Append");
        }
        std::fs::write(
            workspace.deployments_directory().join("notes.txt"),
            "not a deployment log",
        )
        .expect("Write");

        assert_eq!(
            DeploymentInfo::networks(&workspace).expect("Networks"),
            vec!["localhost".to_owned(), "sepolia".to_owned()]
        );
    }

    #[test]
    fn shows_the_latest_record() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let workspace = Workspace::open(directory.path().to_path_buf()).expect("Workspace");
        let log = workspace.deployment_log("localhost");
        log.append(record("localhost", "OldToken")).expect("Append");
        log.append(record("localhost", "MyToken")).expect("Append");

        let info = DeploymentInfo::latest(&workspace, "localhost").expect("Info");

        assert_eq!(
            info.to_string(),
            "=== Latest Deployment Info (localhost) ===\nContract: MyToken\nAddress:  0x5FbDB2315678afecb367f032d93F642f64180aa3\nNetwork:  localhost\nDeployed: 2024-01-01T00:00:00.000Z\nABI Functions: 2"
        );
        assert!(DeploymentInfo::latest(&workspace, "sepolia").is_err());
    }
}
