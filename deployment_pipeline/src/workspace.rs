//!
//! The project workspace handle.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::log::AppendLog;
use crate::model::deployment::Record as DeploymentRecord;
use crate::model::report::Entry as ReportEntry;

///
/// The project workspace handle.
///
/// Every file the pipeline reads or writes is resolved against the workspace root.
///
#[derive(Debug, Clone)]
pub struct Workspace {
    /// The workspace root directory.
    root: PathBuf,
}

impl Workspace {
    /// The deployment logs directory.
    pub const DEPLOYMENTS_DIRECTORY: &'static str = "deployments";

    /// The reports directory.
    pub const REPORTS_DIRECTORY: &'static str = "reports";

    /// The compiler artifacts directory.
    pub const ARTIFACTS_DIRECTORY: &'static str = "artifacts/contracts";

    /// The deployment log file name prefix.
    pub const DEPLOYMENT_LOG_PREFIX: &'static str = "deployed-contracts";

    /// The interaction report file name prefix.
    pub const REPORT_LOG_PREFIX: &'static str = "interaction-report";

    /// The CSV summary file name.
    pub const SUMMARY_FILE_NAME: &'static str = "interaction-summary.csv";

    /// The optional network configuration file name.
    pub const NETWORKS_CONFIG_FILE_NAME: &'static str = "networks.json";

    /// The optional environment file name.
    pub const ENVIRONMENT_FILE_NAME: &'static str = ".env";

    ///
    /// Opens the workspace rooted at an existing directory.
    ///
    pub fn open(root: PathBuf) -> anyhow::Result<Self> {
        if !root.is_dir() {
            anyhow::bail!("Workspace directory {root:?} does not exist");
        }
        Ok(Self { root })
    }

    ///
    /// Returns the workspace root directory.
    ///
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    ///
    /// Returns the deployment logs directory.
    ///
    pub fn deployments_directory(&self) -> PathBuf {
        self.root.join(Self::DEPLOYMENTS_DIRECTORY)
    }

    ///
    /// Returns the reports directory.
    ///
    pub fn reports_directory(&self) -> PathBuf {
        self.root.join(Self::REPORTS_DIRECTORY)
    }

    ///
    /// Returns the deployment log of the network.
    ///
    pub fn deployment_log(&self, network: &str) -> AppendLog<DeploymentRecord> {
        AppendLog::new(
            self.deployments_directory()
                .join(format!("{}.{network}.json", Self::DEPLOYMENT_LOG_PREFIX)),
        )
    }

    ///
    /// Returns the interaction report log path of the network.
    ///
    pub fn report_log_path(&self, network: &str) -> PathBuf {
        self.reports_directory()
            .join(format!("{}.{network}.json", Self::REPORT_LOG_PREFIX))
    }

    ///
    /// Returns the interaction report log of the network.
    ///
    pub fn report_log(&self, network: &str) -> AppendLog<ReportEntry> {
        AppendLog::new(self.report_log_path(network))
    }

    ///
    /// Returns the interaction report log of the network with untyped entries.
    ///
    pub fn raw_report_log(&self, network: &str) -> AppendLog<serde_json::Value> {
        AppendLog::new(self.report_log_path(network))
    }

    ///
    /// Returns the CSV summary path.
    ///
    pub fn summary_path(&self) -> PathBuf {
        self.reports_directory().join(Self::SUMMARY_FILE_NAME)
    }

    ///
    /// Returns the compiler artifact path of the contract declared in the source file.
    ///
    pub fn artifact_path(&self, source_file: &str, contract: &str) -> PathBuf {
        self.root
            .join(Self::ARTIFACTS_DIRECTORY)
            .join(source_file)
            .join(format!("{contract}.json"))
    }

    ///
    /// Returns the network configuration file path.
    ///
    pub fn networks_config_path(&self) -> PathBuf {
        self.root.join(Self::NETWORKS_CONFIG_FILE_NAME)
    }

    ///
    /// Loads the `.env` file of the workspace into the process environment, if present.
    ///
    pub fn load_environment(&self) -> anyhow::Result<()> {
        let path = self.root.join(Self::ENVIRONMENT_FILE_NAME);
        if path.exists() {
            dotenv::from_path(path.as_path())
                .map_err(|error| anyhow::anyhow!("Environment file {path:?} loading: {error}"))?;
        }
        Ok(())
    }

    ///
    /// Returns the names of the networks that have a deployment log, sorted.
    ///
    pub fn deployed_networks(&self) -> anyhow::Result<Vec<String>> {
        let directory = self.deployments_directory();
        if !directory.is_dir() {
            return Ok(vec![]);
        }

        let prefix = format!("{}.", Self::DEPLOYMENT_LOG_PREFIX);
        let mut networks = Vec::new();
        for entry in std::fs::read_dir(directory.as_path())
            .map_err(|error| anyhow::anyhow!("Deployments directory {directory:?} reading: {error}"))?
        {
            let file_name = entry?.file_name();
            let file_name = file_name.to_string_lossy();
            if let Some(network) = file_name
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_suffix(".json"))
            {
                if !network.is_empty() {
                    networks.push(network.to_owned());
                }
            }
        }
        networks.sort();
        Ok(networks)
    }
}
