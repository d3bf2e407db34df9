//!
//! The containerized static analyzer runner.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use deployment_pipeline::Workspace;

///
/// The containerized static analyzer runner.
///
/// The workspace root is mounted at `/src` and the analyzer is pointed at the file there.
///
#[derive(Debug, Clone)]
pub struct Analyzer {
    /// The container image.
    image: String,
}

impl Analyzer {
    /// The default container image.
    pub const DEFAULT_IMAGE: &'static str = "ghcr.io/crytic/slither";

    /// The container runtime executable.
    pub const CONTAINER_RUNTIME: &'static str = "docker";

    /// The workspace mount point inside the container.
    pub const MOUNT_POINT: &'static str = "/src";

    /// The Solidity source file extension.
    pub const SOLIDITY_EXTENSION: &'static str = "sol";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(image: String) -> Self {
        Self { image }
    }

    ///
    /// Finds the Solidity sources of the workspace `contracts` directory.
    ///
    pub fn sources(workspace: &Workspace) -> anyhow::Result<Vec<PathBuf>> {
        let pattern = workspace.root().join("contracts").join("**").join("*.sol");
        let pattern = pattern.to_string_lossy();
        let mut sources: Vec<PathBuf> = glob::glob(pattern.as_ref())
            .map_err(|error| anyhow::anyhow!("Source pattern `{pattern}`: {error}"))?
            .filter_map(Result::ok)
            .collect();
        sources.sort();
        Ok(sources)
    }

    ///
    /// Builds the analyzer command for a Solidity file inside the workspace.
    ///
    pub fn command(&self, workspace: &Workspace, file: &Path) -> anyhow::Result<Command> {
        if file.extension().and_then(|extension| extension.to_str())
            != Some(Self::SOLIDITY_EXTENSION)
        {
            anyhow::bail!("{file:?} is not a Solidity file");
        }

        let root = workspace
            .root()
            .canonicalize()
            .map_err(|error| anyhow::anyhow!("Workspace {:?}: {error}", workspace.root()))?;
        let file = if file.is_absolute() {
            file.to_path_buf()
        } else {
            workspace.root().join(file)
        };
        let file = file
            .canonicalize()
            .map_err(|error| anyhow::anyhow!("Source file {file:?}: {error}"))?;
        let relative = file.strip_prefix(root.as_path()).map_err(|_| {
            anyhow::anyhow!("Source file {file:?} is outside the workspace {root:?}")
        })?;
        let target = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .fold(Self::MOUNT_POINT.to_owned(), |path, component| {
                format!("{path}/{component}")
            });

        let mut command = Command::new(Self::CONTAINER_RUNTIME);
        command.arg("run");
        command.arg("--rm");
        command.arg("-v");
        command.arg(format!("{}:{}", root.to_string_lossy(), Self::MOUNT_POINT));
        command.arg(self.image.as_str());
        command.arg("slither");
        command.arg(target);
        Ok(command)
    }

    ///
    /// Runs the analyzer and returns its report.
    ///
    /// On failure, the error carries the standard error output, or the standard output if the
    /// former is empty.
    ///
    pub fn run(&self, workspace: &Workspace, file: &Path) -> anyhow::Result<String> {
        let mut command = self.command(workspace, file)?;
        let output = command.output().map_err(|error| {
            anyhow::anyhow!(
                "{} subprocess spawning error: {error:?}",
                Self::CONTAINER_RUNTIME
            )
        })?;

        let stdout = String::from_utf8_lossy(output.stdout.as_slice()).to_string();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(output.stderr.as_slice());
            let message = if stderr.trim().is_empty() {
                stdout.as_str()
            } else {
                stderr.as_ref()
            };
            anyhow::bail!("Analysis of {file:?} failed: {message}");
        }
        Ok(stdout)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_IMAGE.to_owned())
    }
}
