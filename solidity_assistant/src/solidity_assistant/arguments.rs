//!
//! The Solidity assistant arguments.
//!

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

///
/// The Solidity assistant arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The project workspace root.
    #[arg(long, default_value = ".", global = true)]
    pub workspace: PathBuf,

    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The assistant commands.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inserts the ERC-20 token template into a document.
    Template {
        /// The document, created if missing.
        #[arg(long)]
        file: PathBuf,
        /// The 1-based line to insert at.
        #[arg(long, default_value_t = 1)]
        line: usize,
    },
    /// Inserts NatSpec documentation before every contract declaration of a document.
    Natspec {
        /// The document.
        #[arg(long)]
        file: PathBuf,
    },
    /// Runs the containerized static analyzer on a Solidity file.
    /// Without a file, analyzes every source under `contracts`.
    Analyze {
        /// The Solidity file inside the workspace.
        #[arg(long)]
        file: Option<PathBuf>,
        /// The analyzer container image.
        #[arg(long, default_value = solidity_assistant::Analyzer::DEFAULT_IMAGE)]
        image: String,
    },
    /// Shows the latest deployment of a network.
    /// Without a network, lists the networks that have deployments.
    Deployment {
        /// The network.
        #[arg(long)]
        network: Option<String>,
    },
    /// Generates a Hardhat call snippet for a function of the latest deployment.
    /// Without a function, lists the available functions.
    Snippet {
        /// The network of the deployment.
        #[arg(long, default_value = deployment_pipeline::DEFAULT_NETWORK)]
        network: String,
        /// The function name or `name(type1,type2)` signature.
        #[arg(long)]
        function: Option<String>,
        /// The document to insert the snippet into instead of printing it.
        #[arg(long, requires = "line")]
        file: Option<PathBuf>,
        /// The 1-based line to insert at.
        #[arg(long)]
        line: Option<usize>,
    },
    /// Answers a security question. Without a question, starts an interactive chat.
    Advise {
        /// The question.
        question: Vec<String>,
    },
}
