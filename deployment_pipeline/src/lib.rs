//!
//! The deployment pipeline library.
//!

pub mod artifact;
pub mod chain;
pub mod config;
pub mod deploy;
pub mod interaction;
pub mod log;
pub mod model;
pub mod network;
pub mod summary;
pub mod util;
pub mod workspace;

pub use self::artifact::constructor_arguments::ConstructorArguments;
pub use self::artifact::Artifact;
pub use self::chain::client::Client;
pub use self::chain::signer::Signer;
pub use self::chain::token::Web3Token;
pub use self::chain::ContractFactory;
pub use self::chain::Token;
pub use self::config::network::Network as NetworkConfig;
pub use self::config::Config;
pub use self::deploy::Deployer;
pub use self::interaction::roles::Roles;
pub use self::interaction::Interactor;
pub use self::interaction::Session;
pub use self::log::error::Error as LogError;
pub use self::log::AppendLog;
pub use self::model::deployment::abi::Item as AbiItem;
pub use self::model::deployment::abi::Parameter as AbiParameter;
pub use self::model::deployment::Record as DeploymentRecord;
pub use self::model::report::balances::Balances;
pub use self::model::report::gas::GasOutcome;
pub use self::model::report::gas::GasUsage;
pub use self::model::report::Entry as ReportEntry;
pub use self::network::action::Action;
pub use self::network::mode::Mode;
pub use self::network::Category as NetworkCategory;
pub use self::summary::row::Row as SummaryRow;
pub use self::summary::Summary;
pub use self::workspace::Workspace;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on any fatal error.
pub const EXIT_CODE_FAILURE: i32 = 1;

/// The network used when neither the arguments nor the environment name one.
pub const DEFAULT_NETWORK: &str = "localhost";

/// The environment variable naming the target network.
pub const NETWORK_ENVIRONMENT_VARIABLE: &str = "HARDHAT_NETWORK";
