//!
//! The Solidity authoring assistant library.
//!

pub mod advisor;
pub mod analyzer;
pub mod deployment_info;
pub mod document;
pub mod natspec;
pub mod snippet;
pub mod template;

pub use self::analyzer::Analyzer;
pub use self::deployment_info::DeploymentInfo;
pub use self::document::ActiveDocument;
pub use self::natspec::NatSpec;
pub use self::snippet::Snippet;
