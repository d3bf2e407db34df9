//!
//! The gas usage of the gated token operations.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The outcome of a gated operation.
///
/// Stored on disk as a numeric string, `"FAILED"`, or `"DISABLED"`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GasOutcome {
    /// The operation succeeded and consumed the given amount of gas.
    Recorded(u64),
    /// The operation was attempted and failed.
    Failed,
    /// The operation was not attempted because the network mode forbids it.
    Disabled,
}

impl GasOutcome {
    /// The on-disk failure marker.
    pub const FAILED: &'static str = "FAILED";

    /// The on-disk disabled marker.
    pub const DISABLED: &'static str = "DISABLED";

    ///
    /// Whether the operation was attempted.
    ///
    pub fn is_attempted(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl TryFrom<String> for GasOutcome {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            Self::FAILED => Ok(Self::Failed),
            Self::DISABLED => Ok(Self::Disabled),
            gas => gas
                .parse::<u64>()
                .map(Self::Recorded)
                .map_err(|error| format!("Invalid gas value `{gas}`: {error}")),
        }
    }
}

impl From<GasOutcome> for String {
    fn from(value: GasOutcome) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for GasOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recorded(gas) => write!(f, "{gas}"),
            Self::Failed => write!(f, "{}", Self::FAILED),
            Self::Disabled => write!(f, "{}", Self::DISABLED),
        }
    }
}

///
/// The gas usage of the gated token operations.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasUsage {
    /// The token transfer.
    pub transfer: GasOutcome,
    /// The token minting.
    pub mint: GasOutcome,
    /// The ownership transfer.
    pub transfer_ownership: GasOutcome,
}

impl GasUsage {
    ///
    /// Returns the number of operations that were attempted.
    ///
    pub fn attempted(&self) -> usize {
        [self.transfer, self.mint, self.transfer_ownership]
            .iter()
            .filter(|outcome| outcome.is_attempted())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::GasOutcome;
    use super::GasUsage;

    #[test]
    fn string_encoding() {
        let usage = GasUsage {
            transfer: GasOutcome::Recorded(34_512),
            mint: GasOutcome::Failed,
            transfer_ownership: GasOutcome::Disabled,
        };

        let json = serde_json::to_value(&usage).expect("Serialization");
        assert_eq!(
            json,
            serde_json::json!({
                "transfer": "34512",
                "mint": "FAILED",
                "transferOwnership": "DISABLED",
            })
        );

        let decoded: GasUsage = serde_json::from_value(json).expect("Deserialization");
        assert_eq!(decoded, usage);
        assert_eq!(decoded.attempted(), 2);
    }

    #[test]
    fn rejects_unknown_marker() {
        let result = serde_json::from_str::<GasOutcome>(r#""SKIPPED""#);

        assert!(result.is_err());
    }
}
