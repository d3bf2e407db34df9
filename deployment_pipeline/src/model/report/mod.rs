//!
//! The interaction report entry.
//!

pub mod balances;
pub mod gas;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::network::mode::Mode;

use self::balances::Balances;
use self::gas::GasUsage;

///
/// The interaction report entry, appended once per interactor run to the per-network report log.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// The report time.
    #[serde(with = "crate::model::timestamp")]
    pub timestamp: DateTime<Utc>,
    /// The logical network name.
    pub network: String,
    /// The mode derived from the network classification.
    pub mode: Mode,
    /// The contract name, copied from the deployment record.
    pub contract: String,
    /// The contract address, copied from the deployment record.
    pub address: String,
    /// The gas usage of the gated operations.
    pub gas_usage: GasUsage,
    /// The final balances.
    pub balances: Balances,
    /// The total supply before the gated operations, as a decimal string.
    pub total_supply_before: String,
    /// The total supply after the gated operations, as a decimal string.
    pub total_supply_after: String,
}
