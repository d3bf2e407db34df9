//!
//! The final token balances of the interaction roles.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The final token balances of the interaction roles, as decimal strings.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balances {
    /// The contract owner balance.
    pub owner: String,
    /// The first user balance.
    pub user1: String,
    /// The second user balance.
    pub user2: String,
}
