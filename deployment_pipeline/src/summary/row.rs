//!
//! The summary row.
//!

use serde_json::Value;

///
/// The flattened interaction report entry.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The cell values in the header order.
    pub cells: Vec<String>,
}

impl Row {
    /// The column names.
    pub const HEADERS: [&'static str; 13] = [
        "timestamp",
        "network",
        "mode",
        "contract",
        "address",
        "transferGas",
        "mintGas",
        "ownershipGas",
        "ownerBalance",
        "user1Balance",
        "user2Balance",
        "totalSupplyBefore",
        "totalSupplyAfter",
    ];

    /// The column count.
    pub const COLUMNS: usize = Self::HEADERS.len();

    /// The report entry paths the columns are read from.
    pub const PATHS: [&'static [&'static str]; 13] = [
        &["timestamp"],
        &["network"],
        &["mode"],
        &["contract"],
        &["address"],
        &["gasUsage", "transfer"],
        &["gasUsage", "mint"],
        &["gasUsage", "transferOwnership"],
        &["balances", "owner"],
        &["balances", "user1"],
        &["balances", "user2"],
        &["totalSupplyBefore"],
        &["totalSupplyAfter"],
    ];

    /// The marker of a failed operation, left blank in the summary.
    pub const FAILED_MARKER: &'static str = "FAILED";

    ///
    /// Looks up a nested value. Missing segments and `null` yield `None`.
    ///
    pub fn lookup<'a>(entry: &'a Value, path: &[&str]) -> Option<&'a Value> {
        path.iter()
            .try_fold(entry, |value, segment| value.get(segment))
            .filter(|value| !value.is_null())
    }

    ///
    /// Renders a value as a cell.
    ///
    /// Strings are trimmed, and the failure marker in any letter case becomes an empty cell.
    ///
    pub fn normalize(value: Option<&Value>) -> String {
        match value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(string)) => {
                let string = string.trim();
                if string.eq_ignore_ascii_case(Self::FAILED_MARKER) {
                    String::new()
                } else {
                    string.to_owned()
                }
            }
            Some(value) => value.to_string(),
        }
    }
}

impl From<&Value> for Row {
    fn from(entry: &Value) -> Self {
        Self {
            cells: Self::PATHS
                .iter()
                .map(|path| Self::normalize(Self::lookup(entry, path)))
                .collect(),
        }
    }
}
