//!
//! The NatSpec documentation generator.
//!

use chrono::NaiveDate;
use regex::Regex;

use crate::document::ActiveDocument;

///
/// The NatSpec block of a contract declaration.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatSpec {
    /// The contract name.
    pub contract: String,
    /// The trimmed inheritance list, if any.
    pub inheritance: Option<String>,
}

impl NatSpec {
    /// The contract declaration pattern.
    pub const CONTRACT_PATTERN: &'static str = r"contract\s+(\w+)(?:\s+is\s+([^{]+))?\s*\{";

    /// The security contact written into every block.
    pub const SECURITY_CONTACT: &'static str = "security@example.com";

    /// The author written into every block.
    pub const AUTHOR: &'static str = "Web3 Copilot";

    ///
    /// Renders the comment block, dated with the given day.
    ///
    pub fn render(&self, date: NaiveDate) -> String {
        let inheritance = self
            .inheritance
            .as_deref()
            .map(|inheritance| format!(" inheriting from {inheritance}"))
            .unwrap_or_default();
        format!(
            "/**\n * @title {contract}\n * @dev Implementation of the {contract}{inheritance}\n * @custom:security-contact {contact}\n * @author {author}\n * @notice This contract is auto-generated and may need additional review\n * @custom:date {date}\n */\n",
            contract = self.contract,
            contact = Self::SECURITY_CONTACT,
            author = Self::AUTHOR,
            date = date.format("%Y-%m-%d"),
        )
    }
}

///
/// Finds the contract declarations with the byte offsets they start at.
///
pub fn find_contracts(text: &str) -> Vec<(usize, NatSpec)> {
    let pattern = Regex::new(NatSpec::CONTRACT_PATTERN).expect("Always valid");
    pattern
        .captures_iter(text)
        .map(|captures| {
            let declaration = captures.get(0).expect("Always exists");
            let natspec = NatSpec {
                contract: captures[1].to_owned(),
                inheritance: captures
                    .get(2)
                    .map(|inheritance| inheritance.as_str().trim().to_owned())
                    .filter(|inheritance| !inheritance.is_empty()),
            };
            (declaration.start(), natspec)
        })
        .collect()
}

///
/// Inserts a NatSpec block before every contract declaration of the document.
///
/// Returns the number of documented contracts.
///
pub fn document_contracts(document: &mut ActiveDocument, date: NaiveDate) -> usize {
    let insertions: Vec<(usize, String)> = find_contracts(document.text())
        .into_iter()
        .map(|(offset, natspec)| (offset, natspec.render(date)))
        .collect();
    let count = insertions.len();
    document.insert_at_offsets(insertions);
    count
}
