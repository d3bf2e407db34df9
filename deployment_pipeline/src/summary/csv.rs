//!
//! Serializing the summary to CSV.
//!

use crate::summary::row::Row;
use crate::summary::Summary;

///
/// Serializes the summary to CSV: the header line, then one line per report entry.
///
/// Lines are separated by `\n` without a trailing one. A cell containing a comma is quoted.
///
#[derive(Debug, Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    ///
    /// Quotes the cell if it contains a comma, doubling the inner quotes.
    ///
    pub fn escape(cell: &str) -> std::borrow::Cow<'_, str> {
        if cell.contains(',') {
            format!("\"{}\"", cell.replace('"', "\"\"")).into()
        } else {
            cell.into()
        }
    }
}

impl From<&Summary> for Csv {
    fn from(summary: &Summary) -> Csv {
        let mut lines = Vec::with_capacity(summary.rows.len() + 1);
        lines.push(Row::HEADERS.join(","));
        for row in summary.rows.iter() {
            lines.push(
                row.cells
                    .iter()
                    .map(|cell| Self::escape(cell.as_str()))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }
        Self {
            content: lines.join("\n"),
        }
    }
}
