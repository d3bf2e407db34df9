//!
//! The interaction report summary.
//!

pub mod csv;
pub mod row;


use std::path::Path;

use serde_json::Value;

use crate::util;

use self::csv::Csv;
use self::row::Row;

///
/// The interaction report summary.
///
/// Built from the raw report entries, so that entries written by older or foreign tools still
/// produce rows with whatever fields they have.
///
#[derive(Debug, Default)]
pub struct Summary {
    /// The rows in the report order.
    pub rows: Vec<Row>,
}

impl Summary {
    ///
    /// Writes the summary as CSV, replacing the file atomically.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let csv = Csv::from(self);
        util::atomic_write(path, csv.content.as_bytes())
            .map_err(|error| anyhow::anyhow!("Summary file {path:?} writing: {error}"))
    }
}

impl From<&[Value]> for Summary {
    fn from(entries: &[Value]) -> Self {
        Self {
            rows: entries.iter().map(Row::from).collect(),
        }
    }
}
