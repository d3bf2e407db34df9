//!
//! The append-only JSON log.
//!

pub mod error;


use std::marker::PhantomData;
use std::path::Path;
use std::path::PathBuf;

use self::error::Error;

///
/// The append-only JSON log.
///
/// The file holds a pretty-printed JSON array, and the insertion order is the only ordering.
/// There is no locking, so concurrent writers are not supported.
///
#[derive(Debug, Clone)]
pub struct AppendLog<T> {
    /// The log file path.
    path: PathBuf,
    /// The entry type marker.
    _entry: PhantomData<T>,
}

impl<T> AppendLog<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _entry: PhantomData,
        }
    }

    ///
    /// Returns the log file path.
    ///
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    ///
    /// Whether the log file exists.
    ///
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    ///
    /// Loads all entries. A missing file is an empty log.
    ///
    pub fn load(&self) -> Result<Vec<T>, Error> {
        self.parse()
    }

    ///
    /// Returns the most recently appended entry, if any.
    ///
    pub fn latest(&self) -> Result<Option<T>, Error> {
        Ok(self.load()?.pop())
    }

    ///
    /// Appends an entry and rewrites the whole file.
    ///
    /// The earlier entries are carried over as raw JSON values, so they are written back
    /// unchanged even if they do not match the current entry type.
    ///
    /// Returns the number of entries after the append.
    ///
    pub fn append(&self, entry: T) -> Result<usize, Error> {
        let mut entries: Vec<serde_json::Value> = self.parse()?;
        let entry = serde_json::to_value(&entry).map_err(|error| Error::Serializing {
            error,
            path: self.path.clone(),
        })?;
        entries.push(entry);

        let content =
            serde_json::to_string_pretty(&entries).map_err(|error| Error::Serializing {
                error,
                path: self.path.clone(),
            })?;
        crate::util::atomic_write(self.path.as_path(), content.as_bytes()).map_err(|error| {
            Error::Writing {
                error,
                path: self.path.clone(),
            }
        })?;

        Ok(entries.len())
    }

    ///
    /// Reads the file as a JSON array of `E`. A missing file is an empty array.
    ///
    fn parse<E>(&self) -> Result<Vec<E>, Error>
    where
        E: serde::de::DeserializeOwned,
    {
        if !self.path.exists() {
            return Ok(vec![]);
        }

        let text =
            std::fs::read_to_string(self.path.as_path()).map_err(|error| Error::Reading {
                error,
                path: self.path.clone(),
            })?;
        if text.trim().is_empty() {
            return Err(Error::EmptyFile {
                path: self.path.clone(),
            });
        }
        serde_json::from_str(text.as_str()).map_err(|error| Error::Parsing {
            error,
            path: self.path.clone(),
        })
    }
}
