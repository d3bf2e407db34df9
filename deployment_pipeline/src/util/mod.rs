//!
//! File system utilities.
//!

use std::io::Write;
use std::path::Path;

///
/// Replaces the contents of the file at `path` in one step.
///
/// The data is written to a temporary file in the same directory first and then renamed over
/// the target, so an interrupted run leaves either the old or the new contents behind.
///
pub fn atomic_write(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory)?;

    let mut file = tempfile::NamedTempFile::new_in(directory)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|error| error.error)?;
    Ok(())
}
