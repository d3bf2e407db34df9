//!
//! The document being edited.
//!

use std::path::Path;
use std::path::PathBuf;

use deployment_pipeline::Workspace;

///
/// The document being edited, with the line new text is inserted at.
///
#[derive(Debug, Clone)]
pub struct ActiveDocument {
    /// The document path.
    path: PathBuf,
    /// The document text.
    text: String,
    /// The 1-based insertion line.
    line: usize,
}

impl ActiveDocument {
    ///
    /// Opens an existing document. Relative paths are resolved against the workspace root.
    ///
    pub fn open(workspace: &Workspace, path: &Path, line: usize) -> anyhow::Result<Self> {
        let path = Self::resolve(workspace, path);
        let text = std::fs::read_to_string(path.as_path())
            .map_err(|error| anyhow::anyhow!("Document {path:?} reading: {error}"))?;
        Ok(Self { path, text, line })
    }

    ///
    /// Opens a document, starting an empty one if the file does not exist.
    ///
    pub fn open_or_new(workspace: &Workspace, path: &Path, line: usize) -> anyhow::Result<Self> {
        let resolved = Self::resolve(workspace, path);
        if resolved.exists() {
            return Self::open(workspace, path, line);
        }
        Ok(Self {
            path: resolved,
            text: String::new(),
            line,
        })
    }

    ///
    /// Returns the document path.
    ///
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    ///
    /// Returns the document text.
    ///
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    ///
    /// Returns the byte offset the line starts at. Lines past the end map to the end.
    ///
    pub fn line_offset(&self, line: usize) -> usize {
        if line <= 1 {
            return 0;
        }
        self.text
            .match_indices('\n')
            .nth(line - 2)
            .map(|(index, _)| index + 1)
            .unwrap_or(self.text.len())
    }

    ///
    /// Inserts the block at the start of the insertion line.
    ///
    /// The block is kept on its own lines.
    ///
    pub fn insert_at_line(&mut self, block: &str) {
        let offset = self.line_offset(self.line);
        let mut block = block.to_owned();
        if offset == self.text.len() && !self.text.is_empty() && !self.text.ends_with('\n') {
            block.insert(0, '\n');
        }
        if offset < self.text.len() && !block.ends_with('\n') {
            block.push('\n');
        }
        self.text.insert_str(offset, block.as_str());
    }

    ///
    /// Inserts the texts at the byte offsets of the current text.
    ///
    pub fn insert_at_offsets(&mut self, mut insertions: Vec<(usize, String)>) {
        insertions.sort_by(|a, b| b.0.cmp(&a.0));
        for (offset, text) in insertions.into_iter() {
            self.text.insert_str(offset, text.as_str());
        }
    }

    ///
    /// Writes the document back, replacing the file atomically.
    ///
    pub fn save(&self) -> anyhow::Result<()> {
        deployment_pipeline::util::atomic_write(self.path.as_path(), self.text.as_bytes())
            .map_err(|error| anyhow::anyhow!("Document {:?} writing: {error}", self.path))
    }

    fn resolve(workspace: &Workspace, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            workspace.root().join(path)
        }
    }
}
