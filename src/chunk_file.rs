use std::path::{Path, PathBuf};

/// Handle to a sorted chunk persisted by the splitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFile {
    index: usize,
    path: PathBuf,
    lines: usize,
}

impl ChunkFile {
    pub(crate) fn new(index: usize, path: PathBuf, lines: usize) -> ChunkFile {
        ChunkFile {
            index,
            path,
            lines,
        }
    }

    /// Position of this chunk in the source, starting at 0
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> usize {
        self.lines
    }
}
