use std::cmp::Ordering;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;

use crate::chunk_file::ChunkFile;
use crate::comparator::Comparator;
use crate::error::CompressError;
use crate::line_io::LineReader;

/// A chunk file being merged: the unread head line and the reader positioned after it.
/// The file is closed when the value is dropped.
#[derive(Debug)]
pub(crate) struct UnmergedChunkFile {
    index: usize,
    path: PathBuf,
    reader: LineReader<BufReader<File>>,
    head: String,
    comparator: Comparator,
}

impl UnmergedChunkFile {
    /// Open the chunk and read its first line. Returns None for an empty chunk.
    pub(crate) fn open(chunk: &ChunkFile, comparator: &Comparator, endl: u8) -> Result<Option<UnmergedChunkFile>, anyhow::Error> {
        let read_context = || CompressError::TempRead { path: chunk.path().to_path_buf() };
        let file = File::open(chunk.path()).with_context(read_context)?;
        let mut reader = LineReader::new(BufReader::new(file), endl);
        let head = reader.next_line().with_context(read_context)?;
        Ok(
            head.map(
                |head| UnmergedChunkFile {
                    index: chunk.index(),
                    path: chunk.path().to_path_buf(),
                    reader,
                    head,
                    comparator: comparator.clone(),
                }
            )
        )
    }

    /// Take the head line and advance. The chunk is returned back only if it has more lines.
    pub(crate) fn pop_line(mut self) -> Result<(String, Option<UnmergedChunkFile>), anyhow::Error> {
        let next = self.reader.next_line()
            .with_context(|| CompressError::TempRead { path: self.path.clone() })?;
        match next {
            Some(next) => {
                let line = std::mem::replace(&mut self.head, next);
                Ok((line, Some(self)))
            }
            None => Ok((self.head, None)),
        }
    }
}

impl Eq for UnmergedChunkFile {}

impl PartialEq<Self> for UnmergedChunkFile {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd<Self> for UnmergedChunkFile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnmergedChunkFile {
    fn cmp(&self, other: &Self) -> Ordering {
        // flipped to work with BinaryHeap (Max Heap), equal heads pop in chunk order
        self.comparator.compare(&other.head, &self.head)
            .then_with(|| other.index.cmp(&self.index))
    }
}
