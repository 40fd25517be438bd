use std::collections::BinaryHeap;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::chunk_file::ChunkFile;
use crate::config::Config;
use crate::error::CompressError;
use crate::line_io::write_line;
use crate::similarity::Similarity;
use crate::unmerged_chunk_file::UnmergedChunkFile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MergeSummary {
    pub(crate) written: usize,
    pub(crate) discarded: usize,
}

/// Writes a line unless it is similar to the last line written
struct Deduplicator<'a, W: Write> {
    writer: W,
    similarity: &'a Similarity,
    endl: u8,
    previous: Option<String>,
    summary: MergeSummary,
}

impl<'a, W: Write> Deduplicator<'a, W> {
    fn new(writer: W, similarity: &'a Similarity, endl: u8) -> Deduplicator<'a, W> {
        Deduplicator {
            writer,
            similarity,
            endl,
            previous: None,
            summary: MergeSummary::default(),
        }
    }

    fn offer(&mut self, candidate: String) -> Result<(), std::io::Error> {
        if let Some(previous) = &self.previous {
            if self.similarity.is_similar(previous, &candidate) {
                self.summary.discarded += 1;
                return Ok(());
            }
        }
        write_line(&mut self.writer, &candidate, self.endl)?;
        self.summary.written += 1;
        self.previous = Some(candidate);
        Ok(())
    }

    fn finish(mut self) -> Result<MergeSummary, std::io::Error> {
        self.writer.flush()?;
        Ok(self.summary)
    }
}

/// K-way merge of sorted chunk files into `writer`, dropping every line similar to the line
/// emitted before it. `destination` only names the target in errors.
pub(crate) fn merge<W: Write>(chunks: &[ChunkFile], config: &Config, destination: &Path, writer: W) -> Result<MergeSummary, anyhow::Error> {
    let observer = config.observer();
    observer.merge_started(chunks.len());
    let write_context = || CompressError::DestinationWrite { path: destination.to_path_buf() };

    let mut unmerged_files = BinaryHeap::with_capacity(chunks.len());
    for chunk in chunks {
        if let Some(unmerged) = UnmergedChunkFile::open(chunk, config.comparator(), config.endl())? {
            unmerged_files.push(unmerged);
        }
    }

    let mut deduplicator = Deduplicator::new(writer, config.similarity(), config.endl());
    while let Some(current_min) = unmerged_files.pop() {
        let (candidate, rest) = current_min.pop_line()?;
        deduplicator.offer(candidate).with_context(write_context)?;
        if let Some(rest) = rest {
            unmerged_files.push(rest);
        }
    }

    let summary = deduplicator.finish().with_context(write_context)?;
    observer.merge_finished(summary.written, summary.discarded);
    Ok(summary)
}
