use crate::chunk_file::ChunkFile;
use crate::error::CompressError;

/// Receives progress events from the compress stages.
///
/// All methods have empty default implementations. [LogObserver] is the default and forwards
/// events to the [log] facade.
pub trait Observer: Send + Sync {
    fn split_started(&self, _source: &std::path::Path) {}

    fn chunk_written(&self, _chunk: &ChunkFile) {}

    fn split_finished(&self, _chunks: usize, _lines: usize) {}

    fn merge_started(&self, _chunks: usize) {}

    fn merge_finished(&self, _written: usize, _discarded: usize) {}

    /// A chunk file could not be removed. The run still succeeds.
    fn cleanup_failed(&self, _error: &CompressError, _cause: &std::io::Error) {}
}

/// Forward events to the [log] facade
#[derive(Debug, Default, Clone)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn split_started(&self, source: &std::path::Path) {
        log::info!("Start splitting {}", source.display());
    }

    fn chunk_written(&self, chunk: &ChunkFile) {
        log::info!("Created chunk file {}, lines: {}", chunk.path().display(), chunk.lines());
    }

    fn split_finished(&self, chunks: usize, lines: usize) {
        log::info!("Finish splitting, chunks: {}, lines: {}", chunks, lines);
    }

    fn merge_started(&self, chunks: usize) {
        log::info!("Merging {} chunk files", chunks);
    }

    fn merge_finished(&self, written: usize, discarded: usize) {
        log::info!("Finished merging chunk files, written: {} lines, discarded: {} lines", written, discarded);
    }

    fn cleanup_failed(&self, error: &CompressError, cause: &std::io::Error) {
        log::warn!("{}: {}", error, cause);
    }
}
