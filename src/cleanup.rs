use std::path::PathBuf;

use crate::chunk_file::ChunkFile;
use crate::error::CompressError;
use crate::observer::Observer;

/// Remove every chunk file. Failures are reported to the observer and the paths that could not be
/// removed are returned, they never fail the run.
pub(crate) fn cleanup(chunks: &[ChunkFile], observer: &dyn Observer) -> Vec<PathBuf> {
    let mut leftover = Vec::new();
    for chunk in chunks {
        if let Err(e) = std::fs::remove_file(chunk.path()) {
            let error = CompressError::Cleanup { path: chunk.path().to_path_buf() };
            observer.cleanup_failed(&error, &e);
            leftover.push(chunk.path().to_path_buf());
        }
    }
    leftover
}
