use std::cmp::min;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use tempfile::{Builder, NamedTempFile};

use crate::chunk_file::ChunkFile;
use crate::config::Config;
use crate::error::CompressError;
use crate::line_io::{write_line, LineReader};

// upper bound for the initial batch allocation, the batch grows past it on demand
const INITIAL_BATCH_CAPACITY: usize = 64 * 1024;

pub(crate) fn create_tmp_file(config: &Config, index: usize) -> Result<NamedTempFile, anyhow::Error> {
    let prefix = format!("{}{:06}-", config.tmp_prefix(), index);
    Builder::new()
        .prefix(&prefix)
        .suffix(config.tmp_suffix())
        .tempfile_in(config.tmp())
        .with_context(|| CompressError::TempWrite { path: config.tmp().join(&prefix) })
}

/// Split `source` into sorted chunk files of at most `config.max_lines()` lines each. An empty
/// source produces no chunks.
pub(crate) fn split(source: &Path, config: &Config) -> Result<Vec<ChunkFile>, anyhow::Error> {
    let observer = config.observer();
    observer.split_started(source);
    let read_context = || CompressError::SourceRead { path: source.to_path_buf() };

    let file = File::open(source).with_context(read_context)?;
    let mut reader = LineReader::new(BufReader::new(file), config.endl());
    let mut chunks = Vec::new();
    let mut batch = Vec::with_capacity(min(config.max_lines(), INITIAL_BATCH_CAPACITY));
    let mut lines: usize = 0;

    while let Some(line) = reader.next_line().with_context(read_context)? {
        lines += 1;
        batch.push(line);
        if batch.len() == config.max_lines() {
            let chunk = write_sorted_chunk(&mut batch, chunks.len(), config)?;
            observer.chunk_written(&chunk);
            chunks.push(chunk);
        }
    }

    if !batch.is_empty() {
        let chunk = write_sorted_chunk(&mut batch, chunks.len(), config)?;
        observer.chunk_written(&chunk);
        chunks.push(chunk);
    }

    observer.split_finished(chunks.len(), lines);
    Ok(chunks)
}

/// Sort the batch, persist it and leave the batch empty for reuse
fn write_sorted_chunk(batch: &mut Vec<String>, index: usize, config: &Config) -> Result<ChunkFile, anyhow::Error> {
    // stable, equal lines keep their source order
    batch.sort_by(|a, b| config.comparator().compare(a, b));

    let mut tmp_file = create_tmp_file(config, index)?;
    let path = tmp_file.path().to_path_buf();
    let write_context = || CompressError::TempWrite { path: path.clone() };
    let lines = batch.len();

    let mut writer = BufWriter::new(tmp_file.as_file_mut());
    for line in batch.drain(..) {
        write_line(&mut writer, &line, config.endl()).with_context(write_context)?;
    }
    writer.flush().with_context(write_context)?;
    drop(writer);

    tmp_file.keep().with_context(write_context)?;
    Ok(ChunkFile::new(index, path, lines))
}
