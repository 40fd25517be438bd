use std::cmp::{max, min, Ordering};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context};
use tempfile::Builder;

use crate::chunk_file::ChunkFile;
use crate::cleanup::cleanup;
use crate::comparator::Comparator;
use crate::config::Config;
use crate::error::CompressError;
use crate::line_io::LineReader;
use crate::merger::{merge, MergeSummary};
use crate::observer::{LogObserver, Observer};
use crate::order::Order;
use crate::similarity::Similarity;
use crate::splitter::split;

/// Outcome of a successful [Compressor::compress] run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressSummary {
    lines_read: usize,
    chunks: usize,
    lines_written: usize,
    lines_discarded: usize,
    leftover: Vec<PathBuf>,
}

impl CompressSummary {
    /// Lines read from the source
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Chunk files written by the split stage
    pub fn chunks(&self) -> usize {
        self.chunks
    }

    /// Lines written to the destination
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Lines dropped as similar to the line emitted before them
    pub fn lines_discarded(&self) -> usize {
        self.lines_discarded
    }

    /// Chunk files that could not be removed
    pub fn leftover(&self) -> &Vec<PathBuf> {
        &self.leftover
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Sort a text file and remove duplicate lines
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use regex::Regex;
/// use text_file_compress::comparator::Comparator;
/// use text_file_compress::compress::Compressor;
/// use text_file_compress::similarity::Similarity;
///
/// // keep one record per id, records sorted by the text starting at "id"
/// fn compress_records(input: PathBuf, output: PathBuf) -> Result<(), anyhow::Error> {
///     let pattern = Regex::new("id")?;
///     let mut compressor = Compressor::new(input, output);
///     compressor.with_comparator(Comparator::by_key(pattern.clone()));
///     compressor.with_similarity(Similarity::by_key(pattern));
///     // hold at most 100 000 lines in memory at once
///     compressor.with_max_lines(100_000);
///     compressor.compress()?;
///     Ok(())
/// }
/// ```
pub struct Compressor {
    source: PathBuf,
    destination: PathBuf,
    tmp: Option<PathBuf>,
    max_lines: usize,
    comparator: Comparator,
    similarity: Similarity,
    endl: char,
    observer: Arc<dyn Observer>,
}

impl Compressor {
    /// Create a default Compressor definition.
    ///
    /// * chunk files are created in the destination directory
    /// * at most 1 000 000 lines are sorted in memory at once
    /// * lines are ordered lexicographically, ascending
    /// * lines are duplicates when they are equal
    /// * default end line is '\n'
    /// * progress is reported through the [log] facade
    pub fn new(source: PathBuf, destination: PathBuf) -> Compressor {
        Compressor {
            source,
            destination,
            tmp: None,
            max_lines: 1_000_000,
            comparator: Comparator::natural(),
            similarity: Similarity::equal(),
            endl: '\n',
            observer: Arc::new(LogObserver),
        }
    }

    /// Set directory for chunk files. By default use the destination directory
    pub fn with_tmp_dir(&mut self, tmp: PathBuf) {
        self.tmp = Some(tmp);
    }

    /// Set the maximal number of lines sorted in memory and stored in a single chunk file
    pub fn with_max_lines(&mut self, max_lines: usize) {
        self.max_lines = max_lines;
    }

    /// Get the maximal number of lines in a chunk
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Set the [Comparator], including its [Order]
    pub fn with_comparator(&mut self, comparator: Comparator) {
        self.comparator = comparator;
    }

    /// Set the [Order] of the current [Comparator]
    pub fn with_order(&mut self, order: Order) {
        self.comparator = self.comparator.clone().with_order(order);
    }

    /// Set the [Similarity] used to drop duplicates
    pub fn with_similarity(&mut self, similarity: Similarity) {
        self.similarity = similarity;
    }

    /// Set line ending char, must be ASCII. Only this char ends a line, a '\r' before a '\n' is
    /// kept as part of the line.
    pub fn with_endl(&mut self, endl: char) {
        self.endl = endl
    }

    /// Set the [Observer] receiving progress events
    pub fn with_observer(&mut self, observer: Arc<dyn Observer>) {
        self.observer = observer;
    }

    /// Sort and deduplicate the source into the destination.
    ///
    /// The destination is replaced only after the merge completes. On failure chunk files may be
    /// left in the temp directory.
    pub fn compress(&self) -> Result<CompressSummary, anyhow::Error> {
        let config = self.create_config()?;
        log::info!("Start compressing {} into {}", self.source.display(), self.destination.display());

        let chunks = split(&self.source, &config)?;
        let merge_summary = Self::merge_with_rlimits(&chunks, &config, &self.destination)?;
        let leftover = cleanup(&chunks, config.observer());

        let summary = CompressSummary {
            lines_read: chunks.iter().map(|chunk| chunk.lines()).sum(),
            chunks: chunks.len(),
            lines_written: merge_summary.written,
            lines_discarded: merge_summary.discarded,
            leftover,
        };
        log::info!("Finish compressing, read: {} lines, written: {} lines", summary.lines_read, summary.lines_written);
        Ok(summary)
    }

    /// Check whether the source is already compressed: ordered by the comparator and without
    /// adjacent similar lines
    pub fn check(&self) -> Result<bool, anyhow::Error> {
        let config = self.create_config()?;
        Self::internal_check(&self.source, &config)
    }

    pub(crate) fn internal_check(path: &Path, config: &Config) -> Result<bool, anyhow::Error> {
        let read_context = || CompressError::SourceRead { path: path.to_path_buf() };
        let file = File::open(path).with_context(read_context)?;
        let mut reader = LineReader::new(BufReader::new(file), config.endl());
        let mut previous: Option<String> = None;
        while let Some(line) = reader.next_line().with_context(read_context)? {
            if let Some(previous) = &previous {
                if config.comparator().compare(previous, &line) == Ordering::Greater
                    || config.similarity().is_similar(previous, &line) {
                    return Ok(false);
                }
            }
            previous = Some(line);
        }
        Ok(true)
    }

    fn create_config(&self) -> Result<Config, anyhow::Error> {
        if self.max_lines == 0 {
            return Err(anyhow!("max lines must be greater than 0"));
        }
        if !self.endl.is_ascii() {
            return Err(anyhow!("end line must be an ASCII char, got: {:?}", self.endl));
        }

        let config = Config::new(
            self.tmp.clone().unwrap_or_else(|| parent_dir(&self.destination)),
            "part-".to_string(),
            ".unmerged".to_string(),
            self.max_lines,
            self.comparator.clone(),
            self.similarity.clone(),
            self.endl as u8,
            self.observer.clone(),
        );
        Ok(config)
    }

    /// Merge into a staging file next to the destination and rename it over the destination
    fn merge_into(chunks: &[ChunkFile], config: &Config, destination: &Path) -> Result<MergeSummary, anyhow::Error> {
        let write_context = || CompressError::DestinationWrite { path: destination.to_path_buf() };
        let mut merged_file = Builder::new()
            .prefix(".merging-")
            .tempfile_in(parent_dir(destination))
            .with_context(write_context)?;

        let summary = merge(chunks, config, destination, BufWriter::new(merged_file.as_file_mut()))?;
        merged_file.persist(destination).with_context(write_context)?;
        Ok(summary)
    }

    /// Every chunk is open at the same time during the merge
    fn merge_with_rlimits(chunks: &[ChunkFile], config: &Config, destination: &Path) -> Result<MergeSummary, anyhow::Error> {
        let (current_soft, current_hard) = Self::get_rlimits()?;
        log::info!("Current rlimit NOFILE, soft: {}, hard: {}", current_soft, current_hard);
        let new_soft = min(max((chunks.len() + 256) as u64, current_soft), current_hard);
        if new_soft != current_soft {
            log::info!("Set new rlimit NOFILE, soft: {}, hard: {}", new_soft, current_hard);
            Self::set_rlimits(new_soft, current_hard)?;
        }

        let result = Self::merge_into(chunks, config, destination);

        if new_soft != current_soft {
            log::info!("Restore rlimit NOFILE, soft: {}, hard: {}", current_soft, current_hard);
            Self::restore_rlimits(current_soft, current_hard);
        }
        result
    }

    /// The merge result does not depend on the restore, a failure is only logged
    fn restore_rlimits(soft: u64, hard: u64) -> bool {
        match Self::set_rlimits(soft, hard) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to restore rlimit NOFILE: {:#}", e);
                false
            }
        }
    }

    #[cfg(unix)]
    fn get_rlimits() -> Result<(u64, u64), anyhow::Error> {
        rlimit::getrlimit(rlimit::Resource::NOFILE).with_context(|| "getrlimit")
    }

    #[cfg(unix)]
    fn set_rlimits(soft: u64, hard: u64) -> Result<(), anyhow::Error> {
        rlimit::setrlimit(rlimit::Resource::NOFILE, soft, hard)
            .with_context(|| format!("set rlimit NOFILE, soft: {}, hard: {}", soft, hard))?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn get_rlimits() -> Result<(u64, u64), anyhow::Error> {
        Ok((u64::MAX, u64::MAX))
    }

    #[cfg(not(unix))]
    fn set_rlimits(_soft: u64, _hard: u64) -> Result<(), anyhow::Error> {
        Ok(())
    }
}
