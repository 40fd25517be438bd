//! This crate sorts a text file and removes duplicate lines, also when the file is much larger
//! than the available memory.
//!
//! The source is read in batches of a bounded number of lines. Each batch is sorted in memory and
//! written to a chunk file next to the destination. The chunk files are then merged in a single
//! k-way merge driven by a [BinaryHeap](std::collections::BinaryHeap), and every line that the
//! [Similarity](similarity::Similarity) judges a duplicate of the line written just before it is
//! dropped. At most one batch is held in memory while splitting and one line per chunk while
//! merging.
//!
//! Both the order and the notion of a duplicate are pluggable, which allows, for example, keeping
//! a single record per id in a file of JSON-like records.
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use text_file_compress::compress::Compressor;
//!
//! // sort lines lexicographically and drop equal lines
//! fn compress_lines(input: PathBuf, output: PathBuf) -> Result<(), anyhow::Error> {
//!     let compressor = Compressor::new(input, output);
//!     let summary = compressor.compress()?;
//!     log::info!("dropped {} duplicate lines", summary.lines_discarded());
//!     Ok(())
//! }
//! ```
//!

pub(crate) mod config;
pub(crate) mod key;
pub(crate) mod line_io;
pub(crate) mod splitter;
pub(crate) mod unmerged_chunk_file;
pub(crate) mod merger;
pub(crate) mod cleanup;

pub mod compress;
pub mod comparator;
pub mod similarity;
pub mod order;
pub mod observer;
pub mod error;
pub mod chunk_file;
