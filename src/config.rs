use std::path::PathBuf;
use std::sync::Arc;

use crate::comparator::Comparator;
use crate::observer::Observer;
use crate::similarity::Similarity;

#[derive(Clone)]
pub(crate) struct Config {
    tmp: PathBuf,
    tmp_prefix: String,
    tmp_suffix: String,
    max_lines: usize,
    comparator: Comparator,
    similarity: Similarity,
    endl: u8,
    observer: Arc<dyn Observer>,
}

impl Config {
    pub(crate) fn new(
        tmp: PathBuf,
        tmp_prefix: String,
        tmp_suffix: String,
        max_lines: usize,
        comparator: Comparator,
        similarity: Similarity,
        endl: u8,
        observer: Arc<dyn Observer>,
    ) -> Config {
        Config {
            tmp,
            tmp_prefix,
            tmp_suffix,
            max_lines,
            comparator,
            similarity,
            endl,
            observer,
        }
    }

    pub(crate) fn tmp(&self) -> &PathBuf {
        &self.tmp
    }

    pub(crate) fn tmp_prefix(&self) -> &String {
        &self.tmp_prefix
    }

    pub(crate) fn tmp_suffix(&self) -> &String {
        &self.tmp_suffix
    }

    pub(crate) fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub(crate) fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    pub(crate) fn similarity(&self) -> &Similarity {
        &self.similarity
    }

    pub(crate) fn endl(&self) -> u8 {
        self.endl
    }

    pub(crate) fn observer(&self) -> &dyn Observer {
        self.observer.as_ref()
    }
}
