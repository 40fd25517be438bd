use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use regex::Regex;

use crate::key::key_of;

type SimilarFn = dyn Fn(&str, &str) -> bool + Send + Sync;

/// Decides whether a candidate line duplicates the line emitted just before it.
///
/// The first argument is always the most recently emitted line and the second the candidate. The
/// relation is never evaluated against older lines, so it does not have to be transitive, but a
/// relation that is not an equivalence over sorted runs may let duplicates through.
///
/// # Examples
/// ```
/// use regex::Regex;
/// use text_file_compress::similarity::Similarity;
///
/// let equal = Similarity::equal();
/// assert!(equal.is_similar("a", "a"));
///
/// let same_id = Similarity::by_key(Regex::new("id").unwrap());
/// assert!(same_id.is_similar("{time: 1, id: 7}", "{time: 2, id: 7}"));
///
/// let ignore_case = Similarity::new(|a, b| a.eq_ignore_ascii_case(b));
/// assert!(ignore_case.is_similar("Line", "LINE"));
/// ```
#[derive(Clone)]
pub struct Similarity {
    similar: Arc<SimilarFn>,
}

impl Similarity {
    /// Exact line equality
    pub fn equal() -> Similarity {
        Similarity::new(|a, b| a == b)
    }

    /// Wrap an arbitrary predicate. Arguments are (previously emitted, candidate).
    pub fn new<F>(similar: F) -> Similarity
        where F: Fn(&str, &str) -> bool + Send + Sync + 'static {
        Similarity {
            similar: Arc::new(similar),
        }
    }

    /// Lines are similar when their suffixes starting at the first match of `pattern` are equal.
    pub fn by_key(pattern: Regex) -> Similarity {
        Similarity::new(move |a, b| key_of(a, &pattern) == key_of(b, &pattern))
    }

    pub fn is_similar(&self, previous: &str, candidate: &str) -> bool {
        (self.similar)(previous, candidate)
    }
}

impl Default for Similarity {
    fn default() -> Self {
        Similarity::equal()
    }
}

impl Debug for Similarity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Similarity").finish_non_exhaustive()
    }
}
