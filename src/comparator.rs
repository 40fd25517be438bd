use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use regex::Regex;

use crate::key::key_of;
use crate::order::Order;

type CompareFn = dyn Fn(&str, &str) -> Ordering + Send + Sync;

/// Total order over lines used both to sort chunks and to drive the merge.
///
/// The comparison must be a strict weak ordering: consistent and transitive. Lines it reports as
/// equal leave the merge next to each other, which is what lets the [Similarity](crate::similarity::Similarity)
/// check catch duplicates that were split across chunks.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use regex::Regex;
/// use text_file_compress::comparator::Comparator;
/// use text_file_compress::order::Order;
///
/// let natural = Comparator::natural();
/// assert_eq!(natural.compare("a", "b"), Ordering::Less);
///
/// // compare by the part of the line starting at "id"
/// let by_id = Comparator::by_key(Regex::new("id").unwrap());
/// assert_eq!(by_id.compare("z, id: 1", "a, id: 2"), Ordering::Less);
///
/// let reversed = Comparator::natural().with_order(Order::Desc);
/// assert_eq!(reversed.compare("a", "b"), Ordering::Greater);
/// ```
#[derive(Clone)]
pub struct Comparator {
    compare: Arc<CompareFn>,
    order: Order,
}

impl Comparator {
    /// Lexicographic order of the line bytes
    pub fn natural() -> Comparator {
        Comparator::new(|a, b| a.cmp(b))
    }

    /// Wrap an arbitrary comparison function
    pub fn new<F>(compare: F) -> Comparator
        where F: Fn(&str, &str) -> Ordering + Send + Sync + 'static {
        Comparator {
            compare: Arc::new(compare),
            order: Order::Asc,
        }
    }

    /// Compare lines by their suffix starting at the first match of `pattern`. Lines without a
    /// match are compared whole.
    pub fn by_key(pattern: Regex) -> Comparator {
        Comparator::new(move |a, b| key_of(a, &pattern).cmp(key_of(b, &pattern)))
    }

    /// Set the direction of this comparator
    pub fn with_order(mut self, order: Order) -> Comparator {
        self.order = order;
        self
    }

    /// Get the direction of this comparator
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.order.apply((self.compare)(a, b))
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Comparator::natural()
    }
}

impl Debug for Comparator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparator")
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}
