/// Sort direction applied to the whole [Comparator](crate::comparator::Comparator)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Ascending, the default
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl Order {
    pub(crate) fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Order::Asc => ordering,
            Order::Desc => ordering.reverse(),
        }
    }
}
