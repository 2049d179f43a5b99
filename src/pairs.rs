
use crate::util::sort_pair;

/// Trait for pair types that may be ordered or unordered.  Graph edges are
/// represented as pairs of node IDs.
pub trait Pair<T>
where
    Self: Eq + From<(T, T)> + Into<(T, T)>,
{
    fn first(&self) -> &T;
    fn second(&self) -> &T;

    /// Checks whether `value` is either value of the pair.
    fn contains(&self, value: &T) -> bool
    where
        T: Eq,
    {
        self.first() == value || self.second() == value
    }
}

/// A pair whose order is significant.  Used for directed edges, where the
/// first value is the source and the second value is the target.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct OrderedPair<T>(T, T);

impl<T> Pair<T> for OrderedPair<T>
where
    T: Eq + Ord,
{
    fn first(&self) -> &T {
        &self.0
    }

    fn second(&self) -> &T {
        &self.1
    }
}

impl<T> From<(T, T)> for OrderedPair<T>
where
    T: Ord,
{
    fn from(pair: (T, T)) -> Self {
        Self(pair.0, pair.1)
    }
}

impl<T> From<OrderedPair<T>> for (T, T) {
    fn from(pair: OrderedPair<T>) -> Self {
        (pair.0, pair.1)
    }
}

/// An unordered pair of values that compares and hashes equal regardless of element order.
///
/// This is useful for representing edges in undirected graphs, where (a, b) and (b, a)
/// should be considered identical.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct SortedPair<T>(T, T);

impl<T: Ord + Eq> Pair<T> for SortedPair<T> {
    fn first(&self) -> &T {
        &self.0
    }

    fn second(&self) -> &T {
        &self.1
    }
}

impl<T> From<(T, T)> for SortedPair<T>
where
    T: Ord,
{
    fn from(pair: (T, T)) -> Self {
        let (first, second) = sort_pair(pair.0, pair.1);
        Self(first, second)
    }
}

impl<T> From<SortedPair<T>> for (T, T) {
    fn from(pair: SortedPair<T>) -> Self {
        (pair.0, pair.1)
    }
}
