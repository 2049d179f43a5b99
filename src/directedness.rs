use crate::{
    Graph, NodeId, connectivity,
    eulerian::DegreeClass,
    pairs::{OrderedPair, Pair, SortedPair},
};

/// Marker type representing directed graph edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker type representing undirected graph edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

/// Trait defining the directedness behavior of graph edges.
///
/// This trait is implemented by [`Directed`] and [`Undirected`] marker types
/// to provide compile-time specialization of graph behavior.  Algorithms that
/// depend on the kind of edge (connectivity, degree parity) are written once
/// against [`Graph`] and select their rule through this trait.
pub trait Directedness: Sized + Copy + Default + 'static {
    /// The representation of an edge between nodes of type `T`.
    type Pair<T: NodeId>: Pair<T> + Eq + std::hash::Hash + Clone + std::fmt::Debug + Ord;

    fn is_directed() -> bool;

    /// Checks whether every node of `graph` can reach every other node.
    fn is_connected<G: Graph>(graph: &G) -> bool;

    /// Checks whether `graph` is connected when edge direction is ignored.
    fn is_weakly_connected<G: Graph>(graph: &G) -> bool {
        connectivity::is_weakly_connected(graph)
    }

    /// Classifies the degree of `node` for the Eulerian checks.
    fn degree_class<G: Graph>(graph: &G, node: &G::NodeId) -> DegreeClass;
}

impl Directedness for Directed {
    type Pair<T: NodeId> = OrderedPair<T>;

    fn is_directed() -> bool {
        true
    }

    fn is_connected<G: Graph>(graph: &G) -> bool {
        connectivity::is_strongly_connected(graph)
    }

    fn degree_class<G: Graph>(graph: &G, node: &G::NodeId) -> DegreeClass {
        let out_degree = graph.successors(node).map_or(0, Iterator::count);
        let in_degree = graph.predecessors(node).map_or(0, Iterator::count);
        DegreeClass::from_in_out(in_degree, out_degree)
    }
}

impl Directedness for Undirected {
    type Pair<T: NodeId> = SortedPair<T>;

    fn is_directed() -> bool {
        false
    }

    fn is_connected<G: Graph>(graph: &G) -> bool {
        connectivity::is_weakly_connected(graph)
    }

    fn degree_class<G: Graph>(graph: &G, node: &G::NodeId) -> DegreeClass {
        DegreeClass::from_degree(graph.successors(node).map_or(0, Iterator::count))
    }
}
