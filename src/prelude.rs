pub use crate::{
    AdjacencyGraph, DirectedGraph, Graph, GraphDirected, GraphError, GraphMut, GraphUndirected,
    NodeId, PathShape, UndirectedGraph,
    directedness::{Directed, Directedness, Undirected},
    hierholzer::{FirstEdge, NextEdge},
    pairs::{OrderedPair, Pair, SortedPair},
    search::Direction,
};
