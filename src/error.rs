use std::fmt::Debug;

/// Errors reported by graph queries and mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<N: Debug> {
    /// The node is not a member of the graph.
    #[error("node {0:?} not found in graph")]
    NodeNotFound(N),

    /// There is no edge between the two nodes.  For directed graphs the
    /// first node is the source.
    #[error("edge ({0:?}, {1:?}) not found in graph")]
    EdgeNotFound(N, N),

    /// Self-loops are not supported.
    #[error("self-loop on node {0:?} is not supported")]
    SelfLoop(N),

    /// An undirected adjacency description lists `to` as a neighbor of
    /// `from` but not the other way around.
    #[error("adjacency is not symmetric: {from:?} lists {to:?} as a neighbor but not vice versa")]
    AsymmetricAdjacency { from: N, to: N },
}
