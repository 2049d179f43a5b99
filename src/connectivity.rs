//! Connectivity checks.
//!
//! Undirected graphs are connected when a single breadth-first search
//! reaches every node.  Directed graphs are strongly connected when a
//! depth-first search from any node reaches every node, both in the graph and
//! in its transpose.  The empty graph is connected in every sense.

use crate::{
    Graph, GraphMut,
    adjacency_graph::DirectedGraph,
    search::{BfsIterator, DfsIterator, Direction},
};

/// Checks whether a single breadth-first search, ignoring edge direction,
/// reaches every node of `graph`.
pub fn is_weakly_connected<G: Graph>(graph: &G) -> bool {
    let Some(start) = graph.node_ids().next() else {
        return true;
    };
    BfsIterator::new(graph, vec![start.clone()], Direction::Either).count() == graph.num_nodes()
}

/// Checks whether every node of `graph` can reach every other node by
/// following outgoing edges.
pub fn is_strongly_connected<G: Graph>(graph: &G) -> bool {
    let Some(start) = graph.node_ids().next() else {
        return true;
    };
    reaches_all(graph, start) && reaches_all(&transpose(graph), start)
}

fn reaches_all<G: Graph>(graph: &G, start: &G::NodeId) -> bool {
    DfsIterator::new(graph, vec![start.clone()], Direction::Outgoing).count() == graph.num_nodes()
}

/// Creates a directed graph with the same nodes as `graph` and every edge
/// reversed.  Each undirected edge becomes a pair of opposite directed edges.
pub fn transpose<G: Graph>(graph: &G) -> DirectedGraph<G::NodeId> {
    let mut transposed = DirectedGraph::new();
    for node in graph.node_ids() {
        transposed.add_node(node.clone());
    }
    for from in graph.node_ids() {
        for into in graph.successors(from).into_iter().flatten() {
            transposed
                .add_edge(into.clone(), from.clone())
                .expect("edges of a graph are never self-loops");
        }
    }
    transposed
}
