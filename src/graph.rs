use std::{collections::HashSet, fmt::Debug, hash::Hash};

use crate::{
    adjacency_graph::DirectedGraph,
    connectivity,
    directedness::{Directed, Directedness, Undirected},
    error::GraphError,
    eulerian::{self, PathShape},
    hierholzer::{self, FirstEdge, NextEdge},
    pairs::Pair,
    search::{BfsIterator, DfsIterator, Direction},
};

/// A trait representing a node identifier in a graph.
///
/// Node identifiers are supplied by the caller; the graph never manufactures
/// its own.  Any type with the required bounds is a `NodeId`.
pub trait NodeId: Eq + Hash + Clone + Debug + Ord {}

impl<T> NodeId for T where T: Eq + Hash + Clone + Debug + Ord {}

/// The edge type of a graph: an [`OrderedPair`](crate::pairs::OrderedPair) of
/// (source, target) for directed graphs, or a
/// [`SortedPair`](crate::pairs::SortedPair) for undirected graphs.
pub type Edge<G> = <<G as Graph>::Directedness as Directedness>::Pair<<G as Graph>::NodeId>;

/// A trait representing a directed or undirected graph without parallel
/// edges.  Methods that return iterators or sets over nodes or edges return
/// them in an unspecified order unless otherwise noted.
///
/// Implementors only need to provide the node set and the adjacency
/// relation; degrees, edges, searches, connectivity and the Eulerian
/// queries are derived from those.
pub trait Graph: Sized {
    type Directedness: Directedness;
    type NodeId: NodeId;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool {
        Self::Directedness::is_directed()
    }

    // Nodes

    /// Gets an iterator over all nodes in the graph.
    fn node_ids(&self) -> impl Iterator<Item = &Self::NodeId> + '_;

    /// Gets the set of all nodes in the graph.
    fn nodes(&self) -> HashSet<Self::NodeId> {
        self.node_ids().cloned().collect()
    }

    /// Gets the number of nodes in the graph.
    fn num_nodes(&self) -> usize {
        self.node_ids().count()
    }

    /// Returns true if the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.num_nodes() == 0
    }

    /// Checks whether a node is in the graph.
    fn contains_node(&self, node: &Self::NodeId) -> bool {
        self.node_ids().any(|nid| nid == node)
    }

    /// Returns [`GraphError::NodeNotFound`] if the node is not in the graph.
    fn check_node(&self, node: &Self::NodeId) -> Result<(), GraphError<Self::NodeId>> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(node.clone()))
        }
    }

    // Adjacency

    /// Gets an iterator over the successors of a node, i.e. those nodes
    /// reachable by an outgoing edge.  For undirected graphs these are the
    /// node's neighbors.
    fn successors(
        &self,
        node: &Self::NodeId,
    ) -> Result<impl Iterator<Item = &Self::NodeId> + '_, GraphError<Self::NodeId>>;

    /// Gets an iterator over the predecessors of a node, i.e. those nodes
    /// with an edge into it.  For undirected graphs these are the node's
    /// neighbors.
    fn predecessors(
        &self,
        node: &Self::NodeId,
    ) -> Result<impl Iterator<Item = &Self::NodeId> + '_, GraphError<Self::NodeId>>;

    /// Gets the number of outgoing edges of a node.
    fn out_degree(&self, node: &Self::NodeId) -> Result<usize, GraphError<Self::NodeId>> {
        Ok(self.successors(node)?.count())
    }

    /// Gets the number of incoming edges of a node.
    fn in_degree(&self, node: &Self::NodeId) -> Result<usize, GraphError<Self::NodeId>> {
        Ok(self.predecessors(node)?.count())
    }

    /// Gets the number of edges touching a node.  For directed graphs this is
    /// the sum of the in-degree and the out-degree.
    fn degree(&self, node: &Self::NodeId) -> Result<usize, GraphError<Self::NodeId>> {
        if self.is_directed() {
            Ok(self.in_degree(node)? + self.out_degree(node)?)
        } else {
            self.out_degree(node)
        }
    }

    // Edges

    /// Checks if there is an edge from one node to another.  For undirected
    /// graphs the order of the nodes does not matter.
    fn has_edge(&self, from: &Self::NodeId, into: &Self::NodeId) -> bool {
        self.successors(from)
            .is_ok_and(|mut successors| successors.any(|nid| nid == into))
    }

    /// Gets the number of edges in the graph.
    fn num_edges(&self) -> usize {
        self.edges().len()
    }

    /// Gets the set of all edges in the graph.  Each undirected edge appears
    /// once, regardless of orientation.
    fn edges(&self) -> HashSet<Edge<Self>> {
        let mut edges = HashSet::new();
        for from in self.node_ids() {
            for into in self.successors(from).into_iter().flatten() {
                edges.insert((from.clone(), into.clone()).into());
            }
        }
        edges
    }

    /// Gets the set of edges touching a node, both incoming and outgoing.
    fn edges_of(
        &self,
        node: &Self::NodeId,
    ) -> Result<HashSet<Edge<Self>>, GraphError<Self::NodeId>> {
        let mut edges: HashSet<Edge<Self>> = self
            .successors(node)?
            .map(|into| (node.clone(), into.clone()).into())
            .collect();
        if self.is_directed() {
            edges.extend(
                self.predecessors(node)?
                    .map(|from| (from.clone(), node.clone()).into()),
            );
        }
        debug_assert!(edges.iter().all(|edge| edge.contains(node)));
        Ok(edges)
    }

    // Searches

    /// Performs a breadth-first search along outgoing edges starting from
    /// the given node.
    fn bfs(&self, start: Self::NodeId) -> BfsIterator<'_, Self> {
        BfsIterator::new(self, vec![start], Direction::Outgoing)
    }

    /// Performs a depth-first search along outgoing edges starting from the
    /// given node.
    fn dfs(&self, start: Self::NodeId) -> DfsIterator<'_, Self> {
        DfsIterator::new(self, vec![start], Direction::Outgoing)
    }

    // Connectivity

    /// Returns true if every node can reach every other node.  For directed
    /// graphs this is strong connectivity.  The empty graph is connected.
    fn is_connected(&self) -> bool {
        Self::Directedness::is_connected(self)
    }

    /// Returns true if the graph is connected when edge direction is
    /// ignored.  Same as [`Self::is_connected`] for undirected graphs.
    fn is_weakly_connected(&self) -> bool {
        Self::Directedness::is_weakly_connected(self)
    }

    // Eulerian paths

    /// Returns true if the graph has an Eulerian circuit.
    fn has_eulerian_circuit(&self) -> bool {
        eulerian::has_eulerian_circuit(self)
    }

    /// Returns true if the graph has an Eulerian path.  Every graph with an
    /// Eulerian circuit also has an Eulerian path.
    fn has_eulerian_path(&self) -> bool {
        eulerian::has_eulerian_path(self)
    }

    /// Determines whether the graph has an Eulerian path and, if so, whether
    /// it is a circuit or which nodes it must start and end at.
    fn eulerian_path_shape(&self) -> Option<PathShape<Self::NodeId>> {
        eulerian::path_shape(self)
    }

    /// Builds an Eulerian circuit starting and ending at `start`, taking the
    /// lowest-ordered unused edge at each step.  Returns an empty vector if
    /// the graph has no Eulerian circuit.
    fn eulerian_circuit(
        &self,
        start: &Self::NodeId,
    ) -> Result<Vec<Self::NodeId>, GraphError<Self::NodeId>> {
        self.eulerian_circuit_with(start, FirstEdge)
    }

    /// Like [`Self::eulerian_circuit`], but uses `policy` to choose the next
    /// unused edge at each step of the walk.
    fn eulerian_circuit_with(
        &self,
        start: &Self::NodeId,
        policy: impl NextEdge,
    ) -> Result<Vec<Self::NodeId>, GraphError<Self::NodeId>> {
        hierholzer::eulerian_circuit(self, start, policy)
    }

    /// Builds an Eulerian path, taking the lowest-ordered unused edge at each
    /// step.  Returns an empty vector if the graph has no Eulerian path.
    fn eulerian_path(&self) -> Vec<Self::NodeId> {
        self.eulerian_path_with(FirstEdge)
    }

    /// Like [`Self::eulerian_path`], but uses `policy` to choose the next
    /// unused edge at each step of the walk.
    fn eulerian_path_with(&self, policy: impl NextEdge) -> Vec<Self::NodeId> {
        hierholzer::eulerian_path(self, policy)
    }
}

/// A trait which is automatically implemented for directed graphs, providing
/// methods specific to directed graphs.
pub trait GraphDirected: Graph {
    /// Gets the in-degree and out-degree of a node.
    fn in_out_degree(
        &self,
        node: &Self::NodeId,
    ) -> Result<(usize, usize), GraphError<Self::NodeId>> {
        Ok((self.in_degree(node)?, self.out_degree(node)?))
    }

    /// Creates a new graph with the same nodes and every edge reversed.
    fn transpose(&self) -> DirectedGraph<Self::NodeId> {
        connectivity::transpose(self)
    }

    /// Partitions the graph into strongly connected components.
    #[cfg(feature = "pathfinding")]
    fn strongly_connected_components(&self) -> Vec<Vec<Self::NodeId>> {
        pathfinding::prelude::strongly_connected_components(
            &self.node_ids().cloned().collect::<Vec<_>>(),
            |nid| {
                self.successors(nid)
                    .into_iter()
                    .flatten()
                    .cloned()
                    .collect::<Vec<_>>()
            },
        )
    }
}

impl<G> GraphDirected for G where G: Graph<Directedness = Directed> {}

/// A trait which is automatically implemented for undirected graphs, providing
/// methods specific to undirected graphs.
pub trait GraphUndirected: Graph {
    /// Gets an iterator over the neighbors of a node.
    fn neighbors(
        &self,
        node: &Self::NodeId,
    ) -> Result<impl Iterator<Item = &Self::NodeId> + '_, GraphError<Self::NodeId>> {
        self.successors(node)
    }

    /// Partitions the graph into connected components.
    #[cfg(feature = "pathfinding")]
    fn connected_components(&self) -> Vec<HashSet<Self::NodeId>> {
        pathfinding::prelude::connected_components(
            &self.node_ids().cloned().collect::<Vec<_>>(),
            |nid| {
                self.successors(nid)
                    .into_iter()
                    .flatten()
                    .cloned()
                    .collect::<Vec<_>>()
            },
        )
    }
}

impl<G> GraphUndirected for G where G: Graph<Directedness = Undirected> {}

/// A trait for graphs that support mutation operations.
///
/// Mutations either apply completely or not at all: a failed call leaves the
/// graph unchanged.
pub trait GraphMut: Graph {
    /// Creates a new, empty graph.
    fn new() -> Self;

    /// Creates a graph from an adjacency description: a sequence of nodes,
    /// each with the nodes it is adjacent to.
    ///
    /// For undirected graphs the description must be symmetric: if `b` is
    /// listed as a neighbor of `a`, then `a` must be listed as a neighbor of
    /// `b`.  For directed graphs each listed node is a successor, and
    /// successors that are not listed as keys are added as nodes.
    fn from_adjacency<I, A>(adjacency: I) -> Result<Self, GraphError<Self::NodeId>>
    where
        I: IntoIterator<Item = (Self::NodeId, A)>,
        A: IntoIterator<Item = Self::NodeId>,
    {
        let mut nodes = Vec::new();
        let mut pairs = Vec::new();
        for (from, targets) in adjacency {
            for into in targets {
                if into == from {
                    return Err(GraphError::SelfLoop(from));
                }
                pairs.push((from.clone(), into));
            }
            nodes.push(from);
        }

        if !Self::Directedness::is_directed() {
            let listed: HashSet<(&Self::NodeId, &Self::NodeId)> =
                pairs.iter().map(|(from, into)| (from, into)).collect();
            if let Some((from, into)) = pairs
                .iter()
                .find(|(from, into)| !listed.contains(&(into, from)))
            {
                return Err(GraphError::AsymmetricAdjacency {
                    from: from.clone(),
                    to: into.clone(),
                });
            }
        }

        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        for (from, into) in pairs {
            graph.add_edge(from, into)?;
        }
        Ok(graph)
    }

    /// Removes all nodes and edges from the graph.
    fn clear(&mut self) {
        for nid in self.node_ids().cloned().collect::<Vec<_>>() {
            self.remove_node(&nid);
        }
    }

    /// Adds a node to the graph.  Returns false, leaving the graph unchanged,
    /// if the node was already present.
    fn add_node(&mut self, node: Self::NodeId) -> bool;

    /// Removes a node and every edge touching it.  Returns the nodes that
    /// were adjacent to it, or `None` if the node was not present.
    fn remove_node(&mut self, node: &Self::NodeId) -> Option<HashSet<Self::NodeId>>;

    /// Adds an edge between two nodes, adding either node if it is not
    /// already present.  Returns `Ok(false)` if the edge already existed.
    /// Self-loops are rejected with [`GraphError::SelfLoop`].
    fn add_edge(
        &mut self,
        from: Self::NodeId,
        into: Self::NodeId,
    ) -> Result<bool, GraphError<Self::NodeId>>;

    /// Removes the edge between two nodes.  Fails with
    /// [`GraphError::EdgeNotFound`] if there is no such edge.
    fn remove_edge(
        &mut self,
        from: &Self::NodeId,
        into: &Self::NodeId,
    ) -> Result<(), GraphError<Self::NodeId>>;
}
