use std::{
    collections::{HashMap, HashSet},
    marker::PhantomData,
};

use derivative::Derivative;

use crate::{
    Directed, Graph, GraphMut, NodeId, Undirected,
    directedness::Directedness,
    error::GraphError,
    tracing_support::debug,
};

/// An undirected graph whose nodes are identified by values of type `N`.
pub type UndirectedGraph<N> = AdjacencyGraph<N, Undirected>;

/// A directed graph whose nodes are identified by values of type `N`.
pub type DirectedGraph<N> = AdjacencyGraph<N, Directed>;

/// The nodes adjacent to a single node.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "N: Clone"),
    Debug(bound = "N: std::fmt::Debug"),
    Default(bound = ""),
    PartialEq(bound = "N: NodeId"),
    Eq(bound = "N: NodeId")
)]
struct Adjacent<N> {
    /// Successors, or neighbors in an undirected graph.
    outgoing: HashSet<N>,
    /// Predecessors.  Always empty in an undirected graph.
    incoming: HashSet<N>,
}

/// A graph implementation storing, for each node, the set of adjacent nodes.
///
/// Nodes are caller-supplied values; the graph stores each node once, and
/// stores at most one edge between any pair of nodes (in each direction, for
/// directed graphs).  Self-loops are not supported.
///
/// # Type Parameters
/// * `N` - The node identifier type
/// * `D` - The directedness ([`Directed`] or [`Undirected`])
#[derive(Derivative)]
#[derivative(
    Clone(bound = "N: Clone"),
    Debug(bound = "N: std::fmt::Debug"),
    Default(bound = ""),
    PartialEq(bound = "N: NodeId"),
    Eq(bound = "N: NodeId")
)]
pub struct AdjacencyGraph<N, D = Undirected> {
    adjacency: HashMap<N, Adjacent<N>>,
    num_edges: usize,
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    directedness: PhantomData<D>,
}

impl<N, D> AdjacencyGraph<N, D>
where
    N: NodeId,
    D: Directedness,
{
    fn adjacent(&self, node: &N) -> Result<&Adjacent<N>, GraphError<N>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| GraphError::NodeNotFound(node.clone()))
    }

    /// Gets the adjacency entry for a node, adding the node if necessary.
    fn adjacent_mut(&mut self, node: N) -> &mut Adjacent<N> {
        self.adjacency.entry(node).or_default()
    }
}

impl<N, D> Graph for AdjacencyGraph<N, D>
where
    N: NodeId,
    D: Directedness,
{
    type Directedness = D;
    type NodeId = N;

    fn node_ids(&self) -> impl Iterator<Item = &Self::NodeId> + '_ {
        self.adjacency.keys()
    }

    fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    fn contains_node(&self, node: &Self::NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    fn successors(
        &self,
        node: &Self::NodeId,
    ) -> Result<impl Iterator<Item = &Self::NodeId> + '_, GraphError<Self::NodeId>> {
        Ok(self.adjacent(node)?.outgoing.iter())
    }

    fn predecessors(
        &self,
        node: &Self::NodeId,
    ) -> Result<impl Iterator<Item = &Self::NodeId> + '_, GraphError<Self::NodeId>> {
        let adjacent = self.adjacent(node)?;
        Ok(if D::is_directed() {
            adjacent.incoming.iter()
        } else {
            adjacent.outgoing.iter()
        })
    }

    fn out_degree(&self, node: &Self::NodeId) -> Result<usize, GraphError<Self::NodeId>> {
        Ok(self.adjacent(node)?.outgoing.len())
    }

    fn in_degree(&self, node: &Self::NodeId) -> Result<usize, GraphError<Self::NodeId>> {
        let adjacent = self.adjacent(node)?;
        Ok(if D::is_directed() {
            adjacent.incoming.len()
        } else {
            adjacent.outgoing.len()
        })
    }

    fn has_edge(&self, from: &Self::NodeId, into: &Self::NodeId) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|adjacent| adjacent.outgoing.contains(into))
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }
}

impl<N, D> GraphMut for AdjacencyGraph<N, D>
where
    N: NodeId,
    D: Directedness,
{
    fn new() -> Self {
        Self::default()
    }

    fn clear(&mut self) {
        self.adjacency.clear();
        self.num_edges = 0;
    }

    fn add_node(&mut self, node: Self::NodeId) -> bool {
        if self.adjacency.contains_key(&node) {
            debug!(?node, "node already present");
            return false;
        }
        self.adjacency.insert(node, Adjacent::default());
        true
    }

    fn remove_node(&mut self, node: &Self::NodeId) -> Option<HashSet<Self::NodeId>> {
        let Some(removed) = self.adjacency.remove(node) else {
            debug!(?node, "node to remove not present");
            return None;
        };
        self.num_edges -= removed.outgoing.len() + removed.incoming.len();
        for into in &removed.outgoing {
            if let Some(adjacent) = self.adjacency.get_mut(into) {
                if D::is_directed() {
                    adjacent.incoming.remove(node);
                } else {
                    adjacent.outgoing.remove(node);
                }
            }
        }
        for from in &removed.incoming {
            if let Some(adjacent) = self.adjacency.get_mut(from) {
                adjacent.outgoing.remove(node);
            }
        }
        let Adjacent {
            mut outgoing,
            incoming,
        } = removed;
        outgoing.extend(incoming);
        Some(outgoing)
    }

    fn add_edge(
        &mut self,
        from: Self::NodeId,
        into: Self::NodeId,
    ) -> Result<bool, GraphError<Self::NodeId>> {
        if from == into {
            return Err(GraphError::SelfLoop(from));
        }
        if self.has_edge(&from, &into) {
            debug!(?from, ?into, "edge already present");
            return Ok(false);
        }
        self.adjacent_mut(from.clone()).outgoing.insert(into.clone());
        let target = self.adjacent_mut(into);
        if D::is_directed() {
            target.incoming.insert(from);
        } else {
            target.outgoing.insert(from);
        }
        self.num_edges += 1;
        Ok(true)
    }

    fn remove_edge(
        &mut self,
        from: &Self::NodeId,
        into: &Self::NodeId,
    ) -> Result<(), GraphError<Self::NodeId>> {
        if !self.has_edge(from, into) {
            return Err(GraphError::EdgeNotFound(from.clone(), into.clone()));
        }
        if let Some(adjacent) = self.adjacency.get_mut(from) {
            adjacent.outgoing.remove(into);
        }
        if let Some(adjacent) = self.adjacency.get_mut(into) {
            if D::is_directed() {
                adjacent.incoming.remove(from);
            } else {
                adjacent.outgoing.remove(from);
            }
        }
        self.num_edges -= 1;
        Ok(())
    }
}
