//! Construction of Eulerian circuits and paths with Hierholzer's algorithm.
//!
//! The algorithm walks unused edges from a start node until it returns to
//! that node, splices the resulting sub-circuit into the circuit built so
//! far, and repeats from a node on the circuit that still has unused edges.
//! Edges are consumed from a working copy of the graph, so the caller's
//! graph is never modified.

use std::collections::HashMap;

use crate::{
    Graph, NodeId,
    error::GraphError,
    eulerian::PathShape,
    tracing_support::{debug, info_span, trace},
};

/// Chooses which unused edge a walk takes next.
///
/// Any choice produces a valid circuit; the policy only decides which one.
/// Closures of type `FnMut(usize) -> usize` are policies.
pub trait NextEdge {
    /// Given the number of unused edges leaving the current node (always at
    /// least one), returns the index of the edge to take.  Edges are ordered
    /// by the node they lead to.  Out-of-range indices select the last edge.
    fn choose(&mut self, unused: usize) -> usize;
}

/// The default policy: always take the edge to the lowest-ordered node.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstEdge;

impl NextEdge for FirstEdge {
    fn choose(&mut self, _unused: usize) -> usize {
        0
    }
}

impl<F> NextEdge for F
where
    F: FnMut(usize) -> usize,
{
    fn choose(&mut self, unused: usize) -> usize {
        self(unused)
    }
}

/// A closed walk over the working graph, as node and edge indices.
/// `edges[i]` joins `nodes[i]` and `nodes[i + 1]`.
struct Circuit {
    nodes: Vec<usize>,
    edges: Vec<usize>,
}

/// An owned, consumable copy of a graph's edges.  Nodes are numbered by
/// their position in sorted order.
struct WorkingGraph<'g, N> {
    nodes: Vec<&'g N>,
    directed: bool,
    /// The two ends of each edge, source first for directed edges.
    endpoints: Vec<(usize, usize)>,
    /// For each node, the unused edges that can be traversed from it.
    unused: Vec<Vec<usize>>,
    num_unused: usize,
}

impl<'g, N: NodeId> WorkingGraph<'g, N> {
    fn new<G: Graph<NodeId = N>>(graph: &'g G) -> Self {
        let mut nodes: Vec<&N> = graph.node_ids().collect();
        nodes.sort();
        let index: HashMap<&N, usize> = nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();

        let mut working = Self {
            unused: vec![Vec::new(); nodes.len()],
            endpoints: Vec::with_capacity(graph.num_edges()),
            directed: graph.is_directed(),
            num_unused: 0,
            nodes,
        };
        for from in 0..working.nodes.len() {
            let mut targets: Vec<usize> = graph
                .successors(working.nodes[from])
                .into_iter()
                .flatten()
                .map(|into| index[into])
                .collect();
            targets.sort_unstable();
            for into in targets {
                // Undirected edges are listed under both ends; keep one copy.
                if working.directed || from < into {
                    working.push_edge(from, into);
                }
            }
        }
        working
    }

    fn index_of(&self, node: &N) -> usize {
        self.nodes
            .binary_search_by(|probe| (*probe).cmp(node))
            .expect("node is in the working graph")
    }

    fn resolve(&self, walk: &[usize]) -> Vec<N> {
        walk.iter().map(|&i| self.nodes[i].clone()).collect()
    }

    fn push_edge(&mut self, from: usize, into: usize) -> usize {
        let edge = self.endpoints.len();
        self.endpoints.push((from, into));
        self.unused[from].push(edge);
        if !self.directed {
            self.unused[into].push(edge);
        }
        self.num_unused += 1;
        edge
    }

    fn has_unused(&self, node: usize) -> bool {
        !self.unused[node].is_empty()
    }

    /// Removes an unused edge leaving `node`, chosen by `policy`, returning
    /// the edge and the node at its other end.
    fn take_edge(&mut self, node: usize, policy: &mut impl NextEdge) -> Option<(usize, usize)> {
        let unused = &mut self.unused[node];
        if unused.is_empty() {
            return None;
        }
        let choice = policy.choose(unused.len()).min(unused.len() - 1);
        let edge = unused.remove(choice);
        let (from, into) = self.endpoints[edge];
        let next = if from == node { into } else { from };
        if !self.directed {
            let other_end = &mut self.unused[next];
            if let Some(pos) = other_end.iter().position(|&e| e == edge) {
                other_end.remove(pos);
            }
        }
        self.num_unused -= 1;
        Some((edge, next))
    }

    /// Walks unused edges from `start` until the walk returns to `start`.
    /// `start` must have an unused edge.
    fn sub_circuit(&mut self, start: usize, policy: &mut impl NextEdge) -> Circuit {
        let mut walk = Circuit {
            nodes: vec![start],
            edges: Vec::new(),
        };
        let mut current = start;
        loop {
            let Some((edge, next)) = self.take_edge(current, policy) else {
                panic!(
                    "Eulerian walk from {:?} stuck at {:?} with {} edges unused",
                    self.nodes[start], self.nodes[current], self.num_unused
                );
            };
            walk.edges.push(edge);
            walk.nodes.push(next);
            current = next;
            if current == start {
                return walk;
            }
        }
    }

    /// Builds a circuit from `start` using every remaining edge.  Every node
    /// must be balanced and every node with edges reachable from `start`.
    fn build_circuit(&mut self, start: usize, policy: &mut impl NextEdge) -> Circuit {
        let mut circuit = Circuit {
            nodes: vec![start],
            edges: Vec::new(),
        };
        let mut current_start = start;
        while self.num_unused > 0 {
            let sub = self.sub_circuit(current_start, policy);
            trace!(
                start = ?self.nodes[current_start],
                len = sub.edges.len(),
                "splicing sub-circuit"
            );

            let at = circuit
                .nodes
                .iter()
                .position(|&n| n == current_start)
                .expect("sub-circuit starts on the circuit");
            circuit.nodes.splice(at..=at, sub.nodes.iter().copied());
            circuit.edges.splice(at..at, sub.edges);

            // Prefer nodes on the new sub-circuit, then the rest of the circuit.
            match sub
                .nodes
                .iter()
                .chain(&circuit.nodes)
                .copied()
                .find(|&n| self.has_unused(n))
            {
                Some(next_start) => current_start = next_start,
                None if self.num_unused > 0 => panic!(
                    "{} edges unreachable from the Eulerian circuit through {:?}",
                    self.num_unused, self.nodes[start]
                ),
                None => {}
            }
        }
        circuit
    }
}

/// Builds an Eulerian circuit of `graph` that starts and ends at `start`.
///
/// Returns [`GraphError::NodeNotFound`] if `start` is not in the graph, and
/// an empty vector if the graph has no Eulerian circuit.  A graph consisting
/// of the single node `start` yields `[start]`.
pub fn eulerian_circuit<G: Graph>(
    graph: &G,
    start: &G::NodeId,
    mut policy: impl NextEdge,
) -> Result<Vec<G::NodeId>, GraphError<G::NodeId>> {
    let _span = info_span!("eulerian_circuit", ?start).entered();
    graph.check_node(start)?;
    if !graph.has_eulerian_circuit() {
        debug!("graph has no Eulerian circuit");
        return Ok(Vec::new());
    }

    let mut working = WorkingGraph::new(graph);
    let circuit = working.build_circuit(working.index_of(start), &mut policy);
    debug_assert_eq!(circuit.edges.len(), graph.num_edges());
    Ok(working.resolve(&circuit.nodes))
}

/// Builds an Eulerian path of `graph`.
///
/// If the graph has an Eulerian circuit, returns the circuit starting at the
/// lowest-ordered node.  Otherwise the path runs between the endpoints given
/// by [`Graph::eulerian_path_shape`], from `start` to `end`.  Returns an
/// empty vector if the graph has no Eulerian path or no nodes.
pub fn eulerian_path<G: Graph>(graph: &G, mut policy: impl NextEdge) -> Vec<G::NodeId> {
    let _span = info_span!("eulerian_path").entered();
    let Some(shape) = graph.eulerian_path_shape() else {
        debug!("graph has no Eulerian path");
        return Vec::new();
    };

    let mut working = WorkingGraph::new(graph);
    if working.nodes.is_empty() {
        return Vec::new();
    }
    match shape {
        PathShape::Circuit => {
            let circuit = working.build_circuit(0, &mut policy);
            working.resolve(&circuit.nodes)
        }
        PathShape::Open { start, end } => {
            let (start, end) = (working.index_of(&start), working.index_of(&end));
            // Closing the path with an extra edge turns it into a circuit;
            // the path is that circuit cut open at the extra edge.
            let closing_edge = working.push_edge(end, start);
            let circuit = working.build_circuit(start, &mut policy);
            let at = circuit
                .edges
                .iter()
                .position(|&e| e == closing_edge)
                .expect("closing edge is on the circuit");
            let mut path: Vec<usize> = circuit.nodes[at + 1..]
                .iter()
                .chain(&circuit.nodes[1..=at])
                .copied()
                .collect();
            if path.first() != Some(&start) {
                debug_assert!(!working.directed);
                path.reverse();
            }
            working.resolve(&path)
        }
    }
}
