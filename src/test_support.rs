use std::collections::HashSet;

use quickcheck::{Arbitrary, Gen};

use crate::{
    AdjacencyGraph, Edge, Graph, GraphMut, directedness::Directedness,
    tracing_support::init_tracing,
};

/// An arbitrary graph over small integer nodes.  No shape is guaranteed: the
/// graph may be empty, disconnected, or anything in between.
#[derive(Debug, Clone)]
pub struct ArbGraph<D: Directedness> {
    pub graph: AdjacencyGraph<u8, D>,
}

impl<D: Directedness> Arbitrary for ArbGraph<D> {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = usize::arbitrary(g) % 12; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 30;

        let mut graph = AdjacencyGraph::new();
        for node in 0..num_nodes as u8 {
            graph.add_node(node);
        }
        for _ in 0..num_edges {
            if num_nodes < 2 {
                break;
            }
            let from = (usize::arbitrary(g) % num_nodes) as u8;
            let into = (usize::arbitrary(g) % num_nodes) as u8;
            if from != into {
                graph.add_edge(from, into).unwrap();
            }
        }

        ArbGraph { graph }
    }
}

/// An arbitrary graph with an Eulerian circuit.  Node `0` is always present.
///
/// The graph is grown from node `0` by repeatedly gluing an edge-disjoint
/// cycle onto a node that is already in the graph, which keeps every node
/// balanced and the graph connected.
#[derive(Debug, Clone)]
pub struct ArbEulerian<D: Directedness> {
    pub graph: AdjacencyGraph<u8, D>,
}

impl<D: Directedness> Arbitrary for ArbEulerian<D> {
    fn arbitrary(g: &mut Gen) -> Self {
        const MAX_NODES: u8 = 40;

        let mut graph = AdjacencyGraph::new();
        graph.add_node(0u8);
        let mut next_node = 1u8;

        let num_cycles = usize::arbitrary(g) % 6;
        for _ in 0..num_cycles {
            let existing: Vec<u8> = graph.node_ids().copied().collect();
            let anchor = *g.choose(&existing).unwrap();
            let len = if D::is_directed() { 2 } else { 3 } + usize::arbitrary(g) % 4;

            let mut cycle = vec![anchor];
            while cycle.len() < len {
                let reuse = bool::arbitrary(g);
                let node = if reuse || next_node >= MAX_NODES {
                    *g.choose(&existing).unwrap()
                } else {
                    next_node += 1;
                    next_node - 1
                };
                if !cycle.contains(&node) {
                    cycle.push(node);
                } else if next_node >= MAX_NODES {
                    break;
                }
            }
            if cycle.len() < len {
                continue;
            }

            let cycle_edges: Vec<(u8, u8)> = (0..cycle.len())
                .map(|i| (cycle[i], cycle[(i + 1) % cycle.len()]))
                .collect();
            if cycle_edges.iter().any(|(from, into)| graph.has_edge(from, into)) {
                continue;
            }
            for (from, into) in cycle_edges {
                graph.add_node(from);
                graph.add_node(into);
                graph.add_edge(from, into).unwrap();
            }
        }

        debug_assert!(graph.has_eulerian_circuit());
        ArbEulerian { graph }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Removing a cycle could break the circuit, so only the trivial graph
        // is offered.
        if self.graph.num_nodes() <= 1 {
            return Box::new(std::iter::empty());
        }
        let mut graph = AdjacencyGraph::new();
        graph.add_node(0u8);
        Box::new(std::iter::once(ArbEulerian { graph }))
    }
}

/// Asserts that `trail` walks along existing edges and uses every edge of
/// `graph` exactly once.
pub fn check_trail<G: Graph>(graph: &G, trail: &[G::NodeId]) {
    init_tracing();
    assert_eq!(
        trail.len(),
        graph.num_edges() + 1,
        "wrong length for {trail:?}"
    );
    let mut used: HashSet<Edge<G>> = HashSet::new();
    for step in trail.windows(2) {
        let (from, into) = (&step[0], &step[1]);
        assert!(
            graph.has_edge(from, into),
            "no edge {from:?} -> {into:?} in {trail:?}"
        );
        let edge: Edge<G> = (from.clone(), into.clone()).into();
        assert!(used.insert(edge), "edge {from:?} -> {into:?} reused");
    }
    assert_eq!(used, graph.edges());
}

/// Asserts that `circuit` is an Eulerian circuit of `graph` starting and
/// ending at `start`.
pub fn check_circuit<G: Graph>(graph: &G, circuit: &[G::NodeId], start: &G::NodeId) {
    check_trail(graph, circuit);
    assert_eq!(circuit.first(), Some(start));
    assert_eq!(circuit.last(), Some(start));
}
