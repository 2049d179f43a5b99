//! Predicates deciding whether a graph has an Eulerian path or circuit.
//!
//! These only inspect degrees and connectivity; see
//! [`hierholzer`](crate::hierholzer) for constructing the path itself.

use crate::{Graph, directedness::Directedness, tracing_support::trace, util::sort_pair};

/// How a node's degree constrains Eulerian paths through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegreeClass {
    /// Even degree (undirected), or in-degree equal to out-degree
    /// (directed).  Every visit that enters the node can also leave it.
    Balanced,
    /// Odd degree in an undirected graph.  An Eulerian path must start or
    /// end here.
    Odd,
    /// Out-degree exceeds in-degree by one.  An Eulerian path must start
    /// here.
    Surplus,
    /// In-degree exceeds out-degree by one.  An Eulerian path must end here.
    Deficit,
    /// In-degree and out-degree differ by more than one.  No Eulerian path
    /// exists.
    Unbalanced,
}

impl DegreeClass {
    /// Classifies a node of an undirected graph by its degree.
    pub fn from_degree(degree: usize) -> Self {
        if degree % 2 == 0 {
            DegreeClass::Balanced
        } else {
            DegreeClass::Odd
        }
    }

    /// Classifies a node of a directed graph by its in-degree and out-degree.
    pub fn from_in_out(in_degree: usize, out_degree: usize) -> Self {
        if out_degree == in_degree {
            DegreeClass::Balanced
        } else if out_degree == in_degree + 1 {
            DegreeClass::Surplus
        } else if in_degree == out_degree + 1 {
            DegreeClass::Deficit
        } else {
            DegreeClass::Unbalanced
        }
    }
}

/// The kind of Eulerian path a graph has.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathShape<N> {
    /// Every Eulerian path is a circuit; it may start at any node with edges.
    Circuit,
    /// Every Eulerian path runs from `start` to `end`.  For undirected graphs
    /// the path may also be reversed; `start` is then the smaller node.
    Open { start: N, end: N },
}

/// Returns true if `graph` is connected and every node is balanced.
pub fn has_eulerian_circuit<G: Graph>(graph: &G) -> bool {
    graph.is_connected()
        && graph
            .node_ids()
            .all(|node| G::Directedness::degree_class(graph, node) == DegreeClass::Balanced)
}

/// Returns true if `graph` has an Eulerian path, open or closed.
pub fn has_eulerian_path<G: Graph>(graph: &G) -> bool {
    path_shape(graph).is_some()
}

/// Determines the shape of the Eulerian paths of `graph`, or returns `None`
/// if there are none.
///
/// Undirected graphs need zero or two odd-degree nodes.  Directed graphs need
/// every node balanced except at most one [`DegreeClass::Surplus`] node and
/// at most one [`DegreeClass::Deficit`] node.  Both need to be connected,
/// ignoring edge direction.
pub fn path_shape<G: Graph>(graph: &G) -> Option<PathShape<G::NodeId>> {
    if !graph.is_weakly_connected() {
        return None;
    }

    let mut odd = Vec::with_capacity(2);
    let mut surplus = None;
    let mut deficit = None;
    for node in graph.node_ids() {
        let class = G::Directedness::degree_class(graph, node);
        match class {
            DegreeClass::Balanced => continue,
            DegreeClass::Odd if odd.len() < 2 => odd.push(node),
            DegreeClass::Surplus if surplus.is_none() => surplus = Some(node),
            DegreeClass::Deficit if deficit.is_none() => deficit = Some(node),
            _ => {
                trace!(?node, ?class, "too many unbalanced nodes for an Eulerian path");
                return None;
            }
        }
    }

    match (odd.as_slice(), surplus, deficit) {
        ([], None, None) => Some(PathShape::Circuit),
        ([a, b], None, None) => {
            let (start, end) = sort_pair(*a, *b);
            Some(PathShape::Open {
                start: start.clone(),
                end: end.clone(),
            })
        }
        ([], Some(start), Some(end)) => Some(PathShape::Open {
            start: start.clone(),
            end: end.clone(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{
        Directed, DirectedGraph, GraphMut, Undirected, UndirectedGraph, test_support::ArbGraph,
    };

    fn triangle() -> UndirectedGraph<&'static str> {
        UndirectedGraph::from_adjacency([
            ("A", vec!["B", "C"]),
            ("B", vec!["A", "C"]),
            ("C", vec!["A", "B"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_degree_classes() {
        assert_eq!(DegreeClass::from_degree(0), DegreeClass::Balanced);
        assert_eq!(DegreeClass::from_degree(3), DegreeClass::Odd);
        assert_eq!(DegreeClass::from_in_out(2, 2), DegreeClass::Balanced);
        assert_eq!(DegreeClass::from_in_out(1, 2), DegreeClass::Surplus);
        assert_eq!(DegreeClass::from_in_out(2, 1), DegreeClass::Deficit);
        assert_eq!(DegreeClass::from_in_out(0, 2), DegreeClass::Unbalanced);
        assert_eq!(DegreeClass::from_in_out(3, 0), DegreeClass::Unbalanced);
    }

    #[test]
    fn test_triangle_has_circuit() {
        let graph = triangle();
        assert!(graph.has_eulerian_circuit());
        assert!(graph.has_eulerian_path());
        assert_eq!(graph.eulerian_path_shape(), Some(PathShape::Circuit));
    }

    #[test]
    fn test_path_graph_has_open_path() {
        let graph = UndirectedGraph::from_adjacency([
            ("C", vec!["B"]),
            ("B", vec!["A", "C"]),
            ("A", vec!["B"]),
        ])
        .unwrap();
        assert!(!graph.has_eulerian_circuit());
        assert!(graph.has_eulerian_path());
        assert_eq!(
            graph.eulerian_path_shape(),
            Some(PathShape::Open {
                start: "A",
                end: "C"
            })
        );
    }

    #[test]
    fn test_four_odd_nodes_has_no_path() {
        // A star with three leaves has four odd-degree nodes.
        let graph = UndirectedGraph::from_adjacency([
            ("hub", vec!["x", "y", "z"]),
            ("x", vec!["hub"]),
            ("y", vec!["hub"]),
            ("z", vec!["hub"]),
        ])
        .unwrap();
        assert!(graph.is_connected());
        assert!(!graph.has_eulerian_circuit());
        assert!(!graph.has_eulerian_path());
    }

    #[test]
    fn test_disconnected_graph_has_neither() {
        let graph =
            UndirectedGraph::from_adjacency([("A", vec!["B"]), ("B", vec!["A"]), ("C", vec![])])
                .unwrap();
        assert!(!graph.is_connected());
        assert!(!graph.has_eulerian_path());
        assert!(!graph.has_eulerian_circuit());
    }

    #[test]
    fn test_two_disjoint_triangles_have_neither() {
        let mut graph = triangle();
        for (from, into) in [("X", "Y"), ("Y", "Z"), ("Z", "X")] {
            graph.add_edge(from, into).unwrap();
        }
        assert!(!graph.has_eulerian_circuit());
        assert!(!graph.has_eulerian_path());
    }

    #[test]
    fn test_trivial_graphs_have_circuits() {
        assert!(UndirectedGraph::<u8>::new().has_eulerian_circuit());
        let mut graph = DirectedGraph::new();
        graph.add_node(1);
        assert!(graph.has_eulerian_circuit());
        assert_eq!(graph.eulerian_path_shape(), Some(PathShape::Circuit));
    }

    #[test]
    fn test_directed_cycle_has_circuit() {
        let graph =
            DirectedGraph::from_adjacency([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["A"])])
                .unwrap();
        assert!(graph.has_eulerian_circuit());
        assert!(graph.has_eulerian_path());
    }

    #[test]
    fn test_directed_path_endpoints() {
        let graph = DirectedGraph::from_adjacency([(3, vec![2]), (2, vec![1])]).unwrap();
        assert!(!graph.has_eulerian_circuit());
        assert_eq!(
            graph.eulerian_path_shape(),
            Some(PathShape::Open { start: 3, end: 1 })
        );
    }

    #[test]
    fn test_directed_two_sources_have_no_path() {
        let graph = DirectedGraph::from_adjacency([(1, vec![3]), (2, vec![3])]).unwrap();
        assert!(graph.is_weakly_connected());
        assert!(!graph.has_eulerian_path());
    }

    #[test]
    fn test_directed_unbalanced_node_has_no_path() {
        let graph = DirectedGraph::from_adjacency([(1, vec![2, 3]), (2, vec![]), (3, vec![])])
            .unwrap();
        assert!(!graph.has_eulerian_path());
    }

    #[test]
    fn test_directed_balanced_but_disconnected_has_no_circuit() {
        let graph = DirectedGraph::from_adjacency([
            (1, vec![2]),
            (2, vec![1]),
            (3, vec![4]),
            (4, vec![3]),
        ])
        .unwrap();
        assert!(!graph.has_eulerian_circuit());
        assert!(!graph.has_eulerian_path());
    }

    fn odd_degree_count(graph: &UndirectedGraph<u8>) -> usize {
        graph
            .node_ids()
            .filter(|node| graph.degree(node).unwrap() % 2 == 1)
            .count()
    }

    #[quickcheck]
    fn prop_circuit_iff_connected_and_even(ArbGraph { graph }: ArbGraph<Undirected>) -> bool {
        graph.has_eulerian_circuit() == (graph.is_connected() && odd_degree_count(&graph) == 0)
    }

    #[quickcheck]
    fn prop_path_iff_connected_and_zero_or_two_odd(
        ArbGraph { graph }: ArbGraph<Undirected>,
    ) -> bool {
        let odd = odd_degree_count(&graph);
        graph.has_eulerian_path() == (graph.is_connected() && (odd == 0 || odd == 2))
    }

    #[quickcheck]
    fn prop_directed_circuit_shape_agrees(ArbGraph { graph }: ArbGraph<Directed>) -> bool {
        graph.has_eulerian_circuit() == (graph.eulerian_path_shape() == Some(PathShape::Circuit))
    }

    #[quickcheck]
    fn prop_directed_open_path_endpoints_are_unbalanced(
        ArbGraph { graph }: ArbGraph<Directed>,
    ) -> bool {
        match graph.eulerian_path_shape() {
            Some(PathShape::Open { start, end }) => {
                graph.out_degree(&start).unwrap() == graph.in_degree(&start).unwrap() + 1
                    && graph.in_degree(&end).unwrap() == graph.out_degree(&end).unwrap() + 1
            }
            _ => true,
        }
    }
}
