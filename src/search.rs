use std::collections::{HashSet, VecDeque};

use crate::Graph;

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Which edges a search follows out of each node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Follow edges from source to target.
    Outgoing,
    /// Follow edges from target to source.
    Incoming,
    /// Follow edges in both directions, ignoring direction entirely.
    Either,
}

impl Direction {
    /// Gets the nodes adjacent to `node` in this direction.  Nodes that are
    /// not in the graph have no adjacent nodes.
    fn adjacent<'g, G: Graph>(self, graph: &'g G, node: &G::NodeId) -> Vec<&'g G::NodeId> {
        let mut adjacent = Vec::new();
        if matches!(self, Direction::Outgoing | Direction::Either) {
            adjacent.extend(graph.successors(node).into_iter().flatten());
        }
        if matches!(self, Direction::Incoming | Direction::Either) && graph.is_directed() {
            adjacent.extend(graph.predecessors(node).into_iter().flatten());
        }
        if matches!(self, Direction::Incoming) && !graph.is_directed() {
            adjacent.extend(graph.successors(node).into_iter().flatten());
        }
        adjacent
    }
}

/// Iterator over the nodes reachable from a set of start nodes, in
/// breadth-first order.  Each node is yielded once.
pub struct BfsIterator<'g, G: Graph> {
    graph: &'g G,
    direction: Direction,
    visited: HashSet<G::NodeId>,
    queue: VecDeque<G::NodeId>,
}

impl<'g, G> BfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vec<G::NodeId>, direction: Direction) -> Self {
        Self {
            graph,
            direction,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            queue: start.into_iter().filter(|nid| graph.contains_node(nid)).collect(),
        }
    }
}

impl<'g, G> Iterator for BfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(nid) = self.queue.pop_front() {
            if !self.visited.insert(nid.clone()) {
                continue;
            }
            for neighbor in self.direction.adjacent(self.graph, &nid) {
                if !self.visited.contains(neighbor) {
                    self.queue.push_back(neighbor.clone());
                }
            }
            return Some(nid);
        }
        None
    }
}

/// Iterator over the nodes reachable from a set of start nodes, in
/// depth-first preorder.  Each node is yielded once.
pub struct DfsIterator<'g, G: Graph> {
    graph: &'g G,
    direction: Direction,
    visited: HashSet<G::NodeId>,
    stack: Vec<G::NodeId>,
}

impl<'g, G> DfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vec<G::NodeId>, direction: Direction) -> Self {
        let mut stack: Vec<_> = start
            .into_iter()
            .filter(|nid| graph.contains_node(nid))
            .collect();
        stack.reverse();
        Self {
            graph,
            direction,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack,
        }
    }
}

impl<'g, G> Iterator for DfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(nid) = self.stack.pop() {
            if self.visited.insert(nid.clone()) {
                let mut adjacent = self.direction.adjacent(self.graph, &nid);
                adjacent.sort();
                self.stack.extend(adjacent.into_iter().rev().cloned());
                return Some(nid);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{DirectedGraph, GraphMut, UndirectedGraph};

    use super::*;

    fn create_simple_graph() -> DirectedGraph<usize> {
        DirectedGraph::from_adjacency([(0, vec![1, 2]), (1, vec![3])]).unwrap()
    }

    fn create_cyclic_graph() -> DirectedGraph<usize> {
        DirectedGraph::from_adjacency([(0, vec![1]), (1, vec![2]), (2, vec![0])]).unwrap()
    }

    #[test]
    fn test_bfs_simple_graph() {
        let graph = create_simple_graph();
        let visited: Vec<_> = BfsIterator::new(&graph, vec![0], Direction::Outgoing).collect();
        assert_eq!(visited.len(), 4);
        assert_eq!(visited[0], 0);
        assert!(visited[1] == 1 || visited[1] == 2);
        assert!(visited[2] == 2 || visited[2] == 1);
        assert_eq!(visited[3], 3);
    }

    #[test]
    fn test_bfs_empty_start() {
        let graph = create_simple_graph();
        let visited: Vec<_> = BfsIterator::new(&graph, vec![], Direction::Outgoing).collect();
        assert!(visited.is_empty());
    }

    #[test]
    fn test_bfs_unknown_start() {
        let graph = create_simple_graph();
        assert_eq!(graph.bfs(99).count(), 0);
        assert_eq!(graph.dfs(99).count(), 0);
    }

    #[test]
    fn test_bfs_follows_direction() {
        let graph = create_simple_graph();
        let forward: HashSet<_> = BfsIterator::new(&graph, vec![1], Direction::Outgoing).collect();
        assert_eq!(forward, HashSet::from([1, 3]));
        let backward: HashSet<_> =
            BfsIterator::new(&graph, vec![1], Direction::Incoming).collect();
        assert_eq!(backward, HashSet::from([1, 0]));
        let either: HashSet<_> = BfsIterator::new(&graph, vec![1], Direction::Either).collect();
        assert_eq!(either, HashSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn test_bfs_handles_cycles() {
        let graph = create_cyclic_graph();
        assert_eq!(graph.bfs(0).count(), 3);
    }

    #[test]
    fn test_dfs_simple_graph() {
        let graph = create_simple_graph();
        let visited: Vec<_> = graph.dfs(0).collect();
        assert_eq!(visited, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_dfs_multiple_start_nodes() {
        let graph = create_simple_graph();
        let visited: HashSet<_> =
            DfsIterator::new(&graph, vec![2, 1], Direction::Outgoing).collect();
        assert_eq!(visited, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_dfs_handles_cycles() {
        let graph = create_cyclic_graph();
        let visited: Vec<_> = graph.dfs(1).collect();
        assert_eq!(visited, vec![1, 2, 0]);
    }

    #[test]
    fn test_undirected_directions_agree() {
        let graph = UndirectedGraph::from_adjacency([
            ("a", vec!["b"]),
            ("b", vec!["a", "c"]),
            ("c", vec!["b"]),
        ])
        .unwrap();
        for direction in [Direction::Outgoing, Direction::Incoming, Direction::Either] {
            let visited: HashSet<_> = BfsIterator::new(&graph, vec!["c"], direction).collect();
            assert_eq!(visited, HashSet::from(["a", "b", "c"]));
        }
    }

    #[test]
    fn test_bfs_dfs_visit_same_nodes() {
        let graph = create_simple_graph();
        let bfs_visited: HashSet<_> = graph.bfs(0).collect();
        let dfs_visited: HashSet<_> = graph.dfs(0).collect();
        assert_eq!(bfs_visited, dfs_visited);
    }
}
