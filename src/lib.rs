//! Undirected and directed graphs with Eulerian path and circuit support.
//!
//! Graphs are stored as adjacency sets keyed by caller-supplied node values
//! (see [`AdjacencyGraph`]).  The [`Graph`] trait derives connectivity
//! checks, Eulerian predicates and a Hierholzer circuit builder from the
//! adjacency relation alone, so any implementation gets them for free.
//!
//! ```
//! use euler_graph::prelude::*;
//!
//! let graph = UndirectedGraph::from_adjacency([
//!     ("A", vec!["B", "C"]),
//!     ("B", vec!["A", "C"]),
//!     ("C", vec!["A", "B"]),
//! ])
//! .unwrap();
//! assert!(graph.has_eulerian_circuit());
//! assert_eq!(graph.eulerian_circuit(&"A").unwrap(), vec!["A", "B", "C", "A"]);
//! ```

pub mod adjacency_graph;
pub mod connectivity;
pub mod directedness;
pub mod error;
pub mod eulerian;
pub mod graph;
pub mod hierholzer;
pub mod pairs;
pub mod prelude;
pub mod search;
pub mod tracing_support;

#[cfg(test)]
mod test_support;
mod util;

pub use crate::adjacency_graph::{AdjacencyGraph, DirectedGraph, UndirectedGraph};
pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::error::GraphError;
pub use crate::eulerian::{DegreeClass, PathShape};
pub use crate::graph::{Edge, Graph, GraphDirected, GraphMut, GraphUndirected, NodeId};
pub use crate::hierholzer::{FirstEdge, NextEdge};
