//! Builds a graph from edges given on the command line and prints its
//! Eulerian circuit or path.
//!
//! ```text
//! cargo run --example euler_tour -- A-B B-C C-A
//! cargo run --example euler_tour -- --directed --start B A-B B-C C-A
//! ```
//!
//! Each argument is either an edge `FROM-TO` or a lone node name.

#[cfg(feature = "tracing")]
mod inner {
    use clap::Parser;
    use euler_graph::{GraphError, prelude::*};

    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Treat each edge as directed from its first node to its second
        #[arg(short, long)]
        directed: bool,

        /// Node to start the circuit from; defaults to the smallest node
        #[arg(short, long)]
        start: Option<String>,

        /// Log the builder's progress to stderr
        #[arg(short, long)]
        verbose: bool,

        /// Edges as `FROM-TO`, or lone node names
        #[arg(required = true)]
        items: Vec<String>,
    }

    fn build<G>(items: &[String]) -> Result<G, GraphError<String>>
    where
        G: GraphMut<NodeId = String>,
    {
        let mut graph = G::new();
        for item in items {
            match item.split_once('-') {
                Some((from, into)) => {
                    graph.add_edge(from.to_string(), into.to_string())?;
                }
                None => {
                    graph.add_node(item.clone());
                }
            }
        }
        Ok(graph)
    }

    fn report<G>(graph: &G, start: Option<String>) -> Result<(), GraphError<String>>
    where
        G: Graph<NodeId = String>,
    {
        let kind = if graph.is_directed() {
            "directed"
        } else {
            "undirected"
        };
        println!(
            "{kind} graph with {} nodes and {} edges",
            graph.num_nodes(),
            graph.num_edges()
        );
        println!("connected: {}", graph.is_connected());
        println!("eulerian circuit: {}", graph.has_eulerian_circuit());
        println!("eulerian path: {}", graph.has_eulerian_path());

        if graph.has_eulerian_circuit() {
            let start = match start {
                Some(start) => start,
                None => match graph.node_ids().min() {
                    Some(start) => start.clone(),
                    None => return Ok(()),
                },
            };
            let circuit = graph.eulerian_circuit(&start)?;
            println!("circuit: {}", circuit.join(" -> "));
        } else if graph.has_eulerian_path() {
            println!("path: {}", graph.eulerian_path().join(" -> "));
        }
        Ok(())
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let args = Args::parse();

        if args.verbose {
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .with_writer(std::io::stderr)
                .init();
        }

        if args.directed {
            report(&build::<DirectedGraph<String>>(&args.items)?, args.start)?;
        } else {
            report(&build::<UndirectedGraph<String>>(&args.items)?, args.start)?;
        }

        Ok(())
    }
}

#[cfg(feature = "tracing")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    inner::run()
}

#[cfg(not(feature = "tracing"))]
fn main() {
    println!("This example requires the 'tracing' feature to be enabled.");
    println!("Run with: cargo run --example euler_tour --features tracing");
}
