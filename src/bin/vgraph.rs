//! CLI entry point for the `vgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use vertexgraph::cli::commands;
use vertexgraph::{DuplicateVertexPolicy, GraphConfig, GraphError};

#[derive(Parser)]
#[command(
    name = "vgraph",
    about = "vgraph — build a weighted graph from arguments and query it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Edge as A,B or A,B,WEIGHT (repeatable; endpoints are auto-registered)
    #[arg(long = "edge", global = true)]
    edges: Vec<String>,

    /// Isolated vertex to register (repeatable)
    #[arg(long = "vertex", global = true)]
    vertices: Vec<String>,

    /// Use the built-in sample friend network
    #[arg(long, global = true)]
    sample: bool,

    /// Duplicate vertex policy: reject or replace
    #[arg(long, default_value = "reject", global = true)]
    duplicates: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List vertex keys
    Vertices,
    /// List undirected edges with weights
    Edges,
    /// Show a vertex and its weighted neighbors
    Show {
        /// Vertex key
        key: String,
    },
    /// Breadth-first reachability from a vertex
    Reach {
        /// Starting vertex key
        start: String,
        /// Only report vertices within this many hops
        #[arg(long)]
        max_hops: Option<usize>,
    },
    /// Depth-first check for any path between two vertices
    Connected {
        from: String,
        to: String,
    },
    /// Depth-first path between two vertices
    Path {
        from: String,
        to: String,
    },
    /// Hop count of the shortest path (-1 when unreachable)
    Distance {
        from: String,
        to: String,
    },
    /// Weight of the edge between two vertices
    Weight {
        from: String,
        to: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = match cli.format.as_str() {
        "json" => true,
        "text" => false,
        other => {
            eprintln!("Invalid format: {}", other);
            process::exit(3);
        }
    };

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let policy = match DuplicateVertexPolicy::from_name(&cli.duplicates) {
        Some(policy) => policy,
        None => {
            eprintln!("Invalid duplicate policy: {}", cli.duplicates);
            process::exit(3);
        }
    };
    let config = GraphConfig::with_duplicate_policy(policy);

    let result = commands::build_graph(&cli.vertices, &cli.edges, cli.sample, config).and_then(
        |graph| match &cli.command {
            Commands::Vertices => commands::cmd_vertices(&graph, json),
            Commands::Edges => commands::cmd_edges(&graph, json),
            Commands::Show { key } => commands::cmd_show(&graph, key, json),
            Commands::Reach { start, max_hops } => {
                commands::cmd_reach(&graph, start, *max_hops, json)
            }
            Commands::Connected { from, to } => commands::cmd_connected(&graph, from, to, json),
            Commands::Path { from, to } => commands::cmd_path(&graph, from, to, json),
            Commands::Distance { from, to } => commands::cmd_distance(&graph, from, to, json),
            Commands::Weight { from, to } => commands::cmd_weight(&graph, from, to, json),
        },
    );

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                GraphError::InvalidEdgeSpec(_) => 3,
                e if e.is_not_found() => 4,
                _ => 5,
            };
            process::exit(code);
        }
    }
}
