//! CLI entry point for the `mgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use matgraph::cli::commands::{self, Sample};
use matgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "mgraph",
    about = "Run traversal, spanning-tree and shortest-path algorithms on sample graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Sample graph: "directed" or "undirected" (default depends on the command)
    #[arg(long, global = true)]
    sample: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency matrix
    Show,
    /// Depth-first traversal of every vertex
    Dfs,
    /// Breadth-first traversal of every vertex
    Bfs,
    /// Prim's minimum spanning tree
    Prim {
        /// Label of the vertex to grow the tree from
        #[arg(long, default_value = "a")]
        start: char,
    },
    /// Kruskal's minimum spanning forest
    Kruskal,
    /// Dijkstra shortest path between two vertices
    Dijkstra {
        /// Label of the start vertex
        #[arg(long)]
        from: char,
        /// Label of the end vertex
        #[arg(long)]
        to: char,
    },
    /// List the edges of the graph
    Edges {
        /// Sort by ascending weight
        #[arg(long)]
        sorted: bool,
    },
    /// Show per-vertex degrees
    Vertices,
}

impl Commands {
    /// Sample used when `--sample` is not given.
    fn default_sample(&self) -> Sample {
        match self {
            Commands::Prim { .. } | Commands::Kruskal => Sample::Undirected,
            _ => Sample::Directed,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let sample = match cli.sample.as_deref() {
        None => cli.command.default_sample(),
        Some(name) => match Sample::from_name(name) {
            Some(sample) => sample,
            None => {
                eprintln!("Invalid sample: {}", name);
                process::exit(3);
            }
        },
    };

    let result = sample.load().and_then(|graph| match cli.command {
        Commands::Show => commands::cmd_show(&graph, json),
        Commands::Dfs => commands::cmd_dfs(&graph, json),
        Commands::Bfs => commands::cmd_bfs(&graph, json),
        Commands::Prim { start } => commands::cmd_prim(&graph, start, json),
        Commands::Kruskal => commands::cmd_kruskal(&graph, json),
        Commands::Dijkstra { from, to } => commands::cmd_dijkstra(&graph, from, to, json),
        Commands::Edges { sorted } => commands::cmd_edges(&graph, sorted, json),
        Commands::Vertices => commands::cmd_vertices(&graph, json),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::LabelNotFound(_) => 3,
            GraphError::NoPathFound { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
