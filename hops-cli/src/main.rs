//! hops CLI - shortest routes over a weighted edge list
//!
//! Loads an undirected edge list (`a b weight` per line) and answers
//! cheapest-path queries against it.

use clap::{Parser, Subcommand};
use hops_core::NameCase;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::GraphSource;
use config::HopsConfig;
use output::{print_error, OutputFormat};

/// Shortest routes over a weighted, undirected edge list.
#[derive(Parser)]
#[command(name = "hops")]
#[command(author, version)]
#[command(about = "Shortest routes over a weighted, undirected edge list")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  hops                  Run the configured routes (default: YYC to YYZ, YUL, YVR)
  hops path YYC YUL     Cheapest route from YYC to YUL
  hops reach YYC        Distance from YYC to every node
  hops -f edges.txt nodes")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Edge-list file (overrides config, default: test.txt)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Name normalization: upper or preserve (overrides config)
    #[arg(long, global = true, value_parser = parse_case)]
    case: Option<NameCase>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the cheapest route between two nodes
    Path {
        /// Start node
        from: String,
        /// Destination node
        to: String,
    },

    /// Run every configured route
    Routes,

    /// Show the distance from one node to every other node
    Reach {
        /// Start node
        from: String,
    },

    /// Print the adjacency matrix
    Matrix,

    /// Print the node table (name and index)
    Nodes,
}

fn parse_case(s: &str) -> Result<NameCase, String> {
    s.parse()
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() {
    if let Err(e) = run() {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .hopsrc.toml
    let config = HopsConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Plain
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    });

    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let source = GraphSource {
        file: cli.file.unwrap_or_else(|| config.graph_file()),
        case: cli.case.unwrap_or_else(|| config.name_case()),
    };
    tracing::debug!(?source, ?format, "Resolved settings");

    match cli.command.unwrap_or(Commands::Routes) {
        Commands::Path { from, to } => commands::path::run(&source, &from, &to, format),
        Commands::Routes => commands::routes::run(&source, &config.routes(), format),
        Commands::Reach { from } => commands::reach::run(&source, &from, format),
        Commands::Matrix => commands::inspect::run_matrix(&source, format),
        Commands::Nodes => commands::inspect::run_nodes(&source, format),
    }
}
