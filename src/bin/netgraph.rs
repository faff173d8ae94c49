//! CLI entry point for the `netgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use netgraph::cli::commands;
use netgraph::format::EdgeLineStyle;
use netgraph::graph::StorageKind;
use netgraph::types::VertexId;

#[derive(Parser)]
#[command(
    name = "netgraph",
    about = "netgraph CLI — directed graphs with Pajek NET I/O"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report vertex/edge counts, emptiness and completeness of a NET file
    Info {
        /// Path to the NET file
        file: PathBuf,
        /// Backing representation: "list" or "matrix"
        #[arg(long, default_value = "list")]
        backing: String,
    },
    /// List the one-hop out-neighbors of a vertex
    Neighbors {
        /// Path to the NET file
        file: PathBuf,
        /// Vertex id (1-based)
        id: VertexId,
        /// Backing representation: "list" or "matrix"
        #[arg(long, default_value = "list")]
        backing: String,
    },
    /// Import a NET file and export it again
    Rewrite {
        /// Path to the NET file to read
        input: PathBuf,
        /// Path to the NET file to write
        output: PathBuf,
        /// Backing representation: "list" or "matrix"
        #[arg(long, default_value = "list")]
        backing: String,
        /// Edge line style: "endpoints" or "annotated" (defaults to the
        /// backing's own)
        #[arg(long)]
        style: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let json = cli.format == "json";

    let result = match &cli.command {
        Commands::Info { file, backing } => {
            commands::cmd_info(file, parse_backing(backing), json)
        }
        Commands::Neighbors { file, id, backing } => {
            commands::cmd_neighbors(file, parse_backing(backing), *id, json)
        }
        Commands::Rewrite {
            input,
            output,
            backing,
            style,
        } => commands::cmd_rewrite(
            input,
            output,
            parse_backing(backing),
            style.as_deref().map(parse_style),
            json,
        ),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn parse_backing(name: &str) -> StorageKind {
    match StorageKind::from_name(name) {
        Some(kind) => kind,
        None => {
            eprintln!("Unknown backing {:?}; expected \"list\" or \"matrix\"", name);
            process::exit(2);
        }
    }
}

fn parse_style(name: &str) -> EdgeLineStyle {
    match EdgeLineStyle::from_name(name) {
        Some(style) => style,
        None => {
            eprintln!(
                "Unknown style {:?}; expected \"endpoints\" or \"annotated\"",
                name
            );
            process::exit(2);
        }
    }
}
