//! SDL Generation CLI
//!
//! Reads a graph JSON document (a flat array of class and property nodes)
//! and prints the GraphQL SDL for one class and everything it transitively
//! references.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use graph_sdl::{generate, parse_graph, GenerateOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sdl-generate")]
#[command(about = "Generate GraphQL SDL from a class/property graph")]
struct Cli {
    /// Path to the graph JSON file, or "-" for stdin
    graph: PathBuf,

    /// Uid of the class to root the schema at
    #[arg(short, long)]
    class: String,

    /// Write SDL to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let json = if cli.graph.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read graph from stdin")?;
        buf
    } else {
        fs::read_to_string(&cli.graph)
            .with_context(|| format!("failed to read graph from {:?}", cli.graph))?
    };

    let graph = parse_graph(&json).context("failed to parse graph JSON")?;
    let sdl = generate(&graph, &cli.class, &GenerateOptions::default())?;

    match cli.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", sdl))
                .with_context(|| format!("failed to write {:?}", path))?;
            println!("✅ Wrote schema for {} to {:?}", cli.class, path);
        }
        None => println!("{}", sdl),
    }

    Ok(())
}
