mod cmd;
mod fixture_path;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use traverse_core::traversal::Block;

#[derive(Parser)]
#[command(
    name = "traverse",
    about = "Demonstrate three traversal idioms over a sequence and a record",
    version,
    propagate_version = true
)]
struct Cli {
    /// Fixture file (default: walk up for traverse.yaml, else builtin demo data)
    #[arg(long, global = true, env = "TRAVERSE_FIXTURE")]
    fixture: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the traversal blocks in order (the default when no subcommand is given)
    Run {
        /// Block to run: elements, entries, or enumerate (omit for all three)
        block: Option<Block>,
    },

    /// Show the active fixture and where it came from
    Fixture,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let source = fixture_path::resolve_fixture(cli.fixture.as_deref());

    let result = match cli.command {
        None => cmd::run::run(&source, None, cli.json),
        Some(Commands::Run { block }) => cmd::run::run(&source, block, cli.json),
        Some(Commands::Fixture) => cmd::fixture::run(&source, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
