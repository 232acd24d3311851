//! Taxograph CLI
//!
//! Structural queries over a concept-taxonomy release:
//!
//! - `ancestor`: generalized lowest common ancestor of a target set
//! - `layers`: topological generations of a closure or the full graph
//! - `annotate`: layered closure with presentation attributes, as JSON
//!   for an external renderer
//!
//! The relationship file is parsed once per invocation; results go to
//! stdout as JSON, diagnostics to stderr via tracing.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;
mod names;
mod rf2;

use error::CliResult;

/// Taxograph - concept taxonomy ancestor queries
#[derive(Parser)]
#[command(name = "taxograph")]
#[command(version)]
#[command(about = "Structural queries over a hierarchical concept taxonomy")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the deepest concept reaching every target
    Ancestor(commands::ancestor::AncestorArgs),
    /// Print topological generations
    Layers(commands::layers::LayersArgs),
    /// Emit a layered, annotated closure for rendering
    Annotate(commands::annotate::AnnotateArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let result: CliResult<()> = match cli.command {
        Commands::Ancestor(args) => commands::ancestor::run(args),
        Commands::Layers(args) => commands::layers::run(args),
        Commands::Annotate(args) => commands::annotate::run(args),
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "command failed");
        std::process::exit(err.exit_code());
    }
}
