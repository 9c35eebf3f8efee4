use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use callscope::core::{load_analysis, LookupTables};
use callscope::formatters::{ConsoleFormatter, CypherFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "callscope",
    version = "0.1.0",
    author = "callscope developers",
    about = "Print call chains from an analysis result and optionally export them to Neo4j Cypher"
)]
struct Cli {
    /// Analysis result JSON file
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Also write a Neo4j Cypher import script to FILE
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    cypher: Option<Option<PathBuf>>,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(input) = cli.input.clone() else {
        println!("{}", Cli::command().render_usage());
        std::process::exit(1);
    };

    run(input, cli.cypher.flatten())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(input: PathBuf, cypher_output: Option<PathBuf>) -> Result<()> {
    println!("Loading: {}", input.display());
    let document = load_analysis(&input)?;
    let tables = LookupTables::build(&document);

    print!("{}", ConsoleFormatter::new().format_report(&document, &tables));

    if let Some(output) = cypher_output {
        CypherFormatter::new().format_to_file(&document, &output)?;
        println!("Neo4j Cypher script exported to: {}", output.display());
    }

    Ok(())
}
