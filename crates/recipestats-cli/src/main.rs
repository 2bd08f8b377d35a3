//! recipe-stats - queries over a JSON collection of recipe deliveries

mod report;
mod runner;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use recipestats::Session;
use tracing::debug;

use crate::report::Report;
use crate::runner::Query;

/// Calculates recipe and delivery statistics over a recipe collection
///
/// Example: recipe-stats -f recipes.json -c -s Cheese,Grilled
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input file (JSON array of recipe deliveries)
    #[arg(short, long, env = "RECIPE_STATS_FILE", default_value = "fixtures/recipes.json")]
    file: PathBuf,

    /// Count the unique recipes
    #[arg(short, long)]
    count: bool,

    /// Comma separated recipe name words to search for
    #[arg(short, long, value_delimiter = ',')]
    search: Vec<String>,

    /// Postcode to count deliveries for
    #[arg(short, long, requires_all = ["from", "to"])]
    postcode: Option<String>,

    /// Window start for the postcode search (e.g. 11AM)
    #[arg(long)]
    from: Option<String>,

    /// Window end for the postcode search (e.g. 2PM)
    #[arg(long)]
    to: Option<String>,

    /// Log load and query timings
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let start = Instant::now();
    let (output, outcome) = run(&args);
    println!("{output}");

    debug!(elapsed_ms = start.elapsed().as_millis(), "total execution");
    outcome
}

/// Load the input and answer the query, returning the JSON to print
///
/// A failed load still yields the empty `{}` envelope alongside the error.
fn run(args: &Args) -> (String, Result<()>) {
    let query = Query {
        count_recipes: args.count,
        postcode: args.postcode.clone(),
        from: args.from.clone(),
        to: args.to.clone(),
        ..Query::default()
    }
    .with_fragments(&args.search);

    let session = Session::new();
    let report = match session.load(&args.file) {
        Ok(indexes) => runner::calculate(&indexes, &query),
        Err(e) => {
            let outcome: Result<()> = Err(e).with_context(|| format!("loading {}", args.file.display()));
            return (empty_envelope(), outcome);
        }
    };

    match report.to_json() {
        Ok(output) => (output, Ok(())),
        Err(e) => (empty_envelope(), Err(e).context("formatting report")),
    }
}

fn empty_envelope() -> String {
    Report::default()
        .to_json()
        .unwrap_or_else(|_| "{}".to_string())
}
