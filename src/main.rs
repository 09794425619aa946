use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use word_finder::input;
use word_finder::search::config::DEFAULT_MAX_RESULTS;
use word_finder::search::outputs::{FindErrorOutput, FindOutput};
use word_finder::{GridIndex, SearchOptions, WordSearchEngine};

/// Find the most frequent words running along the rows and columns of a character grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one grid row per line
    #[arg(long, env = "WORD_FINDER_GRID", required_unless_present = "schema")]
    grid: Option<PathBuf>,

    /// File with whitespace-separated query words
    #[arg(long, env = "WORD_FINDER_WORDS")]
    words: Option<PathBuf>,

    /// Query words, searched after any read from --words (stdin is read when neither is given)
    #[arg(value_name = "WORD")]
    inline_words: Vec<String>,

    /// Maximum number of words to report
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_RESULTS as u64,
        value_parser = clap::value_parser!(u64).range(1..=DEFAULT_MAX_RESULTS as u64)
    )]
    limit: u64,

    /// Print each word with its occurrence count
    #[arg(long)]
    counts: bool,

    /// Print results as JSON
    #[arg(long, conflicts_with = "counts")]
    json: bool,

    /// Print the JSON schema of the --json output and exit
    #[arg(long)]
    schema: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries results
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    if args.schema {
        let schema = schemars::schema_for!(FindOutput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    match run(&args) {
        Ok(output) => {
            print_output(&args, &output);
            Ok(())
        }
        Err(e) if args.json => {
            tracing::error!("{:#}", e);
            println!("{}", FindErrorOutput::new(format!("{e:#}")).to_json());
            process::exit(1);
        }
        Err(e) => Err(e),
    }
}

fn run(args: &Args) -> Result<FindOutput> {
    let grid_path = args.grid.as_deref().context("A grid file is required")?;
    let rows = input::read_grid_rows(grid_path)?;
    let grid = GridIndex::new(&rows)
        .with_context(|| format!("Invalid grid in {}", grid_path.display()))?;
    tracing::info!(
        "Loaded {}x{} grid from {}",
        grid.rows(),
        grid.columns(),
        grid_path.display()
    );

    let words = collect_words(args)?;
    let engine = WordSearchEngine::with_options(
        grid,
        SearchOptions {
            max_results: args.limit as usize,
        },
    );

    let results = engine.rank(&words).context("Search failed")?;
    tracing::info!(
        "Ranked {} words from {} queries",
        results.len(),
        words.len()
    );

    Ok(FindOutput::new(
        results,
        engine.grid().rows(),
        engine.grid().columns(),
    ))
}

fn collect_words(args: &Args) -> Result<Vec<String>> {
    let mut words = match &args.words {
        Some(path) => input::read_query_words(path)?,
        None => Vec::new(),
    };
    words.extend(args.inline_words.iter().cloned());

    if args.words.is_none() && args.inline_words.is_empty() {
        tracing::debug!("No query words given, reading stdin");
        words = input::read_query_words_from(io::stdin().lock())?;
    }

    Ok(words)
}

fn print_output(args: &Args, output: &FindOutput) {
    if args.json {
        println!("{}", output.to_json());
        return;
    }

    for result in &output.results {
        if args.counts {
            println!("{}\t{}", result.word, result.occurrences);
        } else {
            println!("{}", result.word);
        }
    }
}
