//! Word Ladder Solver - CLI
//!
//! Shortest word ladders over a dictionary file, plus edit-distance and
//! Dijkstra utilities.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{
        BenchmarkConfig, DEFAULT_CASES, LadderConfig, analyze_distance, run_benchmark, run_paths,
        run_verify, sample_pairs, solve_ladder,
    },
    core::Dictionary,
    graph::load_graph,
    output::{
        print_benchmark_result, print_distance_result, print_ladder_result, print_paths_result,
        print_verify_result,
    },
    solver::{LadderSolver, StrategyType},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladders by single-letter edits",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line
    #[arg(short, long, global = true, default_value = "words.txt")]
    dictionary: String,

    /// Neighbor strategy: auto (default), scan, mutation
    #[arg(short, long, global = true, default_value = "auto")]
    strategy: String,

    /// Stop each search after expanding this many ladders
    #[arg(long, global = true)]
    max_expansions: Option<usize>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest ladder between two words
    Ladder {
        /// Start word
        start: String,

        /// End word
        end: String,

        /// Show search statistics
        #[arg(long)]
        stats: bool,
    },

    /// Show the edit distance between two words
    Distance {
        first: String,

        second: String,

        /// Bound for the within-distance check
        #[arg(short, long, default_value = "1")]
        max: usize,
    },

    /// Run the reference ladder cases against the dictionary
    Verify,

    /// Solve random word pairs in parallel
    Benchmark {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for pair sampling
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Print Dijkstra shortest paths for a weighted graph file
    Paths {
        /// Graph file: vertex count, then `src dst weight` triples
        graph: String,

        /// Source vertex
        #[arg(long, default_value = "0")]
        source: usize,
    },
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match &cli.command {
        Commands::Ladder { start, end, stats } => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            run_ladder_command(&cli, &dictionary, start, end, *stats);
            Ok(())
        }
        Commands::Distance { first, second, max } => {
            print_distance_result(&analyze_distance(first, second, *max));
            Ok(())
        }
        Commands::Verify => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            run_verify_command(&cli, &dictionary)
        }
        Commands::Benchmark { count, seed } => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            run_benchmark_command(&cli, &dictionary, &BenchmarkConfig::new(*count, *seed));
            Ok(())
        }
        Commands::Paths { graph, source } => run_paths_command(graph, *source),
    }
}

fn load_dictionary(path: &str) -> Result<Dictionary> {
    let dictionary =
        load_from_file(path).with_context(|| format!("failed to load dictionary '{path}'"))?;
    if dictionary.is_empty() {
        bail!("dictionary '{path}' contains no words");
    }
    Ok(dictionary)
}

fn build_solver<'a>(cli: &Cli, dictionary: &'a Dictionary) -> LadderSolver<'a, StrategyType> {
    let strategy = StrategyType::from_name(&cli.strategy, dictionary);
    info!(strategy = strategy.name(), words = dictionary.len(), "solver ready");

    LadderSolver::new(strategy, dictionary).with_expansion_limit(cli.max_expansions)
}

fn run_ladder_command(cli: &Cli, dictionary: &Dictionary, start: &str, end: &str, stats: bool) {
    let solver = build_solver(cli, dictionary);
    let config = LadderConfig::new(start.to_string(), end.to_string());

    let report = solve_ladder(config, &solver);
    print_ladder_result(&report, stats);
}

fn run_verify_command(cli: &Cli, dictionary: &Dictionary) -> Result<()> {
    let solver = build_solver(cli, dictionary);
    let report = run_verify(&solver, DEFAULT_CASES);
    print_verify_result(&report);

    if !report.all_passed() {
        bail!("{} of {} cases failed", report.failed(), report.results.len());
    }
    Ok(())
}

fn run_benchmark_command(cli: &Cli, dictionary: &Dictionary, config: &BenchmarkConfig) {
    println!(
        "Running benchmark on {} random pairs (seed {})...",
        config.count, config.seed
    );

    let solver = build_solver(cli, dictionary);
    let pairs = sample_pairs(dictionary, config.count, config.seed);

    let result = run_benchmark(&solver, &pairs);
    print_benchmark_result(&result);
}

fn run_paths_command(path: &str, source: usize) -> Result<()> {
    let graph = load_graph(path).with_context(|| format!("failed to load graph '{path}'"))?;
    info!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "graph loaded"
    );

    let report = run_paths(&graph, source)?;
    print_paths_result(&report);
    Ok(())
}
