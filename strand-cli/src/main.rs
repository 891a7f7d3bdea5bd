//! strand CLI
//!
//! Command-line front end for the sequence store and the sorting algorithms.
//!
//! # Commands
//!
//! - `sort` - Sort integers with one or every algorithm
//! - `list` - Build a sequence store and run its queries

use clap::{Parser, Subcommand};
use strand_collections::SequenceStore;
use strand_sort::{SortAlgorithm, is_sorted};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Sequence store and sorting playground.
#[derive(Parser)]
#[command(name = "strand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort integers and print the result
    Sort {
        /// Algorithm to use (bubble, insertion, quick-partitioned, quick-lomuto, quick-iterative)
        #[arg(short, long, default_value = "quick-lomuto", conflicts_with = "all")]
        algorithm: SortAlgorithm,

        /// Run every algorithm and print one line each
        #[arg(long)]
        all: bool,

        /// Values to sort
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Append values to a sequence store and query it
    List {
        /// Value to look up with find, find_all, contains and count
        #[arg(short, long, allow_negative_numbers = true)]
        search: Option<i64>,

        /// Position to read with get
        #[arg(short, long)]
        index: Option<usize>,

        /// Values to append, in order
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Sort {
            algorithm,
            all,
            values,
        } => {
            let algorithms: &[SortAlgorithm] = if all {
                &SortAlgorithm::ALL
            } else {
                std::slice::from_ref(&algorithm)
            };
            run_sort(algorithms, &values)?;
        }
        Commands::List {
            search,
            index,
            values,
        } => run_list(values, search, index)?,
    }

    Ok(())
}

fn run_sort(algorithms: &[SortAlgorithm], values: &[i64]) -> Result<(), Box<dyn std::error::Error>> {
    info!(count = values.len(), "sorting input");
    println!("input:  {values:?}");

    for &algorithm in algorithms {
        let mut data = values.to_vec();
        algorithm.sort(&mut data);

        if !is_sorted(&data) {
            return Err(format!("{algorithm} produced unsorted output").into());
        }
        debug!(%algorithm, stable = algorithm.is_stable(), "sorted");
        println!("{:<18} {data:?}", format!("{algorithm}:"));
    }

    Ok(())
}

fn run_list(
    values: Vec<i64>,
    search: Option<i64>,
    index: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SequenceStore::with_capacity(values.len());
    store.extend(values);
    info!(len = store.len(), "built sequence store");

    println!("contents: {store}");
    println!("length:   {}", store.len());
    println!("empty:    {}", store.is_empty());

    if let Some(value) = search {
        match store.find(&value) {
            Some(position) => println!("find({value}):     {position}"),
            None => println!("find({value}):     not found"),
        }
        println!("find_all({value}): {:?}", store.find_all(&value));
        println!("contains({value}): {}", store.contains(&value));
        println!("count({value}):    {}", store.count(&value));
    }

    if let Some(index) = index {
        let value = store.get(index)?;
        println!("get({index}): {value}");
    }

    let iterated: Vec<String> = store.iter().map(ToString::to_string).collect();
    println!("iterate:  {}", iterated.join(" "));

    store.reverse();
    println!("reversed: {store}");

    Ok(())
}
