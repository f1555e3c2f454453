use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod config;
mod data;
mod graph;
mod motif;
mod stats;
mod storage;

#[derive(Parser, Debug)]
#[clap(
    name = "transaction-motif-analyzer",
    about = "Motif census and cross-day statistics for transaction networks"
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, global = true, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the motif census over a day's edge list and save per-role counts
    Census {
        /// Path to the input edge list (Parquet or CSV)
        #[clap(long)]
        input: String,

        /// Output directory for results
        #[clap(long, default_value = "motif_results")]
        output_dir: String,

        /// UNIX timestamp of the day, used in output file names
        #[clap(long)]
        day: i64,

        /// Column holding the sending address
        #[clap(long, default_value = "from_address")]
        source_column: String,

        /// Column holding the receiving address
        #[clap(long, default_value = "to_address")]
        target_column: String,
    },

    /// Compute the expansion/decay measure over daily address snapshots
    ExpansionDecay {
        /// Directory containing the daily snapshot files
        #[clap(long, default_value = ".")]
        data_dir: PathBuf,

        /// Output directory for the report
        #[clap(long, default_value = ".")]
        output_dir: PathBuf,

        /// Window length in days (the i in the measure definition)
        #[clap(long)]
        interval: usize,

        /// UNIX timestamp of the first day
        #[clap(long)]
        start: i64,

        /// UNIX timestamp of the last day (inclusive)
        #[clap(long)]
        end: i64,

        /// File name prefix of the daily snapshots
        #[clap(long, default_value = "innerCore_025_")]
        file_prefix: String,

        /// Name of the address column in each snapshot
        #[clap(long, default_value = "node")]
        column: String,
    },

    /// Compute NF-IAF scores over daily motif-count files
    Nfiaf {
        /// Directory containing the daily motif-count files
        #[clap(long, default_value = ".")]
        data_dir: PathBuf,

        /// Output directory for the reports
        #[clap(long, default_value = ".")]
        output_dir: PathBuf,

        /// UNIX timestamp of the first day
        #[clap(long)]
        start: i64,

        /// UNIX timestamp of the last day (inclusive)
        #[clap(long)]
        end: i64,

        /// Motif types to score (file name suffixes)
        #[clap(
            long,
            value_delimiter = ',',
            default_value = "motif1,motif4,motif5buy,motif5sell,motif6,motif11"
        )]
        motifs: Vec<String>,

        /// File name prefix of the daily count files
        #[clap(long, default_value = "")]
        file_prefix: String,

        /// Name of the address column in each count file
        #[clap(long, default_value = "address")]
        address_column: String,

        /// Name of the occurrence-count column in each count file
        #[clap(long, default_value = "occurrences")]
        occurrences_column: String,
    },
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    match args.command {
        Commands::Census {
            input,
            output_dir,
            day,
            source_column,
            target_column,
        } => {
            log::info!("Starting motif census for day {}", day);
            log::info!("Input: {}", input);
            log::info!("Output: {}", output_dir);

            let graph = data::edges::load_edge_list(&input, &source_column, &target_column)?;
            let census = motif::run_census(&graph);
            storage::save_census(&census, &graph, day, &output_dir)?;

            log::info!("Census complete. Results saved to {}", output_dir);
        }

        Commands::ExpansionDecay {
            data_dir,
            output_dir,
            interval,
            start,
            end,
            file_prefix,
            column,
        } => {
            log::info!(
                "Computing expansion/decay for days {}..={} (interval {})",
                start,
                end,
                interval
            );
            stats::expansion::run(
                &data_dir,
                &output_dir,
                interval,
                start,
                end,
                &file_prefix,
                &column,
            )?;
        }

        Commands::Nfiaf {
            data_dir,
            output_dir,
            start,
            end,
            motifs,
            file_prefix,
            address_column,
            occurrences_column,
        } => {
            log::info!(
                "Computing NF-IAF for days {}..={} over {} motif types",
                start,
                end,
                motifs.len()
            );
            stats::nfiaf::run(
                &data_dir,
                &output_dir,
                start,
                end,
                &motifs,
                &file_prefix,
                &address_column,
                &occurrences_column,
            )?;
        }
    }

    Ok(())
}
