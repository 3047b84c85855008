//! chemsig — bootstrap significance of drug-profile similarity between
//! protein targets.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chemsig", version, about = "Drug-profile similarity significance")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bootstrap p-value for the Tanimoto summary of two protein profiles
    Pvalue {
        /// CSV of drugs and their fingerprints
        drugs: PathBuf,
        /// CSV of drugs and their protein targets
        targets: PathBuf,
        /// Accession id of the first protein
        prot_a: String,
        /// Accession id of the second protein
        prot_b: String,
        /// Number of bootstrap trials
        #[arg(short = 'n', long, default_value_t = chemsig_core::bootstrap::DEFAULT_TRIALS)]
        trials: usize,
        /// Pseudo-random seed
        #[arg(short = 'r', long, default_value_t = chemsig_core::bootstrap::DEFAULT_SEED)]
        seed: u64,
        /// Emit the summary and p-value as JSON instead of the bare p-value
        #[arg(long)]
        json: bool,
    },
    /// Score every drug pair and flag pairs sharing a target protein
    Pairs {
        drugs: PathBuf,
        targets: PathBuf,
        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Scan protein pairs and write the significant edge list
    Network {
        drugs: PathBuf,
        targets: PathBuf,
        /// CSV of protein nodes to compare pairwise
        nodes: PathBuf,
        /// Output edge-list path
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short = 'n', long, default_value_t = chemsig_core::bootstrap::DEFAULT_TRIALS)]
        trials: usize,
        #[arg(short = 'r', long, default_value_t = chemsig_core::bootstrap::DEFAULT_SEED)]
        seed: u64,
        /// Keep pairs with p-value at or below this cutoff
        #[arg(long, default_value_t = 0.05)]
        cutoff: f64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chemsig=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Pvalue {
            drugs,
            targets,
            prot_a,
            prot_b,
            trials,
            seed,
            json,
        } => commands::run_pvalue(&drugs, &targets, &prot_a, &prot_b, trials, seed, json),
        Commands::Pairs {
            drugs,
            targets,
            output,
        } => commands::run_pairs(&drugs, &targets, &output),
        Commands::Network {
            drugs,
            targets,
            nodes,
            output,
            trials,
            seed,
            cutoff,
        } => commands::run_network(&drugs, &targets, &nodes, &output, trials, seed, cutoff),
    }
}
