use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cephalo_nn::{LogSink, Network, NetworkSpec};

/// Trains a one-hidden-layer perceptron over fixed-width windows of a
/// numeric sequence, then runs it.
#[derive(Parser, Debug)]
#[command(name = "cephalo-nn", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Train on a sequence, then print one result per window
    Train(TrainArgs),
    /// Write the default network spec as JSON
    InitConfig {
        /// Destination file
        path: String,
    },
}

#[derive(Args, Debug)]
struct TrainArgs {
    /// File of numbers separated by commas, whitespace or newlines
    #[arg(long)]
    input: String,

    /// Expected output shared by every window
    #[arg(long)]
    target: f64,

    /// Network spec (JSON); defaults apply when omitted
    #[arg(long)]
    config: Option<String>,

    /// Seed for weight initialisation
    #[arg(long)]
    seed: Option<u64>,

    /// Per-window iteration cap
    #[arg(long, conflicts_with = "unbounded")]
    max_iterations: Option<usize>,

    /// Loop until every window converges, however long that takes
    #[arg(long)]
    unbounded: bool,

    /// Sequence to run after training instead of the training input
    #[arg(long)]
    eval: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    match Cli::parse().command {
        Commands::Train(args) => train(args),
        Commands::InitConfig { path } => {
            NetworkSpec::default().save_json(&path)?;
            println!("Wrote default spec to {path}");
            Ok(())
        }
    }
}

const DEFAULT_LOG_FILTER: &str = "cephalo_nn=info";

/// `RUST_LOG` when it is set and parses, otherwise info for this crate.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn train(args: TrainArgs) -> Result<()> {
    let mut spec = match &args.config {
        Some(path) => NetworkSpec::load_json(path)
            .with_context(|| format!("loading spec '{path}'"))?,
        None => NetworkSpec::default(),
    };
    if args.seed.is_some() {
        spec.seed = args.seed;
    }
    if args.unbounded {
        spec.training.max_iterations = None;
    } else if args.max_iterations.is_some() {
        spec.training.max_iterations = args.max_iterations;
    }

    let input = read_sequence(&args.input)?;
    tracing::info!("Loaded {} values from '{}'", input.len(), args.input);

    let mut network = Network::from_spec(input, spec)?;
    let stats = network.train(&[args.target], &mut LogSink)?;
    for s in &stats {
        println!(
            "window {} converged after {} iterations: output {:.6}, error {:.3e}",
            s.window, s.iterations, s.output, s.error
        );
    }

    if let Some(path) = &args.eval {
        network.set_input(read_sequence(path)?)?;
    }
    for (i, output) in network.run(&mut LogSink).iter().enumerate() {
        println!("Result {i} : {output}");
    }

    Ok(())
}

fn read_sequence(path: &str) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading '{path}'"))?;

    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|cell| !cell.is_empty())
        .enumerate()
        .map(|(i, cell)| {
            cell.parse::<f64>()
                .with_context(|| format!("value {} in '{path}' is not a number: {cell:?}", i + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        bail!("'{path}' contains no numbers");
    }
    Ok(values)
}
