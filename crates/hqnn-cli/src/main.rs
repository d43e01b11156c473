//! HQNN Command-Line Interface
//!
//! Builds the quantum half of the hybrid heart-disease classifier and
//! inspects the classical dataset it is trained on.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{build, data, symbols, version};

/// HQNN - layered quantum neural network circuits for binary classification
#[derive(Parser)]
#[command(name = "hqnn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the model circuit and print or export it
    Build {
        /// Number of layers (overrides config and HQNN_NUM_LAYERS)
        #[arg(short, long)]
        layers: Option<usize>,

        /// YAML model configuration
        #[arg(short, long)]
        config: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the trainable parameter symbols
    Symbols {
        /// Number of layers (overrides config and HQNN_NUM_LAYERS)
        #[arg(short, long)]
        layers: Option<usize>,

        /// YAML model configuration
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Load, scale and split a CSV dataset
    Data {
        /// Input CSV file
        #[arg(short, long)]
        input: String,

        /// Label column
        #[arg(short, long, default_value = "output")]
        target: String,

        /// Fraction of rows held out for testing
        #[arg(long, default_value = "0.25")]
        test_size: f64,

        /// Shuffle seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Number of rows to preview (0 to skip)
        #[arg(long, default_value = "5")]
        head: usize,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Build {
            layers,
            config,
            format,
            output,
        } => build::execute(layers, config.as_deref(), &format, output.as_deref()),

        Commands::Symbols { layers, config } => symbols::execute(layers, config.as_deref()),

        Commands::Data {
            input,
            target,
            test_size,
            seed,
            head,
        } => data::execute(&input, &target, test_size, seed, head),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_defaults() {
        let cli = Cli::try_parse_from(["hqnn", "build"]).unwrap();
        match cli.command {
            Commands::Build {
                layers,
                config,
                format,
                output,
            } => {
                assert_eq!(layers, None);
                assert_eq!(config, None);
                assert_eq!(format, "text");
                assert_eq!(output, None);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_parse_data_with_options() {
        let cli = Cli::try_parse_from([
            "hqnn",
            "-vv",
            "data",
            "-i",
            "heart.csv",
            "--test-size",
            "0.3",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Data {
                input,
                target,
                test_size,
                seed,
                head,
            } => {
                assert_eq!(input, "heart.csv");
                assert_eq!(target, "output");
                assert_eq!(test_size, 0.3);
                assert_eq!(seed, 7);
                assert_eq!(head, 5);
            }
            _ => panic!("expected data"),
        }
    }

    #[test]
    fn test_parse_data_requires_input() {
        assert!(Cli::try_parse_from(["hqnn", "data"]).is_err());
    }
}
