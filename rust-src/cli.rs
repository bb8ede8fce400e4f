//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands;
use crate::config::{BIND_ENV_VAR, DATA_ENV_VAR, DEFAULT_BIND_ADDR, DEFAULT_DATA_FILE};


/// Salary Dash - dark-themed analytics dashboard for salary-at-30 records
#[derive(Parser)]
#[command(name = "salary-dash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Salary CSV file
    #[arg(long, global = true, env = DATA_ENV_VAR, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Server bind address, checked when the server starts
    #[arg(long, global = true, env = BIND_ENV_VAR, default_value = DEFAULT_BIND_ADDR)]
    bind: String,

    /// Enable development mode (debug logging)
    #[arg(long, global = true)]
    dev: bool,

    /// Fail when a record does not have exactly one category flag per family
    #[arg(long, global = true)]
    strict: bool,
}


#[derive(Subcommand)]
enum Commands {
    /// Serve the interactive dashboard (default)
    Serve,

    /// Show salary statistics and per-category breakdowns
    Stats,

    /// Export a chart as PNG or SVG
    Export {
        /// Chart id, e.g. correlation-heatmap or education-salary-box
        chart: String,

        /// Export as SVG instead of PNG
        #[arg(long)]
        svg: bool,

        /// Open file after export
        #[arg(long)]
        open: bool,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}


/// Install the tracing subscriber. `RUST_LOG` wins over `--dev`.
fn init_logging(dev: bool) {
    let default_level = if dev { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.dev);

    match cli.command {
        Some(Commands::Serve) | None => commands::serve::run(&cli.data, &cli.bind, cli.strict),
        Some(Commands::Stats) => commands::stats::run(&cli.data, cli.strict),
        Some(Commands::Export { chart, svg, open, output }) => {
            commands::export::run(&chart, &cli.data, cli.strict, svg, open, output)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["salary-dash"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.bind, DEFAULT_BIND_ADDR);
        assert!(!cli.dev);
        assert!(!cli.strict);
    }

    #[test]
    fn test_export_args() {
        let cli = Cli::try_parse_from([
            "salary-dash",
            "export",
            "correlation-heatmap",
            "--svg",
            "-o",
            "out.svg",
            "--data",
            "records.csv",
        ])
        .unwrap();
        assert_eq!(cli.data, PathBuf::from("records.csv"));
        match cli.command {
            Some(Commands::Export { chart, svg, open, output }) => {
                assert_eq!(chart, "correlation-heatmap");
                assert!(svg);
                assert!(!open);
                assert_eq!(output, Some(PathBuf::from("out.svg")));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_bad_bind_does_not_block_other_commands() {
        let cli = Cli::try_parse_from(["salary-dash", "stats", "--bind", "localhost"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Stats)));
        assert_eq!(cli.bind, "localhost");
    }
}
