//! pacer CLI - Copy files with completion-time estimates.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

mod commands;
mod display;
mod logging;

use display::Output;

#[derive(Parser)]
#[command(name = "pacer")]
#[command(about = "Copy files with completion-time estimates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy a file while reporting progress and remaining time
    Copy {
        /// File to read from
        source: PathBuf,

        /// File to write to (created or truncated)
        destination: PathBuf,

        /// Milliseconds between progress samples
        #[arg(long, default_value = "1000")]
        interval_ms: u64,

        /// Print one JSON progress report per sample instead of a bar
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Copy {
            source,
            destination,
            interval_ms,
            json,
        } => {
            let output = Output::select(json, cli.quiet);
            let copied = commands::copy::copy(
                &source,
                &destination,
                Duration::from_millis(interval_ms),
                output,
            )
            .await?;

            if output == Output::Bar {
                println!("Copied {copied} bytes to {}", destination.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_copy_args() {
        let cli = Cli::try_parse_from(["pacer", "-vv", "copy", "a.bin", "b.bin", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);

        let Some(Commands::Copy {
            source,
            destination,
            interval_ms,
            json,
        }) = cli.command
        else {
            panic!("expected copy command");
        };
        assert_eq!(source, PathBuf::from("a.bin"));
        assert_eq!(destination, PathBuf::from("b.bin"));
        assert_eq!(interval_ms, 1000);
        assert!(json);
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
