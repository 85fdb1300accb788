use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "drover")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for fetching the chromedriver build matching the installed Chrome",
    long_about = "Drover probes the locally installed Chrome for its version, resolves the \
                  closest chromedriver build from the known-good-versions catalog, and downloads \
                  it ready to run."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the chromedriver build matching the installed Chrome
    Fetch {
        /// Destination directory for the chromedriver executable
        #[arg(short, long, default_value = ".")]
        dest: PathBuf,

        /// Skip probing and resolve against this Chrome version instead
        #[arg(long, value_name = "VERSION")]
        browser_version: Option<String>,

        /// Path to the Chrome Info.plist manifest
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,
    },

    /// Print the chromedriver download URL for a Chrome version
    Resolve {
        /// Chrome version to match against the catalog
        #[arg(value_name = "VERSION")]
        version: String,
    },

    /// Print the Chrome version found in the local manifest
    Version {
        /// Path to the Chrome Info.plist manifest
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Execute the command
    match cli.command {
        Commands::Fetch {
            dest,
            browser_version,
            manifest,
        } => commands::fetch::execute(&dest, browser_version, manifest),
        Commands::Resolve { version } => commands::resolve::execute(&version),
        Commands::Version { manifest } => commands::version::execute(manifest),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("drover=debug,drover_core=debug,drover_browser=debug,drover_fetch=debug")
    } else {
        EnvFilter::new("drover=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
