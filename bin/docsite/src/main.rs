//! docsite CLI
//!
//! Static documentation site generator: sidebar navigation trees and landing
//! page cards rendered from TOML site data.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for docsite.
#[derive(Parser)]
#[command(
    name = "docsite",
    version,
    about = "A static documentation site generator"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "docsite.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Build the static site
    Build {
        /// Output directory
        #[arg(short, long, default_value = "build")]
        output: PathBuf,
        /// Override the path the site is served under (e.g., /handbook/)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Validate configuration and cross references
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Print sidebar navigation trees
    Tree {
        /// Sidebar to print (all sidebars when omitted)
        sidebar: Option<String>,
        /// Expand every category regardless of its collapsed flag
        #[arg(long)]
        expand_all: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    docsite::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { output, base_url } => {
            docsite::cmd::build::run(&cli.config, &output, base_url.as_deref())?;
        }
        Commands::Check { strict } => {
            docsite::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Tree {
            sidebar,
            expand_all,
        } => {
            docsite::cmd::tree::run(&cli.config, sidebar.as_deref(), expand_all)?;
        }
    }

    Ok(())
}
