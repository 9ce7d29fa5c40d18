// Entrypoint for the CLI application. Settings are resolved once here and
// passed explicitly into each command; any error bubbles back up, is printed
// as a single line on stderr, and the process exits non-zero.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use do_cli::commands::{account, config, droplets};
use do_cli::Settings;

#[derive(Parser)]
#[command(name = "do-cli", version, about = "Command line client for the DigitalOcean API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account information
    #[command(subcommand)]
    Account(account::AccountCommand),
    /// Droplet management
    #[command(subcommand)]
    Droplets(droplets::DropletsCommand),
    /// Local configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().context("failed to load settings")?;

    match cli.command {
        Commands::Account(cmd) => account::run(cmd, &settings),
        Commands::Droplets(cmd) => droplets::run(cmd, &settings),
        Commands::Config(cmd) => config::run(cmd, settings),
    }
}
