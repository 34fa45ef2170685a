use anyhow::Result;
use clap::Parser as ClapParser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use preset_loader::cli::{self, Cli, Commands};
use preset_loader::config::LoaderConfig;

fn main() -> Result<()> {
    let cli_args = Cli::parse();
    init_logging(cli_args.verbose);

    let config = LoaderConfig::load()?;
    let manager = cli::build_manager(&config, cli_args.mesh_width, cli_args.mesh_height);

    match cli_args.command {
        Commands::Extensions => {
            cli::extensions(&manager)?;
        }
        Commands::Load { targets } => {
            println!("{}", "Loading presets...".green().bold());
            cli::load(&manager, &targets).ensure_success()?;
        }
        Commands::Scan { path } => {
            let root = path
                .map(PathBuf::from)
                .or_else(|| config.preset_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            cli::scan(&manager, &root)?.ensure_success()?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
