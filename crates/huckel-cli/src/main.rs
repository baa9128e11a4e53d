mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod session;
mod ui;
mod utils;

use crate::cli::{Cli, Commands};
use crate::commands::solve::Target;
use crate::config::AppConfig;
use crate::error::Result;
use clap::Parser;
use huckel::core::presets::registry::PresetRegistry;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!(
        "🚀 Hückel Solver v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = dispatch(cli);

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }
    command_result
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = config::build_config(&cli.settings)?;
    let presets = load_presets(&config)?;
    let mut stdout = std::io::stdout().lock();

    let target = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            info!("Dispatching to interactive session.");
            drop(stdout);
            return commands::interactive::run(&presets, &config);
        }
        Commands::Presets => {
            info!("Dispatching to 'presets' command.");
            return commands::presets::run(&presets, &mut stdout);
        }
        Commands::Linear { atoms } => Target::Linear(atoms),
        Commands::Cyclic { atoms } => Target::Cyclic(atoms),
        Commands::Preset { name } => Target::Preset(name),
        Commands::Custom { bonds } => Target::Custom(bonds),
    };
    info!("Dispatching to solver.");
    commands::solve::run(&target, &presets, &config, &mut stdout)
}

fn load_presets(config: &AppConfig) -> Result<PresetRegistry> {
    match &config.presets_file {
        Some(path) => Ok(PresetRegistry::load(path)?),
        None => Ok(PresetRegistry::builtin()),
    }
}
