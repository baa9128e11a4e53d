use clap::{Args, Parser, Subcommand};
use huckel::core::models::topology::Bond;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "General Hückel Solver - molecular-orbital energies of conjugated polyenes in α/β notation.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Molecule to solve. Starts the interactive menu when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Options that override the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of decimals shown for each orbital energy.
    #[arg(long, global = true, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Decimals eigenvalues are rounded to before degenerate levels are merged.
    #[arg(long, global = true, value_name = "DIGITS")]
    pub rounding_decimals: Option<u32>,

    /// TOML file with additional named presets.
    #[arg(long, global = true, value_name = "PATH")]
    pub presets_file: Option<PathBuf>,

    /// Print the connectivity structure before the orbital energies.
    #[arg(long, global = true)]
    pub show_connectivity: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.precision=5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Orbital energies for a linear polyene with N carbons.
    Linear {
        /// Number of carbon atoms (at least 2).
        #[arg(value_name = "N")]
        atoms: usize,
    },
    /// Orbital energies for a cyclic polyene with N carbons.
    Cyclic {
        /// Number of carbon atoms (at least 3).
        #[arg(value_name = "N")]
        atoms: usize,
    },
    /// Orbital energies for a named preset molecule.
    Preset {
        /// Preset name, e.g. 'benzene'.
        name: String,
    },
    /// Orbital energies for a molecule with user-specified bonds.
    Custom {
        /// A bond between two atoms, e.g. '1-2'. Repeat for each bond.
        #[arg(short, long = "bond", value_name = "A-B", required = true)]
        bonds: Vec<Bond>,
    },
    /// Display the list of available preset molecules.
    Presets,
    /// Start the interactive menu.
    Interactive,
}
