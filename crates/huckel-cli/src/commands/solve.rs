use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::ui;
use huckel::core::connectivity;
use huckel::core::models::connectivity::Connectivity;
use huckel::core::models::topology::{Bond, BondSet};
use huckel::core::presets::registry::PresetRegistry;
use huckel::workflows;
use std::io::Write;
use tracing::{info, warn};

/// A molecule requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Linear(usize),
    Cyclic(usize),
    Preset(String),
    Custom(Vec<Bond>),
}

pub fn resolve(target: &Target, presets: &PresetRegistry) -> Result<Connectivity> {
    match target {
        Target::Linear(n) => Ok(connectivity::linear(*n)?),
        Target::Cyclic(n) => Ok(connectivity::cyclic(*n)?),
        Target::Preset(name) => {
            let key = name.trim().to_lowercase();
            presets
                .get(&key)
                .ok_or_else(|| CliError::UnknownPreset(name.clone()))
        }
        Target::Custom(bonds) => {
            let mut set = BondSet::new();
            for &bond in bonds {
                if set.add(bond).is_err() {
                    warn!("Ignoring repeated bond {}-{}.", bond.atom1(), bond.atom2());
                }
            }
            Ok(connectivity::custom(&set)?)
        }
    }
}

/// Solves a molecule and formats the report, including the connectivity when requested.
pub fn render(connectivity: &Connectivity, config: &AppConfig) -> Result<String> {
    let result = workflows::solve::run(connectivity, &config.solver)?;
    let mut report = String::new();
    if config.output.show_connectivity {
        report.push_str(&ui::connectivity(connectivity));
    }
    report.push_str(&ui::spectrum(&result.spectrum, config.output.precision));
    Ok(report)
}

pub fn run(
    target: &Target,
    presets: &PresetRegistry,
    config: &AppConfig,
    out: &mut impl Write,
) -> Result<()> {
    let connectivity = resolve(target, presets)?;
    info!(
        "Solving {:?}: {} atom(s), {} bond(s).",
        target,
        connectivity.atom_count(),
        connectivity.bond_count()
    );
    out.write_all(render(&connectivity, config)?.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::OutputConfig;
    use huckel::core::models::connectivity::ConnectivityError;
    use huckel::engine::config::SolverConfig;

    fn app_config(show_connectivity: bool) -> AppConfig {
        AppConfig {
            solver: SolverConfig::default(),
            output: OutputConfig {
                precision: 3,
                show_connectivity,
            },
            presets_file: None,
        }
    }

    fn run_to_string(target: Target, config: &AppConfig) -> Result<String> {
        let mut out = Vec::new();
        run(&target, &PresetRegistry::builtin(), config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn linear_target_prints_butadiene_levels() {
        let out = run_to_string(Target::Linear(4), &app_config(false)).unwrap();
        assert!(out.contains("Energy:\tα + 1.618β\tDegeneracy: 1"));
        assert!(out.contains("Energy:\tα − 1.618β\tDegeneracy: 1"));
        assert!(!out.contains("Connectivity:"));
    }

    #[test]
    fn show_connectivity_prefixes_neighbor_lists() {
        let out = run_to_string(Target::Cyclic(3), &app_config(true)).unwrap();
        assert!(out.contains("Connectivity:"));
        assert!(out.contains("   1: [2, 3]"));
    }

    #[test]
    fn preset_lookup_is_case_insensitive() {
        let out = run_to_string(Target::Preset("BENZENE".to_string()), &app_config(false));
        assert!(out.unwrap().contains("Degeneracy: 2"));
    }

    #[test]
    fn unknown_preset_is_reported() {
        let err = run_to_string(Target::Preset("pyridine".to_string()), &app_config(false))
            .unwrap_err();
        assert!(matches!(err, CliError::UnknownPreset(name) if name == "pyridine"));
    }

    #[test]
    fn too_small_sizes_are_validation_errors() {
        let err = run_to_string(Target::Cyclic(2), &app_config(false)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Connectivity(ConnectivityError::TooFewAtoms { min: 3, .. })
        ));
    }

    #[test]
    fn huge_atom_index_is_a_validation_error() {
        let bonds = vec![Bond::new(1, 1_000_000_000_000).unwrap()];
        let err = run_to_string(Target::Custom(bonds), &app_config(false)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Connectivity(ConnectivityError::TooManyAtoms {
                max: 1000,
                actual: 1_000_000_000_000
            })
        ));
        let err = run_to_string(Target::Linear(5000), &app_config(false)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Connectivity(ConnectivityError::TooManyAtoms { .. })
        ));
    }

    #[test]
    fn custom_target_ignores_repeated_bonds() {
        let bonds = vec![
            Bond::new(1, 2).unwrap(),
            Bond::new(2, 1).unwrap(),
            Bond::new(2, 3).unwrap(),
            Bond::new(1, 3).unwrap(),
        ];
        let out = run_to_string(Target::Custom(bonds), &app_config(false)).unwrap();
        assert!(out.contains("Energy:\tα − 1.000β\tDegeneracy: 2"));
    }
}
