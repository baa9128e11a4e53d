use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, OutputConfig};
use crate::cli::SettingsArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::{self, SetValue};
use huckel::engine::config::SolverConfigBuilder;
use tracing::debug;

pub fn build_config(args: &SettingsArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let solver_file = file_config.solver.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();
    let presets_file = file_config.presets.take().unwrap_or_default();

    let rounding_decimals = args
        .rounding_decimals
        .or(solver_file.rounding_decimals)
        .unwrap_or(defaults.rounding_decimals);
    let max_eigen_iterations = solver_file
        .max_eigen_iterations
        .unwrap_or(defaults.max_eigen_iterations);

    let solver = SolverConfigBuilder::new()
        .rounding_decimals(rounding_decimals)
        .max_eigen_iterations(max_eigen_iterations)
        .build()?;

    let output = OutputConfig {
        precision: args
            .precision
            .or(output_file.precision)
            .unwrap_or(defaults.precision),
        show_connectivity: args.show_connectivity
            || output_file
                .show_connectivity
                .unwrap_or(defaults.show_connectivity),
    };

    let presets_file = args.presets_file.clone().or(presets_file.file);

    let config = AppConfig {
        solver,
        output,
        presets_file,
    };
    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let SetValue { key, value } =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "solver.rounding-decimals" => {
                config
                    .solver
                    .get_or_insert_with(Default::default)
                    .rounding_decimals = Some(parse_value(key, value, "integer")?);
            }
            "solver.max-eigen-iterations" => {
                config
                    .solver
                    .get_or_insert_with(Default::default)
                    .max_eigen_iterations = Some(parse_value(key, value, "integer")?);
            }
            "output.precision" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .precision = Some(parse_value(key, value, "integer")?);
            }
            "output.show-connectivity" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .show_connectivity = Some(parse_value(key, value, "boolean")?);
            }
            "presets.file" => {
                config.presets.get_or_insert_with(Default::default).file = Some(value.into());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_config(dir: &std::path::Path, toml: &str) -> PathBuf {
        let path = dir.join("huckel.toml");
        fs::write(&path, toml).unwrap();
        path
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = build_config(&SettingsArgs::default()).unwrap();
        assert_eq!(config.solver.rounding_decimals, 12);
        assert_eq!(config.output.precision, 3);
        assert!(!config.output.show_connectivity);
        assert!(config.presets_file.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
            [solver]
            rounding-decimals = 9
            max-eigen-iterations = 250
            [output]
            precision = 5
            show-connectivity = true
            [presets]
            file = "extra.toml"
            "#,
        );
        let args = SettingsArgs {
            config: Some(path),
            ..Default::default()
        };

        let config = build_config(&args).unwrap();
        assert_eq!(config.solver.rounding_decimals, 9);
        assert_eq!(config.solver.max_eigen_iterations, 250);
        assert_eq!(config.output.precision, 5);
        assert!(config.output.show_connectivity);
        assert_eq!(config.presets_file, Some(PathBuf::from("extra.toml")));
    }

    #[test]
    fn cli_overrides_file_values() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[output]\nprecision = 5\n");
        let args = SettingsArgs {
            config: Some(path),
            precision: Some(2),
            rounding_decimals: Some(10),
            presets_file: Some(PathBuf::from("cli.toml")),
            ..Default::default()
        };

        let config = build_config(&args).unwrap();
        assert_eq!(config.output.precision, 2);
        assert_eq!(config.solver.rounding_decimals, 10);
        assert_eq!(config.presets_file, Some(PathBuf::from("cli.toml")));
    }

    #[test]
    fn set_values_override_file() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[output]\nprecision = 5\n");
        let args = SettingsArgs {
            config: Some(path),
            set_values: vec![
                "output.precision=6".to_string(),
                "solver.rounding-decimals = 8".to_string(),
                "output.show-connectivity=true".to_string(),
            ],
            ..Default::default()
        };

        let config = build_config(&args).unwrap();
        assert_eq!(config.output.precision, 6);
        assert_eq!(config.solver.rounding_decimals, 8);
        assert!(config.output.show_connectivity);
    }

    #[test]
    fn unknown_set_key_and_bad_values_are_rejected() {
        let args = SettingsArgs {
            set_values: vec!["output.colour=red".to_string()],
            ..Default::default()
        };
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        let args = SettingsArgs {
            set_values: vec!["output.precision=many".to_string()],
            ..Default::default()
        };
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn out_of_range_rounding_is_a_config_error() {
        let args = SettingsArgs {
            rounding_decimals: Some(30),
            ..Default::default()
        };
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[solver]\nalpha = 1.0\n");
        let args = SettingsArgs {
            config: Some(path),
            ..Default::default()
        };
        assert!(matches!(
            build_config(&args),
            Err(CliError::FileParsing { .. })
        ));
    }
}
