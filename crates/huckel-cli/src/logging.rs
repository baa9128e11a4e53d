use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let level_filter = level_filter(verbosity, quiet);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer);

    let installed = if let Some(path) = log_file {
        let file = File::create(path).map_err(CliError::Io)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true);

        subscriber.with(file_layer).try_init()
    } else {
        subscriber.try_init()
    };
    installed.map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tracing::{debug, info};

    #[test]
    fn verbosity_maps_to_level_filters() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::OFF);
    }

    #[test]
    #[serial]
    fn second_install_returns_an_error_instead_of_panicking() {
        let _ = setup_logging(0, true, None);
        assert!(matches!(
            setup_logging(1, false, None),
            Err(CliError::Other(_))
        ));
    }

    #[test]
    #[serial]
    fn file_layer_respects_the_verbosity_filter() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("huckel.log");
        let file = File::create(&log_path).unwrap();

        let subscriber = tracing_subscriber::registry()
            .with(level_filter(1, false))
            .with(fmt::layer().with_writer(file).with_ansi(false));
        tracing::subscriber::with_default(subscriber, || {
            info!("Solved 4 atom(s).");
            debug!("Built 4x4 Hamiltonian.");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Solved 4 atom(s)."));
        assert!(!content.contains("Hamiltonian"));
    }

    #[test]
    #[serial]
    fn log_file_in_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("no-such-dir").join("huckel.log");
        assert!(matches!(
            setup_logging(2, false, Some(&log_path)),
            Err(CliError::Io(_))
        ));
    }
}
