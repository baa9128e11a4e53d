use huckel::engine::config::SolverConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Decimals printed for each orbital energy.
    pub precision: usize,
    pub show_connectivity: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub solver: SolverConfig,
    pub output: OutputConfig,
    pub presets_file: Option<PathBuf>,
}
