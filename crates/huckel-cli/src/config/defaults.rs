use huckel::engine::config::{DEFAULT_MAX_EIGEN_ITERATIONS, DEFAULT_ROUNDING_DECIMALS};

pub struct DefaultsConfig {
    pub rounding_decimals: u32,
    pub max_eigen_iterations: usize,
    pub precision: usize,
    pub show_connectivity: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            rounding_decimals: DEFAULT_ROUNDING_DECIMALS,
            max_eigen_iterations: DEFAULT_MAX_EIGEN_ITERATIONS,
            precision: 3,
            show_connectivity: false,
        }
    }
}
