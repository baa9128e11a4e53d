use thiserror::Error;

pub const DEFAULT_ROUNDING_DECIMALS: u32 = 12;
/// Beyond 15 decimals an f64 cannot absorb eigensolver noise any more.
pub const MAX_ROUNDING_DECIMALS: u32 = 15;
pub const DEFAULT_MAX_EIGEN_ITERATIONS: usize = 10_000;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Decimal digits eigenvalues are rounded to before degenerate levels are merged.
    pub rounding_decimals: u32,
    pub max_eigen_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rounding_decimals: DEFAULT_ROUNDING_DECIMALS,
            max_eigen_iterations: DEFAULT_MAX_EIGEN_ITERATIONS,
        }
    }
}

#[derive(Default)]
pub struct SolverConfigBuilder {
    rounding_decimals: Option<u32>,
    max_eigen_iterations: Option<usize>,
}

impl SolverConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rounding_decimals(mut self, decimals: u32) -> Self {
        self.rounding_decimals = Some(decimals);
        self
    }
    pub fn max_eigen_iterations(mut self, iterations: usize) -> Self {
        self.max_eigen_iterations = Some(iterations);
        self
    }

    pub fn build(self) -> Result<SolverConfig, ConfigError> {
        let rounding_decimals = self
            .rounding_decimals
            .ok_or(ConfigError::MissingParameter("rounding_decimals"))?;
        if rounding_decimals > MAX_ROUNDING_DECIMALS {
            return Err(ConfigError::InvalidParameter {
                name: "rounding_decimals",
                reason: format!("must be at most {}", MAX_ROUNDING_DECIMALS),
            });
        }

        let max_eigen_iterations = self
            .max_eigen_iterations
            .ok_or(ConfigError::MissingParameter("max_eigen_iterations"))?;
        if max_eigen_iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_eigen_iterations",
                reason: "must be positive".to_string(),
            });
        }

        Ok(SolverConfig {
            rounding_decimals,
            max_eigen_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_config_with_given_values() {
        let config = SolverConfigBuilder::new()
            .rounding_decimals(8)
            .max_eigen_iterations(500)
            .build()
            .unwrap();
        assert_eq!(config.rounding_decimals, 8);
        assert_eq!(config.max_eigen_iterations, 500);
    }

    #[test]
    fn builder_reports_missing_parameters() {
        assert_eq!(
            SolverConfigBuilder::new().max_eigen_iterations(1).build(),
            Err(ConfigError::MissingParameter("rounding_decimals"))
        );
        assert_eq!(
            SolverConfigBuilder::new().rounding_decimals(12).build(),
            Err(ConfigError::MissingParameter("max_eigen_iterations"))
        );
    }

    #[test]
    fn builder_rejects_out_of_range_values() {
        assert!(matches!(
            SolverConfigBuilder::new()
                .rounding_decimals(16)
                .max_eigen_iterations(10)
                .build(),
            Err(ConfigError::InvalidParameter {
                name: "rounding_decimals",
                ..
            })
        ));
        assert!(matches!(
            SolverConfigBuilder::new()
                .rounding_decimals(12)
                .max_eigen_iterations(0)
                .build(),
            Err(ConfigError::InvalidParameter {
                name: "max_eigen_iterations",
                ..
            })
        ));
    }

    #[test]
    fn default_rounds_to_twelve_decimals() {
        assert_eq!(SolverConfig::default().rounding_decimals, 12);
    }
}
