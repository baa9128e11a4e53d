use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Cannot solve a system with no atoms")]
    EmptySystem,

    #[error("Hamiltonian must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Eigensolver failed to converge within {max_iterations} iterations")]
    Convergence { max_iterations: usize },

    #[error("Eigensolver returned a non-finite eigenvalue ({value}) at index {index}")]
    NonFiniteEigenvalue { index: usize, value: f64 },
}
