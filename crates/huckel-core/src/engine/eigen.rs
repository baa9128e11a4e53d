use super::error::EngineError;
use nalgebra::{DMatrix, DVector, SymmetricEigen};
use tracing::trace;

/// Eigenvalues with their eigenvectors (columns), in the order the solver produced them.
#[derive(Debug, Clone)]
pub struct Eigensystem {
    pub eigenvalues: DVector<f64>,
    pub eigenvectors: DMatrix<f64>,
}

impl Eigensystem {
    pub fn dimension(&self) -> usize {
        self.eigenvalues.len()
    }
}

/// Diagonalise a real symmetric matrix.
///
/// Only the lower triangle is read, as with any symmetric solver. Failure to converge within
/// `max_iterations` sweeps is reported rather than retried.
pub fn diagonalize(h: DMatrix<f64>, max_iterations: usize) -> Result<Eigensystem, EngineError> {
    let (rows, cols) = h.shape();
    if rows != cols {
        return Err(EngineError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(EngineError::EmptySystem);
    }

    let eig = SymmetricEigen::try_new(h, f64::EPSILON, max_iterations)
        .ok_or(EngineError::Convergence { max_iterations })?;

    if let Some((index, &value)) = eig
        .eigenvalues
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite())
    {
        return Err(EngineError::NonFiniteEigenvalue { index, value });
    }
    trace!(eigenvalues = ?eig.eigenvalues.as_slice(), "Diagonalisation finished.");

    Ok(Eigensystem {
        eigenvalues: eig.eigenvalues,
        eigenvectors: eig.eigenvectors,
    })
}
