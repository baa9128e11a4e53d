use crate::core::hamiltonian;
use crate::core::models::connectivity::Connectivity;
use crate::engine::config::SolverConfig;
use crate::engine::eigen;
use crate::engine::error::EngineError;
use crate::engine::spectrum::{self, ReducedSpectrum};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub atom_count: usize,
    pub bond_count: usize,
    pub spectrum: ReducedSpectrum,
}

#[instrument(skip_all, name = "solve_workflow", fields(atoms = connectivity.atom_count()))]
pub fn run(connectivity: &Connectivity, config: &SolverConfig) -> Result<SolveResult, EngineError> {
    let atom_count = connectivity.atom_count();
    if atom_count == 0 {
        return Err(EngineError::EmptySystem);
    }

    let h = hamiltonian::build(connectivity);
    debug!("Built {}x{} Hamiltonian.", atom_count, atom_count);

    let eigensystem = eigen::diagonalize(h, config.max_eigen_iterations)?;
    debug!("Diagonalised into {} eigenpair(s).", eigensystem.dimension());
    let spectrum = spectrum::reduce(
        eigensystem.eigenvalues.as_slice(),
        config.rounding_decimals,
    );

    info!(
        "Solved {} atom(s): {} distinct energy level(s).",
        atom_count,
        spectrum.len()
    );
    Ok(SolveResult {
        atom_count,
        bond_count: connectivity.bond_count(),
        spectrum,
    })
}
