use crate::core::models::connectivity::{Connectivity, ConnectivityError, check_atom_limit};
use crate::core::models::topology::{Bond, BondSet};
use std::fmt;
use tracing::debug;

pub const MIN_LINEAR_ATOMS: usize = 2;
pub const MIN_CYCLIC_ATOMS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityMode {
    Linear,
    Cyclic,
}

impl ConnectivityMode {
    pub fn min_atoms(self) -> usize {
        match self {
            Self::Linear => MIN_LINEAR_ATOMS,
            Self::Cyclic => MIN_CYCLIC_ATOMS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Cyclic => "Cyclic",
        }
    }

    pub fn build(self, atom_count: usize) -> Result<Connectivity, ConnectivityError> {
        match self {
            Self::Linear => linear(atom_count),
            Self::Cyclic => cyclic(atom_count),
        }
    }
}

impl fmt::Display for ConnectivityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn check_size(mode: ConnectivityMode, atom_count: usize) -> Result<(), ConnectivityError> {
    let min = mode.min_atoms();
    if atom_count < min {
        return Err(ConnectivityError::TooFewAtoms {
            mode: mode.name(),
            min,
            actual: atom_count,
        });
    }
    check_atom_limit(atom_count)
}

fn chain_bonds(atom_count: usize) -> impl Iterator<Item = Bond> {
    (1..atom_count).filter_map(|i| Bond::new(i, i + 1).ok())
}

/// Path graph `1 - 2 - ... - n`.
pub fn linear(atom_count: usize) -> Result<Connectivity, ConnectivityError> {
    check_size(ConnectivityMode::Linear, atom_count)?;
    let bonds: Vec<Bond> = chain_bonds(atom_count).collect();
    debug!(atom_count, bonds = bonds.len(), "Built linear connectivity.");
    Ok(Connectivity::from_bonds(atom_count, &bonds))
}

/// Ring graph `1 - 2 - ... - n - 1`.
pub fn cyclic(atom_count: usize) -> Result<Connectivity, ConnectivityError> {
    check_size(ConnectivityMode::Cyclic, atom_count)?;
    let bonds: Vec<Bond> = chain_bonds(atom_count)
        .chain(Bond::new(atom_count, 1).ok())
        .collect();
    debug!(atom_count, bonds = bonds.len(), "Built cyclic connectivity.");
    Ok(Connectivity::from_bonds(atom_count, &bonds))
}

/// Connectivity over atoms `1..=max_atom` from a user-curated bond set. Atoms below the
/// maximum that appear in no bond are kept as isolated centres.
pub fn custom(bonds: &BondSet) -> Result<Connectivity, ConnectivityError> {
    if bonds.is_empty() {
        return Err(ConnectivityError::EmptyBondSet);
    }
    let atom_count = bonds.max_atom();
    check_atom_limit(atom_count)?;
    debug!(
        atom_count,
        bonds = bonds.len(),
        "Built custom connectivity."
    );
    Ok(Connectivity::from_bonds(atom_count, bonds.iter()))
}
