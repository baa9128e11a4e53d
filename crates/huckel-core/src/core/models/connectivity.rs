use super::topology::Bond;
use std::fmt;
use thiserror::Error;

/// Largest atom count any connectivity may have.
pub const MAX_ATOMS: usize = 1000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectivityError {
    #[error("{mode} molecules need at least {min} atoms, got {actual}")]
    TooFewAtoms {
        mode: &'static str,
        min: usize,
        actual: usize,
    },
    #[error("At most {max} atoms are supported, got {actual}")]
    TooManyAtoms { max: usize, actual: usize },
    #[error("No bonds were specified")]
    EmptyBondSet,
    #[error("Atom {atom} lists itself as a neighbour")]
    SelfLoop { atom: usize },
    #[error("Atom {atom} references atom {neighbor}, outside 1..={atom_count}")]
    OutOfRange {
        atom: usize,
        neighbor: usize,
        atom_count: usize,
    },
    #[error("Atom {atom} lists neighbour {neighbor} more than once")]
    RepeatedNeighbor { atom: usize, neighbor: usize },
    #[error("Atom {atom} lists {neighbor} as a neighbour, but not the reverse")]
    Asymmetric { atom: usize, neighbor: usize },
}

/// Symmetric neighbour lists for atoms `1..=n`.
///
/// Each atom owns its own neighbour vector. Every constructor upholds the invariants:
/// no self-loops, no repeated neighbours, all indices in range, and `b ∈ neighbors(a)`
/// exactly when `a ∈ neighbors(b)`.
pub(crate) fn check_atom_limit(atom_count: usize) -> Result<(), ConnectivityError> {
    if atom_count > MAX_ATOMS {
        return Err(ConnectivityError::TooManyAtoms {
            max: MAX_ATOMS,
            actual: atom_count,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connectivity {
    neighbors: Vec<Vec<usize>>,
}

impl Connectivity {
    /// Builds from bonds over atoms `1..=atom_count`. Bonds must be distinct and in range,
    /// and `atom_count` must already have passed [`check_atom_limit`].
    pub(crate) fn from_bonds<'a>(
        atom_count: usize,
        bonds: impl IntoIterator<Item = &'a Bond>,
    ) -> Self {
        let mut neighbors: Vec<Vec<usize>> = (0..atom_count).map(|_| Vec::new()).collect();
        for bond in bonds {
            let (a, b) = (bond.atom1(), bond.atom2());
            if !neighbors[a - 1].contains(&b) {
                neighbors[a - 1].push(b);
            }
            if !neighbors[b - 1].contains(&a) {
                neighbors[b - 1].push(a);
            }
        }
        Self { neighbors }
    }

    /// Copies a static adjacency table verbatim. Only used for tables whose validity is
    /// covered by tests.
    pub(crate) fn from_static(rows: &[&[usize]]) -> Self {
        Self {
            neighbors: rows.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// Accepts a verbatim adjacency table (row `i` lists the neighbours of atom `i + 1`)
    /// after checking every invariant.
    pub fn from_adjacency<R, N>(rows: R) -> Result<Self, ConnectivityError>
    where
        R: IntoIterator<Item = N>,
        N: IntoIterator<Item = usize>,
    {
        let neighbors: Vec<Vec<usize>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let atom_count = neighbors.len();
        check_atom_limit(atom_count)?;

        for (idx, row) in neighbors.iter().enumerate() {
            let atom = idx + 1;
            for (pos, &neighbor) in row.iter().enumerate() {
                if neighbor == atom {
                    return Err(ConnectivityError::SelfLoop { atom });
                }
                if neighbor == 0 || neighbor > atom_count {
                    return Err(ConnectivityError::OutOfRange {
                        atom,
                        neighbor,
                        atom_count,
                    });
                }
                if row[..pos].contains(&neighbor) {
                    return Err(ConnectivityError::RepeatedNeighbor { atom, neighbor });
                }
                if !neighbors[neighbor - 1].contains(&atom) {
                    return Err(ConnectivityError::Asymmetric { atom, neighbor });
                }
            }
        }

        Ok(Self { neighbors })
    }

    pub fn atom_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbours of a 1-based atom index, or `None` if out of range.
    pub fn neighbors(&self, atom: usize) -> Option<&[usize]> {
        atom.checked_sub(1)
            .and_then(|idx| self.neighbors.get(idx))
            .map(Vec::as_slice)
    }

    pub fn degree(&self, atom: usize) -> Option<usize> {
        self.neighbors(atom).map(<[usize]>::len)
    }

    pub fn bond_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn are_bonded(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).is_some_and(|n| n.contains(&b))
    }

    /// Canonical edge list, sorted.
    pub fn bonds(&self) -> Vec<Bond> {
        let mut bonds: Vec<Bond> = self
            .iter()
            .flat_map(|(atom, row)| {
                row.iter()
                    .filter(move |&&n| n > atom)
                    .filter_map(move |&n| Bond::new(atom, n).ok())
            })
            .collect();
        bonds.sort();
        bonds
    }

    pub fn is_symmetric(&self) -> bool {
        self.iter()
            .all(|(atom, row)| row.iter().all(|&n| self.are_bonded(n, atom)))
    }

    /// Iterates `(atom, neighbours)` with 1-based atom indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.neighbors
            .iter()
            .enumerate()
            .map(|(idx, row)| (idx + 1, row.as_slice()))
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (atom, row) in self.iter() {
            let listed: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{:>4}: [{}]", atom, listed.join(", "))?;
        }
        Ok(())
    }
}
