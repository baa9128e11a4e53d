use crate::core::models::connectivity::Connectivity;
use nalgebra::DMatrix;

/// Hückel Hamiltonian with α = 0 and β = 1: the adjacency matrix of the connectivity.
/// Entry `(i, j)` is 1 when atoms `i + 1` and `j + 1` are bonded.
pub fn build(connectivity: &Connectivity) -> DMatrix<f64> {
    let n = connectivity.atom_count();
    let mut h = DMatrix::zeros(n, n);
    for (atom, neighbors) in connectivity.iter() {
        for &neighbor in neighbors {
            h[(atom - 1, neighbor - 1)] = 1.0;
        }
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::connectivity::{cyclic, linear};

    #[test]
    fn linear_four_atoms_gives_path_adjacency() {
        let h = build(&linear(4).unwrap());
        let expected = DMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 1.0, 0.0, 0.0, //
                1.0, 0.0, 1.0, 0.0, //
                0.0, 1.0, 0.0, 1.0, //
                0.0, 0.0, 1.0, 0.0,
            ],
        );
        assert_eq!(h, expected);
    }

    #[test]
    fn hamiltonian_is_symmetric_with_zero_diagonal() {
        let h = build(&cyclic(7).unwrap());
        assert_eq!(h, h.transpose());
        assert!(h.diagonal().iter().all(|&d| d == 0.0));
        assert_eq!(h.sum(), 14.0);
    }
}
