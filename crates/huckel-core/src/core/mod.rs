//! # Core Module
//!
//! The fundamental building blocks of the Hückel solver: how atoms are connected and how
//! that connectivity becomes a Hamiltonian matrix.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Bonds, session bond sets and the symmetric
//!   connectivity structure
//! - **Connectivity Construction** ([`connectivity`]) - Builders for linear chains, rings and
//!   user-specified bond graphs
//! - **Preset Molecules** ([`presets`]) - Built-in table of common conjugated molecules and a
//!   loader for user-defined presets
//! - **Hamiltonian** ([`hamiltonian`]) - Adjacency-matrix derivation
//!
//! ## Scientific Foundation
//!
//! In the Hückel approximation every π-center contributes one orbital, the Coulomb integral
//! α sits on the diagonal and the resonance integral β couples bonded neighbours. With
//! α = 0 and β = 1 the Hamiltonian is exactly the graph adjacency matrix, so orbital
//! energies are its eigenvalues expressed as `α + xβ`.

pub mod connectivity;
pub mod hamiltonian;
pub mod models;
pub mod presets;
