//! # Workflows Module
//!
//! High-level entry points that run the whole computation for a molecule.
//!
//! - **Solve Workflow** ([`solve`]) - Connectivity → Hamiltonian → eigenvalues → reduced
//!   spectrum
//!
//! Callers build a [`Connectivity`](crate::core::models::connectivity::Connectivity) with the
//! builders in [`core::connectivity`](crate::core::connectivity) or a preset, then hand it to
//! [`solve::run`] together with a [`SolverConfig`](crate::engine::config::SolverConfig).

pub mod solve;
