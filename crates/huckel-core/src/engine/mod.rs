//! # Engine Module
//!
//! The numerical half of the solver: diagonalising the Hamiltonian and turning raw
//! eigenvalues into a reported spectrum.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Rounding precision and eigensolver limits
//! - **Eigensolver** ([`eigen`]) - Dense real-symmetric diagonalisation via nalgebra
//! - **Spectrum Reduction** ([`spectrum`]) - Rounding, sorting and grouping eigenvalues into
//!   `(energy, degeneracy)` levels
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! ## Numerical Notes
//!
//! Mathematically degenerate eigenvalues come out of the eigensolver differing in the last
//! few bits. Rounding to a fixed number of decimals (12 by default) before grouping absorbs
//! that noise for the small, well-conditioned 0/1 matrices produced by bond graphs. It is not
//! a general clustering algorithm and should not be relied on for ill-conditioned spectra.

pub mod config;
pub mod eigen;
pub mod error;
pub mod spectrum;
