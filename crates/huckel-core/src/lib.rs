//! # Hückel Core Library
//!
//! A small library for computing molecular-orbital energies of conjugated polyenes
//! with the simple Hückel (tight-binding) model, using the α = 0, β = 1 convention.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Bond`, `BondSet`, `Connectivity`),
//!   the connectivity builders for linear, cyclic and custom molecules, the preset table,
//!   and derivation of the Hamiltonian matrix.
//!
//! - **[`engine`]: The Numerical Core.** Wraps the dense symmetric eigensolver, reduces raw
//!   eigenvalues into a canonical spectrum of `(energy, degeneracy)` levels, and holds the
//!   solver configuration and error types.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into a single
//!   call that turns a connectivity structure into a reported spectrum.

pub mod core;
pub mod engine;
pub mod workflows;
