//! # Core Models Module
//!
//! Data structures describing which atoms of a conjugated system are bonded.
//!
//! ## Key Components
//!
//! - [`topology`] - Canonical bonds and the editable [`BondSet`](topology::BondSet) used while
//!   entering a custom molecule
//! - [`connectivity`] - The symmetric atom → neighbours structure consumed by the Hamiltonian
//!
//! ## Usage
//!
//! ```ignore
//! use huckel::core::models::topology::{Bond, BondSet};
//!
//! let mut bonds = BondSet::new();
//! bonds.add(Bond::new(1, 2)?)?;
//! bonds.add(Bond::new(2, 3)?)?;
//! ```

pub mod connectivity;
pub mod topology;
