//! # Connectivity Module
//!
//! Turns a description of a conjugated molecule into a [`Connectivity`](crate::core::models::connectivity::Connectivity).
//!
//! ## Overview
//!
//! Three construction modes are supported:
//!
//! - **Linear** - atoms `1..=n` form a simple path (`n >= 2`)
//! - **Cyclic** - atoms `1..=n` form a simple ring (`n >= 3`)
//! - **Custom** - an explicit [`BondSet`](crate::core::models::topology::BondSet); the atom count
//!   is the highest index referenced
//!
//! Named molecules live in [`presets`](crate::core::presets) instead.
//!
//! Every mode caps the atom count at [`MAX_ATOMS`]. Builders validate their input and return a [`ConnectivityError`](crate::core::models::connectivity::ConnectivityError)
//! rather than clamping sizes.

pub mod builder;

pub use crate::core::models::connectivity::MAX_ATOMS;
pub use builder::{ConnectivityMode, MIN_CYCLIC_ATOMS, MIN_LINEAR_ATOMS, custom, cyclic, linear};
