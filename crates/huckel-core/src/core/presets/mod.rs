//! # Presets Module
//!
//! Named, ready-made connectivity structures for common conjugated molecules.
//!
//! ## Key Components
//!
//! - [`table`] - The built-in, compile-time table (e.g. `benzene`, `butadiene`)
//! - [`registry`] - A [`PresetRegistry`](registry::PresetRegistry) combining the built-in table
//!   with user presets loaded from a TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use huckel::core::presets::registry::PresetRegistry;
//!
//! let registry = PresetRegistry::load(Path::new("my-presets.toml"))?;
//! let benzene = registry.get("benzene").unwrap();
//! ```
//!
//! User preset files map a lowercase name to its bond list:
//!
//! ```toml
//! [azulene]
//! bonds = [[1, 2], [2, 3], [3, 4], [4, 5], [5, 6], [6, 7], [7, 8], [8, 9], [9, 10], [10, 1], [1, 5]]
//! ```

pub mod registry;
pub mod table;
