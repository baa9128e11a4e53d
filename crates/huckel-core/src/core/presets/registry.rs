use super::table;
use crate::core::connectivity::custom;
use crate::core::models::connectivity::{Connectivity, ConnectivityError};
use crate::core::models::topology::{Bond, BondError, BondSet, BondSetError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PresetDefinition {
    bonds: Vec<[usize; 2]>,
}

#[derive(Debug, Error)]
pub enum PresetLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Preset '{name}' is defined more than once (names are case-insensitive)")]
    DuplicateName { name: String },
    #[error("Invalid bond in preset '{name}': {source}")]
    Bond { name: String, source: BondError },
    #[error("Invalid bond list for preset '{name}': {source}")]
    BondSet { name: String, source: BondSetError },
    #[error("Invalid connectivity for preset '{name}': {source}")]
    Connectivity {
        name: String,
        source: ConnectivityError,
    },
}

/// Built-in presets plus any user presets loaded from TOML. User presets shadow built-in
/// ones of the same name.
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    user: BTreeMap<String, Connectivity>,
}

impl PresetRegistry {
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, PresetLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| PresetLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let registry = Self::from_toml_str(&content).map_err(|e| match e {
            PresetLoadError::Toml { source, .. } => PresetLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })?;
        info!(
            "Loaded {} user preset(s) from {:?}",
            registry.user_preset_count(),
            path
        );
        Ok(registry)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PresetLoadError> {
        let definitions: BTreeMap<String, PresetDefinition> =
            toml::from_str(content).map_err(|e| PresetLoadError::Toml {
                path: "<string>".to_string(),
                source: e,
            })?;

        let mut user = BTreeMap::new();
        for (name, definition) in definitions {
            let name = name.trim().to_lowercase();
            if user.contains_key(&name) {
                return Err(PresetLoadError::DuplicateName { name });
            }
            let connectivity = Self::build_definition(&name, &definition)?;
            if table::contains(&name) {
                debug!("User preset '{}' shadows the built-in preset.", name);
            }
            user.insert(name, connectivity);
        }
        Ok(Self { user })
    }

    fn build_definition(
        name: &str,
        definition: &PresetDefinition,
    ) -> Result<Connectivity, PresetLoadError> {
        let mut bonds = BondSet::new();
        for &[a, b] in &definition.bonds {
            let bond = Bond::new(a, b).map_err(|source| PresetLoadError::Bond {
                name: name.to_string(),
                source,
            })?;
            bonds
                .add(bond)
                .map_err(|source| PresetLoadError::BondSet {
                    name: name.to_string(),
                    source,
                })?;
        }
        custom(&bonds).map_err(|source| PresetLoadError::Connectivity {
            name: name.to_string(),
            source,
        })
    }

    pub fn get(&self, name: &str) -> Option<Connectivity> {
        let key = name.trim();
        self.user.get(key).cloned().or_else(|| table::get(key))
    }

    pub fn contains(&self, name: &str) -> bool {
        let key = name.trim();
        self.user.contains_key(key) || table::contains(key)
    }

    /// All preset names, built-in and user, sorted and deduplicated.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = table::names()
            .into_iter()
            .map(str::to_string)
            .chain(self.user.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn user_preset_count(&self) -> usize {
        self.user.len()
    }
}
