use crate::core::models::connectivity::Connectivity;
use phf::{Map, phf_map};

type AdjacencyTable = &'static [&'static [usize]];

const ETHYLENE: AdjacencyTable = &[&[2], &[1]];
const ALLYL: AdjacencyTable = &[&[2], &[1, 3], &[2]];
const BUTADIENE: AdjacencyTable = &[&[2], &[1, 3], &[2, 4], &[3]];
const HEXATRIENE: AdjacencyTable = &[&[2], &[1, 3], &[2, 4], &[3, 5], &[4, 6], &[5]];
const TRIMETHYLENEMETHANE: AdjacencyTable = &[&[2, 3, 4], &[1], &[1], &[1]];
const CYCLOPROPENYL: AdjacencyTable = &[&[2, 3], &[1, 3], &[1, 2]];
const CYCLOBUTADIENE: AdjacencyTable = &[&[2, 4], &[1, 3], &[2, 4], &[1, 3]];
const CYCLOPENTADIENYL: AdjacencyTable = &[&[2, 5], &[1, 3], &[2, 4], &[3, 5], &[1, 4]];
const BENZENE: AdjacencyTable = &[&[2, 6], &[1, 3], &[2, 4], &[3, 5], &[4, 6], &[1, 5]];
const TROPYLIUM: AdjacencyTable = &[
    &[2, 7],
    &[1, 3],
    &[2, 4],
    &[3, 5],
    &[4, 6],
    &[5, 7],
    &[1, 6],
];
const CYCLOOCTATETRAENE: AdjacencyTable = &[
    &[2, 8],
    &[1, 3],
    &[2, 4],
    &[3, 5],
    &[4, 6],
    &[5, 7],
    &[6, 8],
    &[1, 7],
];
// Five-membered ring 1..5 with the exocyclic methylene on atom 1.
const FULVENE: AdjacencyTable = &[&[2, 5, 6], &[1, 3], &[2, 4], &[3, 5], &[1, 4], &[1]];
// Benzene ring 1..6, vinyl group 7-8 on atom 1.
const STYRENE: AdjacencyTable = &[
    &[2, 6, 7],
    &[1, 3],
    &[2, 4],
    &[3, 5],
    &[4, 6],
    &[1, 5],
    &[1, 8],
    &[7],
];
// Ten-atom perimeter with the ring-fusion bond between atoms 5 and 10.
const NAPHTHALENE: AdjacencyTable = &[
    &[2, 10],
    &[1, 3],
    &[2, 4],
    &[3, 5],
    &[4, 6, 10],
    &[5, 7],
    &[6, 8],
    &[7, 9],
    &[8, 10],
    &[1, 5, 9],
];

static PRESETS: Map<&'static str, AdjacencyTable> = phf_map! {
    "ethylene" => ETHYLENE,
    "allyl" => ALLYL,
    "butadiene" => BUTADIENE,
    "hexatriene" => HEXATRIENE,
    "trimethylenemethane" => TRIMETHYLENEMETHANE,
    "cyclopropenyl" => CYCLOPROPENYL,
    "cyclobutadiene" => CYCLOBUTADIENE,
    "cyclopentadienyl" => CYCLOPENTADIENYL,
    "benzene" => BENZENE,
    "tropylium" => TROPYLIUM,
    "cyclooctatetraene" => CYCLOOCTATETRAENE,
    "fulvene" => FULVENE,
    "styrene" => STYRENE,
    "naphthalene" => NAPHTHALENE,
};

/// Looks up a built-in preset by its lowercase name.
pub fn get(name: &str) -> Option<Connectivity> {
    PRESETS
        .get(name.trim())
        .map(|rows| Connectivity::from_static(rows))
}

pub fn contains(name: &str) -> bool {
    PRESETS.contains_key(name.trim())
}

/// Built-in preset names, sorted alphabetically.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PRESETS.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::connectivity::{cyclic, linear};

    #[test]
    fn every_preset_is_a_valid_connectivity() {
        for (name, rows) in PRESETS.entries() {
            let checked = Connectivity::from_adjacency(rows.iter().map(|r| r.iter().copied()));
            assert!(checked.is_ok(), "preset '{name}' is invalid: {checked:?}");
            assert_eq!(checked.unwrap(), get(name).unwrap());
        }
    }

    #[test]
    fn chain_and_ring_presets_match_builders() {
        assert_eq!(get("ethylene").unwrap(), linear(2).unwrap());
        assert_eq!(get("butadiene").unwrap().bonds(), linear(4).unwrap().bonds());
        assert_eq!(get("hexatriene").unwrap().bonds(), linear(6).unwrap().bonds());
        assert_eq!(get("benzene").unwrap().bonds(), cyclic(6).unwrap().bonds());
        assert_eq!(get("tropylium").unwrap().bonds(), cyclic(7).unwrap().bonds());
    }

    #[test]
    fn naphthalene_has_eleven_bonds_and_two_fusion_atoms() {
        let c = get("naphthalene").unwrap();
        assert_eq!(c.atom_count(), 10);
        assert_eq!(c.bond_count(), 11);
        let branch_points: Vec<usize> = c
            .iter()
            .filter(|(_, row)| row.len() == 3)
            .map(|(atom, _)| atom)
            .collect();
        assert_eq!(branch_points, vec![5, 10]);
    }

    #[test]
    fn get_returns_none_for_unknown_names_and_is_case_sensitive() {
        assert!(get("benzene").is_some());
        assert!(get(" benzene ").is_some());
        assert!(get("Benzene").is_none());
        assert!(get("unobtainium").is_none());
        assert!(!contains("pyridine"));
    }

    #[test]
    fn names_are_sorted() {
        let names = names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"benzene"));
        assert_eq!(names.len(), 14);
    }
}
