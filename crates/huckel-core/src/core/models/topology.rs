use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BondError {
    #[error("Atom cannot be bonded to itself (atom {0})")]
    SelfBond(usize),
    #[error("Atom indices start at 1")]
    ZeroIndex,
}

/// An unordered pair of distinct atoms, stored as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bond {
    atom1: usize,
    atom2: usize,
}

impl Bond {
    pub fn new(a: usize, b: usize) -> Result<Self, BondError> {
        if a == 0 || b == 0 {
            return Err(BondError::ZeroIndex);
        }
        if a == b {
            return Err(BondError::SelfBond(a));
        }
        Ok(Self {
            atom1: a.min(b),
            atom2: a.max(b),
        })
    }

    pub fn atom1(&self) -> usize {
        self.atom1
    }

    pub fn atom2(&self) -> usize {
        self.atom2
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom {} \t- Atom {}", self.atom1, self.atom2)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseBondError {
    #[error("Invalid bond format '{0}'. Expected 'A-B' (e.g., '1-2').")]
    Format(String),
    #[error("Invalid atom index '{0}'")]
    Index(String),
    #[error(transparent)]
    Bond(#[from] BondError),
}

impl FromStr for Bond {
    type Err = ParseBondError;

    /// Parses `"A-B"`, `"A,B"` or `"A B"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == '-' || c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        let [a, b] = parts.as_slice() else {
            return Err(ParseBondError::Format(s.to_string()));
        };
        let parse = |p: &str| {
            p.parse::<usize>()
                .map_err(|_| ParseBondError::Index(p.to_string()))
        };
        Ok(Bond::new(parse(*a)?, parse(*b)?)?)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BondSetError {
    #[error("Bond already exists: {0}")]
    Duplicate(Bond),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Absent,
}

/// The user-curated bond list of a custom molecule, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BondSet {
    bonds: Vec<Bond>,
}

impl BondSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bond: Bond) -> Result<(), BondSetError> {
        if self.contains(bond) {
            return Err(BondSetError::Duplicate(bond));
        }
        self.bonds.push(bond);
        Ok(())
    }

    /// Removing a bond that is not present leaves the set untouched.
    pub fn remove(&mut self, bond: Bond) -> RemoveOutcome {
        match self.bonds.iter().position(|b| *b == bond) {
            Some(idx) => {
                self.bonds.remove(idx);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::Absent,
        }
    }

    pub fn contains(&self, bond: Bond) -> bool {
        self.bonds.contains(&bond)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bond> {
        self.bonds.iter()
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    /// Highest atom index referenced by any bond, or 0 for an empty set.
    pub fn max_atom(&self) -> usize {
        self.bonds.iter().map(|b| b.atom2).max().unwrap_or(0)
    }
}

impl FromIterator<Bond> for BondSet {
    /// Collects bonds, silently dropping repeated pairs.
    fn from_iter<I: IntoIterator<Item = Bond>>(iter: I) -> Self {
        let mut set = BondSet::new();
        for bond in iter {
            let _ = set.add(bond);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bond(a: usize, b: usize) -> Bond {
        Bond::new(a, b).unwrap()
    }

    #[test]
    fn bond_new_orders_atoms_canonically() {
        let b = bond(5, 2);
        assert_eq!(b.atom1(), 2);
        assert_eq!(b.atom2(), 5);
        assert_eq!(bond(2, 5), bond(5, 2));
    }

    #[test]
    fn bond_new_rejects_self_bond_and_zero_index() {
        assert_eq!(Bond::new(3, 3), Err(BondError::SelfBond(3)));
        assert_eq!(Bond::new(0, 1), Err(BondError::ZeroIndex));
        assert_eq!(Bond::new(1, 0), Err(BondError::ZeroIndex));
    }

    #[test]
    fn bond_from_str_parses_valid_strings() {
        assert_eq!("1-2".parse::<Bond>().unwrap(), bond(1, 2));
        assert_eq!("4,3".parse::<Bond>().unwrap(), bond(3, 4));
        assert_eq!(" 7 8 ".parse::<Bond>().unwrap(), bond(7, 8));
    }

    #[test]
    fn bond_from_str_rejects_invalid_strings() {
        assert!(matches!(
            "1".parse::<Bond>(),
            Err(ParseBondError::Format(_))
        ));
        assert!(matches!(
            "1-2-3".parse::<Bond>(),
            Err(ParseBondError::Format(_))
        ));
        assert!(matches!(
            "a-2".parse::<Bond>(),
            Err(ParseBondError::Index(_))
        ));
        assert_eq!(
            "2-2".parse::<Bond>(),
            Err(ParseBondError::Bond(BondError::SelfBond(2)))
        );
    }

    #[test]
    fn bond_display_outputs_both_atoms() {
        assert_eq!(bond(2, 1).to_string(), "Atom 1 \t- Atom 2");
    }

    #[test]
    fn adding_the_same_bond_twice_is_rejected() {
        let mut set = BondSet::new();
        set.add(bond(1, 2)).unwrap();
        let before = set.clone();

        assert_eq!(
            set.add(bond(2, 1)),
            Err(BondSetError::Duplicate(bond(1, 2)))
        );
        assert_eq!(set, before);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn removing_an_absent_bond_is_a_no_op() {
        let mut set = BondSet::new();
        set.add(bond(1, 2)).unwrap();
        let before = set.clone();

        assert_eq!(set.remove(bond(3, 4)), RemoveOutcome::Absent);
        assert_eq!(set, before);
    }

    #[test]
    fn removing_a_present_bond_keeps_order_of_the_rest() {
        let mut set = BondSet::new();
        set.add(bond(1, 2)).unwrap();
        set.add(bond(2, 3)).unwrap();
        set.add(bond(3, 4)).unwrap();

        assert_eq!(set.remove(bond(3, 2)), RemoveOutcome::Removed);
        let remaining: Vec<Bond> = set.iter().copied().collect();
        assert_eq!(remaining, vec![bond(1, 2), bond(3, 4)]);
        assert!(!set.contains(bond(2, 3)));
    }

    #[test]
    fn max_atom_tracks_highest_referenced_index() {
        let mut set = BondSet::new();
        assert_eq!(set.max_atom(), 0);
        set.add(bond(1, 6)).unwrap();
        set.add(bond(2, 3)).unwrap();
        assert_eq!(set.max_atom(), 6);
    }

    #[test]
    fn from_iter_drops_repeated_pairs() {
        let set: BondSet = [bond(1, 2), bond(2, 1), bond(2, 3)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
