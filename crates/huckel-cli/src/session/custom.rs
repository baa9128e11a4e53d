use huckel::core::models::topology::{Bond, BondError, BondSet, BondSetError, RemoveOutcome};
use tracing::debug;

pub const BOND_ADDED: &str = "Bond added";
pub const BOND_EXISTS: &str = "Bond already exists";
pub const SELF_BOND: &str = "Atom cannot be bonded to itself";
pub const BOND_REMOVED: &str = "Bond successfully removed";
pub const BOND_ABSENT: &str = "Bond not present, nothing removed";

/// Applies an `add` to the session's bond set and returns the message for the user.
/// Rejected bonds leave the set unchanged.
pub fn add_bond(bonds: &mut BondSet, a: usize, b: usize) -> String {
    let bond = match Bond::new(a, b) {
        Ok(bond) => bond,
        Err(BondError::SelfBond(_)) => return SELF_BOND.to_string(),
        Err(e) => return e.to_string(),
    };
    match bonds.add(bond) {
        Ok(()) => {
            debug!("Added bond {}-{}.", bond.atom1(), bond.atom2());
            BOND_ADDED.to_string()
        }
        Err(BondSetError::Duplicate(_)) => BOND_EXISTS.to_string(),
    }
}

/// Applies a `remove`. Removing a bond that is not in the set is a no-op.
pub fn remove_bond(bonds: &mut BondSet, a: usize, b: usize) -> String {
    let Ok(bond) = Bond::new(a, b) else {
        return BOND_ABSENT.to_string();
    };
    match bonds.remove(bond) {
        RemoveOutcome::Removed => BOND_REMOVED.to_string(),
        RemoveOutcome::Absent => BOND_ABSENT.to_string(),
    }
}
