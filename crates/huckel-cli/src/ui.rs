use huckel::core::models::connectivity::Connectivity;
use huckel::core::models::topology::BondSet;
use huckel::engine::spectrum::ReducedSpectrum;
use std::fmt::Write;

pub const SEPARATOR: &str = "----------------";

pub fn welcome() -> String {
    format!("{SEPARATOR}\nGeneral Hückel Solver\n")
}

pub fn commands() -> String {
    let mut s = format!("{SEPARATOR}\nAvailable commands:\n\n");
    for (name, help) in [
        ("linear", "find orbital energies for a linear polyene with n carbons"),
        ("cyclic", "find orbital energies for a cyclic polyene with n carbons"),
        ("presets", "display a list of available preset molecules"),
        ("custom", "find orbital energies for a molecule with specified connectivity"),
        ("help", "display this list of commands"),
        ("quit", "exits the program"),
    ] {
        let _ = writeln!(s, "{name}\t{help}");
    }
    s
}

pub fn custom_instructions() -> String {
    format!(
        "{SEPARATOR}\nCustom molecule input\n\
         To add a bond between two atoms, type 'add'\n\
         To remove a bond, type 'remove'\n\
         To view all current bonds, type 'bonds'\n\
         To finish, type 'done'\n\
         To discard this molecule, type 'cancel'\n"
    )
}

pub fn presets<S: AsRef<str>>(names: &[S]) -> String {
    let mut s = format!("{SEPARATOR}\nAvailable presets:\n\n");
    for name in names {
        let _ = writeln!(s, "{}", name.as_ref());
    }
    s
}

pub fn bonds(bonds: &BondSet) -> String {
    let mut s = String::from("Current bonds:\n");
    if bonds.is_empty() {
        s.push_str("(none)\n");
    }
    for bond in bonds.iter() {
        let _ = writeln!(s, "{bond}");
    }
    s
}

pub fn connectivity(connectivity: &Connectivity) -> String {
    format!("{SEPARATOR}\nConnectivity:\n\n{connectivity}")
}

/// One line per level, lowest energy first: `Energy: α + 1.618β  Degeneracy: 1`.
pub fn spectrum(spectrum: &ReducedSpectrum, precision: usize) -> String {
    let mut s = format!("{SEPARATOR}\nOrbital energies:\n\n");
    for level in spectrum {
        let _ = writeln!(
            s,
            "Energy:\t{:.*}\tDegeneracy: {}",
            precision, level, level.degeneracy
        );
    }
    s
}
