use std::fmt;

/// A distinct orbital energy, in units of β relative to α, and how many orbitals share it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyLevel {
    pub energy: f64,
    pub degeneracy: usize,
}

impl fmt::Display for EnergyLevel {
    /// Renders as `α + xβ` or `α − xβ`. The formatter precision sets the decimals for
    /// `x` (3 if unset).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        let sign = if self.energy >= 0.0 { '+' } else { '−' };
        write!(
            f,
            "α {} {:.*}β",
            sign,
            precision,
            self.energy.abs()
        )
    }
}

/// Energy levels sorted by strictly increasing energy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReducedSpectrum {
    levels: Vec<EnergyLevel>,
}

impl ReducedSpectrum {
    pub fn levels(&self) -> &[EnergyLevel] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Sum of degeneracies, which equals the number of atoms the spectrum came from.
    pub fn total_orbitals(&self) -> usize {
        self.levels.iter().map(|l| l.degeneracy).sum()
    }

    /// Back to a flat multiset of energies, each repeated by its degeneracy.
    pub fn expand(&self) -> Vec<f64> {
        self.levels
            .iter()
            .flat_map(|l| std::iter::repeat_n(l.energy, l.degeneracy))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnergyLevel> {
        self.levels.iter()
    }
}

impl<'a> IntoIterator for &'a ReducedSpectrum {
    type Item = &'a EnergyLevel;
    type IntoIter = std::slice::Iter<'a, EnergyLevel>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

/// Rounds half away from zero to `decimals` places. Negative zero becomes positive zero so
/// a vanishing eigenvalue never splits into two levels.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Rounds, sorts and groups raw eigenvalues into energy levels.
///
/// Values must be finite; the eigensolver wrapper guarantees this.
pub fn reduce(eigenvalues: &[f64], decimals: u32) -> ReducedSpectrum {
    let mut rounded: Vec<f64> = eigenvalues.iter().map(|&e| round_to(e, decimals)).collect();
    rounded.sort_by(f64::total_cmp);

    let mut levels: Vec<EnergyLevel> = Vec::new();
    for energy in rounded {
        match levels.last_mut() {
            Some(level) if level.energy == energy => level.degeneracy += 1,
            _ => levels.push(EnergyLevel {
                energy,
                degeneracy: 1,
            }),
        }
    }
    ReducedSpectrum { levels }
}
