//! Potential evaluator (spec.md 4.D): per-atom total potential as the sum of
//! bonded harmonic, Coulomb, and Lennard-Jones terms under minimum-image
//! convention.
//!
//! Grounded on `molecule/molecule.rs`'s `compute_bond_force` /
//! `compute_electostatic_bond_short_force` energy formulas in the reference
//! implementation, restated here as pure energy functions (the force
//! evaluator in `force.rs` differentiates them, either numerically or in
//! closed form).

use crate::constants::{COULOMB, DISTANCE_FLOOR};
use crate::universe::Universe;
use crate::vector::minimum_image;

/// Harmonic bonded contribution to atom `i`'s potential: sum over its
/// bonded partners of `1/2 * k * (d - d0)^2`, where `d` is the minimum-image
/// distance and `d0` the precomputed equilibrium length (spec.md 4.D, 9).
pub fn potential_bond(universe: &Universe, i: usize) -> f64 {
    let atoms = universe.atoms();
    let atom = &atoms[i];
    let mut total = 0.0;
    for bond in &atom.bonds {
        let delta = atoms[bond.partner].position - atom.position;
        let d = minimum_image(delta, universe.box_length()).norm();
        if d < DISTANCE_FLOOR {
            continue;
        }
        let dr = d - bond.r0;
        total += 0.5 * bond.k * dr * dr;
    }
    total
}

/// Coulomb contribution to atom `i`'s potential, summed over every
/// non-bonded `j != i`.
pub fn potential_elec(universe: &Universe, i: usize) -> f64 {
    let atoms = universe.atoms();
    let atom = &atoms[i];
    let mut total = 0.0;
    for (j, other) in atoms.iter().enumerate() {
        if j == i || atom.is_bonded_to(j) {
            continue;
        }
        let delta = other.position - atom.position;
        let d = minimum_image(delta, universe.box_length()).norm();
        if d < DISTANCE_FLOOR {
            continue;
        }
        total += COULOMB * atom.charge * other.charge / d;
    }
    total
}

/// Lennard-Jones contribution to atom `i`'s potential, over the same
/// non-bonded pair set as Coulomb, using Lorentz-Berthelot mixing.
pub fn potential_lj(universe: &Universe, i: usize) -> f64 {
    let atoms = universe.atoms();
    let atom = &atoms[i];
    let mut total = 0.0;
    for (j, other) in atoms.iter().enumerate() {
        if j == i || atom.is_bonded_to(j) {
            continue;
        }
        let delta = other.position - atom.position;
        let d = minimum_image(delta, universe.box_length()).norm();
        if d < DISTANCE_FLOOR {
            continue;
        }
        let epsilon_ij = (atom.epsilon * other.epsilon).sqrt();
        let sigma_ij = 0.5 * (atom.sigma + other.sigma);
        let sr6 = (sigma_ij / d).powi(6);
        let sr12 = sr6 * sr6;
        total += 4.0 * epsilon_ij * (sr12 - sr6);
    }
    total
}

/// Atom `i`'s total potential: bonded + Coulomb + Lennard-Jones.
pub fn potential_total(universe: &Universe, i: usize) -> f64 {
    potential_bond(universe, i) + potential_elec(universe, i) + potential_lj(universe, i)
}

/// The whole system's total potential, used by the Monte-Carlo minimizer.
///
/// Note this double-counts each non-bonded pair's Coulomb/LJ contribution
/// (once from each endpoint) and each bond's energy (once from each
/// endpoint), matching the reference implementation's
/// `universe_energy_potential`, which sums `potential_total` over every atom
/// without halving pairwise terms. The Monte-Carlo minimizer only compares
/// this quantity before and after a displacement, so the constant
/// double-counting factor does not affect which moves are accepted.
pub fn potential_total_system(universe: &Universe) -> f64 {
    (0..universe.atoms().len()).map(|i| potential_total(universe, i)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Bond;
    use crate::config::RunConfig;
    use crate::vector::Vec3;
    use std::path::PathBuf;

    fn bare_config() -> RunConfig {
        RunConfig {
            path: PathBuf::new(),
            out_path: PathBuf::new(),
            copies: 1,
            temperature: 300.0,
            pressure: 1e5,
            timestep: 1e-15,
            max_time: 1e-12,
            frameskip: 0,
            numerical: false,
            numerical_step: 1e-12,
            minimize: false,
            verbose: 0,
        }
    }

    #[test]
    fn bonded_potential_is_zero_at_equilibrium() {
        let mut universe = Universe::empty(bare_config(), 10.0);
        let mut a = crate::atom::Atom::new(1, Vec3::new(0.0, 0.0, 0.0), 0.0, 1.0, 1.0);
        let mut b = crate::atom::Atom::new(1, Vec3::new(0.74e-10, 0.0, 0.0), 0.0, 1.0, 1.0);
        a.bonds.push(Bond { partner: 1, k: 500.0, r0: 0.74e-10 });
        b.bonds.push(Bond { partner: 0, k: 500.0, r0: 0.74e-10 });
        universe.atoms_mut().extend([a, b]);

        assert!(potential_bond(&universe, 0).abs() < 1e-30);
        assert!(potential_bond(&universe, 1).abs() < 1e-30);
    }

    #[test]
    fn bonded_pair_is_excluded_from_coulomb_and_lj() {
        let mut universe = Universe::empty(bare_config(), 10.0);
        let mut a = crate::atom::Atom::new(1, Vec3::new(0.0, 0.0, 0.0), 1.0, 1.0, 1.0);
        let mut b = crate::atom::Atom::new(1, Vec3::new(0.1, 0.0, 0.0), -1.0, 1.0, 1.0);
        a.bonds.push(Bond { partner: 1, k: 500.0, r0: 0.1 });
        b.bonds.push(Bond { partner: 0, k: 500.0, r0: 0.1 });
        universe.atoms_mut().extend([a, b]);

        assert_eq!(potential_elec(&universe, 0), 0.0);
        assert_eq!(potential_lj(&universe, 0), 0.0);
    }

    #[test]
    fn coulomb_matches_closed_form_for_isolated_pair() {
        let mut universe = Universe::empty(bare_config(), 100.0);
        let e = 1.602176634e-19;
        let a = crate::atom::Atom::new(1, Vec3::new(0.0, 0.0, 0.0), e, 0.0, 0.0);
        let b = crate::atom::Atom::new(1, Vec3::new(3e-10, 0.0, 0.0), -e, 0.0, 0.0);
        universe.atoms_mut().extend([a, b]);

        let expected = -COULOMB * e * e / 3e-10;
        assert!((potential_elec(&universe, 0) - expected).abs() / expected.abs() < 1e-9);
    }

    #[test]
    fn lj_pair_decays_to_zero_at_large_separation() {
        let mut universe = Universe::empty(bare_config(), 1000.0);
        let a = crate::atom::Atom::new(1, Vec3::new(0.0, 0.0, 0.0), 0.0, 1e-21, 3e-10);
        let b = crate::atom::Atom::new(1, Vec3::new(100e-9, 0.0, 0.0), 0.0, 1e-21, 3e-10);
        universe.atoms_mut().extend([a, b]);
        assert!(potential_lj(&universe, 0).abs() < 1e-40);
    }
}
