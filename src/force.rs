//! Force evaluator (spec.md 4.E): numerical (central-difference on the
//! potential) and analytical (closed-form gradient) modes, selected by
//! `ForceMode`.
//!
//! The analytical formulas mirror `molecule/molecule.rs`'s
//! `compute_bond_force`/`compute_angle_force` technique in the reference
//! implementation (central-difference probing for terms without a closed
//! form), specialized here to the three terms this kernel actually has
//! closed forms for.

use crate::atom::Atom;
use crate::config::ForceMode;
use crate::constants::{COULOMB, DISTANCE_FLOOR};
use crate::potential::potential_total;
use crate::universe::Universe;
use crate::vector::{minimum_image, Vec3};

/// Recompute every atom's force vector in place, using the selected mode.
pub fn compute_forces(universe: &mut Universe, mode: ForceMode) {
    match mode {
        ForceMode::Numerical { h } => compute_forces_numerical(universe, h),
        ForceMode::Analytical => compute_forces_analytical(universe),
    }
}

/// F_i = -grad_i U_i, approximated by central differences. Axis order is
/// x, y, z; the perturbed coordinate is fully restored before probing the
/// next axis (spec.md 4.E).
fn compute_forces_numerical(universe: &mut Universe, h: f64) {
    let n = universe.atoms().len();
    for i in 0..n {
        let mut force = Vec3::zeros();
        for axis in 0..3 {
            let original = universe.atoms()[i].position[axis];

            universe.atoms_mut()[i].position[axis] = original + h;
            let u_plus = potential_total(universe, i);

            universe.atoms_mut()[i].position[axis] = original - h;
            let u_minus = potential_total(universe, i);

            universe.atoms_mut()[i].position[axis] = original;

            force[axis] = -(u_plus - u_minus) / (2.0 * h);
        }
        universe.atoms_mut()[i].force = force;
    }
}

/// Closed-form gradient sum of the bonded, Coulomb, and Lennard-Jones
/// terms, pair by pair. A bond's contribution is computed independently by
/// each of its two endpoints from their own (mirrored) bond-list entry, so
/// Newton's third law falls out without an explicit antisymmetric
/// scatter-add (spec.md 4.E).
fn compute_forces_analytical(universe: &mut Universe) {
    let box_length = universe.box_length();
    // A read-only snapshot decouples the positions we read from the forces
    // we are about to write, since force on i reads every other atom j.
    let snapshot: Vec<Atom> = universe.atoms().to_vec();

    for (i, atom_i) in snapshot.iter().enumerate() {
        let mut force = Vec3::zeros();

        for bond in &atom_i.bonds {
            let delta = minimum_image(snapshot[bond.partner].position - atom_i.position, box_length);
            let d = delta.norm();
            if d < DISTANCE_FLOOR {
                continue;
            }
            let dr = d - bond.r0;
            force += bond.k * dr * (delta / d);
        }

        for (j, atom_j) in snapshot.iter().enumerate() {
            if j == i || atom_i.is_bonded_to(j) {
                continue;
            }
            let delta = minimum_image(atom_j.position - atom_i.position, box_length);
            let d = delta.norm();
            if d < DISTANCE_FLOOR {
                continue;
            }

            force += -COULOMB * atom_i.charge * atom_j.charge * delta / d.powi(3);

            let epsilon_ij = (atom_i.epsilon * atom_j.epsilon).sqrt();
            let sigma_ij = 0.5 * (atom_i.sigma + atom_j.sigma);
            let sr6 = (sigma_ij / d).powi(6);
            let sr12 = sr6 * sr6;
            let lj_mag = 24.0 * epsilon_ij * (2.0 * sr12 - sr6) / d;
            force += lj_mag * (delta / d);
        }

        universe.atoms_mut()[i].force = force;
    }
}
