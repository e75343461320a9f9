//! Velocity-Verlet integrator (spec.md 4.F).
//!
//! Each step is three whole-array passes over the atom list — position,
//! then forces (via `force::compute_forces`), then acceleration and
//! velocity — never interleaved per atom, because the force on atom i reads
//! every other atom's position and so cannot be computed until every atom's
//! position update for this step has landed.

use crate::atom::Atom;
use crate::config::ForceMode;
use crate::force::compute_forces;
use crate::universe::Universe;
use crate::vector::{wrap_coordinate, Vec3};

/// Fold every atom's position into `[0, box_length)` component-wise.
pub fn apply_pbc(atoms: &mut [Atom], box_length: f64) {
    for atom in atoms.iter_mut() {
        atom.position = Vec3::new(
            wrap_coordinate(atom.position.x, box_length),
            wrap_coordinate(atom.position.y, box_length),
            wrap_coordinate(atom.position.z, box_length),
        );
    }
}

/// Advance the universe by one Velocity-Verlet step of size `dt` under the
/// given force mode.
pub fn step(universe: &mut Universe, dt: f64, mode: ForceMode) {
    // 1. Position update, using the acceleration computed on the previous
    //    iteration (zero on the very first call).
    for atom in universe.atoms_mut().iter_mut() {
        atom.position += atom.velocity * dt + 0.5 * atom.acceleration * dt * dt;
    }

    // 2. Enforce periodic boundary conditions before any force is computed
    //    from the new positions.
    apply_pbc(universe.atoms_mut(), universe.box_length());

    // 3. Recompute forces from the updated, wrapped positions.
    compute_forces(universe, mode);

    // 4. Acceleration update. The half-sum of old and new acceleration is
    //    captured before the old value is overwritten, since step 5 needs
    //    both.
    let half_sums: Vec<Vec3> = universe
        .atoms()
        .iter()
        .map(|atom| 0.5 * (atom.acceleration + atom.force / atom.mass()))
        .collect();
    for atom in universe.atoms_mut().iter_mut() {
        atom.acceleration = atom.force / atom.mass();
    }

    // 5. Velocity update using that half-sum.
    for (atom, half_sum) in universe.atoms_mut().iter_mut().zip(half_sums.iter()) {
        atom.velocity += half_sum * dt;
    }

    universe.advance_time(dt);
}
