//! Initialization (spec.md 4.G): replicate the reference molecule into the
//! box and assign thermal velocities.
//!
//! Two latent bugs from the reference implementation are fixed here rather
//! than carried forward (spec.md 9):
//!
//! - the placement offset is `X * L` with `X` drawn uniform in `[0, 1)`,
//!   not `cos(rand())` applied to an integer (open question 1);
//! - each duplicated atom is built fresh via `Atom::clone` plus an explicit
//!   position offset, so there is no component-copy bug to reproduce (open
//!   question 2): velocity/acceleration/force start at zero for every live
//!   atom regardless of how the reference atom was laid out in memory.

use crate::atom::Atom;
use crate::vector::marsaglia;
use rand::Rng;

/// Replicate `ref_atoms` into `copies` copies, each offset by a random
/// vector of magnitude `X * box_length` (`X` uniform in `[0, 1)`), with bond
/// partner indices translated into the copy's slice of the live atom list
/// (spec.md 3 invariant 4).
pub fn populate<R: Rng + ?Sized>(
    ref_atoms: &[Atom],
    copies: u64,
    box_length: f64,
    rng: &mut R,
) -> Vec<Atom> {
    let ref_count = ref_atoms.len();
    let mut atoms = Vec::with_capacity(ref_count * copies as usize);

    for copy_index in 0..copies {
        let direction = marsaglia(rng);
        let magnitude = rng.random::<f64>() * box_length;
        let offset = direction * magnitude;

        for reference in ref_atoms {
            let mut duplicate = reference.clone();
            duplicate.position += offset;
            duplicate.translate_bonds(copy_index as usize * ref_count);
            atoms.push(duplicate);
        }
    }

    atoms
}

/// Assign each live atom a velocity of magnitude
/// `sqrt(3 * k_B * T / m_mol)` (the reference molecule's total mass) in a
/// fresh random direction, per spec.md 4.G step 7.
pub fn assign_velocities<R: Rng + ?Sized>(
    atoms: &mut [Atom],
    ref_atoms: &[Atom],
    temperature: f64,
    rng: &mut R,
) {
    let mass_mol: f64 = ref_atoms.iter().map(|a| a.mass()).sum();
    if mass_mol <= 0.0 {
        return;
    }
    let speed = (3.0 * crate::constants::BOLTZMANN * temperature / mass_mol).sqrt();
    for atom in atoms.iter_mut() {
        atom.velocity = marsaglia(rng) * speed;
    }
}
