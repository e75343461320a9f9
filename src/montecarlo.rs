//! Monte-Carlo energy minimizer (spec.md 4.H).
//!
//! Picks one atom at random, proposes a small random displacement, and keeps
//! it only if it lowers the system's total potential (spec.md 9, open
//! question 4): the reference implementation's `minimize` loops forever on a
//! stuck atom; this one caps retries per atom at `MC_MAX_TRIES`, shrinking
//! the step size after `MC_REFINE_AFTER` consecutive rejections, and gives
//! up on that atom (leaving its position unchanged) if the cap is hit.

use crate::constants::{MC_INITIAL_STEP, MC_MAX_TRIES, MC_REFINE_AFTER, MC_REFINE_FACTOR};
use crate::potential::potential_total_system;
use crate::universe::Universe;
use crate::vector::marsaglia;
use log::{debug, warn};
use rand::Rng;

/// Run one Monte-Carlo minimization sweep: attempt one accept/reject
/// displacement per atom in the live atom list, in order.
pub fn minimize<R: Rng + ?Sized>(universe: &mut Universe, rng: &mut R) {
    let atom_count = universe.atoms().len();
    for i in 0..atom_count {
        minimize_one(universe, i, rng);
    }
}

/// Run `sweeps` full passes over the atom list.
pub fn minimize_n<R: Rng + ?Sized>(universe: &mut Universe, sweeps: u32, rng: &mut R) {
    for _ in 0..sweeps {
        minimize(universe, rng);
    }
}

fn minimize_one<R: Rng + ?Sized>(universe: &mut Universe, i: usize, rng: &mut R) {
    let mut step = MC_INITIAL_STEP;
    let mut tries = 0u32;
    let mut rejections = 0u32;

    while tries < MC_MAX_TRIES {
        let before = potential_total_system(universe);
        let original_position = universe.atoms()[i].position;

        let displacement = marsaglia(rng) * step;
        universe.atoms_mut()[i].position += displacement;

        let after = potential_total_system(universe);
        debug!("monte-carlo: atom {i} try {tries} step {step:.3e}: {before:.6e} -> {after:.6e}");
        if after < before {
            return;
        }

        universe.atoms_mut()[i].position = original_position;
        tries += 1;
        rejections += 1;
        if rejections >= MC_REFINE_AFTER {
            step *= MC_REFINE_FACTOR;
            rejections = 0;
        }
    }

    warn!("monte-carlo: atom {i} exhausted {MC_MAX_TRIES} tries without a lowering move");
}
