//! The `Atom` value type and its bonded partners.
//!
//! Grounded on `molecule/molecule.rs`'s `Atom`/`SimpleBond` pair in the
//! reference implementation, which already models an atom as an inline value
//! (position/velocity/force as `Vector3<f64>`, `mass`, `charge`) rather than a
//! pointer-chased struct. This crate carries that further per spec.md 9's
//! re-architecture guidance: a bonded partner and its stiffness are kept
//! together as one `Bond` entry instead of two parallel arrays, so the two
//! sequences can never drift out of sync.

use crate::model::element_mass;
use crate::vector::Vec3;

/// A bond to another atom, identified by its index into the owning
/// `Universe`'s atom list. `r0` is the equilibrium bond length, precomputed
/// once from the reference molecule's geometry at load time (spec.md 9, open
/// question 5) rather than re-derived from the reference atoms on every
/// potential evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    pub partner: usize,
    pub k: f64,
    pub r0: f64,
}

/// A single classical particle: its kinematics, identity, and bonded
/// partners (spec.md 3).
#[derive(Debug, Clone)]
pub struct Atom {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub force: Vec3,

    pub element: u8,
    pub charge: f64,
    pub epsilon: f64,
    pub sigma: f64,

    pub bonds: Vec<Bond>,
}

impl Atom {
    pub fn new(element: u8, position: Vec3, charge: f64, epsilon: f64, sigma: f64) -> Self {
        Atom {
            position,
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            force: Vec3::zeros(),
            element,
            charge,
            epsilon,
            sigma,
            bonds: Vec::new(),
        }
    }

    pub fn mass(&self) -> f64 {
        element_mass(self.element)
    }

    /// True if `other` is a bonded partner index of this atom.
    pub fn is_bonded_to(&self, other: usize) -> bool {
        self.bonds.iter().any(|b| b.partner == other)
    }

    /// Translate every bond partner index by `offset`, used when replicating
    /// the reference molecule into a new copy's index range (spec.md 4.G).
    pub fn translate_bonds(&mut self, offset: usize) {
        for bond in &mut self.bonds {
            bond.partner += offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_zero_kinematics() {
        let a = Atom::new(1, Vec3::new(1.0, 2.0, 3.0), 0.0, 1.0, 1.0);
        assert_eq!(a.velocity, Vec3::zeros());
        assert_eq!(a.acceleration, Vec3::zeros());
        assert_eq!(a.force, Vec3::zeros());
        assert!(a.bonds.is_empty());
    }

    #[test]
    fn mass_looks_up_model_table() {
        let a = Atom::new(8, Vec3::zeros(), 0.0, 1.0, 1.0);
        assert!(a.mass() > 0.0);
    }

    #[test]
    fn is_bonded_to_checks_partner_list() {
        let mut a = Atom::new(6, Vec3::zeros(), 0.0, 1.0, 1.0);
        a.bonds.push(Bond { partner: 3, k: 500.0, r0: 1.5e-10 });
        assert!(a.is_bonded_to(3));
        assert!(!a.is_bonded_to(4));
    }

    #[test]
    fn translate_bonds_shifts_all_partners() {
        let mut a = Atom::new(6, Vec3::zeros(), 0.0, 1.0, 1.0);
        a.bonds.push(Bond { partner: 0, k: 1.0, r0: 1.0 });
        a.bonds.push(Bond { partner: 2, k: 1.0, r0: 1.0 });
        a.translate_bonds(10);
        assert_eq!(a.bonds[0].partner, 10);
        assert_eq!(a.bonds[1].partner, 12);
    }
}
