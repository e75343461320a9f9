//! Trajectory writer (spec.md 6): formats and appends one XYZ frame.
//!
//! A frame is built as a single `String` before any write happens, so a
//! mid-frame I/O failure can never leave a truncated frame on disk (spec.md
//! 7: "partial frames are never emitted").

use crate::atom::Atom;
use crate::constants::ANGSTROM;
use crate::model::element_symbol;
use std::fmt::Write as _;

/// Render one trajectory frame in extended-XYZ form: atom count, iteration
/// index, then one `symbol x y z` line per atom with positions in
/// Angstroms.
pub fn format_frame(atoms: &[Atom], iteration: u64) -> String {
    let mut out = String::with_capacity(32 + atoms.len() * 32);
    let _ = writeln!(out, "{}", atoms.len());
    let _ = writeln!(out, "{iteration}");
    for atom in atoms {
        let _ = writeln!(
            out,
            "{}\t{:.6}\t{:.6}\t{:.6}",
            element_symbol(atom.element),
            atom.position.x / ANGSTROM,
            atom.position.y / ANGSTROM,
            atom.position.z / ANGSTROM,
        );
    }
    out
}
