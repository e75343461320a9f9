//! Element lookup tables: species code -> mass, species code -> display symbol.
//!
//! Both are total functions over `u8` (spec.md 4.B): an unrecognized code
//! returns `0.0` for mass and `"?"` for the symbol rather than erroring, since
//! a missing element is a data-quality issue for the input file, not a
//! fatal condition the kernel itself needs to reject.

/// Atomic mass in kilograms, for the elements this simulator recognizes.
pub fn element_mass(element: u8) -> f64 {
    match element {
        1 => 1.6735575e-27,  // 1H
        6 => 1.9944733e-26,  // 12C
        7 => 2.3258671e-26,  // 14N
        8 => 2.6566962e-26,  // 16O
        _ => 0.0,
    }
}

/// Display symbol for the XYZ trajectory, for the elements this simulator
/// recognizes.
pub fn element_symbol(element: u8) -> &'static str {
    match element {
        1 => "H",
        6 => "C",
        7 => "N",
        8 => "O",
        _ => "?",
    }
}
