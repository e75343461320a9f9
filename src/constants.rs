//! Physical constants and tunables that are not part of `RunConfig`.
//!
//! These are process-wide but not mutable state (contrast with the C source's
//! file-scope `#define`s): every component that needs one takes it as a plain
//! argument or reads it from this module, never from a global.

/// Boltzmann constant, J/K.
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Coulomb constant k_e = 1 / (4 pi epsilon_0), N*m^2/C^2.
pub const COULOMB: f64 = 8.99e9;

/// Below this separation (m), a pair is skipped rather than evaluated, to avoid
/// the 1/d and 1/d^2 singularities. See spec `potential.rs` edge policy.
pub const DISTANCE_FLOOR: f64 = 1e-12;

/// Default finite-difference step for `ForceMode::Numerical`, in metres.
pub const DEFAULT_NUMERICAL_STEP: f64 = 1e-12;

/// Angstrom -> metre conversion used when loading reference atom positions.
pub const ANGSTROM: f64 = 1e-10;

/// Per-atom retry cap for the Monte-Carlo minimizer (spec.md 9, open question 4).
pub const MC_MAX_TRIES: u32 = 10_000;

/// Number of consecutive rejections before the MC minimizer shrinks its step.
pub const MC_REFINE_AFTER: u32 = 50;

/// Factor the MC minimizer's step is scaled by after `MC_REFINE_AFTER` rejections.
pub const MC_REFINE_FACTOR: f64 = 0.1;

/// Initial MC displacement magnitude, in metres (1 nm).
pub const MC_INITIAL_STEP: f64 = 1e-9;
