//! Classical molecular-dynamics simulation kernel: bonded harmonic,
//! Coulomb, and Lennard-Jones interactions under periodic boundary
//! conditions, integrated with velocity-Verlet.

pub mod atom;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod force;
pub mod init;
pub mod integrator;
pub mod model;
pub mod montecarlo;
pub mod parser;
pub mod potential;
pub mod universe;
pub mod vector;
pub mod writer;

pub use config::{ForceMode, RunConfig};
pub use error::{SimError, SimResult};
pub use universe::Universe;
