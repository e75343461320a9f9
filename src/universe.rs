//! `Universe`: the simulation state (spec.md 3, 4.C).
//!
//! Owns the reference molecule, the live atom list, the box, the clock, and
//! the trajectory sink. Constructed once by `Universe::init`, mutated only
//! by the integrator, the Monte-Carlo minimizer, and the frame writer, and
//! torn down implicitly by `Drop` (the buffered writer flushes when the
//! `Universe` is dropped) — there is no explicit teardown call to get wrong,
//! unlike the reference implementation's `universe_clean`.

use crate::atom::{Atom, Bond};
use crate::config::RunConfig;
use crate::constants::{ANGSTROM, BOLTZMANN};
use crate::error::{SimError, SimResult};
use crate::init;
use crate::integrator::apply_pbc;
use crate::parser::parse_molecule_file;
use crate::vector::Vec3;
use crate::writer::format_frame;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::{Arc, Mutex};

/// An in-memory `Write` sink shared with the test that constructed it, so
/// `Universe::empty` can hand the universe a boxed sink while keeping a
/// handle to read the bytes back (spec.md 8 scenario 6).
struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.lock().unwrap().flush()
    }
}

pub struct Universe {
    ref_atoms: Vec<Atom>,
    atoms: Vec<Atom>,

    box_length: f64,
    time: f64,
    iteration: u64,

    temperature: f64,
    pressure: f64,
    copies: u64,

    pub meta_name: String,
    pub meta_author: String,
    pub meta_comment: String,

    writer: BufWriter<Box<dyn Write + Send>>,
    test_buffer: Option<Arc<Mutex<Vec<u8>>>>,
}

impl Universe {
    /// Build the universe's reference-atom list (with precomputed bond
    /// equilibrium lengths, spec.md 9) from a parsed molecule.
    fn reference_atoms_from_parsed(molecule: &crate::parser::ParsedMolecule) -> Vec<Atom> {
        let mut ref_atoms: Vec<Atom> = molecule
            .atoms
            .iter()
            .map(|pa| {
                Atom::new(
                    pa.element,
                    Vec3::new(pa.x, pa.y, pa.z) * ANGSTROM,
                    pa.charge,
                    pa.epsilon,
                    pa.sigma,
                )
            })
            .collect();

        for bond in &molecule.bonds {
            let r0 = (ref_atoms[bond.atom2].position - ref_atoms[bond.atom1].position).norm();
            ref_atoms[bond.atom1].bonds.push(Bond { partner: bond.atom2, k: bond.strength, r0 });
            ref_atoms[bond.atom2].bonds.push(Bond { partner: bond.atom1, k: bond.strength, r0 });
        }
        ref_atoms
    }

    /// Construct the universe from a run configuration: parse the input
    /// file, size the box from the ideal-gas relation (spec.md 3 invariant
    /// 5), replicate the reference molecule into `copies` copies, enforce
    /// PBC, and assign thermal velocities (spec.md 4.G).
    pub fn init<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> SimResult<Universe> {
        let molecule = parse_molecule_file(&config.path)?;
        let ref_atoms = Self::reference_atoms_from_parsed(&molecule);

        let box_length =
            (BOLTZMANN * config.copies as f64 * config.temperature / config.pressure).cbrt();

        let mut atoms = init::populate(&ref_atoms, config.copies, box_length, rng);
        apply_pbc(&mut atoms, box_length);
        init::assign_velocities(&mut atoms, &ref_atoms, config.temperature, rng);

        let output = File::create(&config.out_path).map_err(|source| SimError::IoOpen {
            path: config.out_path.clone(),
            source,
        })?;

        Ok(Universe {
            ref_atoms,
            atoms,
            box_length,
            time: 0.0,
            iteration: 0,
            temperature: config.temperature,
            pressure: config.pressure,
            copies: config.copies,
            meta_name: molecule.name,
            meta_author: molecule.author,
            meta_comment: molecule.comment,
            writer: BufWriter::new(Box::new(output)),
            test_buffer: None,
        })
    }

    /// Build a universe with no reference molecule and an in-memory sink,
    /// for unit tests that only need a live atom list and a box size. The
    /// written bytes are readable back via `writer_bytes`.
    #[cfg(any(test, feature = "test-support"))]
    pub fn empty(config: RunConfig, box_length: f64) -> Universe {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        Universe {
            ref_atoms: Vec::new(),
            atoms: Vec::new(),
            box_length,
            time: 0.0,
            iteration: 0,
            temperature: config.temperature,
            pressure: config.pressure,
            copies: config.copies,
            meta_name: String::new(),
            meta_author: String::new(),
            meta_comment: String::new(),
            writer: BufWriter::new(Box::new(SharedSink(buffer.clone()))),
            test_buffer: Some(buffer),
        }
    }

    /// The bytes written so far through the trajectory sink, flushed first.
    /// Only meaningful on a `Universe` built with `Universe::empty`.
    #[cfg(any(test, feature = "test-support"))]
    pub fn writer_bytes(&mut self) -> Vec<u8> {
        self.writer.flush().expect("in-memory sink never fails to flush");
        self.test_buffer
            .as_ref()
            .expect("writer_bytes called on a Universe not built by Universe::empty")
            .lock()
            .unwrap()
            .clone()
    }

    pub fn ref_atoms(&self) -> &[Atom] {
        &self.ref_atoms
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atoms_mut(&mut self) -> &mut Vec<Atom> {
        &mut self.atoms
    }

    pub fn box_length(&self) -> f64 {
        self.box_length
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn advance_time(&mut self, dt: f64) {
        self.time += dt;
        self.iteration += 1;
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    pub fn copies(&self) -> u64 {
        self.copies
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Append one XYZ frame for the current state. The whole frame is
    /// formatted before the write, so a failing write cannot leave a
    /// truncated frame on disk (spec.md 7).
    pub fn write_frame(&mut self) -> SimResult<()> {
        let frame = format_frame(&self.atoms, self.iteration);
        self.writer.write_all(frame.as_bytes()).map_err(|source| SimError::IoWrite {
            path: std::path::PathBuf::from("<trajectory>"),
            source,
        })
    }
}
