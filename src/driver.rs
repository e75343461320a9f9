//! Driver loop (spec.md 4.I): optional minimization, then integrate until
//! `max_time`, writing a trajectory frame every `frameskip + 1` iterations
//! starting from iteration 0.

use crate::config::RunConfig;
use crate::error::SimResult;
use crate::integrator;
use crate::montecarlo;
use crate::universe::Universe;
use log::{debug, info};
use rand::Rng;

/// Run the whole simulation against an already-initialized universe.
pub fn run<R: Rng + ?Sized>(universe: &mut Universe, config: &RunConfig, rng: &mut R) -> SimResult<()> {
    if config.minimize {
        info!("running monte-carlo minimization before integration");
        montecarlo::minimize(universe, rng);
    }

    let mode = config.force_mode();
    let stride = config.frameskip + 1;

    universe.write_frame()?;
    while universe.time() < config.max_time {
        integrator::step(universe, config.timestep, mode);
        debug!(
            "iteration {}: t = {:.3e} s, {} atoms",
            universe.iteration(),
            universe.time(),
            universe.atom_count()
        );
        if universe.iteration() % stride == 0 {
            universe.write_frame()?;
        }
    }

    info!(
        "simulation complete: {} iterations, t = {:.3e} s",
        universe.iteration(),
        universe.time()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::vector::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    fn bare_config(frameskip: u64, max_time: f64) -> RunConfig {
        RunConfig {
            path: PathBuf::new(),
            out_path: PathBuf::new(),
            copies: 1,
            temperature: 300.0,
            pressure: 1e5,
            timestep: 1e-15,
            max_time,
            frameskip,
            numerical: false,
            numerical_step: 1e-12,
            minimize: false,
            verbose: 0,
        }
    }

    #[test]
    fn run_advances_time_to_at_least_max_time() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = bare_config(0, 5e-15);
        let mut universe = Universe::empty(config.clone(), 1.0);
        universe.atoms_mut().push(Atom::new(1, Vec3::new(0.5, 0.5, 0.5), 0.0, 1.0, 1.0));

        run(&mut universe, &config, &mut rng).unwrap();
        assert!(universe.time() >= config.max_time);
    }

    #[test]
    fn run_writes_a_frame_every_stride_iterations() {
        let mut rng = StdRng::seed_from_u64(43);
        // frameskip 4 -> stride 5; 20 iterations at dt = 1e-15 gives frames
        // at iterations {0, 5, 10, 15, 20}, five frames total (spec.md 8
        // scenario 6).
        let config = bare_config(4, 20e-15);
        let mut universe = Universe::empty(config.clone(), 1.0);
        universe.atoms_mut().push(Atom::new(1, Vec3::new(0.5, 0.5, 0.5), 0.0, 1.0, 1.0));

        run(&mut universe, &config, &mut rng).unwrap();
        assert_eq!(universe.iteration(), 20);

        let bytes = universe.writer_bytes();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // Each one-atom frame is 3 lines: atom count, iteration index, one atom line.
        assert_eq!(lines.len() % 3, 0);
        let frame_count = lines.len() / 3;
        assert_eq!(frame_count, 5);

        let iterations: Vec<u64> = (0..frame_count)
            .map(|frame| lines[frame * 3 + 1].parse().unwrap())
            .collect();
        assert_eq!(iterations, vec![0, 5, 10, 15, 20]);
    }
}
