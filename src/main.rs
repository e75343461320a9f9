use clap::Parser;
use log::{error, info};
use senpai_md::{driver, RunConfig, Universe};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = RunConfig::parse();

    let log_level = match config.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("starting run with configuration:\n{}", config.to_json_summary());

    let mut rng = rand::rng();

    match run(&config, &mut rng) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig, rng: &mut impl rand::Rng) -> senpai_md::SimResult<()> {
    let mut universe = Universe::init(config, rng)?;
    driver::run(&mut universe, config, rng)
}
