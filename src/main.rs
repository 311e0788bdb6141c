//! Command-line driver for the spreader detector pipeline.
//!
//! `spreader-detector <people-file> <meetings-file>`
//!
//! Loads the people dataset, replays the meetings dataset against it, ranks
//! everyone by infection probability and writes the triage report. Any
//! failure prints one fixed diagnostic line to stderr and exits with status
//! 1; all owned resources unwind before the process terminates.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::info;

use spreader_detector::algorithm::propagation::InfectionPropagator;
use spreader_detector::config::TracerConfig;
use spreader_detector::error::{Result, TracerError};
use spreader_detector::registry::PersonRegistry;
use spreader_detector::report::write_report;

/// Environment variable naming an optional JSON file of config overrides
const CONFIG_ENV_VAR: &str = "SPREADER_DETECTOR_CONFIG";

fn main() -> ExitCode {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("pipeline failed: {err}");
            eprintln!("{}", err.diagnostic());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = env::args_os().skip(1);
    let (Some(people_path), Some(meetings_path), None) = (args.next(), args.next(), args.next())
    else {
        return Err(TracerError::Usage);
    };
    let people_path = PathBuf::from(people_path);
    let meetings_path = PathBuf::from(meetings_path);

    let config = match env::var_os(CONFIG_ENV_VAR) {
        Some(path) => TracerConfig::from_json_file(Path::new(&path))?,
        None => TracerConfig::default(),
    };

    let mut registry = PersonRegistry::load(&people_path, &config)?;
    let propagator = InfectionPropagator::new(&config);

    if registry.is_empty() {
        // Nobody to triage. The meetings file must still open cleanly, and
        // the report artifact is still produced (empty).
        propagator.apply(&meetings_path, &mut registry)?;
        write_report(&registry, &config)?;
        return Ok(());
    }

    registry.sort_by_id();
    propagator.apply(&meetings_path, &mut registry)?;
    registry.sort_by_probability();
    let summary = write_report(&registry, &config)?;
    info!("{summary}");
    Ok(())
}
