//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod catalog;
pub mod check;
pub mod generate;
pub mod geometry;

use std::path::Path;

use stimulus_core::catalog::{Experiment, ExperimentConfig};
use tracing::info;

use crate::{CliError, Result};

/// Loads an experiment file, or the shipped variant when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<ExperimentConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()));
            }
            info!("Loading experiment from {}", path.display());
            Ok(ExperimentConfig::load(path)?)
        }
        None => Ok(ExperimentConfig::default()),
    }
}

/// Loads and validates an experiment.
pub fn load_experiment(path: Option<&Path>) -> Result<Experiment> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()));
            }
            info!("Loading experiment from {}", path.display());
            Ok(ExperimentConfig::load_and_validate(path)?)
        }
        None => Ok(ExperimentConfig::default().validate()?),
    }
}

/// Writes `contents` to `output`, or to stdout when `output` is `None`.
pub fn emit(contents: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, contents)?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", contents),
    }
    Ok(())
}
