//! Catalog command implementation
//!
//! Prints an experiment as TOML. Without an experiment file this is the
//! shipped variant, a starting point for custom catalogs.

use std::path::Path;

use stimulus_core::catalog::ExperimentConfig;
use tracing::info;

use crate::Result;

/// Run the catalog command
pub fn run(experiment: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let config = super::load_config(experiment)?;
    let rendered = render(&config)?;
    info!("Catalog '{}' is valid", config.name);
    super::emit(&rendered, output)
}

/// Validates `config` and serialises it as TOML.
pub fn render(config: &ExperimentConfig) -> Result<String> {
    config.validate()?;
    Ok(config.to_toml_string()?)
}
