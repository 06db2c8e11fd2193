//! Scenario catalog and experiment variants.
//!
//! - `config`: serialisable [`ExperimentConfig`] with TOML loading and validation
//! - `experiment`: the validated, immutable [`Experiment`] consumed by the engine
//! - `scenario`: validated lottery [`Scenario`]s
//! - `defaults`: the shipped 20-round study variant

mod defaults;

pub mod config;
pub mod experiment;
pub mod scenario;

pub use config::{ClassMap, ExperimentConfig, ScenarioConfig};
pub use experiment::{BlockLayout, Experiment, ModeOrder};
pub use scenario::{Scenario, PROBABILITY_TOLERANCE};
