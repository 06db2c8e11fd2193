//! # stimulus_core: Catalog and Types for the Investment Study
//!
//! ## Layer 1 (Foundation) Role
//!
//! stimulus_core is the bottom layer of the workspace, providing:
//! - Asset classes and frame/column output types (`types`)
//! - Structured error types: `CatalogError`, `ParticipantError`, `GeometryError`, `ConfigError` (`types::error`)
//! - Experiment configuration, validation and the shipped variant (`catalog`)
//! - Decimal rounding shared by payoff scaling and chart geometry (`math`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other stimulus_* crates, with minimal external dependencies:
//! - thiserror: Error derives
//! - serde: Serialisation of configuration and output types
//! - toml: Experiment configuration files
//!
//! ## Usage Examples
//!
//! ```rust
//! use stimulus_core::catalog::ExperimentConfig;
//! use stimulus_core::types::AssetClass;
//!
//! let experiment = ExperimentConfig::default().validate().unwrap();
//! let first = &experiment.scenarios()[0];
//!
//! assert_eq!(first.name(), Some("Lottery 1"));
//! assert_eq!(first.probs(AssetClass::Crypto), [0.08, 0.65, 0.27]);
//! assert_eq!(first.scaled_payoffs(AssetClass::Crypto, 0.25), [5.0, 1.19, -2.5]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod catalog;
pub mod math;
pub mod types;
