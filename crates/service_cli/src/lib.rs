//! # service_cli: `stimuli` Command Line
//!
//! ## Service Layer Role
//!
//! Orchestrates the catalog, engine and geometry crates behind a command-line
//! interface:
//! - `stimuli generate` - Frame sequence for one participant (json, csv, table)
//! - `stimuli geometry` - Pie slices for one outcome triple (svg, json)
//! - `stimuli check` - Validate settings and the experiment catalog
//! - `stimuli catalog` - Print the experiment catalog as TOML

pub mod commands;
pub mod config;
pub mod error;

pub use config::{OutputFormat, StimuliSettings};
pub use error::{CliError, Result};
