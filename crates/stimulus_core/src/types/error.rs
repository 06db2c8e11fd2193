//! Error types for structured error handling.
//!
//! This module provides:
//! - `CatalogError`: Configuration-time failures when validating an experiment catalog
//! - `ParticipantError`: Errors from participant identifier or seed parsing
//! - `GeometryError`: Errors from pie-chart geometry encoding
//! - `ConfigError`: Errors from loading experiment configuration files

use thiserror::Error;

use super::asset::AssetClass;

/// Configuration-time catalog errors.
///
/// Every variant is fatal: a catalog that fails validation must never reach
/// participant generation.
///
/// # Examples
/// ```
/// use stimulus_core::types::CatalogError;
///
/// let err = CatalogError::MultiplierMismatch { scenarios: 5, multipliers: 4 };
/// assert_eq!(
///     format!("{}", err),
///     "Catalog has 5 scenarios but 4 multipliers"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog contains no scenarios.
    #[error("Catalog contains no scenarios")]
    EmptyCatalog,

    /// Asset class key is not one of `crypto`, `equity`, `bond`.
    #[error("Unknown asset class: {0}")]
    UnknownAssetClass(String),

    /// Scenario and multiplier sequences differ in length.
    #[error("Catalog has {scenarios} scenarios but {multipliers} multipliers")]
    MultiplierMismatch {
        /// Number of scenarios
        scenarios: usize,
        /// Number of multipliers
        multipliers: usize,
    },

    /// A multiplier is not a finite positive number.
    #[error("Multiplier {value} at index {index} must be finite and positive")]
    InvalidMultiplier {
        /// Position in the multiplier sequence
        index: usize,
        /// Offending value
        value: f64,
    },

    /// Probability or payoff table is missing an asset class.
    #[error("Scenario '{scenario}' has no {table} entry for asset class '{asset_class}'")]
    MissingAssetClass {
        /// Scenario name
        scenario: String,
        /// Table name (`probs` or `payoffs`)
        table: &'static str,
        /// Missing class
        asset_class: AssetClass,
    },

    /// A probability or payoff list does not have exactly three entries.
    #[error("Scenario '{scenario}' {table} for '{asset_class}' has {len} entries, expected 3")]
    InvalidTripleLength {
        /// Scenario name
        scenario: String,
        /// Table name (`probs` or `payoffs`)
        table: &'static str,
        /// Asset class whose triple is invalid
        asset_class: AssetClass,
        /// Actual length
        len: usize,
    },

    /// A probability is negative or not finite.
    #[error("Scenario '{scenario}' has invalid probability {value} for '{asset_class}'")]
    InvalidProbability {
        /// Scenario name
        scenario: String,
        /// Asset class whose triple is invalid
        asset_class: AssetClass,
        /// Offending value
        value: f64,
    },

    /// A probability triple does not sum to one.
    #[error("Scenario '{scenario}' probabilities for '{asset_class}' sum to {sum}, expected 1")]
    ProbabilitySum {
        /// Scenario name
        scenario: String,
        /// Asset class whose triple is invalid
        asset_class: AssetClass,
        /// Actual sum
        sum: f64,
    },

    /// A payoff is not finite.
    #[error("Scenario '{scenario}' has non-finite payoff for '{asset_class}'")]
    InvalidPayoff {
        /// Scenario name
        scenario: String,
        /// Asset class whose triple is invalid
        asset_class: AssetClass,
    },

    /// Two scenarios share the same name.
    #[error("Duplicate scenario name '{0}'")]
    DuplicateScenario(String),

    /// A label pool is empty or missing.
    #[error("Label pool for '{0}' is empty")]
    EmptyLabelPool(AssetClass),

    /// A label pool contains a blank or repeated entry.
    #[error("Label pool for '{asset_class}' contains invalid label '{label}'")]
    InvalidLabel {
        /// Asset class of the pool
        asset_class: AssetClass,
        /// Offending label
        label: String,
    },

    /// A blind placeholder is missing or blank.
    #[error("Blind placeholder for '{0}' is missing or blank")]
    MissingPlaceholder(AssetClass),

    /// No presentation modes or scalings were configured, or one is repeated.
    #[error("Invalid block layout: {0}")]
    InvalidBlockLayout(String),

    /// The derived round count differs from the declared one.
    #[error("Catalog yields {actual} rounds but {expected} were declared")]
    RoundCountMismatch {
        /// Declared round count
        expected: usize,
        /// Round count implied by the block layout
        actual: usize,
    },
}

/// Participant identifier and seed errors.
///
/// These fail a single generation call and never affect other participants.
///
/// # Examples
/// ```
/// use stimulus_core::types::ParticipantError;
///
/// let err = ParticipantError::EmptyIdentifier;
/// assert_eq!(format!("{}", err), "Participant identifier is empty");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParticipantError {
    /// The identifier string is empty or whitespace.
    #[error("Participant identifier is empty")]
    EmptyIdentifier,

    /// The explicit seed string is empty or whitespace.
    #[error("Seed is empty")]
    EmptySeed,
}

/// Geometry encoding errors.
///
/// # Examples
/// ```
/// use stimulus_core::types::GeometryError;
///
/// let err = GeometryError::InvalidLength { field: "probs", len: 2 };
/// assert!(format!("{}", err).contains("expected 3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Input triple has the wrong number of elements.
    #[error("Invalid {field} length: got {len}, expected 3")]
    InvalidLength {
        /// Argument name
        field: &'static str,
        /// Actual length
        len: usize,
    },

    /// Input value is NaN or infinite.
    #[error("Non-finite {field} value at index {index}")]
    NonFinite {
        /// Argument name
        field: &'static str,
        /// Position of the value
        index: usize,
    },

    /// Probability is negative.
    #[error("Negative probability {value} at index {index}")]
    NegativeProbability {
        /// Position of the value
        index: usize,
        /// Offending value
        value: f64,
    },
}

/// Errors raised while loading an experiment configuration file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading the config file.
    #[error("IO error: {0}")]
    Io(String),

    /// TOML parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// One or more validation problems.
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Catalog invariant violation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::MissingAssetClass {
            scenario: "Lottery 1".to_string(),
            table: "payoffs",
            asset_class: AssetClass::Bond,
        };
        assert_eq!(
            err.to_string(),
            "Scenario 'Lottery 1' has no payoffs entry for asset class 'bond'"
        );
    }

    #[test]
    fn test_round_count_display() {
        let err = CatalogError::RoundCountMismatch {
            expected: 20,
            actual: 16,
        };
        assert!(err.to_string().contains("16 rounds"));
        assert!(err.to_string().contains("20 were declared"));
    }

    #[test]
    fn test_config_error_validation_display() {
        let err = ConfigError::Validation(vec!["first".to_string(), "second".to_string()]);
        let display = err.to_string();
        assert!(display.contains("first"));
        assert!(display.contains("second"));
    }

    #[test]
    fn test_config_error_from_catalog() {
        let err: ConfigError = CatalogError::EmptyCatalog.into();
        assert!(matches!(err, ConfigError::Catalog(CatalogError::EmptyCatalog)));
    }

    #[test]
    fn test_geometry_error_display() {
        let err = GeometryError::NonFinite {
            field: "payoffs",
            index: 1,
        };
        assert_eq!(err.to_string(), "Non-finite payoffs value at index 1");
    }
}
