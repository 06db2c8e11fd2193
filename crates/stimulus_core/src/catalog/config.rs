//! Experiment configuration loading and validation.
//!
//! An [`ExperimentConfig`] is the raw, serialisable description of one study
//! variant. It is read from TOML (or built in code, see
//! [`ExperimentConfig::default`]) and turned into an immutable
//! [`Experiment`] by [`ExperimentConfig::validate`]. Validation is the single
//! place where catalog invariants are checked; any failure is fatal and must
//! stop start-up before a participant is generated.
//!
//! # Example
//!
//! ```
//! use stimulus_core::catalog::ExperimentConfig;
//!
//! let experiment = ExperimentConfig::default().validate().unwrap();
//! assert_eq!(experiment.round_count(), 20);
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::experiment::{BlockLayout, Experiment, ModeOrder};
use super::scenario::{Scenario, PROBABILITY_TOLERANCE};
use crate::types::{AssetClass, CatalogError, ConfigError, PresentationMode, Scaling};

/// Per-asset-class table as written in configuration files.
///
/// Every key is optional so that a missing class surfaces as a
/// [`CatalogError::MissingAssetClass`] during validation rather than a parse
/// error; unknown keys are rejected at parse time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassMap<T> {
    /// Crypto entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crypto: Option<T>,
    /// Equity entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity: Option<T>,
    /// Bond entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bond: Option<T>,
}

impl<T> ClassMap<T> {
    /// Table with an entry for every class.
    pub fn new(crypto: T, equity: T, bond: T) -> Self {
        Self {
            crypto: Some(crypto),
            equity: Some(equity),
            bond: Some(bond),
        }
    }

    fn slot(&mut self, asset_class: AssetClass) -> &mut Option<T> {
        match asset_class {
            AssetClass::Crypto => &mut self.crypto,
            AssetClass::Equity => &mut self.equity,
            AssetClass::Bond => &mut self.bond,
        }
    }

    /// Entry for an asset class.
    pub fn get(&self, asset_class: AssetClass) -> Option<&T> {
        match asset_class {
            AssetClass::Crypto => self.crypto.as_ref(),
            AssetClass::Equity => self.equity.as_ref(),
            AssetClass::Bond => self.bond.as_ref(),
        }
    }

    /// Sets the entry for an asset class, returning the previous one.
    pub fn insert(&mut self, asset_class: AssetClass, value: T) -> Option<T> {
        self.slot(asset_class).replace(value)
    }

    /// Removes the entry for an asset class.
    pub fn remove(&mut self, asset_class: AssetClass) -> Option<T> {
        self.slot(asset_class).take()
    }
}

/// Raw scenario entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Optional scenario name, carried onto every frame built from it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Probability triple per asset class
    pub probs: ClassMap<Vec<f64>>,
    /// Payoff triple per asset class
    pub payoffs: ClassMap<Vec<f64>>,
}

/// Raw experiment variant configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Variant name
    #[serde(default = "default_name")]
    pub name: String,

    /// Currency symbol used in outcome labels
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Declared number of decision rounds, checked against the block layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_rounds: Option<usize>,

    /// Presentation modes, each producing one group of blocks
    #[serde(default = "default_modes")]
    pub modes: Vec<PresentationMode>,

    /// Scalings within each mode, in display order
    #[serde(default = "default_scalings")]
    pub scalings: Vec<Scaling>,

    /// Mode block ordering rule
    #[serde(default)]
    pub mode_order: ModeOrder,

    /// Multipliers paired 1:1 with scenarios, used by scaled blocks
    pub multipliers: Vec<f64>,

    /// Blind-mode placeholder per asset class
    #[serde(default = "default_placeholders")]
    pub placeholders: ClassMap<String>,

    /// Named-mode label pool per asset class
    pub labels: ClassMap<Vec<String>>,

    /// Scenarios in catalog order
    pub scenarios: Vec<ScenarioConfig>,
}

fn default_name() -> String {
    "custom".to_string()
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_modes() -> Vec<PresentationMode> {
    vec![PresentationMode::Blind, PresentationMode::Named]
}

fn default_scalings() -> Vec<Scaling> {
    vec![Scaling::Unscaled, Scaling::Scaled]
}

pub(crate) fn default_placeholders() -> ClassMap<String> {
    ClassMap::new(
        "Asset A".to_string(),
        "Asset B".to_string(),
        "Asset C".to_string(),
    )
}

impl ExperimentConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Load a configuration file and validate it.
    pub fn load_and_validate(path: &Path) -> Result<Experiment, ConfigError> {
        Ok(Self::load(path)?.validate()?)
    }

    /// Serialise the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check every catalog invariant and build the immutable [`Experiment`].
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found. Checks cover the block
    /// layout, multiplier pairing, per-scenario probability and payoff
    /// tables, label pools, blind placeholders and the declared round count.
    pub fn validate(&self) -> Result<Experiment, CatalogError> {
        let layout = self.validate_layout()?;

        if self.scenarios.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        if self.scenarios.len() != self.multipliers.len() {
            return Err(CatalogError::MultiplierMismatch {
                scenarios: self.scenarios.len(),
                multipliers: self.multipliers.len(),
            });
        }
        for (index, &value) in self.multipliers.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(CatalogError::InvalidMultiplier { index, value });
            }
        }

        let mut names = HashSet::new();
        let mut scenarios = Vec::with_capacity(self.scenarios.len());
        for (index, entry) in self.scenarios.iter().enumerate() {
            if let Some(name) = &entry.name {
                if !names.insert(name.as_str()) {
                    return Err(CatalogError::DuplicateScenario(name.clone()));
                }
            }
            scenarios.push(validate_scenario(index, entry)?);
        }

        let labels = self.validate_labels()?;
        let placeholders = self.validate_placeholders()?;

        let experiment = Experiment::new(
            self.name.clone(),
            scenarios,
            self.multipliers.clone(),
            labels,
            placeholders,
            layout,
            self.currency.clone(),
        );

        if let Some(expected) = self.expected_rounds {
            let actual = experiment.round_count();
            if actual != expected {
                return Err(CatalogError::RoundCountMismatch { expected, actual });
            }
        }

        Ok(experiment)
    }

    fn validate_layout(&self) -> Result<BlockLayout, CatalogError> {
        if self.modes.is_empty() {
            return Err(CatalogError::InvalidBlockLayout(
                "at least one presentation mode is required".to_string(),
            ));
        }
        if self.scalings.is_empty() {
            return Err(CatalogError::InvalidBlockLayout(
                "at least one scaling is required".to_string(),
            ));
        }
        if self.modes.iter().collect::<HashSet<_>>().len() != self.modes.len() {
            return Err(CatalogError::InvalidBlockLayout(format!(
                "presentation modes repeat: {:?}",
                self.modes
            )));
        }
        if self.scalings.iter().collect::<HashSet<_>>().len() != self.scalings.len() {
            return Err(CatalogError::InvalidBlockLayout(format!(
                "scalings repeat: {:?}",
                self.scalings
            )));
        }
        Ok(BlockLayout {
            modes: self.modes.clone(),
            scalings: self.scalings.clone(),
            mode_order: self.mode_order,
        })
    }

    fn validate_labels(&self) -> Result<[Vec<String>; 3], CatalogError> {
        let mut pools: [Vec<String>; 3] = Default::default();
        for class in AssetClass::ALL {
            let pool = match self.labels.get(class) {
                Some(pool) if !pool.is_empty() => pool,
                _ => return Err(CatalogError::EmptyLabelPool(class)),
            };
            let mut seen = HashSet::new();
            for label in pool {
                if label.trim().is_empty() || !seen.insert(label.as_str()) {
                    return Err(CatalogError::InvalidLabel {
                        asset_class: class,
                        label: label.clone(),
                    });
                }
            }
            pools[class.index()] = pool.clone();
        }
        Ok(pools)
    }

    fn validate_placeholders(&self) -> Result<[String; 3], CatalogError> {
        let mut placeholders: [String; 3] = Default::default();
        for class in AssetClass::ALL {
            match self.placeholders.get(class) {
                Some(p) if !p.trim().is_empty() => placeholders[class.index()] = p.clone(),
                _ => return Err(CatalogError::MissingPlaceholder(class)),
            }
        }
        Ok(placeholders)
    }
}

fn validate_scenario(index: usize, entry: &ScenarioConfig) -> Result<Scenario, CatalogError> {
    let label = entry
        .name
        .clone()
        .unwrap_or_else(|| format!("#{}", index + 1));

    let mut probs = [[0.0; 3]; 3];
    let mut payoffs = [[0.0; 3]; 3];

    for class in AssetClass::ALL {
        let p = triple(&label, "probs", class, entry.probs.get(class))?;
        let x = triple(&label, "payoffs", class, entry.payoffs.get(class))?;

        for &value in &p {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidProbability {
                    scenario: label,
                    asset_class: class,
                    value,
                });
            }
        }
        let sum: f64 = p.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(CatalogError::ProbabilitySum {
                scenario: label,
                asset_class: class,
                sum,
            });
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(CatalogError::InvalidPayoff {
                scenario: label,
                asset_class: class,
            });
        }

        probs[class.index()] = p;
        payoffs[class.index()] = x;
    }

    Ok(Scenario::new(entry.name.clone(), probs, payoffs))
}

fn triple(
    scenario: &str,
    table: &'static str,
    asset_class: AssetClass,
    values: Option<&Vec<f64>>,
) -> Result<[f64; 3], CatalogError> {
    let values = values.ok_or_else(|| CatalogError::MissingAssetClass {
        scenario: scenario.to_string(),
        table,
        asset_class,
    })?;
    match values.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(CatalogError::InvalidTripleLength {
            scenario: scenario.to_string(),
            table,
            asset_class,
            len: values.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_scenario() -> ExperimentConfig {
        let mut config = ExperimentConfig::default();
        config.scenarios.truncate(1);
        config.multipliers.truncate(1);
        config.expected_rounds = None;
        config
    }

    #[test]
    fn test_default_validates() {
        let experiment = ExperimentConfig::default().validate().unwrap();
        assert_eq!(experiment.scenarios().len(), 5);
        assert_eq!(experiment.multipliers(), &[0.25, 2.0, 5.0, 7.0, 9.5]);
        assert_eq!(experiment.round_count(), 20);
        assert_eq!(experiment.placeholder(AssetClass::Equity), "Asset B");
    }

    #[test]
    fn test_multiplier_mismatch() {
        let mut config = ExperimentConfig::default();
        config.multipliers.pop();
        assert_eq!(
            config.validate(),
            Err(CatalogError::MultiplierMismatch {
                scenarios: 5,
                multipliers: 4
            })
        );
    }

    #[test]
    fn test_empty_catalog() {
        let mut config = ExperimentConfig::default();
        config.scenarios.clear();
        config.multipliers.clear();
        assert_eq!(config.validate(), Err(CatalogError::EmptyCatalog));
    }

    #[test]
    fn test_invalid_multiplier() {
        let mut config = single_scenario();
        config.multipliers[0] = 0.0;
        assert!(matches!(
            config.validate(),
            Err(CatalogError::InvalidMultiplier { index: 0, .. })
        ));
    }

    #[test]
    fn test_missing_payoff_class() {
        let mut config = single_scenario();
        config.scenarios[0].payoffs.remove(AssetClass::Bond);
        match config.validate() {
            Err(CatalogError::MissingAssetClass {
                table, asset_class, ..
            }) => {
                assert_eq!(table, "payoffs");
                assert_eq!(asset_class, AssetClass::Bond);
            }
            other => panic!("Expected MissingAssetClass, got {:?}", other),
        }
    }

    #[test]
    fn test_short_triple() {
        let mut config = single_scenario();
        config.scenarios[0]
            .probs
            .insert(AssetClass::Crypto, vec![0.5, 0.5]);
        assert!(matches!(
            config.validate(),
            Err(CatalogError::InvalidTripleLength { len: 2, .. })
        ));
    }

    #[test]
    fn test_probabilities_must_sum_to_one() {
        let mut config = single_scenario();
        config.scenarios[0]
            .probs
            .insert(AssetClass::Equity, vec![0.5, 0.4, 0.2]);
        assert!(matches!(
            config.validate(),
            Err(CatalogError::ProbabilitySum {
                asset_class: AssetClass::Equity,
                ..
            })
        ));
    }

    #[test]
    fn test_negative_probability() {
        let mut config = single_scenario();
        config.scenarios[0]
            .probs
            .insert(AssetClass::Bond, vec![1.2, -0.1, -0.1]);
        assert!(matches!(
            config.validate(),
            Err(CatalogError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn test_non_finite_payoff() {
        let mut config = single_scenario();
        config.scenarios[0]
            .payoffs
            .insert(AssetClass::Bond, vec![1.0, f64::NAN, 0.0]);
        assert!(matches!(
            config.validate(),
            Err(CatalogError::InvalidPayoff { .. })
        ));
    }

    #[test]
    fn test_duplicate_scenario_name() {
        let mut config = ExperimentConfig::default();
        config.scenarios[1].name = config.scenarios[0].name.clone();
        assert!(matches!(
            config.validate(),
            Err(CatalogError::DuplicateScenario(_))
        ));
    }

    #[test]
    fn test_label_pool_problems() {
        let mut config = single_scenario();
        config.labels.insert(AssetClass::Crypto, vec![]);
        assert_eq!(
            config.validate(),
            Err(CatalogError::EmptyLabelPool(AssetClass::Crypto))
        );

        let mut config = single_scenario();
        config
            .labels
            .insert(AssetClass::Bond, vec!["A".to_string(), "A".to_string()]);
        assert!(matches!(
            config.validate(),
            Err(CatalogError::InvalidLabel { .. })
        ));
    }

    #[test]
    fn test_missing_placeholder() {
        let mut config = single_scenario();
        config.placeholders.remove(AssetClass::Equity);
        assert_eq!(
            config.validate(),
            Err(CatalogError::MissingPlaceholder(AssetClass::Equity))
        );
    }

    #[test]
    fn test_block_layout_checks() {
        let mut config = single_scenario();
        config.modes.clear();
        assert!(matches!(
            config.validate(),
            Err(CatalogError::InvalidBlockLayout(_))
        ));

        let mut config = single_scenario();
        config.scalings = vec![Scaling::Scaled, Scaling::Scaled];
        assert!(matches!(
            config.validate(),
            Err(CatalogError::InvalidBlockLayout(_))
        ));
    }

    #[test]
    fn test_round_count_mismatch() {
        let mut config = ExperimentConfig::default();
        config.modes = vec![PresentationMode::Named];
        assert_eq!(
            config.validate(),
            Err(CatalogError::RoundCountMismatch {
                expected: 20,
                actual: 10
            })
        );
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ExperimentConfig::default();
        let text = config.to_toml_string().unwrap();
        let parsed = ExperimentConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let text = r#"
multipliers = [2.0]

[labels]
crypto = ["Zypherium"]
equity = ["Luminex"]
bond = ["Bayern 12Y"]

[[scenarios]]
name = "Only"
probs = { crypto = [0.2, 0.1, 0.7], equity = [0.5, 0.2, 0.3], bond = [0.8, 0.1, 0.1] }
payoffs = { crypto = [9.5, 2.0, 0.5], equity = [4.0, 1.0, -2.0], bond = [1.5, 0.5, -0.5] }
"#;
        let config = ExperimentConfig::from_toml_str(text).unwrap();
        assert_eq!(config.modes, default_modes());
        assert_eq!(config.mode_order, ModeOrder::Randomised);
        assert_eq!(config.currency, "€");

        let experiment = config.validate().unwrap();
        assert_eq!(experiment.round_count(), 4);
    }

    #[test]
    fn test_unknown_asset_class_is_parse_error() {
        let text = r#"
multipliers = [2.0]
scenarios = []

[labels]
crypto = ["Zypherium"]
gold = ["Bar"]
"#;
        assert!(matches!(
            ExperimentConfig::from_toml_str(text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ExperimentConfig::load(Path::new("/nonexistent/experiment.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
