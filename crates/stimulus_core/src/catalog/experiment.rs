//! Validated experiment variant.
//!
//! An [`Experiment`] is the immutable configuration object handed to the
//! generation engine. It is only obtainable from
//! [`ExperimentConfig::validate`](super::ExperimentConfig::validate), so the
//! engine never has to re-check catalog invariants.

use serde::{Deserialize, Serialize};

use super::scenario::Scenario;
use crate::types::{AssetClass, PresentationMode, Scaling};

/// How the presentation-mode blocks are ordered for each participant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeOrder {
    /// One fair draw per participant between the configured order and its reverse.
    #[default]
    Randomised,
    /// Always the configured order.
    Fixed,
}

/// Block structure of a variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockLayout {
    /// Presentation modes, in configured order
    pub modes: Vec<PresentationMode>,
    /// Scalings within each mode, in display order
    pub scalings: Vec<Scaling>,
    /// Rule for ordering the mode blocks
    pub mode_order: ModeOrder,
}

impl BlockLayout {
    /// Number of blocks (mode × scaling).
    pub fn block_count(&self) -> usize {
        self.modes.len() * self.scalings.len()
    }
}

/// Immutable, validated experiment variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Experiment {
    name: String,
    scenarios: Vec<Scenario>,
    multipliers: Vec<f64>,
    labels: [Vec<String>; 3],
    placeholders: [String; 3],
    layout: BlockLayout,
    currency: String,
}

impl Experiment {
    pub(crate) fn new(
        name: String,
        scenarios: Vec<Scenario>,
        multipliers: Vec<f64>,
        labels: [Vec<String>; 3],
        placeholders: [String; 3],
        layout: BlockLayout,
        currency: String,
    ) -> Self {
        Self {
            name,
            scenarios,
            multipliers,
            labels,
            placeholders,
            layout,
            currency,
        }
    }

    /// Variant name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scenarios in catalog order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Multipliers paired 1:1 with [`Experiment::scenarios`].
    pub fn multipliers(&self) -> &[f64] {
        &self.multipliers
    }

    /// Scenarios zipped with their multipliers.
    pub fn scaled_scenarios(&self) -> impl Iterator<Item = (&Scenario, f64)> {
        self.scenarios.iter().zip(self.multipliers.iter().copied())
    }

    /// Full label pool for an asset class.
    pub fn labels(&self, asset_class: AssetClass) -> &[String] {
        &self.labels[asset_class.index()]
    }

    /// Blind-mode placeholder for an asset class.
    pub fn placeholder(&self, asset_class: AssetClass) -> &str {
        &self.placeholders[asset_class.index()]
    }

    /// Block structure.
    pub fn layout(&self) -> &BlockLayout {
        &self.layout
    }

    /// Currency symbol used in outcome and chart labels.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Total decision rounds produced per participant.
    pub fn round_count(&self) -> usize {
        self.layout.block_count() * self.scenarios.len()
    }
}
