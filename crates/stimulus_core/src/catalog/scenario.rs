//! Validated lottery scenarios.

use serde::Serialize;

use crate::math::round2;
use crate::types::AssetClass;

/// Tolerance for probability triples summing to one.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// One lottery: a probability triple and a payoff triple per asset class.
///
/// Constructed only through [`ExperimentConfig::validate`](super::ExperimentConfig::validate),
/// so every instance has complete, well-formed tables.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scenario {
    name: Option<String>,
    probs: [[f64; 3]; 3],
    payoffs: [[f64; 3]; 3],
}

impl Scenario {
    pub(crate) fn new(name: Option<String>, probs: [[f64; 3]; 3], payoffs: [[f64; 3]; 3]) -> Self {
        Self {
            name,
            probs,
            payoffs,
        }
    }

    /// Scenario name, if the catalog names it.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Probability triple for an asset class.
    #[inline]
    pub fn probs(&self, asset_class: AssetClass) -> [f64; 3] {
        self.probs[asset_class.index()]
    }

    /// Unscaled payoff triple for an asset class.
    #[inline]
    pub fn payoffs(&self, asset_class: AssetClass) -> [f64; 3] {
        self.payoffs[asset_class.index()]
    }

    /// Payoff triple multiplied by `multiplier`, each entry rounded to two decimals.
    ///
    /// Probabilities are never scaled.
    pub fn scaled_payoffs(&self, asset_class: AssetClass, multiplier: f64) -> [f64; 3] {
        self.payoffs(asset_class).map(|x| round2(x * multiplier))
    }
}
