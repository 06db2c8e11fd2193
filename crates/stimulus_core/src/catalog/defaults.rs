//! The shipped study variant.
//!
//! Five lotteries, each shown once per block, four blocks (blind/named ×
//! unscaled/scaled) for 20 decision rounds.

use super::config::{default_placeholders, ClassMap, ExperimentConfig, ScenarioConfig};
use super::experiment::ModeOrder;
use crate::types::{PresentationMode, Scaling};

type Triple = [f64; 3];

fn lottery(name: &str, probs: [Triple; 3], payoffs: [Triple; 3]) -> ScenarioConfig {
    let [pc, pe, pb] = probs;
    let [xc, xe, xb] = payoffs;
    ScenarioConfig {
        name: Some(name.to_string()),
        probs: ClassMap::new(pc.to_vec(), pe.to_vec(), pb.to_vec()),
        payoffs: ClassMap::new(xc.to_vec(), xe.to_vec(), xb.to_vec()),
    }
}

fn pool(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        // Rows are crypto, equity, bond.
        let scenarios = vec![
            lottery(
                "Lottery 1",
                [[0.08, 0.65, 0.27], [0.32, 0.48, 0.20], [0.42, 0.48, 0.10]],
                [[20.00, 4.77, -10.00], [9.00, 0.25, -5.00], [4.50, 0.54, -1.50]],
            ),
            lottery(
                "Lottery 2",
                [[0.12, 0.58, 0.30], [0.28, 0.52, 0.20], [0.40, 0.52, 0.08]],
                [[21.00, 4.79, -11.00], [10.00, 0.38, -5.00], [4.00, 0.92, -1.00]],
            ),
            lottery(
                "Lottery 3",
                [[0.09, 0.62, 0.29], [0.30, 0.50, 0.20], [0.38, 0.55, 0.07]],
                [[20.00, 5.00, -10.00], [9.00, 0.20, -4.00], [4.50, 0.65, -1.00]],
            ),
            lottery(
                "Lottery 4",
                [[0.11, 0.57, 0.32], [0.29, 0.51, 0.20], [0.41, 0.49, 0.10]],
                [[22.00, 4.88, -10.00], [9.50, 0.48, -5.00], [4.00, 1.14, -2.00]],
            ),
            lottery(
                "Lottery 5",
                [[0.10, 0.55, 0.35], [0.31, 0.47, 0.22], [0.39, 0.51, 0.10]],
                [[19.00, 5.91, -9.00], [9.00, 1.13, -6.00], [4.00, 1.06, -1.00]],
            ),
        ];

        let labels = ClassMap::new(
            pool(&[
                "Zypherium (ZPH, Cryptocurrency)",
                "Quantacoin (QTC, Cryptocurrency)",
                "Nebulite (NBL, Cryptocurrency)",
                "Fintara (FTR, Cryptocurrency)",
                "OrbisX (OBX, Cryptocurrency)",
            ]),
            pool(&[
                "Luminex Corp. (LMX, Equity)",
                "Vireon Systems (VRN, Equity)",
                "Heliox Dynamics (HLX, Equity)",
                "Trionex Ltd. (TRX, Equity)",
                "Aurelia Group (AUR, Equity)",
            ]),
            pool(&[
                "Bayern 12Y (Bayern, Bond)",
                "Sachsen 6Y (Sachsen, Bond)",
                "Hessen 3Y (Hessen, Bond)",
                "Nordrhein-Westfalen 9Y (Nordrhein-Westfalen, Bond)",
                "Berlin 5Y (Berlin, Bond)",
            ]),
        );

        Self {
            name: "ebmm".to_string(),
            currency: "€".to_string(),
            expected_rounds: Some(20),
            modes: vec![PresentationMode::Blind, PresentationMode::Named],
            scalings: vec![Scaling::Unscaled, Scaling::Scaled],
            mode_order: ModeOrder::Randomised,
            multipliers: vec![0.25, 2.0, 5.0, 7.0, 9.5],
            placeholders: default_placeholders(),
            labels,
            scenarios,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssetClass;

    #[test]
    fn test_shipped_pools_have_five_labels() {
        let config = ExperimentConfig::default();
        for class in AssetClass::ALL {
            assert_eq!(config.labels.get(class).map(Vec::len), Some(5));
        }
    }

    #[test]
    fn test_shipped_scenario_names() {
        let config = ExperimentConfig::default();
        let names: Vec<_> = config
            .scenarios
            .iter()
            .filter_map(|s| s.name.as_deref())
            .collect();
        assert_eq!(
            names,
            vec!["Lottery 1", "Lottery 2", "Lottery 3", "Lottery 4", "Lottery 5"]
        );
    }

    #[test]
    fn test_shipped_scaled_payoffs() {
        // Rows are crypto, equity, bond.
        let expected = [
            [[5.0, 1.19, -2.5], [2.25, 0.06, -1.25], [1.12, 0.14, -0.38]],
            [[42.0, 9.58, -22.0], [20.0, 0.76, -10.0], [8.0, 1.84, -2.0]],
            [[100.0, 25.0, -50.0], [45.0, 1.0, -20.0], [22.5, 3.25, -5.0]],
            [[154.0, 34.16, -70.0], [66.5, 3.36, -35.0], [28.0, 7.98, -14.0]],
            [[180.5, 56.15, -85.5], [85.5, 10.73, -57.0], [38.0, 10.07, -9.5]],
        ];
        let experiment = ExperimentConfig::default().validate().unwrap();
        for ((scenario, m), rows) in experiment.scaled_scenarios().zip(expected) {
            for (class, row) in AssetClass::ALL.into_iter().zip(rows) {
                assert_eq!(
                    scenario.scaled_payoffs(class, m),
                    row,
                    "{:?} {}",
                    scenario.name(),
                    class
                );
            }
        }
    }
}
