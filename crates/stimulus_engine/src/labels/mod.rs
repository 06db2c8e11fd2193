//! Label rotation pool.
//!
//! Named frames draw display names from one bag per asset class. A bag starts
//! as a random permutation of the class's full label set and is drained one
//! label per draw; an empty bag is refilled with a fresh, independent
//! permutation before the next draw. Over `N` draws from a pool of size `P`
//! every label therefore appears `floor(N / P)` or `ceil(N / P)` times.
//!
//! A refill does not look at the label that emptied the previous bag, so the
//! same name can appear twice in a row across a bag boundary.

use stimulus_core::catalog::Experiment;
use stimulus_core::types::AssetClass;
use tracing::trace;

use crate::rng::StimulusRng;

/// Per-participant label bags for the three asset classes.
#[derive(Clone, Debug)]
pub struct LabelPool {
    sources: [Vec<String>; 3],
    bags: [Vec<String>; 3],
    refills: [usize; 3],
}

impl LabelPool {
    /// Creates the pool with one shuffled bag per class.
    ///
    /// Bags are shuffled in [`AssetClass::ALL`] order, which fixes the draw
    /// sequence for a given seed.
    pub fn new(experiment: &Experiment, rng: &mut StimulusRng) -> Self {
        let sources: [Vec<String>; 3] = AssetClass::ALL.map(|c| experiment.labels(c).to_vec());
        let bags = [
            rng.permutation(&sources[0]),
            rng.permutation(&sources[1]),
            rng.permutation(&sources[2]),
        ];
        Self {
            sources,
            bags,
            refills: [0; 3],
        }
    }

    /// Draws the next label for `asset_class`, refilling an empty bag first.
    pub fn next_label(&mut self, asset_class: AssetClass, rng: &mut StimulusRng) -> String {
        let i = asset_class.index();
        if self.bags[i].is_empty() {
            self.bags[i] = rng.permutation(&self.sources[i]);
            self.refills[i] += 1;
            trace!(%asset_class, refills = self.refills[i], "label bag refilled");
        }
        // Pools are validated non-empty, so a refilled bag always has a label.
        self.bags[i].pop().unwrap_or_default()
    }

    /// Labels still waiting in the current bag for `asset_class`.
    pub fn remaining(&self, asset_class: AssetClass) -> usize {
        self.bags[asset_class.index()].len()
    }

    /// Number of times the bag for `asset_class` has been refilled.
    pub fn refills(&self, asset_class: AssetClass) -> usize {
        self.refills[asset_class.index()]
    }

    /// Full label set for `asset_class`.
    pub fn pool_size(&self, asset_class: AssetClass) -> usize {
        self.sources[asset_class.index()].len()
    }
}
