//! Participant generation state.

use stimulus_core::catalog::{Experiment, ModeOrder};
use stimulus_core::types::{AssetClass, ParticipantError, PresentationMode};
use tracing::debug;

use crate::labels::LabelPool;
use crate::rng::{resolve_seed, ParticipantId, SeedSource, StimulusRng};

/// Everything one participant's generation run mutates.
///
/// Created once per participant, consumed by frame assembly, then dropped.
/// Initialisation draws, in order: one label-bag shuffle per asset class,
/// then (for [`ModeOrder::Randomised`]) the mode-order coin flip.
#[derive(Debug)]
pub struct GenerationState<'a> {
    experiment: &'a Experiment,
    rng: StimulusRng,
    labels: LabelPool,
    mode_order: Vec<PresentationMode>,
}

impl<'a> GenerationState<'a> {
    /// Initialises the state for a participant.
    ///
    /// # Errors
    ///
    /// Returns [`ParticipantError`] when the id or explicit seed is blank.
    pub fn init(
        experiment: &'a Experiment,
        participant: &ParticipantId,
        seed: Option<&SeedSource>,
    ) -> Result<Self, ParticipantError> {
        let seed = resolve_seed(participant, seed)?;
        Ok(Self::from_seed(experiment, seed))
    }

    /// Initialises the state from an already resolved seed.
    pub fn from_seed(experiment: &'a Experiment, seed: u64) -> Self {
        let mut rng = StimulusRng::from_seed(seed);
        let labels = LabelPool::new(experiment, &mut rng);

        let layout = experiment.layout();
        let mut mode_order = layout.modes.clone();
        if layout.mode_order == ModeOrder::Randomised && rng.coin_flip() {
            mode_order.reverse();
        }
        debug!(seed, ?mode_order, "participant state initialised");

        Self {
            experiment,
            rng,
            labels,
            mode_order,
        }
    }

    /// Draws the next named-mode label for `asset_class`.
    pub fn next_label(&mut self, asset_class: AssetClass) -> String {
        self.labels.next_label(asset_class, &mut self.rng)
    }

    /// Random left-to-right order of the three asset classes.
    pub fn column_order(&mut self) -> Vec<AssetClass> {
        self.rng.permutation(&AssetClass::ALL)
    }

    /// Order in which the presentation-mode blocks are shown.
    pub fn mode_order(&self) -> &[PresentationMode] {
        &self.mode_order
    }

    /// Seed this state was created from.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Experiment being generated.
    pub fn experiment(&self) -> &'a Experiment {
        self.experiment
    }

    /// Label bags, for inspection.
    pub fn labels(&self) -> &LabelPool {
        &self.labels
    }
}
