//! Frame assembly pipeline.
//!
//! For each participant the pipeline builds one block per
//! (presentation mode × scaling) pair, every block walking the full scenario
//! catalog in order. Blocks are built in the configured order so that the
//! draw sequence is independent of the participant's mode order; they are
//! then concatenated by mode order, scalings kept in configured order within
//! each mode, and rounds are numbered 1..N by position.
//!
//! # Example
//!
//! ```rust
//! use stimulus_core::catalog::ExperimentConfig;
//! use stimulus_engine::assembly::generate;
//! use stimulus_engine::rng::ParticipantId;
//!
//! let experiment = ExperimentConfig::default().validate().unwrap();
//! let frames = generate(&experiment, &ParticipantId::from(42u64), None).unwrap();
//!
//! assert_eq!(frames.len(), 20);
//! assert_eq!(frames.round(1).map(|f| f.round), Some(1));
//! ```

mod state;

pub use state::GenerationState;

use stimulus_core::catalog::{Experiment, Scenario};
use stimulus_core::types::{
    Column, Frame, FrameSequence, ParticipantError, PresentationMode, Scaling,
};
use tracing::debug;

use crate::rng::{ParticipantId, SeedSource};

/// Generates the full frame sequence for a participant.
///
/// # Errors
///
/// Returns [`ParticipantError`] for a blank participant id or seed. Catalog
/// problems cannot occur here: [`Experiment`] is validated on construction.
pub fn generate(
    experiment: &Experiment,
    participant: &ParticipantId,
    seed: Option<&SeedSource>,
) -> Result<FrameSequence, ParticipantError> {
    let state = GenerationState::init(experiment, participant, seed)?;
    Ok(assemble(state))
}

/// Generates the frame sequence for an already resolved seed.
pub fn generate_from_seed(experiment: &Experiment, seed: u64) -> FrameSequence {
    assemble(GenerationState::from_seed(experiment, seed))
}

/// Runs every block for `state` and concatenates them into a numbered sequence.
pub fn assemble(mut state: GenerationState<'_>) -> FrameSequence {
    let experiment = state.experiment();
    let layout = experiment.layout();

    let mut blocks: Vec<(PresentationMode, Scaling, Vec<Frame>)> =
        Vec::with_capacity(layout.block_count());
    for &mode in &layout.modes {
        for &scaling in &layout.scalings {
            let block = build_block(&mut state, mode, scaling);
            debug!(%mode, %scaling, frames = block.len(), "block built");
            blocks.push((mode, scaling, block));
        }
    }

    let mut frames = Vec::with_capacity(experiment.round_count());
    for &mode in state.mode_order() {
        for &scaling in &layout.scalings {
            if let Some(i) = blocks
                .iter()
                .position(|(m, s, _)| *m == mode && *s == scaling)
            {
                let (_, _, block) = blocks.swap_remove(i);
                frames.extend(block);
            }
        }
    }

    for (i, frame) in frames.iter_mut().enumerate() {
        frame.round = i + 1;
    }

    debug!(
        seed = state.seed(),
        rounds = frames.len(),
        "frame sequence assembled"
    );

    FrameSequence {
        seed: state.seed(),
        frames,
    }
}

/// Builds one block: one frame per scenario, in catalog order.
///
/// Rounds are left at zero; [`assemble`] numbers them after concatenation.
pub fn build_block(
    state: &mut GenerationState<'_>,
    mode: PresentationMode,
    scaling: Scaling,
) -> Vec<Frame> {
    let experiment = state.experiment();
    experiment
        .scaled_scenarios()
        .map(|(scenario, multiplier)| {
            let multiplier = match scaling {
                Scaling::Unscaled => 1.0,
                Scaling::Scaled => multiplier,
            };
            build_frame(state, scenario, mode, scaling, multiplier)
        })
        .collect()
}

fn build_frame(
    state: &mut GenerationState<'_>,
    scenario: &Scenario,
    mode: PresentationMode,
    scaling: Scaling,
    multiplier: f64,
) -> Frame {
    let experiment = state.experiment();
    let order = state.column_order();

    let mut column = |i: usize| {
        let asset_class = order[i];
        let label = match mode {
            PresentationMode::Blind => experiment.placeholder(asset_class).to_string(),
            PresentationMode::Named => state.next_label(asset_class),
        };
        let payoffs = match scaling {
            Scaling::Unscaled => scenario.payoffs(asset_class),
            Scaling::Scaled => scenario.scaled_payoffs(asset_class, multiplier),
        };
        Column {
            asset_class,
            label,
            probs: scenario.probs(asset_class),
            payoffs,
        }
    };

    Frame {
        round: 0,
        mode,
        scenario_name: scenario.name().map(str::to_string),
        scaling,
        scale_multiplier: multiplier,
        columns: [column(0), column(1), column(2)],
    }
}
