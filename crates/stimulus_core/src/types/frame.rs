//! Frame and column types produced by stimulus generation.
//!
//! A [`Frame`] is one decision round: three [`Column`]s, one per asset class,
//! shown under a [`PresentationMode`]. A [`FrameSequence`] is the complete,
//! materialised output for one participant.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::asset::AssetClass;

/// How asset identity is presented in a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    /// Asset identity hidden behind a generic placeholder.
    Blind,
    /// Asset identity revealed by a rotated display name.
    Named,
}

impl PresentationMode {
    /// Tag written to exports (`blind` / `named`).
    pub fn tag(&self) -> &'static str {
        match self {
            PresentationMode::Blind => "blind",
            PresentationMode::Named => "named",
        }
    }
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Whether a block applies the scenario multipliers to payoffs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scaling {
    /// Payoffs as listed in the catalog (multiplier 1.0).
    Unscaled,
    /// Payoffs multiplied by the scenario's paired multiplier.
    Scaled,
}

impl fmt::Display for Scaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scaling::Unscaled => write!(f, "unscaled"),
            Scaling::Scaled => write!(f, "scaled"),
        }
    }
}

/// One selectable asset option within a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Asset class of the option
    pub asset_class: AssetClass,
    /// Display label (placeholder in blind frames, pool name in named frames)
    pub label: String,
    /// Outcome probabilities
    pub probs: [f64; 3],
    /// Outcome payoffs, paired index-wise with `probs`
    pub payoffs: [f64; 3],
}

impl Column {
    /// Label annotated with the asset class title, e.g. `"Nebulite (NBL, Cryptocurrency) (Crypto)"`.
    pub fn annotated_label(&self) -> String {
        format!("{} ({})", self.label, self.asset_class.title())
    }

    /// Per-outcome text such as `"80 % – €2.50"`.
    ///
    /// ```
    /// use stimulus_core::types::{AssetClass, Column};
    ///
    /// let column = Column {
    ///     asset_class: AssetClass::Bond,
    ///     label: "Asset C".to_string(),
    ///     probs: [0.8, 0.1, 0.1],
    ///     payoffs: [2.5, 1.0, -1.0],
    /// };
    /// assert_eq!(column.outcome_labels("€")[0], "80 % – €2.50");
    /// ```
    pub fn outcome_labels(&self, currency: &str) -> [String; 3] {
        let label = |i: usize| {
            format!(
                "{} % – {}{:.2}",
                (self.probs[i] * 100.0).round() as i64,
                currency,
                self.payoffs[i]
            )
        };
        [label(0), label(1), label(2)]
    }

    /// Probability-weighted mean payoff.
    pub fn expected_payoff(&self) -> f64 {
        self.probs
            .iter()
            .zip(self.payoffs.iter())
            .map(|(p, x)| p * x)
            .sum()
    }
}

/// One participant-facing decision round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Round index (1-based, contiguous within a sequence)
    pub round: usize,
    /// Presentation mode
    pub mode: PresentationMode,
    /// Scenario name, when the catalog names its scenarios
    pub scenario_name: Option<String>,
    /// Block scaling the frame was built under
    pub scaling: Scaling,
    /// Payoff multiplier (1.0 for unscaled frames)
    pub scale_multiplier: f64,
    /// Columns in left-to-right display order
    pub columns: [Column; 3],
}

impl Frame {
    /// Whether the frame belongs to a scaled block.
    ///
    /// Decided by the block, not the multiplier: a scenario paired with a
    /// multiplier of 1.0 still yields scaled frames.
    pub fn is_scaled(&self) -> bool {
        self.scaling == Scaling::Scaled
    }

    /// Column for the given asset class.
    pub fn column(&self, asset_class: AssetClass) -> Option<&Column> {
        self.columns.iter().find(|c| c.asset_class == asset_class)
    }

    /// Answer options as `(asset_class, label)` pairs in display order.
    ///
    /// The asset class is the value recorded as the participant's choice.
    pub fn choices(&self) -> Vec<(AssetClass, String)> {
        self.columns
            .iter()
            .map(|c| (c.asset_class, c.label.clone()))
            .collect()
    }

    /// Labels as rendered on the decision page.
    ///
    /// Blind columns are lettered by position (`Asset A`, `Asset B`, ...);
    /// named columns carry their asset class title.
    pub fn presented_labels(&self) -> [String; 3] {
        let label = |i: usize| match self.mode {
            PresentationMode::Blind => format!("Asset {}", (b'A' + i as u8) as char),
            PresentationMode::Named => self.columns[i].annotated_label(),
        };
        [label(0), label(1), label(2)]
    }
}

/// Flattened frame column used for data export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Participant identifier as supplied by the caller
    pub participant: String,
    /// Round index
    pub round: usize,
    /// Presentation mode tag
    pub mode: PresentationMode,
    /// Scenario name (empty when unnamed)
    pub scenario: String,
    /// Payoff multiplier
    pub multiplier: f64,
    /// Block scaling
    pub scaling: Scaling,
    /// Column position, 1-based
    pub position: usize,
    /// Asset class key
    pub asset_class: AssetClass,
    /// Display label
    pub label: String,
    /// First outcome probability
    pub prob_1: f64,
    /// Second outcome probability
    pub prob_2: f64,
    /// Third outcome probability
    pub prob_3: f64,
    /// First outcome payoff
    pub payoff_1: f64,
    /// Second outcome payoff
    pub payoff_2: f64,
    /// Third outcome payoff
    pub payoff_3: f64,
}

/// The complete ordered frame sequence for one participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSequence {
    /// Seed the sequence was generated from
    pub seed: u64,
    /// Frames ordered by round
    pub frames: Vec<Frame>,
}

impl FrameSequence {
    /// Number of rounds.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence has no rounds.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates frames in round order.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Frame for a 1-based round index.
    pub fn round(&self, round: usize) -> Option<&Frame> {
        round.checked_sub(1).and_then(|i| self.frames.get(i))
    }

    /// Frame shown at an application round.
    ///
    /// App round `offset` shows the first decision frame, so `offset - 1`
    /// pages precede it.
    ///
    /// ```
    /// # use stimulus_core::types::FrameSequence;
    /// let sequence = FrameSequence { seed: 1, frames: vec![] };
    /// assert!(sequence.frame_for_round(3, 3).is_none());
    /// ```
    pub fn frame_for_round(&self, round_number: usize, offset: usize) -> Option<&Frame> {
        round_number
            .checked_sub(offset)
            .and_then(|i| self.frames.get(i))
    }

    /// Flattens the sequence into export records, one per column.
    pub fn records(&self, participant: &str) -> Vec<FrameRecord> {
        self.frames
            .iter()
            .flat_map(|frame| {
                frame
                    .columns
                    .iter()
                    .enumerate()
                    .map(move |(i, column)| FrameRecord {
                        participant: participant.to_string(),
                        round: frame.round,
                        mode: frame.mode,
                        scenario: frame.scenario_name.clone().unwrap_or_default(),
                        multiplier: frame.scale_multiplier,
                        scaling: frame.scaling,
                        position: i + 1,
                        asset_class: column.asset_class,
                        label: column.label.clone(),
                        prob_1: column.probs[0],
                        prob_2: column.probs[1],
                        prob_3: column.probs[2],
                        payoff_1: column.payoffs[0],
                        payoff_2: column.payoffs[1],
                        payoff_3: column.payoffs[2],
                    })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
