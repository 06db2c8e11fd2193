//! Generate command implementation
//!
//! Produces one participant's frame sequence and renders it as JSON, CSV or
//! a text table.

use std::path::Path;

use stimulus_core::catalog::Experiment;
use stimulus_core::types::{Frame, FrameRecord, FrameSequence};
use stimulus_engine::{generate, ParticipantId, SeedSource};
use tracing::info;

use crate::config::OutputFormat;
use crate::{CliError, Result};

/// Arguments of the generate command
#[derive(Debug, Clone)]
pub struct GenerateArgs<'a> {
    /// Participant id (integer or text)
    pub participant: &'a str,
    /// Explicit seed overriding the participant id
    pub seed: Option<&'a str>,
    /// App round to show instead of the full sequence
    pub round: Option<usize>,
    /// App round that shows the first decision frame
    pub round_offset: usize,
    /// Output format
    pub format: OutputFormat,
}

/// Run the generate command
pub fn run(experiment: &Experiment, args: &GenerateArgs<'_>, output: Option<&Path>) -> Result<()> {
    info!("Generating stimuli for participant {}", args.participant);
    let rendered = render(experiment, args)?;
    super::emit(&rendered, output)
}

/// Generates and renders frames without writing them anywhere.
pub fn render(experiment: &Experiment, args: &GenerateArgs<'_>) -> Result<String> {
    let participant: ParticipantId = args.participant.parse()?;
    let seed = args.seed.map(SeedSource::from);
    let sequence = generate(experiment, &participant, seed.as_ref())?;
    info!(
        seed = sequence.seed,
        rounds = sequence.len(),
        "Generated frame sequence"
    );

    let sequence = match args.round {
        Some(round) => select_round(&sequence, round, args.round_offset)?,
        None => sequence,
    };

    match args.format {
        OutputFormat::Json => render_json(&sequence),
        OutputFormat::Csv => render_csv(&sequence.records(&participant.to_string())),
        OutputFormat::Table => Ok(render_table(&sequence, experiment.currency())),
    }
}

fn select_round(sequence: &FrameSequence, round: usize, offset: usize) -> Result<FrameSequence> {
    let frame = sequence
        .frame_for_round(round, offset)
        .ok_or(CliError::RoundOutOfRange {
            round,
            offset,
            rounds: sequence.len(),
        })?;
    Ok(FrameSequence {
        seed: sequence.seed,
        frames: vec![frame.clone()],
    })
}

/// Pretty JSON of the whole sequence.
pub fn render_json(sequence: &FrameSequence) -> Result<String> {
    let mut json = serde_json::to_string_pretty(sequence)?;
    json.push('\n');
    Ok(json)
}

/// CSV with a header row and one row per record.
pub fn render_csv(records: &[FrameRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Output(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Output(e.to_string()))
}

/// Box-drawing table, one row per column of each frame.
pub fn render_table(sequence: &FrameSequence, currency: &str) -> String {
    let header = ["Round", "Mode", "Scenario", "×", "Label", "Outcomes", "E[x]"];
    let mut rows: Vec<[String; 7]> = Vec::new();
    for frame in sequence {
        rows.extend(frame_rows(frame, currency));
    }

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let parts: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, parts.join(mid), right)
    };
    let line = |cells: &[String]| {
        let parts: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!(" {}{} ", cell, " ".repeat(w - cell.chars().count())))
            .collect();
        format!("│{}│\n", parts.join("│"))
    };

    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(&header.map(str::to_string)));
    out.push_str(&rule("├", "┼", "┤"));
    for row in &rows {
        out.push_str(&line(row));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

fn frame_rows(frame: &Frame, currency: &str) -> Vec<[String; 7]> {
    let presented = frame.presented_labels();
    frame
        .columns
        .iter()
        .zip(presented)
        .enumerate()
        .map(|(position, (column, label))| {
            let first = position == 0;
            [
                if first { frame.round.to_string() } else { String::new() },
                if first { frame.mode.to_string() } else { String::new() },
                if first {
                    frame.scenario_name.clone().unwrap_or_default()
                } else {
                    String::new()
                },
                if first {
                    format!("{}", frame.scale_multiplier)
                } else {
                    String::new()
                },
                label,
                column.outcome_labels(currency).join(" | "),
                format!("{}{:.2}", currency, column.expected_payoff()),
            ]
        })
        .collect()
}
