//! Geometry command implementation
//!
//! Encodes one outcome triple as pie slices, printed as SVG or JSON.

use std::path::Path;

use stimulus_geometry::{render_svg, segments_with_layout, PieLayout};
use tracing::info;

use crate::Result;

/// Run the geometry command
pub fn run(
    probs: &[f64],
    payoffs: &[f64],
    currency: &str,
    json: bool,
    output: Option<&Path>,
) -> Result<()> {
    info!("Encoding {} outcomes", probs.len());
    let rendered = render(probs, payoffs, currency, json)?;
    super::emit(&rendered, output)
}

/// Encodes and renders slices without writing them anywhere.
pub fn render(probs: &[f64], payoffs: &[f64], currency: &str, json: bool) -> Result<String> {
    let layout = PieLayout::with_currency(currency);
    let slices = segments_with_layout(probs, payoffs, &layout)?;
    if json {
        let mut out = serde_json::to_string_pretty(&slices)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(render_svg(&slices, &layout))
    }
}
