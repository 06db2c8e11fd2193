//! SVG rendering of pie slices.

use crate::pie::{PieLayout, Segment};

/// Slice fill colours, cycled by outcome index.
const PALETTE: [&str; 3] = ["#4e79a7", "#f28e2b", "#59a14f"];

/// Renders slices as a standalone SVG document.
///
/// Zero-probability slices contribute no path but keep their label, so all
/// three outcomes stay visible to the participant.
pub fn render_svg(segments: &[Segment], layout: &PieLayout) -> String {
    let width = layout.cx * 2.0;
    let height = layout.cy * 2.0;
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = width,
        h = height
    );

    for segment in segments {
        if !segment.path.is_empty() {
            out.push_str(&format!(
                "  <path d=\"{}\" fill=\"{}\" stroke=\"#ffffff\" stroke-width=\"1\"/>\n",
                segment.path,
                PALETTE[segment.index % PALETTE.len()]
            ));
        }
    }
    for segment in segments {
        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-size=\"12\">{}</text>\n",
            segment.label_anchor.x,
            segment.label_anchor.y,
            segment.text_anchor.as_str(),
            escape(&segment.label)
        ));
    }

    out.push_str("</svg>\n");
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
