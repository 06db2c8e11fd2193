//! Pie-slice geometry.
//!
//! Slices start at the top of the circle and run clockwise in screen
//! coordinates (SVG y axis points down), so the first slice begins at −90°.
//! Angles are computed in degrees and converted to radians only for the
//! trigonometry. Published angles and coordinates are rounded to two decimals.

use serde::{Deserialize, Serialize};
use stimulus_core::math::round2;
use stimulus_core::types::{Column, GeometryError};

/// Sweeps within this many degrees of a full turn are drawn as a full circle.
const FULL_CIRCLE_EPSILON: f64 = 1e-9;

/// Circle placement and label styling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    /// Centre x
    pub cx: f64,
    /// Centre y
    pub cy: f64,
    /// Circle radius
    pub radius: f64,
    /// Distance of label anchors outside the circle
    pub label_offset: f64,
    /// Currency symbol prefixed to payoffs in labels
    pub currency: String,
}

impl Default for PieLayout {
    fn default() -> Self {
        Self {
            cx: 150.0,
            cy: 150.0,
            radius: 100.0,
            label_offset: 20.0,
            currency: "€".to_string(),
        }
    }
}

impl PieLayout {
    /// Default layout with a different currency symbol.
    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            ..Self::default()
        }
    }

    fn point_at(&self, degrees: f64, radius: f64) -> Point {
        let radians = degrees.to_radians();
        Point {
            x: round2(self.cx + radius * radians.cos()),
            y: round2(self.cy + radius * radians.sin()),
        }
    }
}

/// A point in SVG user space.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// x coordinate
    pub x: f64,
    /// y coordinate
    pub y: f64,
}

/// Horizontal alignment of a slice label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    /// Label extends to the right of its anchor (right half of the circle)
    Start,
    /// Label extends to the left of its anchor (left half of the circle)
    End,
}

impl TextAnchor {
    /// SVG `text-anchor` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::End => "end",
        }
    }
}

/// One pie slice with its label placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Outcome index (0..3)
    pub index: usize,
    /// Outcome probability
    pub probability: f64,
    /// Outcome payoff
    pub payoff: f64,
    /// Start angle in degrees, −90° being the top of the circle
    pub start_angle: f64,
    /// Sweep angle in degrees
    pub sweep_angle: f64,
    /// Arc start point
    pub start: Point,
    /// Arc end point
    pub end: Point,
    /// Whether the arc spans at least 180°
    pub large_arc: bool,
    /// Label anchor on the slice bisector, outside the circle
    pub label_anchor: Point,
    /// Label alignment
    pub text_anchor: TextAnchor,
    /// Label text, e.g. `"50% → €9.50"`
    pub label: String,
    /// SVG path data for the filled slice (empty for zero-probability outcomes)
    pub path: String,
}

impl Segment {
    /// SVG `large-arc-flag` value.
    pub fn large_arc_flag(&self) -> u8 {
        u8::from(self.large_arc)
    }
}

/// Computes slices on the default layout.
///
/// # Errors
///
/// Returns [`GeometryError`] if either slice is not of length 3, contains a
/// non-finite value, or has a negative probability.
///
/// # Examples
///
/// ```
/// use stimulus_geometry::segments;
///
/// let slices = segments(&[0.5, 0.3, 0.2], &[9.5, 2.0, -1.0]).unwrap();
/// assert_eq!(slices[0].start_angle, -90.0);
/// assert_eq!(slices[2].large_arc_flag(), 0);
/// assert_eq!(slices[0].label, "50% → €9.50");
/// ```
pub fn segments(probs: &[f64], payoffs: &[f64]) -> Result<Vec<Segment>, GeometryError> {
    segments_with_layout(probs, payoffs, &PieLayout::default())
}

/// Computes slices for a frame column.
pub fn column_segments(column: &Column, layout: &PieLayout) -> Vec<Segment> {
    encode(&column.probs, &column.payoffs, layout)
}

/// Computes slices on a custom layout.
///
/// # Errors
///
/// See [`segments`].
pub fn segments_with_layout(
    probs: &[f64],
    payoffs: &[f64],
    layout: &PieLayout,
) -> Result<Vec<Segment>, GeometryError> {
    let probs = triple("probs", probs)?;
    let payoffs = triple("payoffs", payoffs)?;
    for (index, &value) in probs.iter().enumerate() {
        if value < 0.0 {
            return Err(GeometryError::NegativeProbability { index, value });
        }
    }
    Ok(encode(&probs, &payoffs, layout))
}

fn triple(field: &'static str, values: &[f64]) -> Result<[f64; 3], GeometryError> {
    let array: [f64; 3] = values
        .try_into()
        .map_err(|_| GeometryError::InvalidLength {
            field,
            len: values.len(),
        })?;
    if let Some(index) = array.iter().position(|v| !v.is_finite()) {
        return Err(GeometryError::NonFinite { field, index });
    }
    Ok(array)
}

fn encode(probs: &[f64; 3], payoffs: &[f64; 3], layout: &PieLayout) -> Vec<Segment> {
    let mut cumulative = 0.0;
    let mut out = Vec::with_capacity(3);

    for (index, (&probability, &payoff)) in probs.iter().zip(payoffs.iter()).enumerate() {
        let start_angle = cumulative * 360.0 - 90.0;
        let sweep_angle = probability * 360.0;
        let end_angle = start_angle + sweep_angle;
        cumulative += probability;

        let start = layout.point_at(start_angle, layout.radius);
        let end = layout.point_at(end_angle, layout.radius);
        let large_arc = sweep_angle >= 180.0;

        let bisector = start_angle + sweep_angle / 2.0;
        let label_anchor = layout.point_at(bisector, layout.radius + layout.label_offset);
        let text_anchor = if bisector.to_radians().cos() >= 0.0 {
            TextAnchor::Start
        } else {
            TextAnchor::End
        };

        let path = slice_path(layout, start_angle, sweep_angle, start, end, large_arc);

        out.push(Segment {
            index,
            probability,
            payoff,
            start_angle: round2(start_angle),
            sweep_angle: round2(sweep_angle),
            start,
            end,
            large_arc,
            label_anchor,
            text_anchor,
            label: format!(
                "{}% → {}{:.2}",
                (probability * 100.0).round() as i64,
                layout.currency,
                payoff
            ),
            path,
        });
    }

    out
}

fn slice_path(
    layout: &PieLayout,
    start_angle: f64,
    sweep_angle: f64,
    start: Point,
    end: Point,
    large_arc: bool,
) -> String {
    let r = layout.radius;
    if sweep_angle <= 0.0 {
        return String::new();
    }
    if sweep_angle >= 360.0 - FULL_CIRCLE_EPSILON {
        // Coincident arc endpoints render nothing; split into two half arcs.
        let opposite = layout.point_at(start_angle + 180.0, r);
        return format!(
            "M {} {} A {} {} 0 1 1 {} {} A {} {} 0 1 1 {} {} Z",
            start.x, start.y, r, r, opposite.x, opposite.y, r, r, start.x, start.y
        );
    }
    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        round2(layout.cx),
        round2(layout.cy),
        start.x,
        start.y,
        r,
        r,
        u8::from(large_arc),
        end.x,
        end.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sweeps_sum_to_full_turn() {
        let slices = segments(&[0.5, 0.3, 0.2], &[1.0, 2.0, 3.0]).unwrap();
        let total: f64 = slices.iter().map(|s| s.sweep_angle).sum();
        assert_eq!(total, 360.0);
        assert_eq!(slices[0].sweep_angle, 180.0);
        assert_eq!(slices[1].sweep_angle, 108.0);
        assert_eq!(slices[2].sweep_angle, 72.0);
    }

    #[test]
    fn test_start_angles_accumulate() {
        let slices = segments(&[0.5, 0.3, 0.2], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(slices[0].start_angle, -90.0);
        assert_eq!(slices[1].start_angle, 90.0);
        assert_eq!(slices[2].start_angle, 198.0);
    }

    #[test]
    fn test_first_slice_starts_at_top() {
        let slices = segments(&[0.5, 0.3, 0.2], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(slices[0].start, Point { x: 150.0, y: 50.0 });
        assert_eq!(slices[0].end, Point { x: 150.0, y: 250.0 });
    }

    #[test]
    fn test_large_arc_flags() {
        let slices = segments(&[0.5, 0.3, 0.2], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(slices[0].large_arc_flag(), 1);
        assert_eq!(slices[1].large_arc_flag(), 0);
        assert_eq!(slices[2].large_arc_flag(), 0);

        let slices = segments(&[0.6, 0.3, 0.1], &[1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(slices[0].sweep_angle, 216.0);
        assert_eq!(slices[0].large_arc_flag(), 1);
    }

    #[test]
    fn test_label_text() {
        let slices = segments(&[0.08, 0.65, 0.27], &[20.0, 4.77, -10.0]).unwrap();
        assert_eq!(slices[0].label, "8% → €20.00");
        assert_eq!(slices[1].label, "65% → €4.77");
        assert_eq!(slices[2].label, "27% → €-10.00");

        let layout = PieLayout::with_currency("$");
        let slices = segments_with_layout(&[0.29, 0.5, 0.21], &[1.0, 2.0, 3.0], &layout).unwrap();
        assert_eq!(slices[0].label, "29% → $1.00");
    }

    #[test]
    fn test_text_anchor_by_half() {
        // Bisectors at 0° (right) and 180° (left).
        let slices = segments(&[0.5, 0.5, 0.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(slices[0].text_anchor, TextAnchor::Start);
        assert_eq!(slices[1].text_anchor, TextAnchor::End);
        assert_eq!(slices[0].label_anchor, Point { x: 270.0, y: 150.0 });
        assert_eq!(slices[1].label_anchor, Point { x: 30.0, y: 150.0 });
    }

    #[test]
    fn test_path_format() {
        let slices = segments(&[0.5, 0.3, 0.2], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(
            slices[0].path,
            "M 150 150 L 150 50 A 100 100 0 1 1 150 250 Z"
        );
        assert!(slices[2].path.contains(" 0 0 1 "));
    }

    #[test]
    fn test_zero_and_full_slices() {
        let slices = segments(&[1.0, 0.0, 0.0], &[5.0, 0.0, 0.0]).unwrap();
        assert!(slices[0].path.starts_with("M 150 50 A"));
        assert_eq!(slices[0].path.matches(" A ").count(), 2);
        assert!(slices[1].path.is_empty());
        assert!(slices[2].path.is_empty());
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            segments(&[0.5, 0.5], &[1.0, 2.0, 3.0]),
            Err(GeometryError::InvalidLength {
                field: "probs",
                len: 2
            })
        );
        assert_eq!(
            segments(&[0.5, 0.3, 0.2], &[1.0, 2.0, 3.0, 4.0]),
            Err(GeometryError::InvalidLength {
                field: "payoffs",
                len: 4
            })
        );
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            segments(&[0.5, f64::NAN, 0.2], &[1.0, 2.0, 3.0]),
            Err(GeometryError::NonFinite {
                field: "probs",
                index: 1
            })
        );
        assert!(matches!(
            segments(&[1.2, -0.2, 0.0], &[1.0, 2.0, 3.0]),
            Err(GeometryError::NegativeProbability { index: 1, .. })
        ));
    }

    #[test]
    fn test_column_segments_match_slices() {
        let column = Column {
            asset_class: stimulus_core::types::AssetClass::Bond,
            label: "Asset C".to_string(),
            probs: [0.42, 0.48, 0.10],
            payoffs: [4.5, 0.54, -1.5],
        };
        let layout = PieLayout::default();
        assert_eq!(
            column_segments(&column, &layout),
            segments(&column.probs, &column.payoffs).unwrap()
        );
    }
}
