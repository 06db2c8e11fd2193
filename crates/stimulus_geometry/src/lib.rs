//! # stimulus_geometry: Pie-Chart Encoding of Lottery Outcomes
//!
//! ## Layer 2 Role
//!
//! Converts an outcome triple (probabilities and payoffs) into pie slices
//! for the participant-facing screen:
//! - Slice angles, arc endpoints and large-arc flags (`pie`)
//! - Label anchors placed outside the circle with left/right alignment (`pie`)
//! - Standalone SVG output (`svg`)
//!
//! Depends only on `stimulus_core` for the column type, error type and
//! two-decimal rounding.
//!
//! ## Usage Examples
//!
//! ```rust
//! use stimulus_geometry::{render_svg, segments, PieLayout};
//!
//! let slices = segments(&[0.5, 0.3, 0.2], &[9.5, 2.0, -1.0]).unwrap();
//! let total: f64 = slices.iter().map(|s| s.sweep_angle).sum();
//! assert_eq!(total, 360.0);
//!
//! let svg = render_svg(&slices, &PieLayout::default());
//! assert!(svg.contains("<path"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod pie;
pub mod svg;

pub use pie::{column_segments, segments, segments_with_layout, PieLayout, Point, Segment, TextAnchor};
pub use svg::render_svg;
