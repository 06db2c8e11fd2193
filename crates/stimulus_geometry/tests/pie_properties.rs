//! Property tests for pie-slice geometry.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use stimulus_geometry::{segments, PieLayout, TextAnchor};

fn distribution() -> impl Strategy<Value = [f64; 3]> {
    (0.0f64..1.0, 0.0f64..1.0).prop_map(|(a, b)| {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        [lo, hi - lo, 1.0 - hi]
    })
}

proptest! {
    #[test]
    fn prop_sweeps_cover_circle(probs in distribution(), payoffs in prop::array::uniform3(-50.0f64..50.0)) {
        let slices = segments(&probs, &payoffs).unwrap();
        let total: f64 = slices.iter().map(|s| s.sweep_angle).sum();
        assert_abs_diff_eq!(total, 360.0, epsilon = 0.02);
        prop_assert_eq!(slices[0].start_angle, -90.0);
    }

    #[test]
    fn prop_large_arc_matches_sweep(probs in distribution()) {
        let slices = segments(&probs, &[1.0, 2.0, 3.0]).unwrap();
        for slice in &slices {
            prop_assert_eq!(slice.large_arc, slice.probability * 360.0 >= 180.0);
        }
    }

    #[test]
    fn prop_label_side_matches_anchor(probs in distribution()) {
        let layout = PieLayout::default();
        let slices = segments(&probs, &[1.0, 2.0, 3.0]).unwrap();
        for slice in &slices {
            match slice.text_anchor {
                TextAnchor::Start => prop_assert!(slice.label_anchor.x >= layout.cx - 0.01),
                TextAnchor::End => prop_assert!(slice.label_anchor.x <= layout.cx + 0.01),
            }
        }
    }

    #[test]
    fn prop_points_lie_on_circle(probs in distribution()) {
        let layout = PieLayout::default();
        let slices = segments(&probs, &[1.0, 2.0, 3.0]).unwrap();
        for slice in &slices {
            let dx = slice.end.x - layout.cx;
            let dy = slice.end.y - layout.cy;
            assert_abs_diff_eq!((dx * dx + dy * dy).sqrt(), layout.radius, epsilon = 0.02);
        }
    }
}
