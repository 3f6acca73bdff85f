// Fractal renderer: walks the triad subdivision tree and emits fill/stroke
// commands against an abstract target, so the recursion and leaf indexing
// can be tested without a real surface.

use crate::activity::ActivityDataset;
use crate::geometry::Triangle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color { r, g, b, a }
    }
}

/// Neutral outline for leaf triads.
pub const LEAF_STROKE: Color = Color::rgba(0x44, 0x44, 0x44, 1.0);
/// Fill for the undivided genesis triad at depth 0.
pub const GENESIS_FILL: Color = Color::rgba(255, 255, 255, 0.9);
/// Outline for the undivided genesis triad.
pub const GENESIS_STROKE: Color = Color::rgba(0x88, 0x88, 0x88, 1.0);

/// Receives draw commands from the renderer. Implemented by the software
/// rasterizer, and by a recording target in tests.
pub trait DrawTarget {
    fn fill_triangle(&mut self, tri: Triangle, color: Color);
    fn stroke_triangle(&mut self, tri: Triangle, color: Color, width: f64);
}

/// Green channel for a leaf: 50 at zero activity, rising to 255 as activity
/// approaches 1. Always an integer in [50, 255].
pub fn leaf_green(activity: f64) -> u8 {
    (50.0 + activity * 205.0).floor() as u8
}

pub fn leaf_color(activity: f64) -> Color {
    Color::rgba(0, leaf_green(activity), 0, 0.8)
}

/// Paint one full frame at `depth` into a logical `width` x `height`
/// viewport. Cost is O(3^depth) leaf fills, bounded at 729 for depth 6.
pub fn render_triad(
    target: &mut impl DrawTarget,
    dataset: &ActivityDataset,
    depth: u32,
    width: f64,
    height: f64,
) {
    let root = Triangle::root(width, height);
    if depth == 0 {
        // The undivided genesis triad is its own branch, drawn white with a
        // heavier outline. It is never reached through the recursion, whose
        // depth-0 leaves are activity-colored.
        target.fill_triangle(root, GENESIS_FILL);
        target.stroke_triangle(root, GENESIS_STROKE, 2.0);
    } else {
        subdivide(target, dataset, depth, root, depth, 0);
    }
}

/// Recursive subdivision. `remaining` counts levels left to split; at zero
/// the triangle is a leaf whose base-3 `leaf_index` selects an intensity
/// from the depth-`depth` dataset row. Children take indices 3i, 3i+1,
/// 3i+2 in p1-corner, p2-corner, p3-corner order, so an in-order walk
/// visits every index in [0, 3^depth) exactly once.
pub fn subdivide(
    target: &mut impl DrawTarget,
    dataset: &ActivityDataset,
    depth: u32,
    tri: Triangle,
    remaining: u32,
    leaf_index: usize,
) {
    if remaining == 0 {
        let activity = dataset.get(depth, leaf_index);
        target.fill_triangle(tri, leaf_color(activity));
        target.stroke_triangle(tri, LEAF_STROKE, 1.0);
        return;
    }
    for (slot, child) in tri.children().into_iter().enumerate() {
        subdivide(target, dataset, depth, child, remaining - 1, leaf_index * 3 + slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::leaf_count;
    use crate::geometry::Point;

    #[derive(Default)]
    struct Recorder {
        fills: Vec<(Triangle, Color)>,
        strokes: Vec<(Triangle, Color, f64)>,
    }

    impl DrawTarget for Recorder {
        fn fill_triangle(&mut self, tri: Triangle, color: Color) {
            self.fills.push((tri, color));
        }

        fn stroke_triangle(&mut self, tri: Triangle, color: Color, width: f64) {
            self.strokes.push((tri, color, width));
        }
    }

    // Dataset whose depth-d row is i / 3^d at index i, so every leaf has a
    // distinct, recoverable color.
    fn indexed_dataset(max_depth: u32) -> ActivityDataset {
        let rows = (0..=max_depth)
            .map(|d| {
                let n = leaf_count(d);
                (0..n).map(|i| i as f64 / n as f64).collect()
            })
            .collect();
        ActivityDataset::from_rows(rows)
    }

    #[test]
    fn leaf_green_spans_its_range_and_is_monotone() {
        assert_eq!(leaf_green(0.0), 50);
        assert_eq!(leaf_green(1.0), 255);
        let mut prev = 0;
        for i in 0..=100 {
            let g = leaf_green(i as f64 / 100.0);
            assert!((50..=255).contains(&g));
            assert!(g >= prev);
            prev = g;
        }
    }

    #[test]
    fn depth_zero_draws_one_white_triad_regardless_of_dataset() {
        let dataset = indexed_dataset(6);
        let mut rec = Recorder::default();
        render_triad(&mut rec, &dataset, 0, 600.0, 600.0);

        assert_eq!(rec.fills.len(), 1);
        assert_eq!(rec.fills[0].1, GENESIS_FILL);
        assert_eq!(rec.strokes.len(), 1);
        assert_eq!(rec.strokes[0].1, GENESIS_STROKE);
        assert_eq!(rec.strokes[0].2, 2.0);
        assert_eq!(rec.fills[0].0, Triangle::root(600.0, 600.0));
    }

    #[test]
    fn every_leaf_index_is_visited_exactly_once_in_order() {
        for depth in 1..=4u32 {
            let n = leaf_count(depth);
            let dataset = indexed_dataset(depth);
            let mut rec = Recorder::default();
            render_triad(&mut rec, &dataset, depth, 600.0, 600.0);

            assert_eq!(rec.fills.len(), n);
            assert_eq!(rec.strokes.len(), n);
            // The in-order walk emits leaves with ascending indices, so the
            // k-th fill must carry index k's color.
            for (k, (_, color)) in rec.fills.iter().enumerate() {
                assert_eq!(*color, leaf_color(k as f64 / n as f64), "depth {} leaf {}", depth, k);
            }
        }
    }

    #[test]
    fn leaf_order_follows_parent_corners() {
        let dataset = indexed_dataset(1);
        let mut rec = Recorder::default();
        render_triad(&mut rec, &dataset, 1, 600.0, 600.0);

        let root = Triangle::root(600.0, 600.0);
        assert_eq!(rec.fills.len(), 3);
        assert_eq!(rec.fills[0].0.p1, root.p1);
        assert_eq!(rec.fills[1].0.p2, root.p2);
        assert_eq!(rec.fills[2].0.p3, root.p3);
    }

    #[test]
    fn leaf_strokes_are_neutral_single_width() {
        let dataset = indexed_dataset(2);
        let mut rec = Recorder::default();
        render_triad(&mut rec, &dataset, 2, 300.0, 300.0);
        for (_, color, width) in &rec.strokes {
            assert_eq!(*color, LEAF_STROKE);
            assert_eq!(*width, 1.0);
        }
    }

    #[test]
    fn missing_dataset_row_falls_back_to_baseline_green() {
        let dataset = ActivityDataset::from_rows(vec![]);
        let mut rec = Recorder::default();
        render_triad(&mut rec, &dataset, 2, 300.0, 300.0);
        for (_, color) in &rec.fills {
            assert_eq!(*color, leaf_color(0.0));
            assert_eq!(color.g, 50);
        }
    }

    #[test]
    fn subdivide_covers_the_root_without_overlap_at_depth_one() {
        // The three children tile the parent: each shares one parent vertex
        // and the three edge midpoints appear twice each across children.
        let root = Triangle::new(
            Point::new(0.0, 8.0),
            Point::new(8.0, 8.0),
            Point::new(4.0, 0.0),
        );
        let dataset = indexed_dataset(1);
        let mut rec = Recorder::default();
        subdivide(&mut rec, &dataset, 1, root, 1, 0);

        let mut mids = Vec::new();
        for (tri, _) in &rec.fills {
            for p in [tri.p1, tri.p2, tri.p3] {
                if p != root.p1 && p != root.p2 && p != root.p3 {
                    mids.push((p.x, p.y));
                }
            }
        }
        mids.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(
            mids,
            vec![(2.0, 4.0), (2.0, 4.0), (4.0, 8.0), (4.0, 8.0), (6.0, 4.0), (6.0, 4.0)]
        );
    }
}
