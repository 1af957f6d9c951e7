//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use bentplate::{HolePlacement, PlacedShape, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Edge-to-edge distances between consecutive placements.
pub fn edge_gaps(placements: &[HolePlacement]) -> Vec<Real> {
    placements
        .windows(2)
        .map(|pair| pair[1].min_x() - pair[0].max_x())
        .collect()
}

/// Count of placed circles.
pub fn circle_count(shapes: &[PlacedShape]) -> usize {
    shapes
        .iter()
        .filter(|s| matches!(s, PlacedShape::Circle { .. }))
        .count()
}

/// Count of placed lines.
pub fn line_count(shapes: &[PlacedShape]) -> usize {
    shapes
        .iter()
        .filter(|s| matches!(s, PlacedShape::Line { .. }))
        .count()
}
