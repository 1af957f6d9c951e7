//! Line hatching of closed regions.
//!
//! Hatch lines belong to one global family: every line satisfies `p·n = k·spacing` for
//! an integer `k`, with `n` the unit normal of the hatch direction. Neighbouring
//! regions therefore share the same pattern instead of each starting its own.

use crate::float_types::Real;
use geo::{BooleanOps, BoundingRect, Coord, LineString, MultiLineString, Polygon as GeoPolygon};
use tracing::warn;

/// Upper bound on the lines generated for a single region.
pub const MAX_LINES_PER_REGION: i64 = 100_000;

/// Parallel lines at `angle_degrees`, `spacing` apart, clipped to the interior of
/// `region`. A non-positive or non-finite spacing yields no lines, and so does one that
/// would need more than [`MAX_LINES_PER_REGION`] lines.
pub fn hatch_lines(
    region: &GeoPolygon<Real>,
    spacing: Real,
    angle_degrees: Real,
) -> MultiLineString<Real> {
    if !(spacing > 0.0) || !spacing.is_finite() {
        return MultiLineString::new(vec![]);
    }
    let Some(bounds) = region.bounding_rect() else {
        return MultiLineString::new(vec![]);
    };

    let theta = angle_degrees.to_radians();
    let dir = Coord { x: theta.cos(), y: theta.sin() };
    let normal = Coord { x: -dir.y, y: dir.x };

    let center = bounds.center();
    // half-diagonal, padded by one spacing so the end lines always cross the region
    let reach = (bounds.width().hypot(bounds.height())) / 2.0 + spacing;

    let along = center.x * dir.x + center.y * dir.y;
    let across = center.x * normal.x + center.y * normal.y;
    let first = ((across - reach) / spacing).floor() as i64;
    let last = ((across + reach) / spacing).ceil() as i64;
    if last - first > MAX_LINES_PER_REGION {
        warn!(spacing, lines = last - first, "hatch too dense, region left unhatched");
        return MultiLineString::new(vec![]);
    }

    let lines: Vec<LineString<Real>> = (first..=last)
        .map(|k| {
            let offset = k as Real * spacing;
            let base = Coord {
                x: normal.x * offset + dir.x * along,
                y: normal.y * offset + dir.y * along,
            };
            LineString::new(vec![
                Coord { x: base.x - dir.x * reach, y: base.y - dir.y * reach },
                Coord { x: base.x + dir.x * reach, y: base.y + dir.y * reach },
            ])
        })
        .collect();

    region.clip(&MultiLineString::new(lines), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    fn square(size: Real) -> GeoPolygon<Real> {
        GeoPolygon::new(
            line_string![
                (x: 0.0,  y: 0.0),
                (x: size, y: 0.0),
                (x: size, y: size),
                (x: 0.0,  y: size),
                (x: 0.0,  y: 0.0),
            ],
            vec![],
        )
    }

    #[test]
    fn horizontal_hatch_fills_square() {
        let lines = hatch_lines(&square(10.0), 1.0, 0.0);
        // y = 1..=9 cross the interior; y = 0 and y = 10 run along the boundary
        assert!(lines.0.len() >= 9);
        for line in &lines.0 {
            for c in line.coords() {
                assert!(c.x >= -1e-9 && c.x <= 10.0 + 1e-9);
                assert!(c.y >= -1e-9 && c.y <= 10.0 + 1e-9);
            }
        }
    }

    #[test]
    fn diagonal_hatch_stays_inside() {
        let region = square(10.0);
        let lines = hatch_lines(&region, 0.5, 45.0);
        assert!(!lines.0.is_empty());
        let total: Real = lines
            .0
            .iter()
            .flat_map(|l| l.lines())
            .map(|seg| (seg.end.x - seg.start.x).hypot(seg.end.y - seg.start.y))
            .sum();
        // about area / spacing
        assert!((total - 200.0).abs() < 10.0, "total hatch length {total}");
    }

    #[test]
    fn zero_spacing_is_empty() {
        assert!(hatch_lines(&square(1.0), 0.0, 45.0).0.is_empty());
    }

    #[test]
    fn overly_dense_hatch_is_skipped() {
        assert!(hatch_lines(&square(10.0), 1e-6, 0.0).0.is_empty());
    }
}
