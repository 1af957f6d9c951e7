//! Polygon approximations of the closed primitives.

use crate::float_types::{Real, TAU};
use geo::{LineString, Polygon as GeoPolygon, coord};
use nalgebra::Point2;

/// Closed polygon through `corners`, in the given order.
pub fn quad(corners: &[Point2<Real>; 4]) -> GeoPolygon<Real> {
    let mut coords: Vec<_> = corners.iter().map(|p| coord! { x: p.x, y: p.y }).collect();
    // close explicitly
    coords.push(coords[0]);
    GeoPolygon::new(LineString::new(coords), vec![])
}

/// Regular `segments`-gon inscribed in the circle of `radius` around `center`.
///
/// Vertices are sampled at `θᵢ = 2πi/n`, so the first vertex lies on the +X axis.
/// The maximum radial error is `r(1 − cos(π/n))`. Fewer than three segments yield
/// `None`.
pub fn circle(center: Point2<Real>, radius: Real, segments: usize) -> Option<GeoPolygon<Real>> {
    if segments < 3 || !(radius > 0.0) {
        return None;
    }
    let mut coords: Vec<_> = (0..segments)
        .map(|i| {
            let theta = TAU * (i as Real) / (segments as Real);
            coord! {
                x: center.x + radius * theta.cos(),
                y: center.y + radius * theta.sin()
            }
        })
        .collect();
    // close it
    coords.push(coords[0]);
    Some(GeoPolygon::new(LineString::new(coords), vec![]))
}
