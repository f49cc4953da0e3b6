use crate::math::{Point, Real, Vector};
use crate::shape::Segment;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ParamLocation {
    Start,
    End,
    Inside,
}

// Classifies a parameter along a segment, snapping it to the segment endpoints
// when it is within `epsilon` of 0 or 1.
#[inline]
fn classify_param(r: Real, epsilon: Real) -> Option<ParamLocation> {
    if r.abs() < epsilon {
        Some(ParamLocation::Start)
    } else if (1.0 - r).abs() < epsilon {
        Some(ParamLocation::End)
    } else if r < 0.0 || r > 1.0 {
        None
    } else {
        Some(ParamLocation::Inside)
    }
}

/// Computes the intersection point between two segments.
///
/// Returns `None` if the segments are parallel (including collinear and degenerate
/// segments), or if their supporting lines cross outside of one of them.
///
/// The parameters of the crossing along each segment are snapped to the segment
/// endpoints when they are within `epsilon` of `0` or `1`. In that case the exact endpoint
/// is returned (an endpoint of `seg1` is preferred over an endpoint of `seg2`) so that a
/// line touching another one at one of its vertices is split exactly at that vertex.
/// Otherwise the point is computed from the line equations, relative to `seg1.a`, rather
/// than by interpolating along one of the segments.
///
/// The result does not depend on the order of the two segments, except for which
/// endpoint is returned when both parameters snap.
pub fn segments_intersection2d(
    seg1: &Segment,
    seg2: &Segment,
    epsilon: Real,
) -> Option<Point<Real>> {
    let d1 = seg1.a - seg1.b;
    let d2 = seg2.a - seg2.b;
    let det = d1.x * d2.y - d1.y * d2.x;

    // If det is zero, then segments are parallel.
    if det.abs() < epsilon || ulps_eq!(det, 0.0) {
        return None;
    }

    let w = seg1.a - seg2.a;
    let r1 = (w.x * d2.y - w.y * d2.x) / det;
    let r2 = (w.x * d1.y - w.y * d1.x) / det;

    let loc1 = classify_param(r1, epsilon)?;
    let loc2 = classify_param(r2, epsilon)?;

    match (loc1, loc2) {
        (ParamLocation::Start, _) => Some(seg1.a),
        (ParamLocation::End, _) => Some(seg1.b),
        (_, ParamLocation::Start) => Some(seg2.a),
        (_, ParamLocation::End) => Some(seg2.b),
        (ParamLocation::Inside, ParamLocation::Inside) => {
            // The line equations are evaluated in a frame centered on `seg1.a`, so the
            // cross products stay small for map coordinates. The cross product of `seg1`
            // is zero in that frame.
            let origin = seg1.a;
            let p2a = seg2.a - origin;
            let p2b = seg2.b - origin;
            let b = p2a.x * p2b.y - p2a.y * p2b.x;
            Some(origin + Vector::new(-b * d1.x / det, -b * d1.y / det))
        }
    }
}
