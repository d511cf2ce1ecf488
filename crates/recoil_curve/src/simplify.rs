//! Ramer-Douglas-Peucker curve simplification
//!
//! Dense sampled curves carry far more points than a declarative easing
//! needs. RDP drops every point that stays within a perpendicular-distance
//! tolerance of the simplified line, which is where most of the compression
//! in the compact syntax comes from.

use recoil_spring::params::limit;
use recoil_spring::util::{scale, to_fixed};

/// One sample of a curve: normalized time on x, eased value on y
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for CurvePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for CurvePoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Squared distance from `point` to the segment `line_start..line_end`.
///
/// Squared distances avoid the square root without changing relative order.
/// When the projection parameter falls outside `[0, 1]` the nearest segment
/// endpoint is used instead of extrapolating the infinite line.
pub fn squared_segment_distance(
    point: CurvePoint,
    line_start: CurvePoint,
    line_end: CurvePoint,
) -> f64 {
    let mut x = line_start.x;
    let mut y = line_start.y;
    let mut dx = line_end.x - x;
    let mut dy = line_end.y - y;

    if dx != 0.0 || dy != 0.0 {
        let t = ((point.x - x) * dx + (point.y - y) * dy) / (dx * dx + dy * dy);
        if t > 1.0 {
            x = line_end.x;
            y = line_end.y;
        } else if t > 0.0 {
            x += dx * t;
            y += dy * t;
        }
        // t <= 0 keeps line_start, already loaded
    }

    dx = point.x - x;
    dy = point.y - y;
    dx * dx + dy * dy
}

/// Simplify a polyline with the Ramer-Douglas-Peucker algorithm.
///
/// Iterative with an explicit range stack, so pathological inputs cannot
/// blow the call stack. The stack order does not match the recursive
/// traversal order, which is why the result is sorted by x before returning.
/// The first and last input points always survive.
pub fn ramer_douglas_peucker(points: &[CurvePoint], tolerance: f64) -> Vec<CurvePoint> {
    let sq_tolerance = tolerance * tolerance;

    // Fewer than 3 points cannot be simplified
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut result = vec![points[0]];
    let mut stack = vec![(0usize, points.len() - 1)];

    while let Some((start, end)) = stack.pop() {
        let mut max_sq_dist = 0.0;
        let mut index = 0;

        for i in start + 1..end {
            let sq_dist = squared_segment_distance(points[i], points[start], points[end]);
            if sq_dist > max_sq_dist {
                index = i;
                max_sq_dist = sq_dist;
            }
        }

        if max_sq_dist > sq_tolerance {
            stack.push((start, index));
            stack.push((index, end));
        } else {
            // Straight enough, the whole range collapses to its end point
            result.push(points[end]);
        }
    }

    result.sort_by(|a, b| a.x.total_cmp(&b.x));
    result
}

/// Simplify and round a sampled curve.
///
/// `None` stays `None` and an empty curve stays empty. x values are rounded
/// to at least 2 decimal places regardless of `round`, because they render
/// as percentages and need the extra resolution.
pub fn optimized_points(
    points: Option<&[CurvePoint]>,
    tolerance: f64,
    round: u32,
) -> Option<Vec<CurvePoint>> {
    let points = points?;
    let x_round = round.max(2);

    Some(
        ramer_douglas_peucker(points, tolerance)
            .into_iter()
            .map(|p| CurvePoint::new(to_fixed(p.x, x_round), to_fixed(p.y, round)))
            .collect(),
    )
}

/// Map a caller-facing quality in `[0, 1]` to an RDP tolerance.
///
/// Quality 1 means perceptually lossless (tolerance 0, no simplification),
/// quality 0 means the coarsest curve that still hits the keyframes.
pub fn quality_tolerance(quality: f64) -> f64 {
    scale(1.0 - limit(quality, 0.0, 1.0), 0.0, 0.025)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn points(list: &[(f64, f64)]) -> Vec<CurvePoint> {
        list.iter().map(|&p| CurvePoint::from(p)).collect()
    }

    #[test]
    fn test_readme_example() {
        let data = points(&[(0.0, 0.0), (0.1, 0.2), (0.5, 1.0), (0.9, 0.2), (1.0, 0.0)]);
        let result = optimized_points(Some(&data), 0.1, 2).unwrap();
        assert_eq!(result, points(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]));
    }

    #[test]
    fn test_already_simplified_is_unchanged() {
        let data = points(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);
        let result = optimized_points(Some(&data), 0.1, 2).unwrap();
        assert_eq!(result, data);
    }

    #[test]
    fn test_near_collinear_point_is_dropped() {
        let data = points(&[(0.0, 0.0), (0.5, 0.001), (1.0, 0.0)]);
        let result = optimized_points(Some(&data), 0.01, 2).unwrap();
        assert_eq!(result, points(&[(0.0, 0.0), (1.0, 0.0)]));
    }

    #[test]
    fn test_rounding_applies_to_both_axes() {
        let data = points(&[
            (0.0, 0.0),
            (0.333333333, 1.0),
            (0.666666666, 0.0),
            (1.0, 0.0),
        ]);
        let result = optimized_points(Some(&data), 0.01, 2).unwrap();
        assert_eq!(
            result,
            points(&[(0.0, 0.0), (0.33, 1.0), (0.67, 0.0), (1.0, 0.0)])
        );
    }

    #[test]
    fn test_x_rounds_to_at_least_two_decimals() {
        let data = points(&[
            (0.0, 0.0),
            (0.333333333, 1.0),
            (0.666666666, 0.0),
            (1.0, 0.0),
        ]);
        let result = optimized_points(Some(&data), 0.01, 1).unwrap();
        assert_eq!(
            result,
            points(&[(0.0, 0.0), (0.33, 1.0), (0.67, 0.0), (1.0, 0.0)])
        );
    }

    #[test]
    fn test_none_and_empty_pass_through() {
        assert_eq!(optimized_points(None, 0.1, 2), None);
        assert_eq!(optimized_points(Some(&[]), 0.1, 2), Some(vec![]));
        let single = points(&[(0.0, 0.0)]);
        assert_eq!(
            optimized_points(Some(&single), 0.1, 2),
            Some(single.clone())
        );
    }

    #[test]
    fn test_zero_tolerance_preserves_every_point() {
        let data = points(&[(0.0, 0.0), (0.5, 0.2), (1.0, 0.0)]);
        let result = optimized_points(Some(&data), 0.0, 2).unwrap();
        assert_eq!(result, data);
    }

    #[test]
    fn test_endpoints_survive_large_input() {
        let data: Vec<CurvePoint> = (0..10_000)
            .map(|i| {
                let x = i as f64 * 0.0001;
                CurvePoint::new(x, x.sin())
            })
            .collect();

        let result = optimized_points(Some(&data), 0.01, 2).unwrap();
        assert!(result.len() < data.len());
        assert!(!result.is_empty());
        assert_eq!(result[0], CurvePoint::new(0.0, 0.0));
        let last = result[result.len() - 1];
        assert_eq!(last.x, 1.0);
        assert_eq!(last.y, to_fixed(0.9999_f64.sin(), 2));
    }

    #[test]
    fn test_simplification_is_idempotent() {
        let data = points(&[(0.0, 0.0), (0.1, 0.2), (0.5, 1.0), (0.9, 0.2), (1.0, 0.0)]);
        let once = ramer_douglas_peucker(&data, 0.1);
        let twice = ramer_douglas_peucker(&once, 0.1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_output_is_sorted_by_x() {
        let data: Vec<CurvePoint> = (0..200)
            .map(|i| {
                let x = i as f64 / 199.0;
                CurvePoint::new(x, (x * 20.0).sin())
            })
            .collect();
        let result = ramer_douglas_peucker(&data, 0.05);
        assert!(result.windows(2).all(|w| w[0].x <= w[1].x));
    }

    #[test]
    fn test_projection_clamps_to_segment_endpoints() {
        let a = CurvePoint::new(0.0, 0.0);
        let b = CurvePoint::new(1.0, 0.0);
        // Beyond the end of the segment, distance is to the endpoint
        let d = squared_segment_distance(CurvePoint::new(2.0, 0.0), a, b);
        assert_eq!(d, 1.0);
        let d = squared_segment_distance(CurvePoint::new(-3.0, 0.0), a, b);
        assert_eq!(d, 9.0);
        // Degenerate zero-length segment
        let d = squared_segment_distance(CurvePoint::new(1.0, 1.0), a, a);
        assert_eq!(d, 2.0);
    }

    #[test]
    fn test_quality_maps_to_tolerance() {
        assert_eq!(quality_tolerance(1.0), 0.0);
        assert_eq!(quality_tolerance(0.0), 0.025);
        assert!((quality_tolerance(0.85) - 0.00375).abs() < 1e-12);
        // Out-of-range quality is clamped
        assert_eq!(quality_tolerance(7.0), 0.0);
    }
}
