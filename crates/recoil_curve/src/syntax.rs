//! Compact CSS `linear()` syntax encoding
//!
//! Serializes a simplified curve into the shortest token list the `linear()`
//! grammar allows: positions that the parser can infer are elided, and runs
//! of equal values collapse into a single token with a start/stop position.

use rustc_hash::FxHashSet;

use crate::simplify::CurvePoint;

/// Convert points into `linear()` tokens, e.g. `["0", "0.2 10%", "1"]`.
///
/// A point's position is omitted when the parser would infer it anyway:
/// the first point at 0, the last point at 1 (as long as its predecessor
/// does not exceed 1), and any interior point sitting within a
/// rounding-derived epsilon of its neighbors' average. Consecutive points
/// sharing a value are grouped, and each group is emitted in whichever of
/// the two legal spellings is textually shorter.
///
/// `None` yields an empty token list.
pub fn linear_syntax(points: Option<&[CurvePoint]>, round: u32) -> Vec<String> {
    let points = match points {
        Some(p) if !p.is_empty() => p,
        _ => return Vec::new(),
    };

    let x_round = round.saturating_sub(2);
    let max_delta = 10f64.powi(-(round as i32));

    // Indices whose x can be inferred by the parser
    let mut redundant_x = FxHashSet::default();
    for (i, point) in points.iter().enumerate() {
        if i == 0 {
            if point.x == 0.0 {
                redundant_x.insert(i);
            }
            continue;
        }
        if i == points.len() - 1 {
            let previous = points[i - 1].x;
            if point.x == 1.0 && previous <= 1.0 {
                redundant_x.insert(i);
            }
            continue;
        }

        let previous = points[i - 1].x;
        let next = points[i + 1].x;
        let average = (next - previous) / 2.0 + previous;
        if (point.x - average).abs() < max_delta {
            redundant_x.insert(i);
        }
    }

    // Maximal runs of equal (rounded) values
    let mut groups: Vec<Vec<usize>> = vec![vec![0]];
    for i in 1..points.len() {
        let last = groups
            .last_mut()
            .and_then(|g| g.first())
            .map(|&first| points[first].y);
        if last == Some(points[i].y) {
            groups.last_mut().unwrap().push(i);
        } else {
            groups.push(vec![i]);
        }
    }

    groups
        .iter()
        .map(|group| {
            let y_value = format_fixed(points[group[0]].y, round);

            let regular = group
                .iter()
                .map(|&i| {
                    if redundant_x.contains(&i) {
                        y_value.clone()
                    } else {
                        format!("{} {}", y_value, format_percent(points[i].x, x_round))
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");

            if group.len() == 1 {
                return regular;
            }

            // The run can also be spelled as value + first/last positions
            let first = points[group[0]].x;
            let last = points[group[group.len() - 1]].x;
            let skip = format!(
                "{} {} {}",
                y_value,
                format_percent(first, x_round),
                format_percent(last, x_round)
            );

            if skip.len() > regular.len() {
                regular
            } else {
                skip
            }
        })
        .collect()
}

/// Format an x position as a percentage with at most `round` decimals
fn format_percent(x: f64, round: u32) -> String {
    format!("{}%", format_fixed(x * 100.0, round))
}

/// Plain decimal formatting with trailing zeros trimmed
fn format_fixed(value: f64, round: u32) -> String {
    let s = format!("{:.*}", round as usize, value);
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
