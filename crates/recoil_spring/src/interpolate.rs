//! Generic value interpolation over sampled curves
//!
//! Maps normalized progress values against a caller-supplied keyframe list.
//! The list's shape is classified once for the whole call: pure numbers
//! blend numerically, unit-bearing numeric strings blend and carry the first
//! element's unit, anything else falls back to nearest-index selection with
//! no blending. Mixed lists intentionally take the selection path; that
//! matches how animation engines treat non-blendable keyframes.

use std::fmt;

use crate::params::limit;
use crate::util::{scale, split_number, to_fixed};

/// A value that can appear in an interpolation keyframe list
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationValue {
    Number(f64),
    Text(String),
}

impl From<f64> for AnimationValue {
    fn from(v: f64) -> Self {
        AnimationValue::Number(v)
    }
}

impl From<&str> for AnimationValue {
    fn from(v: &str) -> Self {
        AnimationValue::Text(v.to_string())
    }
}

impl From<String> for AnimationValue {
    fn from(v: String) -> Self {
        AnimationValue::Text(v)
    }
}

impl fmt::Display for AnimationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationValue::Number(v) => write!(f, "{v}"),
            AnimationValue::Text(s) => f.write_str(s),
        }
    }
}

/// Shape of a whole value list, decided once per interpolation call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ValueKind {
    /// Every element is a pure number
    Number,
    /// Every element is a number with an optional trailing unit
    UnitNumber,
    /// At least one element is an opaque token (or the list is mixed)
    Token,
}

fn classify(values: &[AnimationValue]) -> ValueKind {
    let mut all_number = true;
    let mut all_number_like = true;

    for v in values {
        match v {
            AnimationValue::Number(_) => {}
            AnimationValue::Text(s) => {
                all_number = false;
                if split_number(s).is_none() {
                    all_number_like = false;
                }
            }
        }
    }

    if all_number {
        ValueKind::Number
    } else if all_number_like {
        ValueKind::UnitNumber
    } else {
        ValueKind::Token
    }
}

/// Segment-linear interpolation over a list of numbers.
///
/// With more than 2 values the list is treated as evenly spaced keyframes:
/// `t` picks the segment and blends within it, so `[0, 100, 0]` at `t = 0.5`
/// yields `100`, not a naive two-point midpoint.
///
/// Panics if `values` is empty.
pub fn interpolate_number(t: f64, values: &[f64], decimal: u32) -> f64 {
    assert!(!values.is_empty(), "values must not be empty");
    let n = values.len() - 1;
    if n == 0 {
        // A single keyframe degenerates to a constant function
        return to_fixed(values[0], decimal);
    }

    let i = limit((t * n as f64).floor(), 0.0, (n - 1) as f64) as usize;
    let start = values[i];
    let end = values[i + 1];
    let progress = (t - i as f64 / n as f64) * n as f64;

    to_fixed(scale(progress, start, end), decimal)
}

/// Nearest-index selection for values that cannot be blended.
///
/// Panics if `values` is empty.
pub fn interpolate_sequence(t: f64, values: &[AnimationValue]) -> AnimationValue {
    assert!(!values.is_empty(), "values must not be empty");
    let n = values.len() - 1;
    let i = (limit(t, 0.0, 1.0) * n as f64).round() as usize;
    values[i].clone()
}

/// Numeric interpolation over unit-bearing strings.
///
/// The unit is taken from the FIRST element only; units on later elements
/// are ignored. That is documented behavior carried over from the reference
/// implementation, not something to silently correct.
pub fn interpolate_string(t: f64, values: &[AnimationValue], decimal: u32) -> String {
    let unit = match values.first() {
        Some(AnimationValue::Text(s)) => split_number(s).map(|(_, unit)| unit).unwrap_or(""),
        _ => "",
    };

    let numbers: Vec<f64> = values.iter().map(numeric_part).collect();
    let result = interpolate_number(t, &numbers, decimal);
    format!("{result}{unit}")
}

fn numeric_part(value: &AnimationValue) -> f64 {
    match value {
        AnimationValue::Number(v) => *v,
        AnimationValue::Text(s) => split_number(s).map(|(v, _)| v).unwrap_or(f64::NAN),
    }
}

/// Interpolate any list of [`AnimationValue`]s at progress `t`
pub fn interpolate_complex(t: f64, values: &[AnimationValue], decimal: u32) -> AnimationValue {
    match classify(values) {
        ValueKind::Number => {
            let numbers: Vec<f64> = values.iter().map(numeric_part).collect();
            AnimationValue::Number(interpolate_number(t, &numbers, decimal))
        }
        ValueKind::UnitNumber => AnimationValue::Text(interpolate_string(t, values, decimal)),
        ValueKind::Token => interpolate_sequence(t, values),
    }
}

/// Batch interpolation over many progress values.
///
/// The value list is classified once for the whole batch instead of per
/// element, which is what makes mapping a full sampled curve cheap.
///
/// An empty value list yields an empty result.
pub fn interpolate_batch(
    progress: &[f64],
    values: &[AnimationValue],
    decimal: u32,
) -> Vec<AnimationValue> {
    if values.is_empty() {
        return Vec::new();
    }
    match classify(values) {
        ValueKind::Number => {
            let numbers: Vec<f64> = values.iter().map(numeric_part).collect();
            progress
                .iter()
                .map(|&t| AnimationValue::Number(interpolate_number(t, &numbers, decimal)))
                .collect()
        }
        ValueKind::UnitNumber => {
            let unit = match values.first() {
                Some(AnimationValue::Text(s)) => {
                    split_number(s).map(|(_, unit)| unit).unwrap_or("")
                }
                _ => "",
            };
            let numbers: Vec<f64> = values.iter().map(numeric_part).collect();
            progress
                .iter()
                .map(|&t| {
                    let v = interpolate_number(t, &numbers, decimal);
                    AnimationValue::Text(format!("{v}{unit}"))
                })
                .collect()
        }
        ValueKind::Token => progress
            .iter()
            .map(|&t| interpolate_sequence(t, values))
            .collect(),
    }
}
