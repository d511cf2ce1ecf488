//! Settling-duration estimation
//!
//! A spring easing only looks smooth at the duration its physics implies.
//! This module walks the oscillator forward in fixed steps until the motion
//! stays inside a perceptual tolerance band long enough to count as settled.

use crate::oscillator::spring_frame;
use crate::params::SpringParameters;

/// Ceiling on estimator iterations, guards against parameter combinations
/// that oscillate indefinitely or diverge numerically
pub const INFINITE_LOOP_LIMIT: usize = 100_000;

/// Distance from the rest value below which motion is considered settled
const REST_EPSILON: f64 = 1e-3;

/// Consecutive settled samples required before motion counts as finished
const REST_STREAK: u32 = 16;

/// Time-cursor increment per step, in seconds
const STEP: f64 = 1.0 / 6.0;

/// Result of the settling estimation for one parameter tuple
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettlingResult {
    /// Optimal duration, in milliseconds, for the spring to visually settle
    pub duration_ms: f64,
    /// Ideal number of discrete frames to represent the motion without
    /// obvious stepping, usable as a default sample count
    pub sample_count_hint: usize,
}

/// Estimate how long the spring takes to settle within the tolerance band.
///
/// The duration is the elapsed time at the START of the rest streak, so the
/// trailing settled frames nobody can see are not counted into it. If the
/// streak never completes within [`INFINITE_LOOP_LIMIT`] steps the elapsed
/// time at the ceiling is returned as a best-effort answer: a slightly-off
/// duration beats a hard failure for an animation-timing helper.
pub fn estimate_settling(params: &SpringParameters) -> SettlingResult {
    let mut time = 0.0_f64;
    let mut steps = 0_usize;

    while steps < INFINITE_LOOP_LIMIT {
        steps += 1;

        if (1.0 - spring_frame(time, params, None)).abs() < REST_EPSILON {
            let rest_start = time;
            let mut rest_streak = 1_u32;

            while steps < INFINITE_LOOP_LIMIT {
                steps += 1;
                time += STEP;

                if (1.0 - spring_frame(time, params, None)).abs() >= REST_EPSILON {
                    // Motion left the band, resume scanning
                    break;
                }

                rest_streak += 1;
                if rest_streak == REST_STREAK {
                    return SettlingResult {
                        duration_ms: rest_start * 1000.0,
                        sample_count_hint: steps,
                    };
                }
            }
        }

        time += STEP;
    }

    tracing::debug!(
        ?params,
        elapsed = time,
        "settling estimation hit the iteration ceiling, returning best-effort duration"
    );
    SettlingResult {
        duration_ms: time * 1000.0,
        sample_count_hint: steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spring_settles_at_reference_duration() {
        let result = estimate_settling(&SpringParameters::default());
        assert!(
            (result.duration_ms - 1333.33).abs() < 0.01,
            "got {}",
            result.duration_ms
        );
        assert!(result.sample_count_hint >= 2);
    }

    #[test]
    fn test_stiffer_spring_settles_faster() {
        let soft = estimate_settling(&SpringParameters::new(1.0, 50.0, 5.0, 0.0));
        let stiff = estimate_settling(&SpringParameters::stiff());
        assert!(stiff.duration_ms < soft.duration_ms);
    }

    #[test]
    fn test_estimation_is_deterministic() {
        let params = SpringParameters::wobbly();
        assert_eq!(estimate_settling(&params), estimate_settling(&params));
    }

    #[test]
    fn test_extreme_parameters_still_terminate() {
        // Near-zero damping bounces for a very long time, the ceiling must
        // still produce a finite duration
        let params = SpringParameters::new(1000.0, 1000.0, 0.1, 1000.0);
        let result = estimate_settling(&params);
        assert!(result.duration_ms.is_finite());
        assert!(result.duration_ms > 0.0);
    }
}
