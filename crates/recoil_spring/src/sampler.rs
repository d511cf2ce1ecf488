//! Evenly spaced frame sampling

use crate::error::EasingError;
use crate::frame::ResolvedFrame;
use crate::params::SpringParameters;

/// A sampled easing curve plus the duration it was generated for
#[derive(Clone, Debug, PartialEq)]
pub struct SampledCurve {
    /// `num_points` frames, evenly spaced across `[0, 1]`
    pub frames: Vec<f64>,
    /// Optimal duration in milliseconds for these frames to play back
    pub duration_ms: f64,
}

/// Sample `num_points` frames of `frame` across `[0, 1]`.
///
/// Fewer than 2 points cannot describe a curve, that is a caller error.
pub fn sample_frames(
    frame: &ResolvedFrame<'_>,
    params: &SpringParameters,
    num_points: usize,
    duration_ms: f64,
) -> Result<Vec<f64>, EasingError> {
    if num_points < 2 {
        return Err(EasingError::InvalidSampleCount(num_points));
    }

    let mut frames = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let t = i as f64 / (num_points - 1) as f64;
        frames.push(frame.eval(t, params, Some(duration_ms)));
    }
    Ok(frames)
}
