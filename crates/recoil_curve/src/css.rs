//! End-to-end CSS spring easing
//!
//! Samples a spring curve, simplifies it, and encodes it as the body of a
//! CSS `linear()` timing function, together with the duration the easing
//! should play over.

use recoil_spring::engine::CurveEngine;
use recoil_spring::error::EasingError;
use recoil_spring::options::EasingOptions;

use crate::simplify::{optimized_points, quality_tolerance, CurvePoint};
use crate::syntax::linear_syntax;

/// Options for the CSS path: a regular easing plus the simplification quality
#[derive(Clone, Debug, PartialEq)]
pub struct CssEasingOptions {
    pub easing: EasingOptions,
    /// How detailed the generated `linear()` stop list should be, in
    /// `[0, 1]`: 0 is the coarsest usable curve, 1 keeps every sample.
    pub quality: f64,
}

impl Default for CssEasingOptions {
    fn default() -> Self {
        Self {
            easing: EasingOptions::default(),
            quality: 0.85,
        }
    }
}

impl From<EasingOptions> for CssEasingOptions {
    fn from(easing: EasingOptions) -> Self {
        Self {
            easing,
            ..Self::default()
        }
    }
}

impl CssEasingOptions {
    /// Parse a descriptor string, see [`EasingOptions::parse`]
    pub fn parse(descriptor: &str) -> Result<Self, EasingError> {
        Ok(EasingOptions::parse(descriptor)?.into())
    }

    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = quality;
        self
    }
}

/// Generate the stop list for `linear(...)` plus the optimal duration.
///
/// The returned string is the comma-joined token list, ready to drop into
/// `linear()`; pair it with the duration for a faithful spring.
pub fn css_spring_easing(
    engine: &mut CurveEngine,
    options: &CssEasingOptions,
) -> Result<(String, f64), EasingError> {
    let curve = engine.frames(&options.easing)?;
    let len = curve.frames.len();

    let points: Vec<CurvePoint> = curve
        .frames
        .iter()
        .enumerate()
        .map(|(i, &y)| CurvePoint::new(i as f64 / (len - 1) as f64, y))
        .collect();

    let tolerance = quality_tolerance(options.quality);
    let optimized = optimized_points(Some(&points), tolerance, options.easing.decimal);
    let tokens = linear_syntax(optimized.as_deref(), options.easing.decimal);

    tracing::debug!(
        samples = len,
        stops = tokens.len(),
        tolerance,
        "encoded spring curve as linear() stop list"
    );

    Ok((tokens.join(", "), curve.duration_ms))
}
