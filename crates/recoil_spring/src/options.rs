//! Easing descriptors
//!
//! An easing is described either programmatically ([`EasingOptions`] built
//! by hand) or as a compact string such as `"spring-out(1, 100, 10, 0)"`,
//! the same surface the web animation ecosystem uses.

use smallvec::SmallVec;

use crate::error::EasingError;
use crate::frame::FrameFunction;
use crate::oscillator::Ease;
use crate::params::SpringParameters;

/// Full configuration for one easing request
#[derive(Clone, Debug, PartialEq)]
pub struct EasingOptions {
    /// Which frame function generates the curve
    pub frame: FrameFunction,
    /// Spring parameters fed to the oscillator (and, for custom frame
    /// functions, passed straight through)
    pub params: SpringParameters,
    /// Number of samples to generate. `None` lets the settling estimator
    /// pick the ideal count for the spring.
    pub num_points: Option<usize>,
    /// Decimal places kept on interpolated output values
    pub decimal: u32,
}

impl Default for EasingOptions {
    fn default() -> Self {
        Self {
            frame: FrameFunction::default(),
            params: SpringParameters::default(),
            num_points: None,
            decimal: 3,
        }
    }
}

impl EasingOptions {
    /// Parse a descriptor string such as `"spring-out(1, 100, 10, 0)"`.
    ///
    /// The name is case-insensitive and the argument list is optional;
    /// missing spring parameters take their documented defaults. Names that
    /// are not built-in become [`FrameFunction::Custom`] identities, checked
    /// against the registry when the curve is actually sampled.
    pub fn parse(descriptor: &str) -> Result<Self, EasingError> {
        let trimmed = descriptor.trim();
        if trimmed.is_empty() {
            return Err(EasingError::MalformedDescriptor(descriptor.to_string()));
        }

        let name_end = trimmed
            .find(|c: char| c == '(' || c.is_whitespace())
            .unwrap_or(trimmed.len());
        let name = trimmed[..name_end].to_lowercase();
        if name.is_empty() {
            return Err(EasingError::MalformedDescriptor(descriptor.to_string()));
        }

        let frame = match name.as_str() {
            "spring" | "spring-in" => FrameFunction::Spring(Ease::In),
            "spring-out" => FrameFunction::Spring(Ease::Out),
            "spring-in-out" => FrameFunction::Spring(Ease::InOut),
            "spring-out-in" => FrameFunction::Spring(Ease::OutIn),
            _ => FrameFunction::custom(name),
        };

        let args = parse_easing_parameters(&trimmed[name_end..]);
        let params = params_from_list(&args);

        Ok(Self {
            frame,
            params,
            ..Self::default()
        })
    }

    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = Some(num_points);
        self
    }

    pub fn with_decimal(mut self, decimal: u32) -> Self {
        self.decimal = decimal;
        self
    }
}

/// Extract the numeric arguments from `"(1, 100, 10, 0)"`
fn parse_easing_parameters(args: &str) -> SmallVec<[f64; 4]> {
    let inner = args
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .trim();
    if inner.is_empty() {
        return SmallVec::new();
    }

    inner
        .split(',')
        .filter_map(|part| part.trim().parse::<f64>().ok())
        .collect()
}

/// Positional `[mass, stiffness, damping, velocity]` list with documented
/// defaults for the missing entries.
///
/// Partial specification is accepted but risky (the remaining defaults may
/// not match the caller's mental model), so it warns; extra entries are
/// ignored with a warning.
pub fn params_from_list(list: &[f64]) -> SpringParameters {
    if !list.is_empty() && list.len() < 4 {
        tracing::warn!(
            given = list.len(),
            "only {} of 4 spring parameters set, the rest default to (mass 1, stiffness 100, damping 10, velocity 0)",
            list.len()
        );
    }
    if list.len() > 4 {
        tracing::warn!(
            given = list.len(),
            "{} extra spring parameter(s) ignored, the model uses (mass, stiffness, damping, velocity)",
            list.len() - 4
        );
    }

    let defaults = SpringParameters::default();
    SpringParameters::new(
        list.first().copied().unwrap_or(defaults.mass),
        list.get(1).copied().unwrap_or(defaults.stiffness),
        list.get(2).copied().unwrap_or(defaults.damping),
        list.get(3).copied().unwrap_or(defaults.velocity),
    )
}
