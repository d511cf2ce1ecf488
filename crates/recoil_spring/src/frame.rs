//! Frame-function identity and resolution
//!
//! Curves are cached per frame function, so each variant needs a stable
//! identity. An explicit enum carries that identity instead of comparing
//! function pointers; custom functions are identified by their registered
//! name and resolved through the [`EasingRegistry`].

use std::sync::Arc;

use crate::error::EasingError;
use crate::oscillator::{spring_frame, Ease};
use crate::params::SpringParameters;
use crate::registry::EasingRegistry;

/// Signature for caller-supplied frame functions
pub type CustomFrameFn = dyn Fn(f64, &SpringParameters, Option<f64>) -> f64 + Send + Sync;

/// Identity of the frame function used to generate a curve
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrameFunction {
    /// The built-in spring oscillator, optionally wrapped in an ease variant
    Spring(Ease),
    /// A custom frame function registered under `name`
    Custom { name: String, ease: Ease },
}

impl Default for FrameFunction {
    fn default() -> Self {
        FrameFunction::Spring(Ease::In)
    }
}

impl FrameFunction {
    /// Identity for a registered custom function, without an ease wrapper
    pub fn custom(name: impl Into<String>) -> Self {
        FrameFunction::Custom {
            name: name.into(),
            ease: Ease::In,
        }
    }

    /// Look the identity up in `registry` and return an evaluator.
    ///
    /// An unregistered custom name is a configuration error, surfaced
    /// immediately rather than silently falling back to the spring.
    pub fn resolve<'a>(
        &self,
        registry: &'a EasingRegistry,
    ) -> Result<ResolvedFrame<'a>, EasingError> {
        match self {
            FrameFunction::Spring(ease) => Ok(ResolvedFrame {
                base: BaseFrame::Spring,
                ease: *ease,
            }),
            FrameFunction::Custom { name, ease } => {
                let f = registry
                    .get(name)
                    .ok_or_else(|| EasingError::UnregisteredFrameFunction(name.clone()))?;
                Ok(ResolvedFrame {
                    base: BaseFrame::Custom(f),
                    ease: *ease,
                })
            }
        }
    }
}

/// A frame function bound to its concrete evaluator
pub struct ResolvedFrame<'a> {
    base: BaseFrame<'a>,
    ease: Ease,
}

enum BaseFrame<'a> {
    Spring,
    Custom(&'a Arc<CustomFrameFn>),
}

impl ResolvedFrame<'_> {
    /// Evaluate one frame at normalized time `t`
    pub fn eval(&self, t: f64, params: &SpringParameters, duration_ms: Option<f64>) -> f64 {
        match &self.base {
            BaseFrame::Spring => self
                .ease
                .apply(t, |t| spring_frame(t, params, duration_ms)),
            BaseFrame::Custom(f) => self.ease.apply(t, |t| f(t, params, duration_ms)),
        }
    }
}
