//! Recoil spring easing
//!
//! Generates physically-plausible spring motion curves from the damped
//! harmonic oscillator closed form, estimates the duration a spring needs to
//! visually settle, and maps the sampled curves onto arbitrary value lists.
//!
//! # Features
//!
//! - **Closed-form oscillator**: sample any point of the motion directly,
//!   no integration loop
//! - **Settling estimation**: the optimal duration (and sample count) for a
//!   given parameter tuple, memoized
//! - **Ease variants**: `in`, `out`, `in-out`, `out-in` transforms over any
//!   frame function, plus caller-registered custom functions
//! - **Value interpolation**: numbers, unit-bearing strings (`"250px"`), and
//!   opaque tokens, classified once per list
//!
//! ```
//! use recoil_spring::{AnimationValue, CurveEngine, EasingOptions};
//!
//! let mut engine = CurveEngine::new();
//! let options = EasingOptions::parse("spring-out(1, 100, 10, 0)").unwrap();
//! let values = [AnimationValue::from("0px"), AnimationValue::from("250px")];
//! let (sequence, duration_ms) = engine.spring_easing(&values, &options).unwrap();
//! assert_eq!(sequence.len(), engine.settling(&options.params).sample_count_hint);
//! assert!(duration_ms > 0.0);
//! ```

pub mod engine;
pub mod error;
pub mod frame;
pub mod interpolate;
pub mod options;
pub mod oscillator;
pub mod params;
pub mod registry;
pub mod sampler;
pub mod settle;
pub mod util;

pub use engine::CurveEngine;
pub use error::EasingError;
pub use frame::{CustomFrameFn, FrameFunction};
pub use interpolate::{
    interpolate_batch, interpolate_complex, interpolate_number, interpolate_sequence,
    interpolate_string, AnimationValue,
};
pub use options::EasingOptions;
pub use oscillator::{spring_frame, Ease};
pub use params::SpringParameters;
pub use registry::EasingRegistry;
pub use sampler::SampledCurve;
pub use settle::{SettlingResult, INFINITE_LOOP_LIMIT};
