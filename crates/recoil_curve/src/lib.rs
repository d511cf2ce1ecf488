//! Curve simplification and CSS `linear()` encoding
//!
//! Turns dense spring samples from `recoil_spring` into something a
//! stylesheet can use: [`simplify`] thins a sampled curve with the
//! Ramer-Douglas-Peucker algorithm, [`syntax`] prints the surviving points
//! as a compact `linear()` stop list, and [`css`] wires the whole pipeline
//! to a [`CurveEngine`](recoil_spring::CurveEngine).
//!
//! ```
//! use recoil_spring::CurveEngine;
//! use recoil_curve::{css_spring_easing, CssEasingOptions};
//!
//! let mut engine = CurveEngine::new();
//! let (easing, duration_ms) =
//!     css_spring_easing(&mut engine, &CssEasingOptions::default()).unwrap();
//!
//! let css = format!("animation: move {duration_ms}ms linear({easing});");
//! assert!(css.contains("linear(0,"));
//! ```

pub mod css;
pub mod simplify;
pub mod syntax;

pub use css::{css_spring_easing, CssEasingOptions};
pub use simplify::{
    optimized_points, quality_tolerance, ramer_douglas_peucker, squared_segment_distance,
    CurvePoint,
};
pub use syntax::linear_syntax;
