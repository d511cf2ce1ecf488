//! Closed-form damped harmonic oscillator evaluation
//!
//! Evaluates the spring position analytically instead of integrating it,
//! so any point of the curve can be sampled directly.

use crate::params::SpringParameters;

/// Evaluate one frame of the spring easing at `t`.
///
/// `t` is the normalized animation progress; callers pass values in `[0, 1]`
/// but anything finite is accepted. When `duration_ms` is given, `t` is
/// scaled into physical time (seconds) before the oscillator is evaluated;
/// without it `t` itself is the physical time argument, which is what the
/// settling estimator relies on.
///
/// The closed form is only asymptotically exact at the endpoints, so `t == 0`
/// and `t == 1` short-circuit to keep keyframe endpoints bit-exact.
pub fn spring_frame(t: f64, params: &SpringParameters, duration_ms: Option<f64>) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }

    let SpringParameters {
        mass,
        stiffness,
        damping,
        velocity,
    } = params.clamped();

    let w0 = (stiffness / mass).sqrt();
    let zeta = damping / (2.0 * (stiffness * mass).sqrt());
    let wd = if zeta < 1.0 {
        w0 * (1.0 - zeta * zeta).sqrt()
    } else {
        0.0
    };

    // Initial displacement is 1, initial velocity is -velocity
    let a = 1.0;
    let b = if zeta < 1.0 {
        (zeta * w0 - velocity) / wd
    } else {
        w0 - velocity
    };

    let time = match duration_ms {
        Some(duration) => duration * t / 1000.0,
        None => t,
    };

    let position = if zeta < 1.0 {
        // Underdamped: exponentially decaying sinusoid
        (-time * zeta * w0).exp() * (a * (wd * time).cos() + b * (wd * time).sin())
    } else {
        // Critically damped or overdamped: exponential-polynomial solution
        (a + b * time) * (-time * w0).exp()
    };

    1.0 - position
}

/// Structural ease transforms applicable to any frame function
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ease {
    /// The frame function as-is (accelerate)
    #[default]
    In,
    /// Mirrored: `1 - f(1 - t)` (decelerate)
    Out,
    /// First half accelerates, second half decelerates
    InOut,
    /// First half decelerates, second half accelerates
    OutIn,
}

impl Ease {
    /// Apply this transform to a base frame evaluation `f`
    pub fn apply(self, t: f64, f: impl Fn(f64) -> f64) -> f64 {
        match self {
            Ease::In => f(t),
            Ease::Out => 1.0 - f(1.0 - t),
            Ease::InOut => {
                if t < 0.5 {
                    f(t * 2.0) / 2.0
                } else {
                    1.0 - f(t * -2.0 + 2.0) / 2.0
                }
            }
            Ease::OutIn => {
                if t < 0.5 {
                    (1.0 - f(1.0 - t * 2.0)) / 2.0
                } else {
                    (f(t * 2.0 - 1.0) + 1.0) / 2.0
                }
            }
        }
    }
}
