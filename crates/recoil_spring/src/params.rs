//! Spring parameters and presets

/// Valid range for every spring parameter. Out-of-range values are clamped,
/// not rejected, so a slightly wild configuration still animates.
pub const PARAM_MIN: f64 = 0.1;
pub const PARAM_MAX: f64 = 1000.0;

/// Clamp a number between `min` and `max`
#[inline]
pub fn limit(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Parameters of the damped harmonic oscillator
///
/// Constructed per easing request and treated as immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParameters {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    /// Initial velocity of the spring
    pub velocity: f64,
}

impl SpringParameters {
    /// Create a new set of spring parameters
    pub fn new(mass: f64, stiffness: f64, damping: f64, velocity: f64) -> Self {
        Self {
            mass,
            stiffness,
            damping,
            velocity,
        }
    }

    /// Build parameters from the `(damping_ratio, response)` parameterization.
    ///
    /// `response` is the rough time (in seconds) the spring takes to cover
    /// most of the distance to its new state; `damping_ratio` below 1
    /// oscillates, 1 is critically damped, above 1 is overdamped.
    pub fn from_response(damping_ratio: f64, response: f64, velocity: f64, mass: f64) -> Self {
        let stiffness = 1.0 / response.powi(2) * mass;
        let damping = damping_ratio * 2.0 * (stiffness * mass).sqrt();
        Self {
            mass,
            stiffness,
            damping,
            velocity,
        }
    }

    /// A gentle, slow spring (good for page transitions)
    pub fn gentle() -> Self {
        Self::new(1.0, 120.0, 14.0, 0.0)
    }

    /// A wobbly spring with overshoot (good for playful UI)
    pub fn wobbly() -> Self {
        Self::new(1.0, 180.0, 12.0, 0.0)
    }

    /// A stiff, snappy spring (good for buttons)
    pub fn stiff() -> Self {
        Self::new(1.0, 400.0, 30.0, 0.0)
    }

    /// A slow spring with no overshoot (critically damped)
    pub fn molasses() -> Self {
        Self::new(1.0, 100.0, 20.0, 0.0)
    }

    /// Every parameter clamped into the valid range
    pub fn clamped(&self) -> Self {
        Self {
            mass: limit(self.mass, PARAM_MIN, PARAM_MAX),
            stiffness: limit(self.stiffness, PARAM_MIN, PARAM_MAX),
            damping: limit(self.damping, PARAM_MIN, PARAM_MAX),
            velocity: limit(self.velocity, PARAM_MIN, PARAM_MAX),
        }
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is overdamped (slow settling, no oscillation)
    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }

    /// Hashable identity of the clamped parameter tuple.
    ///
    /// f64 has no `Hash`, so cache keys use the raw bit patterns. Clamping
    /// first means `spring(1, 100, 10, 0)` and `spring(1, 100, 10, -5)` share
    /// an entry, exactly as the clamped evaluation does.
    pub fn cache_key(&self) -> ParamsKey {
        let c = self.clamped();
        ParamsKey([
            c.mass.to_bits(),
            c.stiffness.to_bits(),
            c.damping.to_bits(),
            c.velocity.to_bits(),
        ])
    }
}

impl Default for SpringParameters {
    fn default() -> Self {
        Self::new(1.0, 100.0, 10.0, 0.0)
    }
}

/// Bit-level identity of a clamped parameter tuple, used as a cache key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParamsKey([u64; 4]);
