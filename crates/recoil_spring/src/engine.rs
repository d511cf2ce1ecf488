//! The curve engine: orchestration plus memoization
//!
//! All cache state lives on an explicit [`CurveEngine`] instance rather than
//! in process-wide globals, so tests (and embedders) construct isolated
//! engines. The engine is single-threaded by design; callers that share one
//! across threads wrap it in their own lock.

use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxBuildHasher;

use crate::error::EasingError;
use crate::frame::FrameFunction;
use crate::interpolate::{interpolate_batch, AnimationValue};
use crate::options::EasingOptions;
use crate::params::{ParamsKey, SpringParameters};
use crate::registry::EasingRegistry;
use crate::sampler::{sample_frames, SampledCurve};
use crate::settle::{estimate_settling, SettlingResult};

/// Cache identity of a sampled curve: parameters are not enough, the same
/// parameters produce different curves under different frame functions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct FrameKey {
    params: ParamsKey,
    num_points: usize,
    frame: FrameFunction,
}

/// Generates, caches, and interpolates spring easing curves
pub struct CurveEngine {
    registry: EasingRegistry,
    duration_cache: LruCache<ParamsKey, SettlingResult, FxBuildHasher>,
    frame_cache: LruCache<FrameKey, SampledCurve, FxBuildHasher>,
}

impl CurveEngine {
    /// An engine with unbounded caches and no custom easings.
    ///
    /// Unbounded is fine for realistic animation usage where the keyspace
    /// (parameter tuples x sample counts) stays small; long-running services
    /// fed arbitrary input should prefer [`CurveEngine::with_capacity`].
    pub fn new() -> Self {
        Self::with_registry(EasingRegistry::new())
    }

    /// An engine using `registry` for custom frame-function lookups
    pub fn with_registry(registry: EasingRegistry) -> Self {
        Self {
            registry,
            duration_cache: LruCache::unbounded_with_hasher(FxBuildHasher),
            frame_cache: LruCache::unbounded_with_hasher(FxBuildHasher),
        }
    }

    /// An engine whose caches hold at most `capacity` entries each,
    /// evicting least-recently-used curves beyond that
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            registry: EasingRegistry::new(),
            duration_cache: LruCache::with_hasher(capacity, FxBuildHasher),
            frame_cache: LruCache::with_hasher(capacity, FxBuildHasher),
        }
    }

    pub fn registry(&self) -> &EasingRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EasingRegistry {
        &mut self.registry
    }

    /// Settling estimate for `params`, memoized by the clamped tuple
    pub fn settling(&mut self, params: &SpringParameters) -> SettlingResult {
        let key = params.cache_key();
        if let Some(cached) = self.duration_cache.get(&key) {
            tracing::trace!(?params, "settling cache hit");
            return *cached;
        }
        let result = estimate_settling(params);
        self.duration_cache.put(key, result);
        result
    }

    /// Sample the easing described by `options` into frames.
    ///
    /// When `options.num_points` is absent the settling estimator's ideal
    /// sample count is used. Results are memoized per
    /// `(params, num_points, frame function)`.
    pub fn frames(&mut self, options: &EasingOptions) -> Result<SampledCurve, EasingError> {
        // The cache is keyed on the clamped tuple, so evaluation must see the
        // clamped tuple too or raw-reading custom functions would observe
        // parameters the key cannot distinguish
        let params = options.params.clamped();
        let settling = self.settling(&params);
        let num_points = options.num_points.unwrap_or(settling.sample_count_hint);

        let key = FrameKey {
            params: params.cache_key(),
            num_points,
            frame: options.frame.clone(),
        };
        if let Some(cached) = self.frame_cache.get(&key) {
            tracing::trace!(frame = ?options.frame, num_points, "frame cache hit");
            return Ok(cached.clone());
        }

        let resolved = options.frame.resolve(&self.registry)?;
        let frames = sample_frames(&resolved, &params, num_points, settling.duration_ms)?;
        let curve = SampledCurve {
            frames,
            duration_ms: settling.duration_ms,
        };
        self.frame_cache.put(key, curve.clone());
        Ok(curve)
    }

    /// Generate an animatable value sequence: each sampled frame is mapped
    /// against `values`, and the optimal playback duration rides along.
    ///
    /// Pair the output with a linear playback easing; the spring shape is
    /// already baked into the sequence.
    pub fn spring_easing(
        &mut self,
        values: &[AnimationValue],
        options: &EasingOptions,
    ) -> Result<(Vec<AnimationValue>, f64), EasingError> {
        let curve = self.frames(options)?;
        let sequence = interpolate_batch(&curve.frames, values, options.decimal);
        Ok((sequence, curve.duration_ms))
    }

    /// Like [`CurveEngine::spring_easing`] but with a caller-supplied
    /// interpolation function over the raw frames
    pub fn spring_easing_with<T>(
        &mut self,
        options: &EasingOptions,
        interpolate: impl Fn(&[f64], u32) -> Vec<T>,
    ) -> Result<(Vec<T>, f64), EasingError> {
        let curve = self.frames(options)?;
        let sequence = interpolate(&curve.frames, options.decimal);
        Ok((sequence, curve.duration_ms))
    }

    /// Number of memoized settling results (test observability)
    pub fn cached_durations(&self) -> usize {
        self.duration_cache.len()
    }

    /// Number of memoized sampled curves (test observability)
    pub fn cached_curves(&self) -> usize {
        self.frame_cache.len()
    }
}

impl Default for CurveEngine {
    fn default() -> Self {
        Self::new()
    }
}
