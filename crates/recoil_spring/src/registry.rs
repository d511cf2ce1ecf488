//! Registry of named custom frame functions
//!
//! The registry is plain owned state constructed by the caller and handed to
//! the engine, so two engines can carry entirely different sets of custom
//! easings without sharing anything.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::frame::CustomFrameFn;

/// Named custom frame functions available to easing descriptors
#[derive(Clone, Default)]
pub struct EasingRegistry {
    functions: FxHashMap<String, Arc<CustomFrameFn>>,
}

impl EasingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a frame function under `name`. Re-registering a name
    /// replaces the previous function.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(f64, &crate::params::SpringParameters, Option<f64>) -> f64 + Send + Sync + 'static,
    {
        let name = name.into();
        if self.functions.insert(name.clone(), Arc::new(f)).is_some() {
            tracing::debug!(name, "replaced existing easing registration");
        }
    }

    /// Register several frame functions at once
    pub fn register_many<I, F>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, F)>,
        F: Fn(f64, &crate::params::SpringParameters, Option<f64>) -> f64 + Send + Sync + 'static,
    {
        for (name, f) in entries {
            self.register(name, f);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<CustomFrameFn>> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Names of all registered custom functions
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for EasingRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EasingRegistry")
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SpringParameters;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = EasingRegistry::new();
        registry.register("half", |t, _, _| t / 2.0);

        assert!(registry.contains("half"));
        let f = registry.get("half").unwrap();
        assert_eq!(f(0.5, &SpringParameters::default(), None), 0.25);
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_register_many() {
        fn half(t: f64, _: &SpringParameters, _: Option<f64>) -> f64 {
            t / 2.0
        }
        fn double(t: f64, _: &SpringParameters, _: Option<f64>) -> f64 {
            t * 2.0
        }

        let mut registry = EasingRegistry::new();
        registry.register_many([
            (
                "half".to_string(),
                half as fn(f64, &SpringParameters, Option<f64>) -> f64,
            ),
            ("double".to_string(), double),
        ]);

        assert!(registry.contains("half"));
        assert!(registry.contains("double"));
        let f = registry.get("double").unwrap();
        assert_eq!(f(0.25, &SpringParameters::default(), None), 0.5);
    }

    #[test]
    fn test_re_registration_replaces() {
        let mut registry = EasingRegistry::new();
        registry.register("e", |_, _, _| 0.0);
        registry.register("e", |_, _, _| 1.0);
        let f = registry.get("e").unwrap();
        assert_eq!(f(0.5, &SpringParameters::default(), None), 1.0);
        assert_eq!(registry.names().count(), 1);
    }
}
