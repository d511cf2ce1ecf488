//! Integration tests for the spring engine + CSS encoding pipeline
//!
//! These tests verify that:
//! - A descriptor string drives the whole pipeline down to a `linear()` body
//! - CSS output and value-sequence output share the engine's curve cache
//! - Registered custom frame functions flow through end to end

use recoil_curve::{css_spring_easing, CssEasingOptions};
use recoil_spring::{AnimationValue, CurveEngine, EasingOptions};

/// Test that a descriptor string produces a usable `linear()` stop list
#[test]
fn test_descriptor_to_css_easing() {
    let mut engine = CurveEngine::new();
    let options = CssEasingOptions::parse("spring(1, 100, 10, 0)").unwrap();

    let (easing, duration_ms) = css_spring_easing(&mut engine, &options).unwrap();

    // The default spring settles in 4/3 of a second
    assert!((duration_ms - 1333.33).abs() < 0.01);
    assert!(easing.starts_with('0'));
    assert!(easing.ends_with('1'));

    // Every stop is a y value optionally followed by percentage positions
    for stop in easing.split(", ") {
        let y = stop.split_whitespace().next().unwrap();
        assert!(y.parse::<f64>().is_ok(), "unparsable stop {stop:?}");
    }
}

/// Test that the CSS path and the value-sequence path hit the same cache
#[test]
fn test_css_and_value_sequences_share_cached_curves() {
    let mut engine = CurveEngine::new();
    let options = EasingOptions::default();

    let (_, css_duration) =
        css_spring_easing(&mut engine, &CssEasingOptions::from(options.clone())).unwrap();
    assert_eq!(engine.cached_curves(), 1);

    let values = [AnimationValue::from("0px"), AnimationValue::from("100px")];
    let (sequence, seq_duration) = engine.spring_easing(&values, &options).unwrap();

    // Same spring, same sample count: no second curve is computed
    assert_eq!(engine.cached_curves(), 1);
    assert_eq!(engine.cached_durations(), 1);
    assert_eq!(css_duration, seq_duration);

    assert_eq!(sequence.first().unwrap().to_string(), "0px");
    assert_eq!(sequence.last().unwrap().to_string(), "100px");
}

/// Test that a registered custom frame function reaches the CSS encoder
#[test]
fn test_custom_easing_full_pipeline() {
    let mut engine = CurveEngine::new();
    engine.registry_mut().register("half", |t, _, _| t / 2.0);

    let options = CssEasingOptions::parse("half").unwrap();
    let (easing, duration_ms) = css_spring_easing(&mut engine, &options).unwrap();

    // t/2 is a straight line from 0 to 0.5, so only the endpoints survive
    assert_eq!(easing, "0, 0.5");
    assert!(duration_ms > 0.0);
}
