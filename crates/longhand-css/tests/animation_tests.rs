//! Integration tests for the `animation` and `transition` shorthands.

use longhand_css::shorthand::{animation, transition};
use longhand_css::{Longhands, ShorthandError};

/// Helper to build a longhand map from `(name, value)` pairs
fn longhands(pairs: &[(&str, &str)]) -> Longhands {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect()
}

// ============================================================================
// animation
// ============================================================================

#[test]
fn test_animation_slots_by_type() {
    let expanded = animation::expand("spin 1s ease-in 500ms").unwrap();
    assert_eq!(
        expanded,
        longhands(&[
            ("animation-name", "spin"),
            ("animation-duration", "1s"),
            ("animation-timing-function", "ease-in"),
            ("animation-delay", "500ms"),
            ("animation-iteration-count", "1"),
            ("animation-direction", "normal"),
            ("animation-fill-mode", "none"),
            ("animation-play-state", "running"),
        ])
    );
}

#[test]
fn test_animation_first_time_is_duration() {
    let expanded = animation::expand("2s spin 3s").unwrap();
    assert_eq!(expanded["animation-duration"], "2s");
    assert_eq!(expanded["animation-delay"], "3s");
}

#[test]
fn test_animation_keywords() {
    let expanded = animation::expand("bounce infinite alternate both paused steps(4, end)").unwrap();
    assert_eq!(expanded["animation-name"], "bounce");
    assert_eq!(expanded["animation-iteration-count"], "infinite");
    assert_eq!(expanded["animation-direction"], "alternate");
    assert_eq!(expanded["animation-fill-mode"], "both");
    assert_eq!(expanded["animation-play-state"], "paused");
    assert_eq!(expanded["animation-timing-function"], "steps(4, end)");
}

#[test]
fn test_animation_easing_is_not_a_name() {
    let expanded = animation::expand("linear 1s").unwrap();
    assert_eq!(expanded["animation-timing-function"], "linear");
    assert_eq!(expanded["animation-name"], "none");
}

#[test]
fn test_animation_repeated_easing_keyword_becomes_the_name() {
    let expanded = animation::expand("ease ease-out").unwrap();
    assert_eq!(expanded["animation-timing-function"], "ease");
    assert_eq!(expanded["animation-name"], "ease-out");
}

#[test]
fn test_animation_layers() {
    let expanded = animation::expand("spin 1s, fade 2s linear").unwrap();
    assert_eq!(expanded["animation-name"], "spin, fade");
    assert_eq!(expanded["animation-duration"], "1s, 2s");
    assert_eq!(expanded["animation-timing-function"], "ease, linear");
    assert_eq!(expanded["animation-delay"], "0s, 0s");
}

#[test]
fn test_animation_third_time_is_rejected() {
    assert_eq!(
        animation::expand("spin 1s 2s 3s"),
        Err(ShorthandError::TooManyValues { slot: "time", max: 2 })
    );
}

#[test]
fn test_animation_rejects_stray_tokens() {
    assert!(animation::expand("spin 10px").is_err());
    assert!(animation::expand("spin / 1s").is_err());
    assert!(animation::expand("spin 1s 2 3").is_err());
}

#[test]
fn test_animation_collapse() {
    let expanded = animation::expand("spin 1s ease-in 500ms").unwrap();
    assert_eq!(animation::collapse(&expanded).unwrap(), "spin 1s ease-in 500ms");
}

#[test]
fn test_animation_collapse_writes_duration_before_delay() {
    let expanded = animation::expand("fade 0s 2s").unwrap();
    assert_eq!(animation::collapse(&expanded).unwrap(), "fade 0s 2s");
}

#[test]
fn test_animation_collapse_keywords_only() {
    let expanded = animation::expand("infinite alternate both paused").unwrap();
    assert_eq!(
        animation::collapse(&expanded).unwrap(),
        "infinite alternate both paused"
    );
}

#[test]
fn test_animation_collapse_rejects_keyword_name() {
    let mut expanded = animation::expand("spin 1s").unwrap();
    let _ = expanded.insert("animation-name".into(), "reverse".into());
    assert!(matches!(
        animation::collapse(&expanded),
        Err(ShorthandError::AmbiguousOrder { .. })
    ));
}

#[test]
fn test_animation_collapse_rejects_default_layer() {
    let expanded = animation::expand("spin 1s, 0s").unwrap();
    assert!(matches!(
        animation::collapse(&expanded),
        Err(ShorthandError::Uncollapsible { .. })
    ));
}

#[test]
fn test_animation_collapse_requires_every_longhand() {
    let mut expanded = animation::expand("spin 1s").unwrap();
    let _ = expanded.shift_remove("animation-play-state");
    assert_eq!(
        animation::collapse(&expanded),
        Err(ShorthandError::IncompleteLonghandSet {
            missing: "animation-play-state".into()
        })
    );
}

// ============================================================================
// transition
// ============================================================================

#[test]
fn test_transition_slots_by_type() {
    let expanded = transition::expand("opacity 200ms ease-out 1s").unwrap();
    assert_eq!(
        expanded,
        longhands(&[
            ("transition-property", "opacity"),
            ("transition-duration", "200ms"),
            ("transition-timing-function", "ease-out"),
            ("transition-delay", "1s"),
        ])
    );
}

#[test]
fn test_transition_function_easing_keeps_its_commas() {
    let expanded = transition::expand("width 1s cubic-bezier(0.1, 0.7, 1, 0.1)").unwrap();
    assert_eq!(expanded["transition-property"], "width");
    assert_eq!(expanded["transition-timing-function"], "cubic-bezier(0.1, 0.7, 1, 0.1)");
}

#[test]
fn test_transition_var_counts_as_time() {
    let expanded = transition::expand("color var(--speed)").unwrap();
    assert_eq!(expanded["transition-duration"], "var(--speed)");
}

#[test]
fn test_transition_none_alone() {
    let expanded = transition::expand("none").unwrap();
    assert_eq!(expanded["transition-property"], "none");
    assert_eq!(
        transition::expand("none, opacity 1s"),
        Err(ShorthandError::InvalidToken { token: "none".into() })
    );
}

#[test]
fn test_transition_second_property_is_a_duplicate() {
    assert_eq!(
        transition::expand("opacity color"),
        Err(ShorthandError::DuplicateSlot { slot: "property" })
    );
}

#[test]
fn test_transition_layers_collapse() {
    let value = "opacity 1s, transform 2s ease-in";
    let expanded = transition::expand(value).unwrap();
    assert_eq!(expanded["transition-property"], "opacity, transform");
    assert_eq!(transition::collapse(&expanded).unwrap(), value);
}

#[test]
fn test_transition_collapse_rejects_easing_property() {
    let collapsed = transition::collapse(&longhands(&[
        ("transition-property", "ease-in"),
        ("transition-duration", "1s"),
        ("transition-timing-function", "ease"),
        ("transition-delay", "0s"),
    ]));
    assert!(matches!(collapsed, Err(ShorthandError::AmbiguousOrder { .. })));
}

#[test]
fn test_transition_collapse_rejects_default_layer() {
    let expanded = transition::expand("all").unwrap();
    assert!(matches!(
        transition::collapse(&expanded),
        Err(ShorthandError::Uncollapsible { .. })
    ));
}
