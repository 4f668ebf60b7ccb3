//! Integration tests for the single-value shorthands: `flex`, `border` and
//! its sides, the box-side families, and `border-radius`.

use longhand_css::shorthand::{border, border_radius, flex, sides};
use longhand_css::{Longhands, ShorthandError};

/// Helper to build a longhand map from `(name, value)` pairs
fn longhands(pairs: &[(&str, &str)]) -> Longhands {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect()
}

/// Helper to expand `flex` and return `[grow, shrink, basis]`
fn flex_parts(value: &str) -> [String; 3] {
    let expanded = flex::expand(value).unwrap();
    [
        expanded["flex-grow"].clone(),
        expanded["flex-shrink"].clone(),
        expanded["flex-basis"].clone(),
    ]
}

// ============================================================================
// flex
// ============================================================================

#[test]
fn test_flex_keywords() {
    assert_eq!(flex_parts("none"), ["0", "0", "auto"]);
    assert_eq!(flex_parts("auto"), ["1", "1", "auto"]);
}

#[test]
fn test_flex_numbers_default_the_basis() {
    assert_eq!(flex_parts("2"), ["2", "1", "0%"]);
    assert_eq!(flex_parts("2 3"), ["2", "3", "0%"]);
}

#[test]
fn test_flex_basis_alone() {
    assert_eq!(flex_parts("10px"), ["1", "1", "10px"]);
    assert_eq!(flex_parts("content"), ["1", "1", "content"]);
}

#[test]
fn test_flex_basis_first() {
    assert_eq!(flex_parts("30% 2 0"), ["2", "0", "30%"]);
}

#[test]
fn test_flex_rejections() {
    assert!(matches!(
        flex::expand("1 10px 2"),
        Err(ShorthandError::AmbiguousOrder { .. })
    ));
    assert_eq!(
        flex::expand("10px 20px"),
        Err(ShorthandError::DuplicateSlot { slot: "flex-basis" })
    );
    assert_eq!(flex::expand("-1"), Err(ShorthandError::InvalidToken { token: "-1".into() }));
    assert!(flex::expand("1, 2").is_err());
}

#[test]
fn test_flex_collapse_none() {
    let collapsed = flex::collapse(&longhands(&[
        ("flex-grow", "0"),
        ("flex-shrink", "0"),
        ("flex-basis", "auto"),
    ]));
    assert_eq!(collapsed.unwrap(), "none");
}

#[test]
fn test_flex_collapse_shortest_form() {
    for (value, collapsed) in [
        ("auto", "auto"),
        ("2", "2"),
        ("2 3", "2 3"),
        ("10px", "1 10px"),
        ("2 3 0", "2 3 0"),
        ("2 0 10em", "2 0 10em"),
    ] {
        let expanded = flex::expand(value).unwrap();
        assert_eq!(flex::collapse(&expanded).unwrap(), collapsed, "flex: {value}");
    }
}

#[test]
fn test_flex_collapse_rejects_non_numbers() {
    let collapsed = flex::collapse(&longhands(&[
        ("flex-grow", "var(--g)"),
        ("flex-shrink", "1"),
        ("flex-basis", "auto"),
    ]));
    assert!(matches!(collapsed, Err(ShorthandError::Uncollapsible { .. })));
}

// ============================================================================
// border
// ============================================================================

#[test]
fn test_border_sets_every_side() {
    let expanded = border::expand("1px solid red").unwrap();
    assert_eq!(expanded.len(), 12);
    for side in ["top", "right", "bottom", "left"] {
        assert_eq!(expanded[&format!("border-{side}-width")], "1px");
        assert_eq!(expanded[&format!("border-{side}-style")], "solid");
        assert_eq!(expanded[&format!("border-{side}-color")], "red");
    }
    assert_eq!(border::collapse(&expanded).unwrap(), "1px solid red");
}

#[test]
fn test_border_defaults() {
    let expanded = border::expand("dashed").unwrap();
    assert_eq!(expanded["border-left-width"], "medium");
    assert_eq!(expanded["border-left-color"], "currentcolor");
    assert_eq!(border::collapse(&expanded).unwrap(), "dashed");

    let expanded = border::expand("none").unwrap();
    assert_eq!(border::collapse(&expanded).unwrap(), "none");
}

#[test]
fn test_border_rejections() {
    assert_eq!(
        border::expand("solid dashed"),
        Err(ShorthandError::DuplicateSlot { slot: "style" })
    );
    assert!(border::expand("1px solid red, 2px").is_err());
    assert!(border::expand("url(a.png)").is_err());
}

#[test]
fn test_border_collapse_needs_matching_sides() {
    let mut expanded = border::expand("1px solid red").unwrap();
    let _ = expanded.insert("border-left-color".into(), "blue".into());
    assert!(matches!(
        border::collapse(&expanded),
        Err(ShorthandError::Uncollapsible { .. })
    ));
}

#[test]
fn test_border_side() {
    let expanded = border::expand_side(&border::TOP_META, "thick double #000").unwrap();
    assert_eq!(
        expanded,
        longhands(&[
            ("border-top-width", "thick"),
            ("border-top-style", "double"),
            ("border-top-color", "#000"),
        ])
    );
    assert_eq!(
        border::collapse_side(&border::TOP_META, &expanded).unwrap(),
        "thick double #000"
    );
}

// ============================================================================
// margin, padding, border-width, border-style, border-color
// ============================================================================

#[test]
fn test_sides_one_to_four_values() {
    let expanded = sides::MARGIN.expand("1px 2px").unwrap();
    assert_eq!(
        expanded,
        longhands(&[
            ("margin-top", "1px"),
            ("margin-right", "2px"),
            ("margin-bottom", "1px"),
            ("margin-left", "2px"),
        ])
    );
    let expanded = sides::PADDING.expand("1px 2px 3px 4px").unwrap();
    assert_eq!(expanded["padding-left"], "4px");
}

#[test]
fn test_sides_collapse_to_minimal_form() {
    for (value, collapsed) in [
        ("1px", "1px"),
        ("1px 1px", "1px"),
        ("1px 2px 1px", "1px 2px"),
        ("1px 2px 3px", "1px 2px 3px"),
        ("1px 2px 3px 2px", "1px 2px 3px"),
        ("1px 2px 3px 4px", "1px 2px 3px 4px"),
    ] {
        let expanded = sides::MARGIN.expand(value).unwrap();
        assert_eq!(sides::MARGIN.collapse(&expanded).unwrap(), collapsed, "margin: {value}");
    }
}

#[test]
fn test_border_side_families() {
    let expanded = sides::BORDER_WIDTH.expand("thin thick").unwrap();
    assert_eq!(expanded["border-right-width"], "thick");
    let expanded = sides::BORDER_STYLE.expand("solid none").unwrap();
    assert_eq!(expanded["border-left-style"], "none");
    let expanded = sides::BORDER_COLOR.expand("red #00f green").unwrap();
    assert_eq!(expanded["border-left-color"], "#00f");

    assert!(sides::BORDER_WIDTH.expand("solid").is_err());
    assert!(sides::BORDER_STYLE.expand("1px").is_err());
    assert!(sides::BORDER_COLOR.expand("sparkle").is_err());
}

#[test]
fn test_sides_rejections() {
    assert_eq!(
        sides::MARGIN.expand("1px 2px 3px 4px 5px"),
        Err(ShorthandError::TooManyValues { slot: "margin", max: 4 })
    );
    assert!(sides::PADDING.expand("auto").is_err());
    assert!(sides::MARGIN.expand("1px / 2px").is_err());
}

#[test]
fn test_sides_collapse_rejects_multi_token_side() {
    let collapsed = sides::MARGIN.collapse(&longhands(&[
        ("margin-top", "1px 2px"),
        ("margin-right", "0"),
        ("margin-bottom", "0"),
        ("margin-left", "0"),
    ]));
    assert!(matches!(collapsed, Err(ShorthandError::Uncollapsible { .. })));
}

// ============================================================================
// border-radius
// ============================================================================

#[test]
fn test_border_radius_corners() {
    let expanded = border_radius::expand("1px 2px 3px").unwrap();
    assert_eq!(
        expanded,
        longhands(&[
            ("border-top-left-radius", "1px"),
            ("border-top-right-radius", "2px"),
            ("border-bottom-right-radius", "3px"),
            ("border-bottom-left-radius", "2px"),
        ])
    );
}

#[test]
fn test_border_radius_elliptical_round_trip() {
    let expanded = border_radius::expand("10px 20px / 5px").unwrap();
    assert_eq!(expanded["border-top-left-radius"], "10px 5px");
    assert_eq!(expanded["border-top-right-radius"], "20px 5px");
    assert_eq!(border_radius::collapse(&expanded).unwrap(), "10px 20px / 5px");
}

#[test]
fn test_border_radius_rejections() {
    assert!(border_radius::expand("-1px").is_err());
    assert!(border_radius::expand("1px /").is_err());
    assert!(border_radius::expand("/ 1px").is_err());
    assert!(border_radius::expand("red").is_err());
}
