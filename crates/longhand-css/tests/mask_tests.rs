//! Integration tests for the `mask` shorthand.

use longhand_css::ShorthandError;
use longhand_css::shorthand::mask;

#[test]
fn test_image_only() {
    let expanded = mask::expand("url(m.svg)").unwrap();
    assert_eq!(expanded["mask-image"], "url(m.svg)");
    assert_eq!(expanded["mask-mode"], "match-source");
    assert_eq!(expanded["mask-position"], "0% 0%");
    assert_eq!(expanded["mask-size"], "auto");
    assert_eq!(expanded["mask-repeat"], "repeat");
    assert_eq!(expanded["mask-origin"], "border-box");
    assert_eq!(expanded["mask-clip"], "border-box");
    assert_eq!(expanded["mask-composite"], "add");
}

#[test]
fn test_mode_and_composite() {
    let expanded =
        mask::expand("url(m.svg) luminance center / contain no-repeat content-box subtract").unwrap();
    assert_eq!(expanded["mask-mode"], "luminance");
    assert_eq!(expanded["mask-position"], "center");
    assert_eq!(expanded["mask-size"], "contain");
    assert_eq!(expanded["mask-repeat"], "no-repeat");
    assert_eq!(expanded["mask-origin"], "content-box");
    assert_eq!(expanded["mask-composite"], "subtract");
}

#[test]
fn test_single_box_leaves_clip_at_border_box() {
    let expanded = mask::expand("url(m.svg) padding-box").unwrap();
    assert_eq!(expanded["mask-origin"], "padding-box");
    assert_eq!(expanded["mask-clip"], "border-box");
}

#[test]
fn test_svg_boxes() {
    let expanded = mask::expand("url(m.svg) fill-box stroke-box").unwrap();
    assert_eq!(expanded["mask-origin"], "fill-box");
    assert_eq!(expanded["mask-clip"], "stroke-box");
}

#[test]
fn test_no_clip_only_sets_clip() {
    let expanded = mask::expand("url(m.svg) no-clip").unwrap();
    assert_eq!(expanded["mask-origin"], "border-box");
    assert_eq!(expanded["mask-clip"], "no-clip");
}

#[test]
fn test_layers_keep_their_own_mode() {
    let expanded = mask::expand("url(a.svg), url(b.svg) alpha").unwrap();
    assert_eq!(expanded["mask-mode"], "match-source, alpha");
    assert_eq!(expanded["mask-repeat"], "repeat, repeat");
}

#[test]
fn test_background_only_tokens_are_rejected() {
    assert_eq!(
        mask::expand("url(m.svg) fixed"),
        Err(ShorthandError::InvalidToken {
            token: "fixed".into()
        })
    );
    assert_eq!(
        mask::expand("url(m.svg) red"),
        Err(ShorthandError::InvalidToken { token: "red".into() })
    );
}

#[test]
fn test_second_mode_is_a_duplicate() {
    assert_eq!(
        mask::expand("url(m.svg) alpha luminance"),
        Err(ShorthandError::DuplicateSlot { slot: "mode" })
    );
}

#[test]
fn test_three_boxes_are_rejected() {
    assert_eq!(
        mask::expand("url(m.svg) padding-box content-box fill-box"),
        Err(ShorthandError::TooManyValues { slot: "box", max: 2 })
    );
}

#[test]
fn test_collapse_orders_composite_before_mode() {
    let expanded =
        mask::expand("url(m.svg) luminance center / contain no-repeat content-box subtract").unwrap();
    assert_eq!(
        mask::collapse(&expanded).unwrap(),
        "url(m.svg) center / contain no-repeat content-box subtract luminance"
    );
}

#[test]
fn test_collapse_writes_origin_for_no_clip() {
    let expanded = mask::expand("url(m.svg) no-clip").unwrap();
    assert_eq!(mask::collapse(&expanded).unwrap(), "url(m.svg) border-box no-clip");
}

#[test]
fn test_collapse_single_box() {
    let expanded = mask::expand("url(m.svg) padding-box").unwrap();
    assert_eq!(mask::collapse(&expanded).unwrap(), "url(m.svg) padding-box");
}

#[test]
fn test_collapse_rejects_an_all_default_layer() {
    let expanded = mask::expand("none").unwrap();
    assert!(matches!(
        mask::collapse(&expanded),
        Err(ShorthandError::Uncollapsible { .. })
    ));

    let expanded = mask::expand("url(a.svg), none").unwrap();
    assert!(matches!(
        mask::collapse(&expanded),
        Err(ShorthandError::Uncollapsible { .. })
    ));
}

#[test]
fn test_collapse_requires_every_longhand() {
    let mut expanded = mask::expand("url(m.svg)").unwrap();
    let _ = expanded.shift_remove("mask-mode");
    assert_eq!(
        mask::collapse(&expanded),
        Err(ShorthandError::IncompleteLonghandSet {
            missing: "mask-mode".into()
        })
    );
}
